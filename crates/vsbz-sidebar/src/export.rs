use std::path::Path;

use tracing::info;
use vsbz_catalog::model::SidebarSection;

use crate::error::AppError;

/// Write the sidebar sections as pretty JSON for the site's navigation config.
pub fn write_sidebar(path: &Path, sections: &[SidebarSection]) -> Result<(), AppError> {
    let mut json = serde_json::to_string_pretty(sections)
        .map_err(|e| AppError::Export(format!("failed to serialize sidebar: {e}")))?;
    json.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::Export(format!("failed to create {}: {e}", parent.display()))
        })?;
    }
    std::fs::write(path, json)
        .map_err(|e| AppError::Export(format!("failed to write {}: {e}", path.display())))?;

    info!(
        path = %path.display(),
        sections = sections.len(),
        items = sections.iter().map(|s| s.items.len()).sum::<usize>(),
        "sidebar written"
    );
    Ok(())
}
