/// Reload service for the catalog export.
///
/// Re-reads the catalog file and reports whether its content changed since the last load.
/// Triggered on demand via the `reload_catalog` MCP tool.
use tracing::info;
use vsbz_catalog::loader::{self, LoadedCatalog};

use crate::config::Config;
use crate::error::AppError;

/// Result of a reload.
pub struct ReloadResult {
    /// Whether the catalog content changed (false if the fingerprint matched).
    pub updated: bool,
    /// Fingerprint of the catalog file as read now.
    pub fingerprint: String,
    /// Number of entries after the reload.
    pub entry_count: usize,
    /// Records skipped while parsing.
    pub skipped: usize,
}

pub struct ReloadService {
    config: Config,
}

impl ReloadService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn load(&self) -> Result<LoadedCatalog, AppError> {
        let catalog = loader::load_catalog(&self.config.catalog_path())?;
        info!(
            entries = catalog.entries.len(),
            skipped = catalog.skipped,
            fingerprint = %catalog.fingerprint,
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Re-read the catalog. The loaded catalog is returned only when it differs from
    /// `current_fingerprint`.
    pub fn reload(
        &self,
        current_fingerprint: &str,
    ) -> Result<(ReloadResult, Option<LoadedCatalog>), AppError> {
        let catalog = self.load()?;
        let result = ReloadResult {
            updated: catalog.fingerprint != current_fingerprint,
            fingerprint: catalog.fingerprint.clone(),
            entry_count: catalog.entries.len(),
            skipped: catalog.skipped,
        };

        if result.updated {
            info!(fingerprint = %result.fingerprint, "catalog content changed");
            Ok((result, Some(catalog)))
        } else {
            info!("catalog unchanged");
            Ok((result, None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, content: &str) -> Config {
        let path = std::env::temp_dir().join(format!(
            "vsbz-update-{name}-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, content).expect("write temp catalog");
        Config {
            catalog_path: path.to_string_lossy().to_string(),
            sidebar_out: None,
            collapsed: false,
        }
    }

    #[test]
    fn reload_detects_changes() {
        let config = temp_config(
            "changes",
            r#"[{"id": "K1", "kind": "case", "title": "Eset", "route": "/k1"}]"#,
        );
        let service = ReloadService::new(config.clone());
        let first = service.load().expect("initial load");
        assert_eq!(first.entries.len(), 1);

        let (result, catalog) = service.reload(&first.fingerprint).expect("reload");
        assert!(!result.updated);
        assert!(catalog.is_none());

        std::fs::write(
            config.catalog_path(),
            r#"[{"id": "K1", "kind": "case", "title": "Eset", "route": "/k1"},
                {"id": "K2", "kind": "case", "title": "Eset 2", "route": "/k2", "status": "open"},
                {"id": "G1", "kind": "glossary"}]"#,
        )
        .expect("rewrite temp catalog");

        let (result, catalog) = service.reload(&first.fingerprint).expect("reload");
        std::fs::remove_file(config.catalog_path()).ok();

        assert!(result.updated);
        assert_eq!(result.entry_count, 2);
        assert_eq!(result.skipped, 1);
        assert_ne!(result.fingerprint, first.fingerprint);
        assert_eq!(catalog.map(|c| c.entries.len()), Some(2));
    }

    #[test]
    fn reload_of_broken_catalog_fails() {
        let config = temp_config("broken", "{ not json");
        let service = ReloadService::new(config.clone());
        let result = service.reload("");
        std::fs::remove_file(config.catalog_path()).ok();
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }
}
