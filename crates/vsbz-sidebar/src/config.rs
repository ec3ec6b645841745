use std::path::{Path, PathBuf};

use vsbz_catalog::nav::SidebarLayout;

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog export written by the content build.
    pub catalog_path: String,
    /// When set, write the sidebar JSON here and exit instead of serving.
    pub sidebar_out: Option<String>,
    /// Whether sidebar sections start collapsed.
    pub collapsed: bool,
}

impl Config {
    /// Required:
    /// - `VSBZ_CATALOG_PATH`: path to the catalog export (JSON)
    ///
    /// Optional:
    /// - `VSBZ_SIDEBAR_OUT`: output path for the generated sidebar
    /// - `VSBZ_SIDEBAR_COLLAPSED`: `1`, `true`, `yes` or `on` (default: off)
    pub fn from_env() -> Result<Self, AppError> {
        let catalog_path = std::env::var("VSBZ_CATALOG_PATH").map_err(|_| {
            AppError::Config("VSBZ_CATALOG_PATH environment variable is required".to_string())
        })?;

        if !Path::new(&catalog_path).is_file() {
            return Err(AppError::Config(format!("catalog file not found: {catalog_path}")));
        }

        let collapsed = std::env::var("VSBZ_SIDEBAR_COLLAPSED")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            catalog_path,
            sidebar_out: std::env::var("VSBZ_SIDEBAR_OUT").ok().filter(|v| !v.trim().is_empty()),
            collapsed,
        })
    }

    pub fn catalog_path(&self) -> PathBuf {
        Path::new(&self.catalog_path).to_path_buf()
    }

    pub fn layout(&self) -> SidebarLayout {
        SidebarLayout {
            collapsed: self.collapsed,
            ..SidebarLayout::default()
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_values() {
        for on in ["1", "true", "TRUE", " yes ", "On"] {
            assert!(parse_flag(on), "{on}");
        }
        for off in ["", "0", "false", "no", "enabled"] {
            assert!(!parse_flag(off), "{off}");
        }
    }

    #[test]
    fn layout_follows_collapse_setting() {
        let config = Config {
            catalog_path: "catalog.json".to_string(),
            sidebar_out: None,
            collapsed: true,
        };
        let layout = config.layout();
        assert!(layout.collapsed);
        assert_eq!(layout.case_title, "Esetek");
    }
}
