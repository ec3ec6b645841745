use vsbz_catalog::error::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("config error: {0}")]
    Config(String),

    #[error("export error: {0}")]
    Export(String),
}
