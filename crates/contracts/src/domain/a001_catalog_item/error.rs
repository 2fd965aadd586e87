use thiserror::Error;

/// Ошибки каталога
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Диапазон цен не определён для пустого каталога
    #[error("catalog contains no items")]
    EmptyCatalog,

    #[error("unknown sort option: {0:?}")]
    InvalidSortOption(String),
}
