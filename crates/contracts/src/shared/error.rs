use thiserror::Error;

/// Ошибки каталога
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{catalog} '{id}' not found")]
    NotFound { catalog: &'static str, id: String },

    #[error("Unknown catalog: {0}")]
    UnknownCatalog(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Storage error: {0}")]
    Storage(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl CatalogError {
    pub fn not_found(catalog: &'static str, id: impl Into<String>) -> Self {
        CatalogError::NotFound {
            catalog,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CatalogError::not_found("Course", "crs-999").to_string(),
            "Course 'crs-999' not found"
        );
        assert_eq!(
            CatalogError::InvalidRequest("Email is required".into()).to_string(),
            "Invalid request: Email is required"
        );
    }
}
