use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TerraError {
    pub fn country_not_found(id: impl Into<String>) -> Self {
        TerraError::NotFound {
            entity: "Country",
            id: id.into(),
        }
    }

    pub fn company_not_found(id: impl std::fmt::Display) -> Self {
        TerraError::NotFound {
            entity: "Company",
            id: id.to_string(),
        }
    }

    /// True if this error means the target row does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TerraError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, TerraError>;
