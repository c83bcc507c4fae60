#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {slug}")]
    NotFound { entity: &'static str, slug: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
