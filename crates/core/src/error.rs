#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown {field} '{value}', expected one of: {}", allowed.join(", "))]
    UnknownCategory {
        field: &'static str,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Service not ready: {0}")]
    NotReady(String),

    #[error("Model artifact error: {0}")]
    ModelLoad(String),
}
