use thiserror::Error;

/// Errors surfaced by the skin preset and cape provider APIs.
///
/// Cape fetches never return these to callers; they are raised inside the
/// fetch pipeline and turned into [`crate::capes::CapeDiagnostic`]s at the
/// boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid cape provider id: {0}")]
    InvalidCapeProvider(String),

    #[error("Cape error: {0}")]
    Cape(String),

    #[error("Skin error: {0}")]
    Skin(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
