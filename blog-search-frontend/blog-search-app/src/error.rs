use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("JSON {0}")]
    Json(#[from] serde_json::Error),
    #[error("Search endpoint answered with HTTP {0}")]
    Status(u16),
    #[cfg(feature = "hydrate")]
    #[error("Request failed {0}")]
    Gloo(#[from] gloo_net::Error),
}

pub type AppResult<T> = Result<T, AppError>;
