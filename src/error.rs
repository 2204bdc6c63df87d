use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Server returned status {0}")]
    Server(u16),
    #[error("Malformed response: {0}")]
    Malformed(String),
}
