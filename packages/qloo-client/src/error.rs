use thiserror::Error;

pub type Result<T> = std::result::Result<T, QlooError>;

#[derive(Debug, Error)]
pub enum QlooError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Qloo API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}
