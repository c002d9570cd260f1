#[derive(Debug, thiserror::Error)]
pub enum BricksetError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Invalid login credentials")]
    InvalidLogin,

    #[error("Invalid set ID: {0}")]
    InvalidSetId(i64),

    #[error("Invalid request (HTTP {status}): {message}")]
    InvalidRequest { status: u16, message: String },

    #[error("Invalid sort order: {0}")]
    InvalidOrder(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Set is not attached to a Brickset client")]
    Detached,
}

pub type Result<T> = std::result::Result<T, BricksetError>;
