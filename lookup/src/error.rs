use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid service URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("service answered with status {0}")]
    Status(u16),

    #[error("query timed out")]
    Timeout,

    #[error("malformed service response: {0:?}")]
    MalformedResponse(String),

    #[error("no IPv4 address found")]
    NoAddress,
}

pub type Result<T> = std::result::Result<T, LookupError>;
