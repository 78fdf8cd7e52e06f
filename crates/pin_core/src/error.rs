use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed {url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Article not found: {0}")]
    NotFound(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// True for failures of the feed request itself, as opposed to bad input
    /// from the page request.
    pub fn is_feed_failure(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Status { .. } | Error::Serialization(_) | Error::Io(_)
        )
    }
}
