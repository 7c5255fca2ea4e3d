use thiserror::Error;

/// Errors surfaced by feed retrieval and normalization.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Network or HTTP failure while fetching a feed. Not retried.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be parsed as an XML document.
    #[error("malformed XML: {0}")]
    Parse(String),

    /// A geographic record lacked a coordinate field entirely.
    #[error("record is missing required field '{field}'")]
    MissingField { field: &'static str },

    /// A coordinate field was present but empty or non-numeric.
    #[error("field '{field}' holds no usable coordinate (got {value:?})")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("invalid service URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("unknown feed '{0}'")]
    UnknownFeed(String),

    /// A filter value was supplied for a feed whose upstream accepts none.
    #[error("feed '{0}' does not accept a filter")]
    FilterNotSupported(&'static str),
}

impl From<quick_xml::Error> for FeedError {
    fn from(err: quick_xml::Error) -> Self {
        FeedError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
