use std::fmt;

use snatch_core::LinkLabel;
use thiserror::Error;

use crate::DecodeError;

/// Batch progress reported to the caller, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnatchEvent {
    /// Work on `url` (the `index`-th input) is starting.
    Started { index: usize, url: String },
    /// The title for the `index`-th input is ready.
    Titled { index: usize, link: LinkLabel },
}

pub trait ProgressSink {
    fn emit(&self, event: SnatchEvent);
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn emit(&self, _event: SnatchEvent) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub final_url: String,
    pub redirect_count: usize,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Fatal failure for one URL; aborts the whole batch.
#[derive(Debug, Error)]
pub enum SnatchError {
    #[error("invalid url {url:?}: {source}")]
    UrlParse {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("failed to read document from {url}: {source}")]
    DocumentParse {
        url: String,
        #[source]
        source: DecodeError,
    },
}

impl SnatchError {
    pub fn url(&self) -> &str {
        match self {
            SnatchError::UrlParse { url, .. }
            | SnatchError::Fetch { url, .. }
            | SnatchError::DocumentParse { url, .. } => url,
        }
    }
}
