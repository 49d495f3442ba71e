//! Snatch engine: fetching, decoding and parsing pages, config and clipboard IO.
mod clipboard;
mod config;
mod decode;
mod document;
mod fetch;
mod snatcher;
mod types;

pub use clipboard::{ClipboardError, ClipboardSink, SystemClipboard};
pub use config::{
    candidate_paths, find_config, load_config, load_config_from, read_overrides, ConfigError,
    LoadedConfig, CONFIG_DIR, CONFIG_FILE, LEGACY_CONFIG_DIR,
};
pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use document::HtmlDocument;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_USER_AGENT};
pub use snatcher::Snatcher;
pub use types::{
    FailureKind, FetchError, FetchMetadata, FetchOutput, NullProgressSink, ProgressSink,
    SnatchError, SnatchEvent,
};
