//! Snatch core: pure title derivation for bookmark link labels.
mod anchor;
mod compose;
mod document;
mod hostname;
mod link;
mod overrides;
mod title;

pub use anchor::resolve_anchor;
pub use compose::{compose_title, url_fragment};
pub use document::PageDocument;
pub use hostname::hostname_label;
pub use link::{join_links, LinkLabel};
pub use overrides::{HostnameMapper, HostnameOverrides};
pub use title::normalize_title;
