use std::fmt;

/// A Markdown link `[title](url)` for one snatched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkLabel {
    pub title: String,
    pub url: String,
}

impl LinkLabel {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for LinkLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({})", self.title, self.url)
    }
}

/// Clipboard text for a batch: one link per line, no trailing newline.
pub fn join_links(links: &[LinkLabel]) -> String {
    links
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
