use percent_encoding::percent_decode_str;
use url::Url;

use crate::{normalize_title, resolve_anchor, HostnameOverrides, PageDocument};

/// Final bookmark title for `url` rendered from an already fetched `document`.
///
/// Falls back to the bare host when the page yields no title at all, and
/// appends `" : <section>"` when the URL fragment names an element with text.
pub fn compose_title<D>(document: &D, url: &Url, overrides: &HostnameOverrides) -> String
where
    D: PageDocument + ?Sized,
{
    let host = url.host_str().unwrap_or_default();
    let title =
        normalize_title(document, host, overrides).unwrap_or_else(|| host.to_string());

    match resolve_anchor(document, &url_fragment(url)) {
        Some(section) => format!("{title} : {section}"),
        None => title,
    }
}

/// Percent-decoded fragment of `url`, empty when there is none.
pub fn url_fragment(url: &Url) -> String {
    url.fragment()
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
        .unwrap_or_default()
}
