use crate::PageDocument;

/// Section label for a URL fragment: the text of the element with that id.
///
/// An empty fragment short-circuits without touching the document. A missing
/// element or one without text is `None`, not an error.
pub fn resolve_anchor<D>(document: &D, fragment: &str) -> Option<String>
where
    D: PageDocument + ?Sized,
{
    if fragment.is_empty() {
        return None;
    }
    document
        .element_text_by_id(fragment)
        .filter(|text| !text.is_empty())
}
