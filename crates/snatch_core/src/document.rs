/// Read-only queries the title derivation needs from a parsed page.
///
/// Both queries return the first match in document order, or `None`.
pub trait PageDocument {
    /// Text of the first `<title>` element, untrimmed.
    fn title_text(&self) -> Option<String>;

    /// Full text content of the first element whose `id` equals `id`.
    fn element_text_by_id(&self, id: &str) -> Option<String>;
}
