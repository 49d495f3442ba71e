use scraper::{ElementRef, Html, Selector};
use snatch_core::PageDocument;

/// Parsed HTML page backed by `scraper`.
///
/// Parsing is lenient: malformed markup is repaired the way browsers do, so
/// construction itself never fails.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.root_element().descendants().filter_map(ElementRef::wrap)
    }
}

impl PageDocument for HtmlDocument {
    fn title_text(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|title| title.text().collect())
    }

    // Ids are compared directly rather than through a `#id` selector so that
    // fragments which are not valid CSS identifiers still resolve.
    fn element_text_by_id(&self, id: &str) -> Option<String> {
        self.elements()
            .find(|element| element.value().id() == Some(id))
            .map(|element| element.text().collect())
    }
}
