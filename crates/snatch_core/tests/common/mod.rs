use std::cell::Cell;
use std::collections::HashMap;

use snatch_core::PageDocument;

/// In-memory page that records how often it was queried by id.
#[derive(Default)]
pub struct FakePage {
    title: Option<String>,
    sections: HashMap<String, String>,
    id_lookups: Cell<usize>,
}

impl FakePage {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }

    pub fn untitled() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, id: &str, text: &str) -> Self {
        self.sections.insert(id.to_string(), text.to_string());
        self
    }

    pub fn id_lookups(&self) -> usize {
        self.id_lookups.get()
    }
}

impl PageDocument for FakePage {
    fn title_text(&self) -> Option<String> {
        self.title.clone()
    }

    fn element_text_by_id(&self, id: &str) -> Option<String> {
        self.id_lookups.set(self.id_lookups.get() + 1);
        self.sections.get(id).cloned()
    }
}
