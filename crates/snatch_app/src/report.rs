use snatch_engine::{ProgressSink, SnatchEvent};

/// Prints each URL as it is fetched and its link once titled.
pub struct StdoutReport;

impl ProgressSink for StdoutReport {
    fn emit(&self, event: SnatchEvent) {
        match event {
            SnatchEvent::Started { url, .. } => println!("Snatching {url}"),
            SnatchEvent::Titled { link, .. } => println!("\t{link}"),
        }
    }
}
