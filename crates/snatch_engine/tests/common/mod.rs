use std::collections::HashMap;
use std::sync::Mutex;

use snatch_engine::{
    FailureKind, FetchError, FetchMetadata, FetchOutput, Fetcher, ProgressSink, SnatchEvent,
};
use url::Url;

/// Serves canned pages keyed by URL; unknown URLs answer 404.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, Result<Vec<u8>, FetchError>>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages
            .insert(url.to_string(), Ok(html.as_bytes().to_vec()));
        self
    }

    pub fn raw(mut self, url: &str, bytes: &[u8]) -> Self {
        self.pages.insert(url.to_string(), Ok(bytes.to_vec()));
        self
    }

    pub fn failing(mut self, url: &str, kind: FailureKind) -> Self {
        self.pages.insert(
            url.to_string(),
            Err(FetchError {
                kind,
                message: "canned failure".to_string(),
            }),
        );
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchOutput, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        let bytes = match self.pages.get(url.as_str()) {
            Some(result) => result.clone()?,
            None => {
                return Err(FetchError {
                    kind: FailureKind::HttpStatus(404),
                    message: "404 Not Found".to_string(),
                })
            }
        };
        Ok(FetchOutput {
            metadata: FetchMetadata {
                original_url: url.to_string(),
                final_url: url.to_string(),
                redirect_count: 0,
                content_type: Some("text/html; charset=utf-8".to_string()),
                byte_len: bytes.len() as u64,
            },
            bytes,
        })
    }
}

#[derive(Default)]
pub struct TestSink {
    events: Mutex<Vec<SnatchEvent>>,
}

impl TestSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<SnatchEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: SnatchEvent) {
        self.events.lock().unwrap().push(event);
    }
}
