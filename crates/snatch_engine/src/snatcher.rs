use snatch_core::{compose_title, HostnameOverrides, LinkLabel};
use snatch_logging::snatch_debug;
use url::Url;

use crate::{decode_html, Fetcher, HtmlDocument, ProgressSink, SnatchError, SnatchEvent};

/// Turns URLs into bookmark titles using a fetcher and the configured overrides.
pub struct Snatcher<F> {
    fetcher: F,
    overrides: HostnameOverrides,
}

impl<F: Fetcher> Snatcher<F> {
    pub fn new(fetcher: F, overrides: HostnameOverrides) -> Self {
        Self { fetcher, overrides }
    }

    /// Fetch `url` and derive its title.
    pub async fn snatch(&self, url: &str) -> Result<String, SnatchError> {
        let parsed = Url::parse(url).map_err(|source| SnatchError::UrlParse {
            url: url.to_string(),
            source,
        })?;

        let output = self
            .fetcher
            .fetch(&parsed)
            .await
            .map_err(|source| SnatchError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let decoded = decode_html(&output.bytes, output.metadata.content_type.as_deref())
            .map_err(|source| SnatchError::DocumentParse {
                url: url.to_string(),
                source,
            })?;
        snatch_debug!(
            "Decoded {} bytes from {} as {}",
            output.metadata.byte_len,
            url,
            decoded.encoding_label
        );

        let document = HtmlDocument::parse(&decoded.html);
        Ok(compose_title(&document, &parsed, &self.overrides))
    }

    /// Like [`Snatcher::snatch`], wrapped as a Markdown link to the input URL.
    pub async fn snatch_link(&self, url: &str) -> Result<LinkLabel, SnatchError> {
        let title = self.snatch(url).await?;
        Ok(LinkLabel::new(title, url))
    }

    /// Snatch every URL in order, one at a time.
    ///
    /// The first failure aborts the batch; no partial result is returned.
    pub async fn snatch_all<I, S>(
        &self,
        urls: I,
        sink: &dyn ProgressSink,
    ) -> Result<Vec<LinkLabel>, SnatchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut links = Vec::new();
        for (index, url) in urls.into_iter().enumerate() {
            let url = url.as_ref();
            sink.emit(SnatchEvent::Started {
                index,
                url: url.to_string(),
            });

            let link = match self.snatch_link(url).await {
                Ok(link) => link,
                Err(err) => {
                    snatch_debug!("Aborting batch at input {}", index);
                    return Err(err);
                }
            };

            sink.emit(SnatchEvent::Titled {
                index,
                link: link.clone(),
            });
            links.push(link);
        }
        Ok(links)
    }
}
