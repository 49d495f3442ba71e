use serde::{Deserialize, Serialize};

/// One configured replacement for the derived hostname label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostnameMapper {
    pub hostname: String,
    pub title: String,
}

/// Per-hostname display labels, keyed by exact full hostname.
///
/// Serialized as `{"hostname-mappers": [{"hostname": .., "title": ..}]}`.
/// When a hostname is listed twice the first entry wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HostnameOverrides {
    #[serde(default)]
    hostname_mappers: Vec<HostnameMapper>,
}

impl HostnameOverrides {
    pub fn new(mappers: Vec<HostnameMapper>) -> Self {
        Self {
            hostname_mappers: mappers,
        }
    }

    /// Builds overrides from `(hostname, title)` pairs, keeping their order.
    pub fn from_pairs<I, H, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (H, T)>,
        H: Into<String>,
        T: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(hostname, title)| HostnameMapper {
                    hostname: hostname.into(),
                    title: title.into(),
                })
                .collect(),
        )
    }

    pub fn title_for(&self, hostname: &str) -> Option<&str> {
        self.hostname_mappers
            .iter()
            .find(|mapper| mapper.hostname == hostname)
            .map(|mapper| mapper.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.hostname_mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hostname_mappers.is_empty()
    }
}
