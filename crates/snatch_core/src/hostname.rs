/// Short site label for `host`: the second-level domain name, lowercased.
///
/// `www.example.com` and `example.com` both give `example`. Single-label
/// hosts such as `localhost` give `None`.
pub fn hostname_label(host: &str) -> Option<String> {
    let parts: Vec<&str> = host.split('.').collect();
    if parts.len() < 2 {
        return None;
    }
    parts
        .iter()
        .rev()
        .nth(1)
        .filter(|label| !label.is_empty())
        .map(|label| label.to_lowercase())
}
