use crate::{hostname_label, HostnameOverrides, PageDocument};

/// Cleans the page `<title>` and merges it with the site label.
///
/// A trailing copy of the derived hostname label (`"My Page - Example"`) is
/// removed case-insensitively before the label, or its configured override,
/// is prefixed as `"<label> : <title>"`. Suffix matching always uses the
/// derived label; the override only changes what is displayed.
///
/// Hosts without a label leave the trimmed title untouched. Returns `None`
/// when nothing is left.
pub fn normalize_title<D>(document: &D, host: &str, overrides: &HostnameOverrides) -> Option<String>
where
    D: PageDocument + ?Sized,
{
    let raw = document.title_text().unwrap_or_default();
    let title = raw.trim();

    let working = match hostname_label(host) {
        Some(label) => {
            let remaining = strip_suffix_ignore_case(title, &label)
                .map(|rest| rest.trim_end_matches([' ', '-']))
                .unwrap_or(title);
            let display = overrides.title_for(host).unwrap_or(&label);
            format!("{display} : {remaining}")
        }
        None => title.to_string(),
    };

    Some(working).filter(|text| !text.is_empty())
}

/// `text` without a trailing `suffix`, comparing char by char in lowercase.
fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let mut text_chars = text.char_indices().rev();
    let mut end = text.len();
    for wanted in suffix.chars().rev() {
        let (idx, found) = text_chars.next()?;
        if !found.to_lowercase().eq(wanted.to_lowercase()) {
            return None;
        }
        end = idx;
    }
    Some(&text[..end])
}
