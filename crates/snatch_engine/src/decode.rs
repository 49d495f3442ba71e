use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use snatch_logging::snatch_warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding_label: String,
    /// Some bytes were invalid for the encoding and became U+FFFD.
    pub had_errors: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("body decoded with {encoding} is binary, not text")]
    Binary { encoding: String },
}

/// Decode a fetched page into UTF-8.
///
/// Order of precedence: byte order mark, Content-Type charset, then a
/// `chardetng` guess over the whole body (which also honours `<meta charset>`).
/// Malformed sequences are replaced rather than rejected; only a body that
/// decodes to text containing NUL characters is refused.
pub fn decode_html(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedHtml, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(enc) = content_type
        .and_then(charset_param)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return decode_with(bytes, enc);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\'']))
    })
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> Result<DecodedHtml, DecodeError> {
    let (text, _, had_errors) = enc.decode(bytes);
    if text.contains('\0') {
        return Err(DecodeError::Binary {
            encoding: enc.name().to_string(),
        });
    }
    if had_errors {
        snatch_warn!(
            "Replaced malformed {} byte sequences while decoding page",
            enc.name()
        );
    }
    Ok(DecodedHtml {
        html: text.into_owned(),
        encoding_label: enc.name().to_string(),
        had_errors,
    })
}

#[cfg(test)]
mod tests {
    use super::charset_param;

    #[test]
    fn charset_param_is_case_insensitive_and_unquoted() {
        assert_eq!(charset_param("text/html; Charset=\"UTF-8\""), Some("UTF-8"));
        assert_eq!(charset_param("text/html;charset=iso-8859-1"), Some("iso-8859-1"));
        assert_eq!(charset_param("text/html"), None);
    }
}
