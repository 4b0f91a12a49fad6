//! Shared utility functions.

use std::borrow::Cow;

// ============================================================================
// Text Decoding
// ============================================================================

/// Decode bytes to a string, handling various encodings.
///
/// 1. UTF-8 first (BOM handled by encoding_rs)
/// 2. If malformed, the hint encoding (from `<meta charset>`)
/// 3. Windows-1252 as a last resort
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Extract the charset from `<meta charset="...">` in the first 1024 bytes.
///
/// The `http-equiv` form (`content="text/html; charset=..."`) is matched too,
/// since both end in `charset=`.
pub fn extract_meta_charset(bytes: &[u8]) -> Option<&str> {
    let prefix = &bytes[..bytes.len().min(1024)];

    let pos = prefix
        .windows(8)
        .position(|w| w.eq_ignore_ascii_case(b"charset="))?;
    let mut value = &prefix[pos + 8..];

    if let Some(&quote) = value.first()
        && (quote == b'"' || quote == b'\'')
    {
        value = &value[1..];
    }

    let end = value
        .iter()
        .position(|&b| matches!(b, b'"' | b'\'' | b';' | b'>' | b'/') || b.is_ascii_whitespace())
        .unwrap_or(value.len());

    let name = std::str::from_utf8(&value[..end]).ok()?;
    (!name.is_empty()).then_some(name)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_utf8_borrows() {
        let decoded = decode_text("Navigation".as_bytes(), None);
        assert!(matches!(decoded, Cow::Borrowed("Navigation")));
    }

    #[test]
    fn test_decode_falls_back_to_windows_1252() {
        assert_eq!(decode_text(b"Men\xfc", None), "Menü");
    }

    #[test]
    fn test_decode_uses_hint() {
        // 0xE1 is "á" in Windows-1252 and "α" in ISO-8859-7
        assert_eq!(decode_text(b"\xe1", Some("iso-8859-7")), "α");
    }

    #[test]
    fn test_extract_meta_charset() {
        assert_eq!(
            extract_meta_charset(br#"<meta charset="iso-8859-1">"#),
            Some("iso-8859-1")
        );
        assert_eq!(extract_meta_charset(b"<meta charset=utf-8>"), Some("utf-8"));
        assert_eq!(
            extract_meta_charset(
                br#"<meta http-equiv="Content-Type" content="text/html; charset=windows-1252">"#
            ),
            Some("windows-1252")
        );
        assert_eq!(extract_meta_charset(b"<h1>No charset</h1>"), None);
    }
}
