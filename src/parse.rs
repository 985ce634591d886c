//! Integer parsing for the attribute store path.
//!
//! Accepts the usual auto-base grammar: a `0x`/`0X` prefix selects hex, a
//! leading `0` selects octal, anything else is decimal. An optional leading
//! `+` and trailing ASCII whitespace (line-oriented writers send a newline)
//! are tolerated. Negative values, overflow and empty digit strings are all
//! format errors.

use crate::error::AccessError;

/// Parses `text` as a `u32` with auto-detected base.
pub fn parse_u32(text: &str) -> Result<u32, AccessError> {
    let text = text.trim_end_matches(|c: char| c.is_ascii_whitespace());
    let text = text.strip_prefix('+').unwrap_or(text);

    let (digits, base) = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        (hex, 16)
    } else if text.len() > 1 && text.starts_with('0') {
        (&text[1..], 8)
    } else {
        (text, 10)
    };

    u32::from_str_radix(digits, base).map_err(|_| AccessError::InvalidFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal() {
        assert_eq!(parse_u32("0"), Ok(0));
        assert_eq!(parse_u32("128"), Ok(128));
        assert_eq!(parse_u32("+7"), Ok(7));
        assert_eq!(parse_u32("4294967295"), Ok(u32::MAX));
    }

    #[test]
    fn hex() {
        assert_eq!(parse_u32("0x1A"), Ok(26));
        assert_eq!(parse_u32("0Xff"), Ok(255));
        assert_eq!(parse_u32("0xFFFFFFFF"), Ok(u32::MAX));
    }

    #[test]
    fn octal() {
        assert_eq!(parse_u32("010"), Ok(8));
        assert_eq!(parse_u32("0755"), Ok(0o755));
    }

    #[test]
    fn trailing_whitespace_is_ignored() {
        assert_eq!(parse_u32("42\n"), Ok(42));
        assert_eq!(parse_u32("0x10 \n"), Ok(16));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "\n", "teal", "0x", "12ab", "089", "-1", "4294967296"] {
            assert_eq!(parse_u32(bad), Err(AccessError::InvalidFormat), "{bad:?}");
        }
    }
}
