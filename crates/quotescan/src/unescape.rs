//! Decoding of escape sequences inside quoted spans.
//!
//! Double- and single-quoted spans are interpreted: backslash escapes are
//! decoded the way double-quoted string literals decode them. Backtick spans
//! are raw and only lose their carriage returns.
//!
//! # Errors
//!
//! Decoding never panics. Every malformed input is reported as an
//! [`UnescapeError`]; callers that prefer the raw text, such as
//! [`scan_quote`](crate::scan_quote), fall back to it.

use alloc::{borrow::Cow, string::String};
use core::str::Chars;

use crate::{cursor::ESCAPE, error::UnescapeError};

/// Accumulates a fixed number of digits of one radix into a code point.
///
/// Used for `\xHH` (two hex digits), `\uHHHH` (four), `\UHHHHHHHH` (eight)
/// and `\NNN` (three octal digits).
#[derive(Debug)]
struct DigitBuffer {
    acc: u32,
    len: u8,
    width: u8,
    radix: u32,
}

impl DigitBuffer {
    fn hex(width: u8) -> Self {
        Self {
            acc: 0,
            len: 0,
            width,
            radix: 16,
        }
    }

    fn octal() -> Self {
        Self {
            acc: 0,
            len: 0,
            width: 3,
            radix: 8,
        }
    }

    /// Feeds one digit.
    ///
    /// - Returns `Ok(None)` while fewer than `width` digits have been seen.
    /// - Returns `Ok(Some(code))` on the last digit and resets the buffer.
    /// - Returns `Err` if `c` is not a digit of the buffer's radix.
    fn feed(&mut self, c: char) -> Result<Option<u32>, UnescapeError> {
        let d = c.to_digit(self.radix).ok_or(UnescapeError::InvalidDigit(c))?;

        // at most eight hex digits, so this fits in a u32
        self.acc = self.acc * self.radix + d;
        self.len += 1;

        if self.len < self.width {
            return Ok(None);
        }

        let code = self.acc;
        self.acc = 0;
        self.len = 0;
        Ok(Some(code))
    }

    fn finish(mut self, chars: &mut Chars<'_>) -> Result<u32, UnescapeError> {
        loop {
            let c = chars.next().ok_or(UnescapeError::UnexpectedEndOfInput)?;
            if let Some(code) = self.feed(c)? {
                return Ok(code);
            }
        }
    }
}

fn scalar(code: u32) -> Result<char, UnescapeError> {
    char::from_u32(code).ok_or(UnescapeError::InvalidScalar(code))
}

fn byte(code: u32) -> Result<char, UnescapeError> {
    if code > 0x7F {
        return Err(UnescapeError::NonAsciiByte(code));
    }
    scalar(code)
}

/// Decodes the contents of a span opened and closed by `quote`.
///
/// Returns the input borrowed when it contains nothing to decode.
///
/// # Errors
///
/// See [`UnescapeError`] for the rejected inputs.
///
/// ```rust
/// use quotescan::{unescape, UnescapeError};
///
/// assert_eq!(unescape(r#"say \"hi\"\t"#, '"').unwrap(), "say \"hi\"\t");
/// assert_eq!(unescape(r"C:\dir", '`').unwrap(), r"C:\dir");
/// assert_eq!(unescape(r"\q", '"'), Err(UnescapeError::UnknownEscape('q')));
/// ```
pub fn unescape(raw: &str, quote: char) -> Result<Cow<'_, str>, UnescapeError> {
    if quote == '`' {
        return unescape_raw(raw);
    }
    if raw.contains('\n') {
        return Err(UnescapeError::Newline);
    }
    if !raw.contains(ESCAPE) {
        if raw.contains(quote) {
            return Err(UnescapeError::UnescapedQuote(quote));
        }
        return Ok(Cow::Borrowed(raw));
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch == quote {
            return Err(UnescapeError::UnescapedQuote(quote));
        }
        if ch != ESCAPE {
            out.push(ch);
            continue;
        }

        let escaped = chars.next().ok_or(UnescapeError::UnexpectedEndOfInput)?;
        let decoded = match escaped {
            'a' => '\u{07}',
            'b' => '\u{08}',
            'f' => '\u{0C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{0B}',
            ESCAPE => ESCAPE,
            c if c == quote => c,
            'x' => byte(DigitBuffer::hex(2).finish(&mut chars)?)?,
            'u' => scalar(DigitBuffer::hex(4).finish(&mut chars)?)?,
            'U' => scalar(DigitBuffer::hex(8).finish(&mut chars)?)?,
            '0'..='7' => {
                let mut buf = DigitBuffer::octal();
                buf.feed(escaped)?;
                byte(buf.finish(&mut chars)?)?
            }
            other => return Err(UnescapeError::UnknownEscape(other)),
        };
        out.push(decoded);
    }
    Ok(Cow::Owned(out))
}

fn unescape_raw(raw: &str) -> Result<Cow<'_, str>, UnescapeError> {
    if raw.contains('`') {
        return Err(UnescapeError::UnescapedQuote('`'));
    }
    if raw.contains('\r') {
        return Ok(Cow::Owned(raw.replace('\r', "")));
    }
    Ok(Cow::Borrowed(raw))
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;

    use rstest::rstest;

    use super::*;

    #[test]
    fn digit_buffer_decodes_hex() {
        let mut buf = DigitBuffer::hex(4);
        assert_eq!(buf.feed('0').unwrap(), None);
        assert_eq!(buf.feed('0').unwrap(), None);
        assert_eq!(buf.feed('4').unwrap(), None);
        assert_eq!(buf.feed('1').unwrap(), Some(0x41));
        // resets after a full sequence
        assert_eq!(buf.feed('A').unwrap(), None);
    }

    #[test]
    fn digit_buffer_rejects_wrong_radix() {
        let mut buf = DigitBuffer::octal();
        assert_eq!(buf.feed('8'), Err(UnescapeError::InvalidDigit('8')));
        let mut buf = DigitBuffer::hex(2);
        assert_eq!(buf.feed('G'), Err(UnescapeError::InvalidDigit('G')));
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(unescape("plain “text”", '"'), Ok(Cow::Borrowed("plain “text”"))));
        assert!(matches!(unescape(r"a\b", '`'), Ok(Cow::Borrowed(r"a\b"))));
    }

    #[rstest]
    #[case(r#"quoted \"within\""#, '"', "quoted \"within\"")]
    #[case(r"back\\slash", '"', "back\\slash")]
    #[case(r"it\'s", '\'', "it's")]
    #[case(r"\a\b\f\n\r\t\v", '"', "\u{07}\u{08}\u{0C}\n\r\t\u{0B}")]
    #[case(r"\x41\102\u00e9\U0001F600", '"', "ABé😀")]
    #[case(r"\u201cfancy\u201d", '"', "“fancy”")]
    fn decodes_escapes(#[case] raw: &str, #[case] quote: char, #[case] expected: &str) {
        assert_eq!(unescape(raw, quote).unwrap(), expected);
    }

    #[rstest]
    #[case(r"\q", '"', UnescapeError::UnknownEscape('q'))]
    #[case(r"\'", '"', UnescapeError::UnknownEscape('\''))]
    #[case(r"\", '"', UnescapeError::UnexpectedEndOfInput)]
    #[case(r"\u12", '"', UnescapeError::UnexpectedEndOfInput)]
    #[case(r"\x4g", '"', UnescapeError::InvalidDigit('g'))]
    #[case(r"\xff", '"', UnescapeError::NonAsciiByte(0xFF))]
    #[case(r"\377", '"', UnescapeError::NonAsciiByte(0xFF))]
    #[case(r"\ud800", '"', UnescapeError::InvalidScalar(0xD800))]
    #[case("two\nlines", '"', UnescapeError::Newline)]
    #[case("bare \" quote", '"', UnescapeError::UnescapedQuote('"'))]
    #[case("with \\n and ' quote", '\'', UnescapeError::UnescapedQuote('\''))]
    #[case("tick ` inside", '`', UnescapeError::UnescapedQuote('`'))]
    fn rejects_malformed(#[case] raw: &str, #[case] quote: char, #[case] expected: UnescapeError) {
        assert_eq!(unescape(raw, quote), Err(expected));
    }

    #[test]
    fn raw_spans_drop_carriage_returns() {
        assert_eq!(unescape("a\r\nb", '`').unwrap(), "a\nb");
    }
}
