//! Quote- and escape-aware separator search.
//!
//! Both scanners walk the source once, one code point at a time:
//!
//! - a backslash and the code point after it form one unit that never
//!   matches and never changes the quote state;
//! - a plain quote outside a span opens one, and only the same quote closes
//!   it again;
//! - nothing inside a span is matched.
//!
//! Fancy quotes are ordinary text here.

use alloc::{borrow::Cow, string::String};

use bstr::ByteSlice;

use crate::{
    cursor::{Cursor, ESCAPE},
    quotes::is_quote_char,
    state::ScanState,
    unescape::unescape,
};

/// The text on either side of a separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    /// Text before the separator, or the whole input when not found.
    pub before: &'a str,
    /// Text after the separator, empty when not found.
    pub after: &'a str,
    /// Whether the separator was found.
    pub found: bool,
}

impl<'a> Split<'a> {
    pub(crate) fn at(src: &'a str, at: usize, sep: &str) -> Self {
        Self {
            before: &src[..at],
            after: &src[at + sep.len()..],
            found: true,
        }
    }

    pub(crate) fn not_found(src: &'a str) -> Self {
        Self {
            before: src,
            after: "",
            found: false,
        }
    }

    /// Returns `(before, after)` when the separator was found.
    #[must_use]
    pub fn pair(self) -> Option<(&'a str, &'a str)> {
        self.found.then_some((self.before, self.after))
    }
}

/// Finds the first unquoted, unescaped `sep` in `src`.
///
/// ```rust
/// use quotescan::scan;
///
/// let split = scan(r#"a "b c" d"#, " ");
/// assert_eq!((split.before, split.after), ("a", r#""b c" d"#));
///
/// let split = scan(r#"'b c'\ d"#, " ");
/// assert!(!split.found);
/// assert_eq!(split.before, r#"'b c'\ d"#);
/// ```
#[must_use]
pub fn scan<'a>(src: &'a str, sep: &str) -> Split<'a> {
    let mut cursor = Cursor::new(src);
    let mut state = ScanState::Normal;

    while let Some(ch) = cursor.peek() {
        if ch == ESCAPE {
            cursor.skip_escape();
            continue;
        }
        if state.is_quoted() || is_quote_char(ch) {
            state = state.advance(ch);
            cursor.bump();
            continue;
        }
        if cursor.rest().len() < sep.len() {
            // too little input left for a match
            break;
        }
        if cursor.rest().starts_with(sep) {
            return Split::at(src, cursor.offset(), sep);
        }
        cursor.bump();
    }

    Split::not_found(src)
}

/// Finds the first occurrence of `sep` in `src`, ignoring quotes and escapes.
///
/// ```rust
/// use quotescan::cut;
///
/// let split = cut(r#""a b" c"#, " ");
/// assert_eq!((split.before, split.after), (r#""a"#, r#"b" c"#));
/// ```
#[must_use]
pub fn cut<'a>(src: &'a str, sep: &str) -> Split<'a> {
    match src.as_bytes().find(sep) {
        Some(at) => Split::at(src, at, sep),
        None => Split::not_found(src),
    }
}

/// The first quoted span of a string and the text around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotedSpan<'a> {
    /// Text before the opening quote with its escape pairs removed, or the
    /// whole input when not found.
    pub before: Cow<'a, str>,
    /// The quote character that opened and closed the span.
    pub quote: Option<char>,
    /// Contents of the span, unescaped when they decode cleanly and raw
    /// otherwise.
    pub quoted: Cow<'a, str>,
    /// Text after the closing quote.
    pub after: &'a str,
    /// Whether a complete span was found.
    pub found: bool,
}

impl<'a> QuotedSpan<'a> {
    fn not_found(src: &'a str) -> Self {
        Self {
            before: Cow::Borrowed(src),
            quote: None,
            quoted: Cow::Borrowed(""),
            after: "",
            found: false,
        }
    }
}

/// Finds the first single, double or backtick quoted span in `src`.
///
/// A backslash and the code point it escapes are dropped from `before`, so
/// `\"a "b"` reports `a ` before the span.
///
/// The contents are unescaped with [`unescape`](crate::unescape); when that
/// fails the raw contents, escapes included, are returned instead. Only the
/// first span is extracted. An unterminated span counts as not found.
///
/// Single-quoted spans are decoded like double-quoted ones rather than as
/// one-character literals, so `'it\'s'` yields `it's`.
///
/// ```rust
/// use quotescan::scan_quote;
///
/// let span = scan_quote(r#"before "quoted \"within\"" after"#);
/// assert!(span.found);
/// assert_eq!(span.before, "before ");
/// assert_eq!(span.quoted, r#"quoted "within""#);
/// assert_eq!(span.after, " after");
/// ```
#[must_use]
pub fn scan_quote(src: &str) -> QuotedSpan<'_> {
    let mut cursor = Cursor::new(src);
    let mut state = ScanState::Normal;
    // byte offset of the opening quote
    let mut open = 0;

    while let Some(ch) = cursor.peek() {
        if ch == ESCAPE {
            cursor.skip_escape();
            continue;
        }
        let at = cursor.offset();
        cursor.bump();
        match (state, state.advance(ch)) {
            (ScanState::Normal, next @ ScanState::InQuote(_)) => {
                open = at;
                state = next;
            }
            (ScanState::InQuote(quote), ScanState::Normal) => {
                let raw = &src[open + quote.len_utf8()..at];
                let quoted = unescape(raw, quote).unwrap_or_else(|err| {
                    tracing::trace!(%err, char_idx = cursor.char_index(), "keeping raw quoted text");
                    Cow::Borrowed(raw)
                });
                return QuotedSpan {
                    before: drop_escapes(&src[..open]),
                    quote: Some(quote),
                    quoted,
                    after: cursor.rest(),
                    found: true,
                };
            }
            (_, next) => state = next,
        }
    }

    QuotedSpan::not_found(src)
}

/// Removes every backslash together with the code point it escapes.
fn drop_escapes(text: &str) -> Cow<'_, str> {
    if !text.contains(ESCAPE) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut cursor = Cursor::new(text);
    while let Some(ch) = cursor.peek() {
        if ch == ESCAPE {
            cursor.skip_escape();
        } else {
            out.push(ch);
            cursor.bump();
        }
    }
    Cow::Owned(out)
}
