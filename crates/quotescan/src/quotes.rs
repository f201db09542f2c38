//! Classification of quote characters.
//!
//! Plain quotes (`'`, `"` and `` ` ``) are the only characters the scanner
//! treats as span delimiters. Fancy quotes (curly quotes, guillemets, CJK
//! corner brackets) are recognized here for trimming and inspection only.

/// A start and end glyph that together bound a quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuotePair {
    /// Glyph opening the quotation.
    pub start: char,
    /// Glyph closing the quotation.
    pub end: char,
}

impl QuotePair {
    const fn new(start: char, end: char) -> Self {
        Self { start, end }
    }

    /// Returns `true` if `c` is either glyph of the pair.
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        self.start == c || self.end == c
    }
}

/// Fancy quotation pairs, in lookup order.
///
/// Several glyphs appear in more than one pair (`»` opens one pair and
/// closes another, `„` opens two). [`fancy_pair`] returns the first pair
/// declared here, so the order is part of the contract.
pub const FANCY_QUOTES: [QuotePair; 9] = [
    QuotePair::new('“', '”'),
    QuotePair::new('‘', '’'),
    QuotePair::new('‹', '›'),
    QuotePair::new('«', '»'),
    QuotePair::new('»', '«'),
    QuotePair::new('„', '“'),
    QuotePair::new('„', '”'),
    QuotePair::new('「', '」'),
    QuotePair::new('『', '』'),
];

/// Returns `true` for a double quote, single quote or backtick.
#[must_use]
pub fn is_quote_char(c: char) -> bool {
    matches!(c, '\'' | '"' | '`')
}

/// Returns `true` if `c` is any glyph of [`FANCY_QUOTES`].
#[must_use]
pub fn is_fancy_quote_char(c: char) -> bool {
    fancy_pair(c).is_some()
}

/// Returns `true` for plain and fancy quote characters alike.
#[must_use]
pub fn is_any_quote_char(c: char) -> bool {
    is_quote_char(c) || is_fancy_quote_char(c)
}

/// Returns the first pair of [`FANCY_QUOTES`] containing `c`.
///
/// Ambiguous glyphs resolve to whichever pair is declared first: `»` yields
/// `«»` even though it also opens `»«`.
#[must_use]
pub fn fancy_pair(c: char) -> Option<QuotePair> {
    FANCY_QUOTES.iter().copied().find(|pair| pair.contains(c))
}

/// Returns the first and last code points of `text`, or `None` when it has
/// fewer than two code points.
#[must_use]
pub fn bookend_chars(text: &str) -> Option<(char, char)> {
    let mut chars = text.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;
    Some((first, last))
}

/// Returns `true` if `text` starts and ends with the same plain quote.
#[must_use]
pub fn is_quoted(text: &str) -> bool {
    bookend_chars(text).is_some_and(|(first, last)| first == last && is_quote_char(first))
}

/// Returns the bookends of `text` when both are fancy quote glyphs.
///
/// The glyphs need not be declared together in [`FANCY_QUOTES`]: `“x“`,
/// `«x«` and `”x“` all count as quoted.
#[must_use]
pub fn is_quoted_fancy(text: &str) -> Option<QuotePair> {
    let (start, end) = bookend_chars(text)?;
    (is_fancy_quote_char(start) && is_fancy_quote_char(end))
        .then_some(QuotePair::new(start, end))
}

/// Removes one layer of plain or fancy quotes, returning `text` unchanged
/// when it is not quoted.
///
/// Fancy bookends are stripped glyph by glyph, so `”x“` trims to `x`.
#[must_use]
pub fn trim_quotes(text: &str) -> &str {
    if is_quoted(text) {
        // plain quotes are single byte
        return &text[1..text.len() - 1];
    }
    if let Some(pair) = is_quoted_fancy(text) {
        let inner = text.strip_prefix(pair.start).unwrap_or(text);
        return inner.strip_suffix(pair.end).unwrap_or(inner);
    }
    text
}
