use crate::quotes::is_quote_char;

/// Quote state of a scan.
///
/// A single opener is remembered: inside `"..."` a `'` or `` ` `` is plain
/// text and does not start a nested span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ScanState {
    #[default]
    Normal,
    InQuote(char),
}

impl ScanState {
    /// Returns the state after reading `ch`, which must not be escaped.
    #[must_use]
    pub fn advance(self, ch: char) -> Self {
        match self {
            ScanState::Normal if is_quote_char(ch) => ScanState::InQuote(ch),
            ScanState::InQuote(open) if open == ch => ScanState::Normal,
            other => other,
        }
    }

    pub fn is_quoted(self) -> bool {
        matches!(self, ScanState::InQuote(_))
    }
}
