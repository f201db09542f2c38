use thiserror::Error;

/// Reasons the contents of a quoted span could not be unescaped.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UnescapeError {
    /// A `\x`, `\u`, `\U` or octal escape contained a non-digit.
    #[error("invalid digit '{0}' in escape sequence")]
    InvalidDigit(char),
    /// A backslash was followed by a character with no escape meaning.
    #[error("unknown escape sequence \\{0}")]
    UnknownEscape(char),
    /// A `\u`, `\U` or octal escape named something that is not a Unicode
    /// scalar value.
    #[error("invalid unicode escape sequence \\u{0:X}")]
    InvalidScalar(u32),
    /// A byte escape above `0x7F`, which is not UTF-8 on its own.
    #[error("byte escape 0x{0:02X} is not valid UTF-8")]
    NonAsciiByte(u32),
    /// The quote character of the span appeared without a backslash.
    #[error("unescaped {0} inside quoted text")]
    UnescapedQuote(char),
    /// Interpreted spans may not contain a raw line feed.
    #[error("newline inside quoted text")]
    Newline,
    /// The text ended in the middle of an escape sequence.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}
