//! Splitting text around a start and end marker.

use crate::scan::{Split, cut, scan};

/// How a marker is searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Search {
    /// Plain substring search; markers inside quotes match.
    #[default]
    Literal,
    /// [`scan`]: quoted and escaped markers are skipped.
    QuoteAware,
}

impl Search {
    /// Splits `src` at the first `sep` found by this search mode.
    #[must_use]
    pub fn split<'a>(self, src: &'a str, sep: &str) -> Split<'a> {
        match self {
            Search::Literal => cut(src, sep),
            Search::QuoteAware => scan(src, sep),
        }
    }
}

/// Search modes for the two markers of a carve.
///
/// # Default
///
/// Both markers use [`Search::Literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarveOptions {
    /// Search used for the start marker in the whole input.
    pub start: Search,
    /// Search used for the end marker in the text after the start marker.
    pub end: Search,
}

impl CarveOptions {
    /// Literal search for both markers, as used by [`carve`].
    pub const LITERAL: Self = Self {
        start: Search::Literal,
        end: Search::Literal,
    };

    /// Literal start, quote-aware end, as used by [`scan_carve`].
    pub const SCAN_END: Self = Self {
        start: Search::Literal,
        end: Search::QuoteAware,
    };

    /// Quote-aware search for both markers, as used by [`scan_both_carve`].
    pub const SCAN_BOTH: Self = Self {
        start: Search::QuoteAware,
        end: Search::QuoteAware,
    };
}

/// Text before, between and after a pair of markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carved<'a> {
    /// Text before the start marker, or the whole input when not found.
    pub before: &'a str,
    /// Text between the markers.
    pub middle: &'a str,
    /// Text after the end marker.
    pub after: &'a str,
    /// Whether both markers were found.
    pub found: bool,
}

impl<'a> Carved<'a> {
    fn not_found(src: &'a str) -> Self {
        Self {
            before: src,
            middle: "",
            after: "",
            found: false,
        }
    }
}

/// Carves `src` around `start` and `end` using the given search modes.
///
/// The end marker is searched for only after the start marker. When either
/// marker is missing the result is not found and `before` holds all of
/// `src`, even if the start marker had been located.
#[must_use]
pub fn carve_with<'a>(src: &'a str, start: &str, end: &str, options: CarveOptions) -> Carved<'a> {
    let Some((before, rest)) = options.start.split(src, start).pair() else {
        return Carved::not_found(src);
    };
    let Some((middle, after)) = options.end.split(rest, end).pair() else {
        tracing::trace!(start, end, "start marker without end marker");
        return Carved::not_found(src);
    };
    Carved {
        before,
        middle,
        after,
        found: true,
    }
}

/// Carves `src` around `start` and `end` with plain substring search.
///
/// ```rust
/// use quotescan::carve;
///
/// let c = carve("one {{ two more }}", "{{", "}}");
/// assert_eq!((c.before, c.middle, c.after, c.found), ("one ", " two more ", "", true));
///
/// let c = carve("one { nope }", "{{", "}}");
/// assert_eq!((c.before, c.middle, c.after, c.found), ("one { nope }", "", "", false));
/// ```
#[must_use]
pub fn carve<'a>(src: &'a str, start: &str, end: &str) -> Carved<'a> {
    carve_with(src, start, end, CarveOptions::LITERAL)
}

/// Like [`carve`], but the end marker is found with [`scan`].
#[must_use]
pub fn scan_carve<'a>(src: &'a str, start: &str, end: &str) -> Carved<'a> {
    carve_with(src, start, end, CarveOptions::SCAN_END)
}

/// Like [`scan_carve`], but the start marker is found with [`scan`] too.
#[must_use]
pub fn scan_both_carve<'a>(src: &'a str, start: &str, end: &str) -> Carved<'a> {
    carve_with(src, start, end, CarveOptions::SCAN_BOTH)
}
