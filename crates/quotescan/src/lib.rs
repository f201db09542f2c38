//! Quote- and escape-aware scanning of delimiters inside strings.
//!
//! The core operation is [`scan`]: a single left-to-right pass that finds the
//! first occurrence of a separator which is neither inside a quoted span nor
//! escaped with a backslash. The carve family ([`carve`], [`scan_carve`],
//! [`scan_both_carve`]) composes two searches to split text around a start
//! and end marker, e.g. to locate `{{ ... }}` template actions whose bodies
//! contain `}}` inside string literals.
//!
//! ```rust
//! use quotescan::{scan, scan_carve};
//!
//! let split = scan(r#""a }} b" }} rest"#, "}}");
//! assert!(split.found);
//! assert_eq!(split.before, r#""a }} b" "#);
//! assert_eq!(split.after, " rest");
//!
//! let carved = scan_carve(r#"x {{ "}}" }} y"#, "{{", "}}");
//! assert_eq!(carved.middle, r#" "}}" "#);
//! ```
//!
//! Every result follows one convention: when nothing is found, `before`
//! holds the entire input and the other text fields are empty.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod carve;
mod cursor;
mod error;
mod quotes;
mod scan;
mod state;
mod tmpl;
mod unescape;

#[cfg(test)]
mod tests;

pub use carve::{CarveOptions, Carved, Search, carve, carve_with, scan_both_carve, scan_carve};
pub use error::UnescapeError;
pub use quotes::{
    FANCY_QUOTES, QuotePair, bookend_chars, fancy_pair, is_any_quote_char, is_fancy_quote_char,
    is_quote_char, is_quoted, is_quoted_fancy, trim_quotes,
};
pub use scan::{QuotedSpan, Split, cut, scan, scan_quote};
pub use tmpl::{prune_tmpl_actions, trim_tmpl_var};
pub use unescape::unescape;
