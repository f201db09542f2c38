//! Helpers for text containing `{{ ... }}` template actions.

use alloc::string::String;

use crate::carve::scan_carve;

const ACTION_START: &str = "{{";
const ACTION_END: &str = "}}";

/// Strips every leading `$` and `.` from a template variable name.
///
/// ```rust
/// use quotescan::trim_tmpl_var;
///
/// assert_eq!(trim_tmpl_var("$.Values"), "Values");
/// assert_eq!(trim_tmpl_var("$"), "");
/// ```
#[must_use]
pub fn trim_tmpl_var(name: &str) -> &str {
    name.trim_start_matches(['$', '.'])
}

/// `{{-` followed by whitespace trims the text before an action.
fn trims_left(action: &str) -> bool {
    action
        .strip_prefix('-')
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

/// Whitespace followed by `-}}` trims the text after an action.
fn trims_right(action: &str) -> bool {
    action
        .strip_suffix('-')
        .is_some_and(|rest| rest.ends_with(char::is_whitespace))
}

fn is_word(c: Option<char>) -> bool {
    c.is_some_and(char::is_alphanumeric)
}

/// Removes every `{{ ... }}` action from `text`.
///
/// An action ends at the first `}}` outside of a quoted string, so string
/// literals inside actions may contain braces. The `{{-` and `-}}` trim
/// markers also remove the whitespace on their side of the action. Words
/// that would otherwise run together are kept apart by one space, unless a
/// trim marker asked for them to be joined. An action without a closing `}}`
/// is left as is.
///
/// ```rust
/// use quotescan::prune_tmpl_actions;
///
/// let text = "{{ if .Ok }}stuff{{ else }}moar stuff{{ end }}.";
/// assert_eq!(prune_tmpl_actions(text), "stuff moar stuff.");
/// ```
#[must_use]
pub fn prune_tmpl_actions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    loop {
        let carved = scan_carve(rest, ACTION_START, ACTION_END);
        if !carved.found {
            if rest.contains(ACTION_START) {
                tracing::trace!(rest, "unterminated template action");
            }
            out.push_str(rest);
            return out;
        }

        let (left, right) = (trims_left(carved.middle), trims_right(carved.middle));
        let before = if left {
            carved.before.trim_end()
        } else {
            carved.before
        };
        let after = if right {
            carved.after.trim_start()
        } else {
            carved.after
        };

        out.push_str(before);
        if !left && !right && is_word(out.chars().next_back()) && is_word(after.chars().next()) {
            out.push(' ');
        }
        rest = after;
    }
}
