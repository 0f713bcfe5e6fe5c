//! Include directive extraction
//!
//! Works on comment-free lines (see [`crate::lexer`]). Any line containing
//! `#include` contributes the text between its first `<`...`>` pair, or, when
//! there is no such pair, between its first two double quotes. Lines with
//! neither pair are skipped.

use crate::lexer::strip_comments;
use std::collections::BTreeSet;

/// Marker selecting include directive lines
pub const INCLUDE_MARKER: &str = "#include";

/// Extract the distinct include targets named by comment-free `lines`.
///
/// Duplicate directives collapse into one entry.
pub fn extract_includes<I, S>(lines: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| include_target(line.as_ref()).map(str::to_string))
        .collect()
}

/// Strip comments from raw source `lines`, then extract their include targets.
pub fn scan_includes<I, S>(lines: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extract_includes(strip_comments(lines))
}

/// The include target named on one line, if the line is an include directive.
///
/// Angle brackets take precedence over quotes. The target is trimmed; an empty
/// target counts as no target.
pub fn include_target(line: &str) -> Option<&str> {
    if !line.contains(INCLUDE_MARKER) {
        return None;
    }

    let target = take_inside(line, '<', '>').or_else(|| take_inside(line, '"', '"'))?;
    let target = target.trim();
    (!target.is_empty()).then_some(target)
}

/// Text between the first `open` and the next `close` after it
fn take_inside(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)? + open.len_utf8();
    let rest = &text[start..];
    let end = rest.find(close)?;
    Some(&rest[..end])
}
