//! Comment stripping for C-like source text
//!
//! [`strip_comments`] wraps an iterator of raw lines and lazily yields the
//! same lines with `/* ... */` and `// ...` comment text removed. Block
//! comments may span lines; the only state carried between lines is whether
//! the scan is currently inside a block comment.
//!
//! String literals are not tracked, so a `//` inside quotes starts a comment.

const LINE_COMMENT: &str = "//";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// Comment marker found outside a block comment
#[derive(Debug, Clone, Copy, PartialEq)]
enum Marker {
    Line,
    BlockOpen,
}

/// Lazily strip comments from a sequence of lines.
///
/// Lines that are empty or whitespace-only after stripping are dropped. An
/// unterminated block comment swallows the rest of the input without error.
///
/// ```
/// use incgraph_c::lexer::strip_comments;
///
/// let source = "int a; /* start\n#include <hidden.h>\nend */ int b; // tail\n";
/// let lines: Vec<String> = strip_comments(source.lines()).collect();
/// assert_eq!(lines, vec!["int a; ", " int b; "]);
/// ```
pub fn strip_comments<I, S>(lines: I) -> StripComments<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    StripComments::new(lines.into_iter())
}

/// Iterator returned by [`strip_comments`]
#[derive(Debug, Clone)]
pub struct StripComments<I> {
    lines: I,
    in_block: bool,
}

impl<I> StripComments<I> {
    /// Wrap an iterator of raw lines
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            in_block: false,
        }
    }

    /// Whether the last consumed line left a block comment open
    pub fn in_block_comment(&self) -> bool {
        self.in_block
    }
}

impl<I, S> Iterator for StripComments<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for line in self.lines.by_ref() {
            let stripped = strip_line(line.as_ref(), &mut self.in_block);
            if !stripped.trim().is_empty() {
                return Some(stripped);
            }
        }
        None
    }
}

/// Remove comment text from one line, updating the block comment state.
fn strip_line(line: &str, in_block: &mut bool) -> String {
    let mut kept = String::with_capacity(line.len());
    let mut rest = line;

    loop {
        if *in_block {
            // Only text after the terminator counts; `//` inside the block is inert
            match rest.find(BLOCK_CLOSE) {
                Some(end) => {
                    rest = &rest[end + BLOCK_CLOSE.len()..];
                    *in_block = false;
                }
                None => break,
            }
        } else {
            match next_marker(rest) {
                Some((pos, Marker::Line)) => {
                    kept.push_str(&rest[..pos]);
                    break;
                }
                Some((pos, Marker::BlockOpen)) => {
                    kept.push_str(&rest[..pos]);
                    rest = &rest[pos + BLOCK_OPEN.len()..];
                    *in_block = true;
                }
                None => {
                    kept.push_str(rest);
                    break;
                }
            }
        }
    }

    kept
}

/// Earliest comment marker in `text`
fn next_marker(text: &str) -> Option<(usize, Marker)> {
    match (text.find(LINE_COMMENT), text.find(BLOCK_OPEN)) {
        (Some(line), Some(block)) if line < block => Some((line, Marker::Line)),
        (_, Some(block)) => Some((block, Marker::BlockOpen)),
        (Some(line), None) => Some((line, Marker::Line)),
        (None, None) => None,
    }
}
