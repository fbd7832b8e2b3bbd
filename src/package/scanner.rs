//! # Markup Scanner
//!
//! The index document is not parsed as XML. Instead, a handful of fixed
//! shapes are located by plain substring search:
//!
//! - comments, `<!-- ... -->`,
//! - package blocks, from `<package` to `</package>`,
//! - delimited values such as `name="..."` or
//!   `<description>...</description>`,
//! - archive URLs under the snarf root.
//!
//! Values and URLs are the shortest match starting at the first position
//! that matches at all, and never span a line break.

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";
const PACKAGE_OPEN: &str = "<package";
const PACKAGE_CLOSE: &str = "</package>";
const ARCHIVE_SUFFIX: &str = ".zip";

/// Removes every `<!-- ... -->` range from `text`.
///
/// Removal repeats until no `<!--` is left, so a marker formed by joining
/// the text around a removed comment is removed as well. A comment with no
/// closing `-->` removes everything from its opening marker to the end.
pub fn strip_comments(text: &str) -> String {
    let mut text = text.to_string();
    while let Some(start) = text.find(COMMENT_OPEN) {
        let body = start + COMMENT_OPEN.len();
        match text[body..].find(COMMENT_CLOSE) {
            Some(offset) => text.replace_range(start..body + offset + COMMENT_CLOSE.len(), ""),
            None => {
                text.truncate(start);
                break;
            }
        }
    }
    text
}

/// Splits `text` into package blocks.
///
/// Each block runs from a `<package` up to, not including, the first
/// `</package>` after it; scanning resumes after that closing tag, so
/// blocks never overlap. Blocks are not expected to nest. A `</package>`
/// with no opening tag before it is ignored, and a trailing `<package`
/// with no closing tag yields nothing.
pub fn package_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut from = 0;
    while let Some(offset) = text[from..].find(PACKAGE_OPEN) {
        let open = from + offset;
        let Some(length) = text[open..].find(PACKAGE_CLOSE) else {
            break;
        };
        blocks.push(&text[open..open + length]);
        from = open + length + PACKAGE_CLOSE.len();
    }
    blocks
}

/// Finds the first value enclosed by `open` and `close` on one line.
///
/// Each occurrence of `open` is tried in order; the value ends at the first
/// `close` after it on the same line.
pub fn delimited<'a>(text: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let step = open.chars().next().map_or(1, char::len_utf8);
    let mut from = 0;
    while let Some(offset) = text[from..].find(open) {
        let at = from + offset;
        let rest = first_line(&text[at + open.len()..]);
        if let Some(end) = rest.find(close) {
            return Some(&rest[..end]);
        }
        from = at + step;
    }
    None
}

/// Finds the first archive URL under `root` in `text`.
///
/// A match is `http` or `https`, then `://`, the host and path of `root`
/// taken literally, a `/`, and the shortest run of characters on the same
/// line ending in `.zip`. The scheme of `root` itself is ignored.
pub fn archive_url<'a>(text: &'a str, root: &str) -> Option<&'a str> {
    let location = root.split_once("://").map_or(root, |(_, location)| location);
    let marker = format!("://{}/", location.trim_end_matches('/'));

    let mut from = 0;
    while let Some(offset) = text[from..].find(&marker) {
        let at = from + offset;
        from = at + 1;

        let head = &text[..at];
        let start = if head.ends_with("https") {
            at - "https".len()
        } else if head.ends_with("http") {
            at - "http".len()
        } else {
            continue;
        };

        let path_start = at + marker.len();
        if let Some(end) = first_line(&text[path_start..]).find(ARCHIVE_SUFFIX) {
            return Some(&text[start..path_start + end + ARCHIVE_SUFFIX.len()]);
        }
    }
    None
}

fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or(text)
}
