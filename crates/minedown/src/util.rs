//! Lexical helpers shared by the scanner and the definition parser.
//!
//! All indices are byte offsets into UTF-8 text. The characters these helpers
//! look for are ASCII, so a byte match is always a character match.

use unicode_segmentation::UnicodeSegmentation;

/// Check if the character at `index` is escaped, i.e. preceded by an odd
/// number of backslashes.
///
/// # Examples
///
/// ```
/// use minedown::util::is_escaped;
///
/// assert!(is_escaped(r"\[", 1));
/// assert!(!is_escaped(r"\\[", 2));
/// ```
pub fn is_escaped(input: &str, index: usize) -> bool {
    let end = index.min(input.len());
    let backslashes = input.as_bytes()[..end]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    backslashes % 2 == 1
}

/// Check if the character at `index` is immediately repeated.
pub fn is_double(input: &str, index: usize) -> bool {
    let Some(rest) = input.get(index..) else {
        return false;
    };
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) => first == second,
        _ => false,
    }
}

/// Find the first occurrence of `pattern` at or after `from` whose first
/// character is not escaped.
///
/// # Examples
///
/// ```
/// use minedown::util::index_of_not_escaped;
///
/// assert_eq!(index_of_not_escaped(r"a\](b](c", "](", 0), Some(5));
/// assert_eq!(index_of_not_escaped("abc", "](", 0), None);
/// ```
pub fn index_of_not_escaped(input: &str, pattern: &str, from: usize) -> Option<usize> {
    let step = pattern.chars().next().map_or(1, char::len_utf8);
    let mut start = from;
    while start <= input.len() {
        let found = start + input.get(start..)?.find(pattern)?;
        if !is_escaped(input, found) {
            return Some(found);
        }
        start = found + step;
    }
    None
}

fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Byte offset of the `n`th grapheme, or the text length past the end.
fn grapheme_byte_index(text: &str, n: usize) -> usize {
    text.grapheme_indices(true)
        .nth(n)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Greedily wrap `text` at spaces so no line is wider than `width` graphemes.
///
/// Text that already contains a newline, or that fits, is returned as is.
/// A word too long for the remaining room is hard-split only when the room
/// is more than a quarter of the width and the word is longer than
/// `min(2 * room, width / 4)`; otherwise it moves to the next line. Words
/// longer than a whole line are cut into `width`-sized pieces.
///
/// # Examples
///
/// ```
/// use minedown::util::wrap;
///
/// assert_eq!(wrap("a bb ccc dddd", 5), "a bb\nccc\ndddd");
/// assert_eq!(wrap("short", 60), "short");
/// ```
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 || text.contains('\n') || grapheme_count(text) <= width {
        return text.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split(' ') {
        let word_len = grapheme_count(word);

        if current_len + word_len + 1 <= width {
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
            continue;
        }

        let separator = usize::from(current_len > 0);
        let room = width.saturating_sub(current_len + separator);
        let mut split_at = 0;
        if room > width / 4 && word_len > usize::min(room * 2, width / 4) {
            split_at = grapheme_byte_index(word, room);
            if separator == 1 {
                current.push(' ');
            }
            current.push_str(&word[..split_at]);
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        let mut rest = &word[split_at..];
        while grapheme_count(rest) >= width {
            let cut = grapheme_byte_index(rest, width);
            lines.push(rest[..cut].to_string());
            rest = &rest[cut..];
        }
        current = rest.to_string();
        current_len = grapheme_count(rest);
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines.join("\n")
}
