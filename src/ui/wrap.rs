//! Single-line wrapping that keeps colour escape sequences intact.
//!
//! Wrapping runs on the colour-stripped text; the escape sequences are then
//! put back at their original character offsets. Sequences that would land
//! inside or after the truncation placeholder are dropped, and a reset is
//! inserted right before the placeholder.

use super::colors::{remove_colors, ANSI_ECMA_REGEXP};

pub const PLACEHOLDER: &str = "...";

const WHITESPACE: [char; 6] = ['\t', '\n', '\x0b', '\x0c', '\r', ' '];

fn is_wrap_whitespace(c: char) -> bool {
    WHITESPACE.contains(&c)
}

/// Split into alternating runs of words and whitespace
fn chunks(text: &str) -> Vec<Vec<char>> {
    let mut chunks: Vec<Vec<char>> = Vec::new();
    let mut previous: Option<bool> = None;

    for c in text.chars() {
        let whitespace = is_wrap_whitespace(c);
        match chunks.last_mut() {
            Some(chunk) if previous == Some(whitespace) => chunk.push(c),
            _ => chunks.push(vec![c]),
        }
        previous = Some(whitespace);
    }

    chunks
}

fn is_blank(chunk: &[char]) -> bool {
    chunk.iter().all(|c| c.is_whitespace())
}

/// Fit `text` on one line of at most `width` characters.
///
/// Greedy chunk filling; words longer than the line are broken; when text
/// remains, trailing chunks are dropped until `placeholder` fits after a
/// non-blank chunk. Whitespace is kept as-is.
pub fn fill_single_line(text: &str, width: usize, placeholder: &str) -> String {
    let placeholder_len = placeholder.chars().count();
    let text_len = text.chars().count();

    if text_len <= width {
        return text.to_string();
    }

    if width < placeholder.trim_start().chars().count() {
        return text.chars().take(width).collect();
    }

    // Reversed so the next chunk is at the end.
    let mut remaining: Vec<Vec<char>> = chunks(text);
    remaining.reverse();

    let mut line: Vec<Vec<char>> = Vec::new();
    let mut line_len = 0;

    while let Some(chunk) = remaining.last() {
        if line_len + chunk.len() <= width {
            line_len += chunk.len();
            if let Some(chunk) = remaining.pop() {
                line.push(chunk);
            }
        } else {
            break;
        }
    }

    if let Some(chunk) = remaining.last_mut() {
        if chunk.len() > width {
            let space_left = if width < 1 { 1 } else { width - line_len };
            let tail = chunk.split_off(space_left.min(chunk.len()));
            let head = std::mem::replace(chunk, tail);
            line_len += head.len();
            line.push(head);
        }
    }

    if remaining.is_empty() && line_len <= width {
        return line.concat().into_iter().collect();
    }

    while let Some(last) = line.last() {
        if !is_blank(last) && line_len + placeholder_len <= width {
            let mut result: String = line.concat().into_iter().collect();
            result.push_str(placeholder);
            return result;
        }
        line_len -= last.len();
        line.pop();
    }

    placeholder.trim_start().to_string()
}

/// Wrap a possibly coloured line to `width` visible characters.
///
/// `width` of `None` means unlimited. `reset` is the sequence inserted in
/// front of the placeholder when the line was truncated (empty when colour
/// is disabled).
pub fn wrap_colored_line(entry: &str, width: Option<usize>, reset: &str) -> String {
    let width = width.unwrap_or(usize::MAX);
    let plain = remove_colors(entry);
    let mut wrapped: Vec<char> = fill_single_line(&plain, width, PLACEHOLDER)
        .chars()
        .collect();

    let placeholder_len = PLACEHOLDER.chars().count();
    let placeholder_offset = if wrapped.ends_with(&PLACEHOLDER.chars().collect::<Vec<_>>()) {
        placeholder_len
    } else {
        0
    };

    for color_match in ANSI_ECMA_REGEXP.find_iter(entry) {
        let match_index = entry[..color_match.start()].chars().count();
        if match_index <= wrapped.len() - placeholder_offset {
            wrapped.splice(match_index..match_index, color_match.as_str().chars());
        }
    }

    if placeholder_offset > 0 {
        let at = wrapped.len() - placeholder_len;
        wrapped.splice(at..at, reset.chars());
    }

    wrapped.into_iter().collect()
}
