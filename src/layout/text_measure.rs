//! Text Measurement
//!
//! Utilities for measuring text dimensions in terminal cells.
//!
//! Widths come from `unicode-width`: ASCII is one cell, CJK and most emoji
//! are two, combining marks and control characters are zero.
//!
//! The layout measure function and the painter both call [`wrap_text`], so a
//! text node is always painted on exactly the lines it was measured with.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a single character.
#[inline]
pub fn char_width(c: char) -> u16 {
    UnicodeWidthChar::width(c).unwrap_or(0) as u16
}

/// Display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

/// Width of the widest word: the narrowest a text can get without
/// breaking inside a word.
pub fn min_content_width(text: &str) -> u16 {
    text.split([' ', '\n'])
        .map(string_width)
        .max()
        .unwrap_or(0)
}

/// Word-wrap text to a given width.
///
/// Breaks on spaces and explicit newlines. A single word wider than `width`
/// is broken between characters. Runs of spaces collapse to one.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0u16;

        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            let word_width = string_width(word);

            if line_width > 0 && line_width.saturating_add(1).saturating_add(word_width) <= width {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
                continue;
            }

            if line_width > 0 {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
                continue;
            }

            for c in word.chars() {
                let w = char_width(c);
                if line_width > 0 && line_width + w > width {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += w;
            }
        }

        lines.push(line);
    }

    lines
}

/// Number of lines the text occupies when wrapped to `available_width`.
pub fn measure_text_height(text: &str, available_width: u16) -> u16 {
    wrap_text(text, available_width).len().min(u16::MAX as usize) as u16
}

/// Truncate text to fit within a given width, ending in an ellipsis.
pub fn truncate_text(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }

    if string_width(text) <= width {
        return text.to_string();
    }

    let target_width = width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0u16;

    for c in text.chars() {
        let w = char_width(c);
        if current_width + w > target_width {
            break;
        }
        result.push(c);
        current_width += w;
    }

    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_width() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("11/2025 – 12/2025"), 17);
        assert_eq!(string_width("日本"), 4);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap_text("Supports both Tamil and English languages.", 16);
        assert_eq!(lines, ["Supports both", "Tamil and", "English", "languages."]);
    }

    #[test]
    fn test_wrap_hard_breaks_long_word() {
        let lines = wrap_text("vengateshnavaneethaperumal", 10);
        assert_eq!(lines, ["vengateshn", "avaneethap", "erumal"]);
    }

    #[test]
    fn test_wrap_newlines() {
        assert_eq!(wrap_text("a\nb", 10), ["a", "b"]);
        assert_eq!(wrap_text("", 10).len(), 0);
    }

    #[test]
    fn test_measure_matches_wrap() {
        let text = "Adaptable and fast-learning individual with strong active listening";
        for width in [8, 20, 40, 200] {
            assert_eq!(
                measure_text_height(text, width) as usize,
                wrap_text(text, width).len()
            );
        }
    }

    #[test]
    fn test_min_content_width() {
        assert_eq!(min_content_width("AI Chatbot"), 7);
        assert_eq!(min_content_width(""), 0);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 6), "hello…");
        assert_eq!(truncate_text("hello", 4), "hel…");
        assert_eq!(truncate_text("", 5), "");
    }
}
