//! Width math for the renderer. Everything here works on plain text; styles
//! are attached afterwards by the templates, so ANSI codes never skew a
//! measurement.

use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Inner width of a move block, padding included (content is 4 narrower).
pub const BLOCK_WIDTH: usize = 32;
pub const BLOCK_PADDING: usize = 2;
pub const LABEL_WIDTH: usize = 15;

#[derive(Debug, Clone, Copy)]
pub struct Border {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

pub const THICK_BORDER: Border = Border {
    top_left: "┏",
    top_right: "┓",
    bottom_left: "┗",
    bottom_right: "┛",
    horizontal: "━",
    vertical: "┃",
};

pub const ROUNDED_BORDER: Border = Border {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    horizontal: "─",
    vertical: "│",
};

/// A run of text sharing one style.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: String,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: &str) -> Self {
        Self {
            text: text.into(),
            style: style.to_string(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, super::styles::names::PLAIN)
    }
}

pub type Line = Vec<Segment>;

/// Pre-computed box, ready for the block template.
#[derive(Debug, Serialize)]
pub struct BoxData {
    pub top: String,
    pub bottom: String,
    pub side: String,
    pub border_style: String,
    pub lines: Vec<Line>,
}

pub fn line_width(line: &[Segment]) -> usize {
    line.iter().map(|s| s.text.width()).sum()
}

/// Surround content lines with padding and a border of `inner_width` columns.
pub fn boxed(
    content: Vec<Line>,
    inner_width: usize,
    padding: usize,
    border: Border,
    border_style: &str,
) -> BoxData {
    let content_width = inner_width.saturating_sub(padding * 2);
    let blank = vec![Segment::plain(" ".repeat(inner_width))];

    let mut lines = Vec::with_capacity(content.len() + 2);
    lines.push(blank.clone());
    for mut line in content {
        let fill = content_width.saturating_sub(line_width(&line));
        line.insert(0, Segment::plain(" ".repeat(padding)));
        line.push(Segment::plain(" ".repeat(fill + padding)));
        lines.push(line);
    }
    lines.push(blank);

    let rule = border.horizontal.repeat(inner_width);
    BoxData {
        top: format!("{}{}{}", border.top_left, rule, border.top_right),
        bottom: format!("{}{}{}", border.bottom_left, rule, border.bottom_right),
        side: border.vertical.to_string(),
        border_style: border_style.to_string(),
        lines,
    }
}

/// Word-wrap to `max_width` columns, keeping the text's own line breaks.
/// Words longer than the width are split.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if current.is_empty() {
                word.width()
            } else {
                current.width() + 1 + word.width()
            };
            if needed <= max_width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                continue;
            }
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            let mut pieces = split_to_width(word, max_width);
            current = pieces.pop().unwrap_or_default();
            out.extend(pieces);
        }
        out.push(current);
    }
    out
}

fn split_to_width(word: &str, max_width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if current_width + w > max_width && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += w;
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Right-pad with spaces to `width` display columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

/// `thunder-punch` -> `Thunder Punch`
pub fn title_case(name: &str) -> String {
    name.split(['-', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("thunder-punch"), "Thunder Punch");
        assert_eq!(title_case("STENCH"), "Stench");
        assert_eq!(title_case("ten-million-volt-thunderbolt"), "Ten Million Volt Thunderbolt");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text(
            "The target is scorched with an intense blast of fire. This may also leave the target with a burn.",
            28,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width() <= 28, "{:?} too wide", line);
        }
        assert_eq!(lines[0], "The target is scorched with");
    }

    #[test]
    fn test_wrap_text_keeps_hard_breaks() {
        assert_eq!(wrap_text("one\ntwo", 28), vec!["one", "two"]);
    }

    #[test]
    fn test_wrap_text_empty_is_single_blank_line() {
        assert_eq!(wrap_text("", 28), vec![""]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_boxed_lines_have_equal_width() {
        let data = boxed(
            vec![
                vec![Segment::plain("Flamethrower")],
                vec![Segment::plain("Type"), Segment::plain("|"), Segment::plain("Fire")],
            ],
            BLOCK_WIDTH,
            BLOCK_PADDING,
            THICK_BORDER,
            "border",
        );
        assert_eq!(data.lines.len(), 4);
        for line in &data.lines {
            assert_eq!(line_width(line), BLOCK_WIDTH);
        }
        assert_eq!(data.top.width(), BLOCK_WIDTH + 2);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("PP", 5), "PP   ");
        assert_eq!(pad_to_width("Effect Chance", 4), "Effect Chance");
    }
}
