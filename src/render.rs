use lazy_static::lazy_static;
use regex::Regex;

use crate::theme::Palette;

lazy_static! {
    // ESC [ , parameter bytes, intermediate bytes, one final byte.
    static ref ANSI_ESCAPE: Regex = Regex::new(r"\x1B\[[0-?]*[ -/]*[@-~]").unwrap();
}

/// Removes terminal escape sequences, leaving only the visible characters.
pub fn strip_ansi_codes(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Truncates `text` to at most `max_visible_length` visible characters,
/// appending `...` when anything visible was cut. Escape sequences are
/// copied through whole and never count against the budget.
pub fn truncate_text(text: &str, max_visible_length: usize) -> String {
    let mut result = String::with_capacity(text.len());
    let mut visible_length = 0;
    let mut truncated = false;
    let mut escapes = ANSI_ESCAPE.find_iter(text).peekable();
    let mut index = 0;

    while let Some(ch) = text[index..].chars().next() {
        if let Some(m) = escapes.peek() {
            if m.start() == index {
                result.push_str(m.as_str());
                index = m.end();
                escapes.next();
                continue;
            }
        }
        if visible_length < max_visible_length {
            result.push(ch);
            visible_length += 1;
            index += ch.len_utf8();
        } else {
            truncated = true;
            break;
        }
    }

    if truncated {
        result.push_str("...");
    }
    result
}

/// Scales a percentage onto a fixed-length bar. The +7 floor keeps small
/// shares visually non-trivial; the filled run is capped at `bar_length`.
pub fn create_scaled_bar(percentage: f64, bar_length: usize, palette: &Palette) -> String {
    let filled_length =
        (((bar_length as f64 * percentage / 100.0).round() as usize) + 7).min(bar_length);
    let filled_part = format!(
        "{}{}{}",
        palette.bar_filled,
        "█".repeat(filled_length),
        palette.reset
    );
    let unfilled_part = format!(
        "{}{}{}",
        palette.bar_unfilled,
        "-".repeat(bar_length - filled_length),
        palette.reset
    );
    format!("{}{}", filled_part, unfilled_part)
}

/// Truncates to `width` visible characters, colors, and left-justifies.
pub fn pad_text(text: &str, color: &str, width: usize, palette: &Palette) -> String {
    let text = truncate_text(text, width);
    format!("{}{:<width$}{}", color, text, palette.reset, width = width)
}

/// Frames content lines into a bordered box of fixed total width. Blocks
/// are split on line breaks first; each row is right-trimmed, truncated
/// to the interior width, then padded so the frame stays rectangular.
pub fn create_outer_box(content_lines: &[String], width: usize, palette: &Palette) -> Vec<String> {
    let border_top = format!(
        "{}┌┌{}┐┐{}",
        palette.theme,
        "─".repeat(width - 2),
        palette.reset
    );
    let border_bottom = format!(
        "{}└└{}┘┘{}",
        palette.theme,
        "─".repeat(width - 2),
        palette.reset
    );
    let content_width = width - 4;

    let mut boxed_content = vec![border_top];
    for line in content_lines {
        for subline in line.split('\n') {
            let subline = truncate_text(subline.trim_end(), content_width);
            let visible_length = strip_ansi_codes(&subline).chars().count();
            let padding = " ".repeat(content_width.saturating_sub(visible_length));
            boxed_content.push(format!(
                "{}││ {}{}{} ││{}",
                palette.theme, subline, padding, palette.theme, palette.reset
            ));
        }
    }
    boxed_content.push(border_bottom);
    boxed_content
}
