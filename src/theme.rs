use termion::color;
use termion::style;

/// Styling roles for the report. Built once and passed to the renderers;
/// every field holds a ready-to-embed terminal escape sequence.
#[derive(Debug, Clone)]
pub struct Palette {
    pub command: String,
    pub bar_filled: String,
    pub bar_unfilled: String,
    pub file: String,
    pub theme: String,
    pub reset: String,
}

impl Palette {
    pub fn new() -> Self {
        let bright_green = format!("{}{}", color::Fg(color::Green), style::Bold);
        Palette {
            command: bright_green.clone(),
            bar_filled: bright_green.clone(),
            bar_unfilled: format!("{}{}", color::Fg(color::Red), style::Faint),
            file: bright_green,
            theme: format!("{}{}", color::Fg(color::Yellow), style::Bold),
            reset: style::Reset.to_string(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_fields_are_escape_sequences() {
        let palette = Palette::new();
        for field in [
            &palette.command,
            &palette.bar_filled,
            &palette.bar_unfilled,
            &palette.file,
            &palette.theme,
            &palette.reset,
        ] {
            assert!(field.starts_with('\x1b'));
        }
    }
}
