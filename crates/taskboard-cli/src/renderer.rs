//! Terminal rendering for markdown output.
//!
//! Uses termimad for styled output, or prints the markdown as-is when color
//! is disabled. The palette follows the stored dark mode preference.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    dark_mode: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool, dark_mode: bool) -> Self {
        let mut skin = if dark_mode {
            MadSkin::default_dark()
        } else {
            MadSkin::default_light()
        };

        skin.set_headers_fg(header_color(dark_mode));
        if dark_mode {
            skin.bold.set_fg(Color::Yellow);
            skin.italic.set_fg(Color::Magenta);
            skin.strikeout.set_fg(Color::DarkGrey);
        } else {
            skin.bold.set_fg(Color::DarkYellow);
            skin.italic.set_fg(Color::DarkMagenta);
            skin.strikeout.set_fg(Color::Grey);
        }
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self {
            rich_enabled,
            dark_mode,
            skin,
        }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            let header = header_escape(self.dark_mode);
            for line in markdown.lines() {
                // Headers keep their hash marks.
                if line.starts_with('#') {
                    println!("{header}{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true, false)
    }
}

fn header_color(dark_mode: bool) -> Color {
    if dark_mode {
        Color::Cyan
    } else {
        Color::Blue
    }
}

fn header_escape(dark_mode: bool) -> &'static str {
    if dark_mode {
        "\x1b[36m"
    } else {
        "\x1b[34m"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false, false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Heading\n").is_ok());
    }

    #[test]
    fn test_dark_renderer() {
        let renderer = TerminalRenderer::new(true, true);
        assert!(renderer.rich_enabled);
        assert!(renderer.dark_mode);
        assert_eq!(header_escape(true), "\x1b[36m");
    }

    #[test]
    fn test_default_is_rich_light() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
        assert!(!renderer.dark_mode);
        assert_eq!(header_color(false), Color::Blue);
    }
}
