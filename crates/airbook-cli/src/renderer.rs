//! Terminal output for the markdown produced by the core display types.

use anyhow::Result;
use termimad::{crossterm::style::Color, Alignment, MadSkin};

/// Prints markdown styled through a termimad skin, or verbatim.
pub struct TerminalRenderer {
    skin: Option<MadSkin>,
}

impl TerminalRenderer {
    /// Creates a renderer; `rich` selects styled output.
    pub fn new(rich: bool) -> Self {
        Self {
            skin: rich.then(airbook_skin),
        }
    }

    /// Prints `markdown` to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        match &self.skin {
            Some(skin) => skin.print_text(markdown),
            None => print!("{markdown}"),
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Cyan left-aligned headings, yellow flight numbers, grey comments.
fn airbook_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.set_headers_fg(Color::Cyan);
    for header in &mut skin.headers {
        header.align = Alignment::Left;
    }
    skin.bold.set_fg(Color::Yellow);
    skin.italic.set_fg(Color::DarkGrey);
    skin
}
