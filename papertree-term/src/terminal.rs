//! Terminal setup, teardown and drawing.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor, event, execute, queue,
    style::{
        Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};
use papertree::{Color, Rgb, Row};
use unicode_width::UnicodeWidthChar;

/// Raw-mode alternate screen with mouse capture. Restores the terminal on
/// drop and on panic.
pub struct Screen {
    stdout: Stdout,
    /// Color translucent theme colors are blended over.
    base: Rgb,
}

impl Screen {
    pub fn new(base: Rgb) -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore();
            original_hook(info);
        }));

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout, base })
    }

    pub fn draw(&mut self, rows: &[Row], status: &str) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let tree_height = usize::from(height.saturating_sub(1));

        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;

        for (y, row) in rows.iter().take(tree_height).enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            let mut used = 0;
            for span in &row.spans {
                let (text, cells) = clip(&span.text, usize::from(width) - used);
                let fg = resolve(span.foreground, self.base);
                let bg = span.background.map_or(CtColor::Reset, |c| resolve(c, self.base));
                queue!(
                    self.stdout,
                    SetForegroundColor(fg),
                    SetBackgroundColor(bg),
                    Print(text)
                )?;
                used += cells;
            }
            queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        }

        let (status, _) = clip(status, usize::from(width));
        queue!(
            self.stdout,
            cursor::MoveTo(0, height.saturating_sub(1)),
            SetAttribute(Attribute::Dim),
            Print(status),
            SetAttribute(Attribute::Reset)
        )?;

        self.stdout.flush()
    }
}

/// Terminal color for a theme color, blending translucent ones over `base`.
fn resolve(color: Color, base: Rgb) -> CtColor {
    if color.is_inherit() {
        return CtColor::Reset;
    }
    let Rgb { r, g, b } = color.composite_over(base);
    CtColor::Rgb { r, g, b }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = restore();
    }
}

fn restore() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(
        io::stdout(),
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )
}

/// Longest prefix of `text` fitting in `max` cells, with its width.
fn clip(text: &str, max: usize) -> (&str, usize) {
    let mut used = 0;
    for (index, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            return (&text[..index], used);
        }
        used += w;
    }
    (text, used)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip() {
        assert_eq!(clip("hello", 10), ("hello", 5));
        assert_eq!(clip("hello", 3), ("hel", 3));
        assert_eq!(clip("📁 x", 1), ("", 0));
        assert_eq!(clip("📁 x", 3), ("📁 ", 3));
        assert_eq!(clip("", 0), ("", 0));
    }

    #[test]
    fn test_resolve() {
        let base = Rgb::new(0, 0, 0);
        assert_eq!(resolve(Color::Inherit, base), CtColor::Reset);
        assert_eq!(
            resolve(Color::rgb(1, 2, 3), base),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
        assert_eq!(resolve(Color::rgba(9, 9, 9, 0.0), base), CtColor::Rgb { r: 0, g: 0, b: 0 });
    }
}
