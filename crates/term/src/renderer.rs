//! TerminalRenderer: prints a grid to a real terminal.
//!
//! Output is line-oriented (no alternate screen, no raw mode) so it mixes
//! with the shell's prompt. Colored output encodes each cell letter with a
//! foreground color; plain output is identical to [`crate::render`].

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::board_view::{header, row_prefix, underline};
use crate::core::Grid;
use crate::palette::{color_letter, tile_color, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    color: bool,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            color,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Print the grid followed by a newline.
    pub fn draw(&mut self, grid: &Grid) -> Result<()> {
        self.buf.clear();
        if self.color {
            encode_grid_into(grid, &mut self.buf)?;
        } else {
            self.buf.extend_from_slice(crate::render(grid).as_bytes());
        }
        self.buf.push(b'\n');
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a colored grid into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_grid_into(grid: &Grid, out: &mut Vec<u8>) -> Result<()> {
    out.queue(Print(header(grid.width())))?;
    out.queue(Print("\n"))?;
    out.queue(Print(underline(grid.width())))?;

    for row in 0..grid.height() {
        out.queue(Print("\n"))?;
        out.queue(Print(row_prefix(row)))?;

        let mut current: Option<Color> = None;
        for col in 0..grid.width() {
            let color = grid.get(row, col);
            let fg = tile_color(color).map_or(Color::Reset, |t| rgb_to_color(t.rgb));
            if current != Some(fg) {
                out.queue(SetForegroundColor(fg))?;
                current = Some(fg);
            }
            out.queue(Print(color_letter(color)))?;
        }
        out.queue(ResetColor)?;
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
