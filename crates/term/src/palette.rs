//! Color palette: one display letter and one RGB value per color id.

use crate::types::{ColorId, EMPTY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A named tile color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileColor {
    pub name: &'static str,
    pub letter: char,
    pub rgb: Rgb,
}

/// Palette indexed by `color_id - 1`
pub const PALETTE: [TileColor; 8] = [
    TileColor {
        name: "red",
        letter: 'R',
        rgb: Rgb::new(220, 50, 47),
    },
    TileColor {
        name: "blue",
        letter: 'B',
        rgb: Rgb::new(38, 139, 210),
    },
    TileColor {
        name: "green",
        letter: 'G',
        rgb: Rgb::new(133, 153, 0),
    },
    TileColor {
        name: "yellow",
        letter: 'Y',
        rgb: Rgb::new(181, 137, 0),
    },
    TileColor {
        name: "purple",
        letter: 'P',
        rgb: Rgb::new(108, 113, 196),
    },
    TileColor {
        name: "cyan",
        letter: 'C',
        rgb: Rgb::new(42, 161, 152),
    },
    TileColor {
        name: "orange",
        letter: 'O',
        rgb: Rgb::new(203, 75, 22),
    },
    TileColor {
        name: "white",
        letter: 'W',
        rgb: Rgb::new(238, 232, 213),
    },
];

/// Letter shown for an empty cell
pub const EMPTY_LETTER: char = '_';

/// Palette entry for a color id, `None` for [`EMPTY`] or unknown ids
pub fn tile_color(color: ColorId) -> Option<&'static TileColor> {
    if color == EMPTY {
        return None;
    }
    PALETTE.get(color as usize - 1)
}

/// Display letter for a color id
pub fn color_letter(color: ColorId) -> char {
    match tile_color(color) {
        Some(tile) => tile.letter,
        None if color == EMPTY => EMPTY_LETTER,
        None => '?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_COLORS;

    #[test]
    fn palette_covers_every_color() {
        assert_eq!(PALETTE.len(), MAX_COLORS as usize);
        for id in 1..=MAX_COLORS {
            assert!(tile_color(id).is_some());
        }
    }

    #[test]
    fn letters_match_default_colors() {
        let letters: String = (1..=5).map(color_letter).collect();
        assert_eq!(letters, "RBGYP");
        assert_eq!(color_letter(EMPTY), '_');
        assert_eq!(color_letter(MAX_COLORS + 1), '?');
    }

    #[test]
    fn letters_are_distinct() {
        let mut letters: Vec<char> = PALETTE.iter().map(|t| t.letter).collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), PALETTE.len());
    }
}
