//! RNG module - color sources for board fill and refill
//!
//! Every random color the engine draws goes through [`ColorSource`], so a
//! seeded source makes initial boards, refills and whole cascades replayable.
//!
//! Provides a simple LCG for normal play and a scripted source for tests.

use crate::types::{ColorId, EMPTY};

/// Supplier of fresh cell colors
pub trait ColorSource {
    /// Draw one color in `1..=n_colors`
    fn next_color(&mut self, n_colors: ColorId) -> ColorId;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits cycle quickly; use the high half.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Current internal state (reseeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ColorSource for SimpleRng {
    fn next_color(&mut self, n_colors: ColorId) -> ColorId {
        1 + self.next_range(n_colors as u32) as ColorId
    }
}

/// Replays a fixed list of colors, wrapping around at the end
///
/// Used to pin down refills so cascades can be asserted exactly. Every
/// scripted color must be a real color for the grid it refills.
#[derive(Debug, Clone)]
pub struct ScriptedColors {
    colors: Vec<ColorId>,
    next: usize,
    drawn: usize,
}

impl ScriptedColors {
    /// Create a source from a non-empty color list
    ///
    /// # Panics
    ///
    /// Panics if `colors` is empty.
    pub fn new(colors: Vec<ColorId>) -> Self {
        assert!(!colors.is_empty(), "scripted color list must not be empty");
        Self {
            colors,
            next: 0,
            drawn: 0,
        }
    }

    /// Number of colors handed out so far
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl ColorSource for ScriptedColors {
    /// # Panics
    ///
    /// Panics if the scripted color is [`EMPTY`] or above `n_colors`.
    fn next_color(&mut self, n_colors: ColorId) -> ColorId {
        let color = self.colors[self.next];
        assert!(
            color != EMPTY && color <= n_colors,
            "scripted color {} outside 1..={}",
            color,
            n_colors
        );
        self.next = (self.next + 1) % self.colors.len();
        self.drawn += 1;
        color
    }
}

impl<S: ColorSource + ?Sized> ColorSource for &mut S {
    fn next_color(&mut self, n_colors: ColorId) -> ColorId {
        (**self).next_color(n_colors)
    }
}
