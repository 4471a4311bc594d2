//! Terminal rendering module.
//!
//! A read-only projection of a grid for display. The engine exposes cell
//! lookups only; everything visual (labels, letters, colors) lives here.
//!
//! - [`render`]: plain text, one letter per cell
//! - [`TerminalRenderer`]: writes the same layout to stdout, optionally colored

pub mod board_view;
pub mod palette;
pub mod renderer;

pub use swapples_core as core;
pub use swapples_types as types;

pub use board_view::render;
pub use palette::{color_letter, tile_color, Rgb, TileColor, PALETTE};
pub use renderer::{encode_grid_into, TerminalRenderer};
