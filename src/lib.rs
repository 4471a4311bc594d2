//! Swapples (workspace facade crate).
//!
//! Re-exports the engine crates under one name so the binary, the integration
//! tests and the benches share a single `swapples::{core, term, types}` API.

pub mod config;

pub use swapples_core as core;
pub use swapples_term as term;
pub use swapples_types as types;
