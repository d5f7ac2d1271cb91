//! Terminal output for the `nannymiles` binary.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;

pub use context::UiContext;
