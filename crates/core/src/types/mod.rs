//! Core types for Marigold.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod rows;
pub mod status;

pub use id::*;
pub use rows::{DEFAULT_COLOR_HEX, ImageRow, VariantRow};
pub use status::StockStatus;
