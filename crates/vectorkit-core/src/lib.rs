//! # VectorKit Core
//!
//! Core types and utilities shared by every VectorKit crate.
//! Provides the geometry primitives, color-space conversion and the
//! error taxonomy used by the editing engine.

pub mod color;
pub mod constants;
pub mod error;
pub mod geometry;

pub use color::{hex_to_hsb, hsb_to_hex, Hsb};
pub use error::{ColorError, EditError, EditResult, Error, Result};
pub use geometry::{clamp, Bounds, Point};
