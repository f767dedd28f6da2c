//! # ViewKit Core
//!
//! Core types shared across the ViewKit workspace: scene/screen geometry,
//! canvas constants, and the error taxonomy.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{Error, GeometryError, Result};
pub use geometry::{Point, Size, ViewRect};
