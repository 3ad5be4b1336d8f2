//! Core types for Trellis.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod product;
pub mod quantity;

pub use id::*;
pub use product::{ProductDetailsBundle, ProductRecord};
pub use quantity::OrderQuantity;
