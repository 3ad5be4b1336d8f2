//! Trellis Core - Shared types library.
//!
//! This crate provides common types used by the Trellis storefront:
//!
//! - [`types`] - Newtype wrappers and records for catalog data
//! - [`view_state`] - The product-detail view-state machine
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. View-state transitions are expressed as `(state, event) -> state`
//! so they can be tested without any UI binding.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod view_state;

pub use types::*;
pub use view_state::{DetailEvent, DetailView, ProductDetailState};
