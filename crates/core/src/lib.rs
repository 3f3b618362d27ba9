//! Driftline Core - Shared types library.
//!
//! This crate provides common types used across all Driftline components:
//! - `landing` - The landing-page engine (catalog, cart, forms, theming)
//! - `integration-tests` - Cross-module flow tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no timers, no rendering.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and themes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
