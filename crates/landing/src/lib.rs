//! Driftline landing-page engine.
//!
//! Client-side behavior for the Driftline landing page, separated from any
//! rendering technology: the mock product catalog with paging, the in-browser
//! shopping cart, theme toggling, and contact-form validation. Rendering and
//! persistence are opaque collaborators behind the [`render::Renderer`] and
//! [`storage::Storage`] traits; the engine pushes commands at one and strings
//! at the other.
//!
//! Control flow is the page's: user interaction, state mutation, persistence,
//! then render commands for the affected region. [`state::App`] is the
//! composition root that wires it together.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod limit;
pub mod models;
pub mod render;
pub mod state;
pub mod storage;
pub mod theme;
