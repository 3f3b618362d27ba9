//! Unified error handling for the engine.
//!
//! Provides a unified `AppError` type that the composition root catches at
//! the UI boundary. Nothing here is fatal: transient collaborator failures
//! degrade to an error toast, malformed persisted state is handled fail-closed
//! inside the stores and never reaches this type, and validation failures are
//! expected results, not errors.

use thiserror::Error;

use driftline_core::ThemeError;

use crate::catalog::FetchError;
use crate::contact::SendError;

/// Application-level error type for the landing page.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog fetch failed (transient; retried by repeating the action).
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Contact send failed (transient; retried by repeating the action).
    #[error("Send error: {0}")]
    Send(#[from] SendError),

    /// A persisted or supplied theme value was not a permitted theme.
    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),
}

impl AppError {
    /// User-safe toast text for this error.
    ///
    /// Internal details stay in the logs; the page shows a short, actionable
    /// message instead.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "Could not load products. Please try again.",
            Self::Send(_) => "Something went wrong. Please try again.",
            Self::Theme(_) => "That theme is not available.",
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
