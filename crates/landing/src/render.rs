//! The rendering surface.
//!
//! The core never touches DOM nodes; it pushes [`RenderCommand`]s at an
//! opaque [`Renderer`] and gets nothing back. Real embedders translate
//! commands into DOM mutations; tests use [`RecordingRenderer`] to assert on
//! the command stream.

use driftline_core::Theme;

use crate::contact::ContactField;
use crate::models::Product;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

/// A display update for one region of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Append these products to the grid.
    RenderProducts(Vec<Product>),
    /// Show a toast notification.
    ShowToast {
        level: ToastLevel,
        message: String,
    },
    /// Mark a form field invalid with an inline message.
    MarkFieldInvalid {
        field: ContactField,
        message: String,
    },
    /// Clear all inline field marks (start of a new submission attempt).
    ClearFieldMarks,
    /// Apply the document-wide theme attribute.
    ApplyTheme(Theme),
    /// Update the header cart-count badge.
    UpdateCartCount(u32),
    /// Show or hide the load-more control.
    SetLoadMoreVisible(bool),
}

/// Something that can apply render commands. Returns nothing to the core.
pub trait Renderer {
    fn apply(&mut self, command: RenderCommand);
}

/// Test renderer that records the command stream.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command applied so far, in order.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// The toasts applied so far, in order.
    #[must_use]
    pub fn toasts(&self) -> Vec<(ToastLevel, &str)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::ShowToast { level, message } => Some((*level, message.as_str())),
                _ => None,
            })
            .collect()
    }

    /// The most recently applied theme, if any.
    #[must_use]
    pub fn last_theme(&self) -> Option<Theme> {
        self.commands
            .iter()
            .rev()
            .find_map(|c| match c {
                RenderCommand::ApplyTheme(theme) => Some(*theme),
                _ => None,
            })
    }

    /// The most recent cart-count badge value, if any.
    #[must_use]
    pub fn last_cart_count(&self) -> Option<u32> {
        self.commands
            .iter()
            .rev()
            .find_map(|c| match c {
                RenderCommand::UpdateCartCount(n) => Some(*n),
                _ => None,
            })
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn apply(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }
}
