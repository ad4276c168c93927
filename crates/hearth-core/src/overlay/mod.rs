//! Overlay surfaces layered on top of activity windows.
//!
//! - [`Overlay`] / [`OverlaySubsystem`] - Compositing overlay attachment
//! - [`ChatOverlayWindow`] - Fixed-size chat dialog shown above an activity

mod chat_window;

pub use chat_window::{CHAT_WINDOW_HEIGHT, CHAT_WINDOW_WIDTH, ChatOverlayWindow};

use crate::window::Drawable;

/// A compositing surface attached over an activity window.
pub trait Overlay {
    /// The overlay's own drawable.
    fn drawable(&self) -> Drawable;
    fn show_all(&mut self);
    fn hide(&mut self);
}

/// Attaches overlays to foreign windows.
pub trait OverlaySubsystem {
    /// Try to layer an overlay over `target`.
    ///
    /// Returns `None` when the target cannot carry an overlay (for example an
    /// unsupported window type). That is not an error: callers drive the
    /// plain drawable instead.
    fn try_attach(&self, target: Drawable) -> Option<Box<dyn Overlay>>;
}
