//! Traits implemented by the windowing toolkit integration.

use super::errors::WindowError;
use super::types::{Drawable, Timestamp, WidgetId, WindowPosition, WindowTypeHint, Xid};

/// A top-level window tracked by the window manager.
pub trait WindowHandle {
    /// The window's numeric identifier.
    fn xid(&self) -> Xid;

    /// The window's current title.
    fn name(&self) -> String;

    /// Activate and raise the window.
    fn activate(&self, timestamp: Timestamp);

    /// Ask the window manager to close the window.
    fn close(&self, timestamp: Timestamp);
}

/// A local top-level surface (chat window, dialogs).
///
/// Setters are infallible. Only realizing the backing window resource can
/// fail, and it must succeed before the window-level setters take effect.
pub trait Surface {
    fn realize(&mut self) -> Result<(), WindowError>;
    fn set_decorated(&mut self, decorated: bool);
    fn set_type_hint(&mut self, hint: WindowTypeHint);
    fn set_accept_focus(&mut self, accept: bool);
    fn set_transient_for(&mut self, parent: Drawable);
    fn set_position(&mut self, position: WindowPosition);
    fn set_default_size(&mut self, width: u32, height: u32);

    /// Add a child widget to the surface.
    fn embed(&mut self, child: WidgetId);

    /// Show the surface only.
    fn show(&mut self);

    /// Show the surface and all of its children.
    fn show_all(&mut self);

    fn hide(&mut self);

    /// Live value of the surface's `visible` property.
    fn is_visible(&self) -> bool;

    /// Release the surface and its children.
    fn destroy(&mut self);
}

/// Entry point into the windowing system.
pub trait WindowSystem {
    /// Timestamp of the event currently being dispatched.
    fn current_event_time(&self) -> Timestamp;

    /// Wrap a window owned by another process.
    fn foreign_window(&self, xid: Xid) -> Result<Drawable, WindowError>;

    /// Create a new, unrealized top-level surface.
    fn create_toplevel(&self) -> Box<dyn Surface>;
}
