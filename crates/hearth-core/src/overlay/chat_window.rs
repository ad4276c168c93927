use tracing::debug;

use crate::window::{Drawable, Surface, WidgetId, WindowError, WindowPosition, WindowTypeHint};

pub const CHAT_WINDOW_WIDTH: u32 = 600;
pub const CHAT_WINDOW_HEIGHT: u32 = 450;

/// Borderless, always-centered dialog hosting a chat widget above an activity.
///
/// The backing surface is created once and only toggled between shown and
/// hidden until [`ChatOverlayWindow::destroy`] runs. Dropping the window
/// destroys the surface if that has not happened yet.
pub struct ChatOverlayWindow {
    surface: Box<dyn Surface>,
    anchor: Drawable,
    destroyed: bool,
}

impl ChatOverlayWindow {
    /// Realize `surface` as the chat dialog for `anchor` and embed `chat_widget`.
    pub fn new(
        mut surface: Box<dyn Surface>,
        anchor: Drawable,
        chat_widget: WidgetId,
        size: (u32, u32),
    ) -> Result<Self, WindowError> {
        surface.realize()?;
        surface.set_decorated(false);
        surface.set_type_hint(WindowTypeHint::Dialog);
        surface.set_accept_focus(true);
        surface.set_transient_for(anchor);
        surface.set_position(WindowPosition::CenterAlways);
        surface.set_default_size(size.0, size.1);
        surface.embed(chat_widget);

        debug!(
            event = "core.overlay.chat_window_created",
            anchor_xid = anchor.xid(),
            anchor_is_overlay = anchor.is_overlay(),
            width = size.0,
            height = size.1
        );

        Ok(Self {
            surface,
            anchor,
            destroyed: false,
        })
    }

    pub fn anchor(&self) -> Drawable {
        self.anchor
    }

    pub fn show_all(&mut self) {
        if !self.destroyed {
            self.surface.show_all();
        }
    }

    pub fn hide(&mut self) {
        if !self.destroyed {
            self.surface.hide();
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.destroyed && self.surface.is_visible()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Destroy the surface and its children. Later calls do nothing.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.surface.destroy();
        self.destroyed = true;
        debug!(
            event = "core.overlay.chat_window_destroyed",
            anchor_xid = self.anchor.xid()
        );
    }
}

impl Drop for ChatOverlayWindow {
    fn drop(&mut self) {
        self.destroy();
    }
}
