use std::rc::Rc;

use tracing::{debug, info, warn};

use super::errors::HostError;
use super::services::{HostServices, HostSettings};
use crate::chat::{ActivityBinding, ChatWidget};
use crate::control::{ActivityAddress, ActivityControl};
use crate::overlay::{ChatOverlayWindow, Overlay};
use crate::peer::{INVITE_REQUEST, PeerMessenger};
use crate::presence::{Buddy, IconColor, PresenceDirectory};
use crate::window::{Drawable, Surface, WindowHandle, WindowSystem, Xid};

/// Shell-side facade for one running activity window.
///
/// Identity (`id`, `type`, icon) is resolved once at construction and never
/// changes. The chat widget and chat window are created exactly once and
/// only toggled between shown and hidden until [`ActivityHost::destroy`].
pub struct ActivityHost {
    window: Box<dyn WindowHandle>,
    xid: Xid,
    activity: Box<dyn ActivityControl>,
    id: String,
    activity_type: String,
    icon_name: String,
    /// Overlay drawable when attached, else the wrapped foreign window.
    anchor: Drawable,
    overlay: Option<Box<dyn Overlay>>,
    chat_widget: Box<dyn ChatWidget>,
    chat_window: ChatOverlayWindow,
    frame_was_visible: bool,
    windows: Rc<dyn WindowSystem>,
    presence: Rc<dyn PresenceDirectory>,
    peers: Rc<dyn PeerMessenger>,
    settings: HostSettings,
}

impl ActivityHost {
    /// Bind `window` to the activity that owns it.
    ///
    /// # Errors
    ///
    /// Fails when the activity's control channel cannot be opened or does not
    /// answer the id/type queries, when no bundle is installed for its type,
    /// or when the chat window cannot be realized. A window that cannot carry
    /// an overlay is not an error: the host drives the plain window instead.
    pub fn new(services: &HostServices, window: Box<dyn WindowHandle>) -> Result<Self, HostError> {
        let xid = window.xid();
        info!(event = "core.host.construct_started", xid = xid);

        let address = ActivityAddress::for_window(xid)?;
        let activity = services.control.connect(&address)?;
        let id = activity.get_id()?;
        let activity_type = activity.get_type()?;

        let foreign = services.windows.foreign_window(xid)?;

        let bundle = services.bundles.get_bundle(&activity_type).ok_or_else(|| {
            HostError::BundleNotFound {
                activity_type: activity_type.clone(),
            }
        })?;
        let icon_name = bundle.icon().to_string();

        let overlay = services.overlays.try_attach(foreign);
        let anchor = match &overlay {
            Some(overlay) => overlay.drawable(),
            None => {
                warn!(
                    event = "core.host.overlay_unavailable",
                    xid = xid,
                    activity_id = %id,
                    message = "Overlay attachment failed, chat will be anchored to the activity window"
                );
                foreign
            }
        };

        let binding = ActivityBinding {
            xid,
            activity_id: id.clone(),
            activity_type: activity_type.clone(),
            icon_name: icon_name.clone(),
        };
        let chat_widget = services.chat.create(&binding);
        let chat_window = ChatOverlayWindow::new(
            services.windows.create_toplevel(),
            anchor,
            chat_widget.widget_id(),
            services.settings.chat_size,
        )?;

        info!(
            event = "core.host.construct_completed",
            xid = xid,
            activity_id = %id,
            activity_type = %activity_type,
            icon_name = %icon_name,
            overlay = overlay.is_some()
        );

        Ok(Self {
            window,
            xid,
            activity,
            id,
            activity_type,
            icon_name,
            anchor,
            overlay,
            chat_widget,
            chat_window,
            frame_was_visible: false,
            windows: Rc::clone(&services.windows),
            presence: Rc::clone(&services.presence),
            peers: Rc::clone(&services.peers),
            settings: services.settings.clone(),
        })
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_type(&self) -> &str {
        &self.activity_type
    }

    pub fn get_xid(&self) -> Xid {
        self.xid
    }

    /// Live title of the activity window.
    pub fn get_title(&self) -> String {
        self.window.name()
    }

    pub fn get_icon_name(&self) -> &str {
        &self.icon_name
    }

    /// Color of the activity's presence entry, or the local profile color when
    /// the activity is not announced (or announces a color that does not parse).
    pub fn get_icon_color(&self) -> IconColor {
        let Some(entry) = self.presence.get_activity(&self.id) else {
            return self.settings.profile_color.clone();
        };

        match IconColor::parse(&entry.color) {
            Ok(color) => color,
            Err(e) => {
                warn!(
                    event = "core.host.presence_color_invalid",
                    activity_id = %self.id,
                    error = %e
                );
                self.settings.profile_color.clone()
            }
        }
    }

    pub fn get_shared(&self) -> Result<bool, HostError> {
        Ok(self.activity.get_shared()?)
    }

    /// Share the activity and switch the chat widget into shared mode.
    pub fn share(&mut self) -> Result<(), HostError> {
        self.activity.share()?;
        self.chat_widget.share();
        info!(event = "core.host.share_completed", activity_id = %self.id);
        Ok(())
    }

    /// Invite `buddy` to this activity, sharing it first if needed.
    ///
    /// The invitation is fire-and-forget: failures opening the peer stream or
    /// sending the request are logged, not returned.
    pub fn invite(&mut self, buddy: &Buddy) -> Result<(), HostError> {
        if !self.get_shared()? {
            self.share()?;
        }

        let issuer = self.presence.get_owner().name;
        let service_type = &self.settings.presence_service_type;
        let service = buddy.service_of_type(service_type).ok_or_else(|| {
            HostError::BuddyServiceNotFound {
                buddy: buddy.name.clone(),
                service_type: service_type.clone(),
            }
        })?;

        info!(
            event = "core.host.invite_started",
            activity_id = %self.id,
            buddy = %buddy.name,
            endpoint = %format!("{}:{}", service.address, service.port)
        );

        let mut writer = match self.peers.open_writer(service) {
            Ok(writer) => writer,
            Err(e) => {
                warn!(
                    event = "core.peer.invite_stream_failed",
                    activity_id = %self.id,
                    buddy = %buddy.name,
                    error = %e
                );
                return Ok(());
            }
        };

        match writer.custom_request(
            INVITE_REQUEST,
            &[issuer.as_str(), self.activity_type.as_str(), self.id.as_str()],
        ) {
            Ok(()) => info!(
                event = "core.host.invite_sent",
                activity_id = %self.id,
                buddy = %buddy.name
            ),
            Err(e) => warn!(
                event = "core.peer.invite_send_failed",
                activity_id = %self.id,
                buddy = %buddy.name,
                error = %e
            ),
        }

        Ok(())
    }

    /// Activate and raise the activity window.
    pub fn present(&self) {
        let timestamp = self.windows.current_event_time();
        debug!(event = "core.host.present", xid = self.xid, timestamp = timestamp);
        self.window.activate(timestamp);
    }

    /// Ask the window manager to close the activity window.
    pub fn close(&self) {
        let timestamp = self.windows.current_event_time();
        debug!(event = "core.host.close", xid = self.xid, timestamp = timestamp);
        self.window.close(timestamp);
    }

    /// Show `dialog` above this activity.
    pub fn show_dialog(&self, dialog: &mut dyn Surface) {
        dialog.show();
        dialog.set_transient_for(self.anchor);
    }

    /// Show the chat overlay, remembering whether the shell frame was visible.
    pub fn chat_show(&mut self, frame_was_visible: bool) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.show_all();
        }
        self.chat_window.show_all();
        self.frame_was_visible = frame_was_visible;
    }

    /// Hide the chat overlay.
    ///
    /// Returns the frame visibility recorded by the last [`chat_show`] and
    /// resets it, so a second call returns `false`.
    ///
    /// [`chat_show`]: ActivityHost::chat_show
    pub fn chat_hide(&mut self) -> bool {
        self.chat_window.hide();
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.hide();
        }
        std::mem::take(&mut self.frame_was_visible)
    }

    pub fn is_chat_visible(&self) -> bool {
        self.chat_window.is_visible()
    }

    /// React to the window gaining or losing focus.
    pub fn set_active(&mut self, active: bool) {
        if !active {
            self.chat_hide();
            self.frame_was_visible = false;
        }
    }

    /// Release the chat window and everything it contains.
    pub fn destroy(mut self) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.hide();
        }
        self.chat_window.destroy();
        self.frame_was_visible = false;
        info!(
            event = "core.host.destroyed",
            xid = self.xid,
            activity_id = %self.id
        );
    }

    /// Snapshot of the identity handed to the chat widget.
    #[cfg(test)]
    pub(crate) fn binding(&self) -> ActivityBinding {
        ActivityBinding {
            xid: self.xid,
            activity_id: self.id.clone(),
            activity_type: self.activity_type.clone(),
            icon_name: self.icon_name.clone(),
        }
    }

    /// Whether an overlay is layered over the activity window.
    pub(crate) fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// The drawable dialogs and the chat window are transient for.
    #[cfg(test)]
    pub(crate) fn anchor(&self) -> Drawable {
        self.anchor
    }
}
