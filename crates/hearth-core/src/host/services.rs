use std::rc::Rc;

use crate::bundles::BundleRegistry;
use crate::chat::ChatWidgetFactory;
use crate::config::HearthConfig;
use crate::control::ControlConnector;
use crate::overlay::OverlaySubsystem;
use crate::peer::PeerMessenger;
use crate::presence::{IconColor, PresenceDirectory};
use crate::window::WindowSystem;

/// Collaborators shared by every host the shell creates.
///
/// Everything is reference counted and single-threaded: hosts live on the
/// shell's event dispatch thread.
#[derive(Clone)]
pub struct HostServices {
    pub windows: Rc<dyn WindowSystem>,
    pub control: Rc<dyn ControlConnector>,
    pub presence: Rc<dyn PresenceDirectory>,
    pub bundles: Rc<dyn BundleRegistry>,
    pub overlays: Rc<dyn OverlaySubsystem>,
    pub chat: Rc<dyn ChatWidgetFactory>,
    pub peers: Rc<dyn PeerMessenger>,
    pub settings: HostSettings,
}

/// Host tunables derived from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSettings {
    pub chat_size: (u32, u32),
    /// Service type a buddy must announce to be invited.
    pub presence_service_type: String,
    /// Local profile color, used when an activity has no presence entry.
    pub profile_color: IconColor,
}

impl HostSettings {
    pub fn from_config(config: &HearthConfig) -> Self {
        Self {
            chat_size: config.chat_size(),
            presence_service_type: config.presence.service_type().to_string(),
            profile_color: config.profile_color(),
        }
    }
}

impl Default for HostSettings {
    fn default() -> Self {
        Self::from_config(&HearthConfig::default())
    }
}
