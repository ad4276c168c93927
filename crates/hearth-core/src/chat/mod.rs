//! Chat widget collaborator interfaces.

use serde::{Deserialize, Serialize};

use crate::window::{WidgetId, Xid};

/// Read-only description of the activity a chat widget is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityBinding {
    pub xid: Xid,
    pub activity_id: String,
    pub activity_type: String,
    pub icon_name: String,
}

/// The chat display embedded in the chat overlay window.
pub trait ChatWidget {
    fn widget_id(&self) -> WidgetId;

    /// Switch the widget into shared mode so peers can join the conversation.
    fn share(&mut self);
}

/// Creates chat widgets for newly hosted activities.
pub trait ChatWidgetFactory {
    fn create(&self, activity: &ActivityBinding) -> Box<dyn ChatWidget>;
}
