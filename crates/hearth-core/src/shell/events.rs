use serde::{Deserialize, Serialize};

use crate::window::Xid;

/// State changes resulting from shell operations.
///
/// Only successful changes produce events. Failures use the `Result` error
/// channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    HostTracked {
        xid: Xid,
        activity_id: String,
        activity_type: String,
    },
    HostUntracked { xid: Xid },
    ActiveHostChanged { xid: Option<Xid> },
    ActivityPresented { xid: Xid },
    ActivityCloseRequested { xid: Xid },
    ActivityShared { xid: Xid },
    BuddyInvited { xid: Xid, buddy: String },
    ChatShown { xid: Xid },
    /// `restore_frame` is true when the shell frame was visible before chat
    /// was shown and should be brought back.
    ChatHidden { xid: Xid, restore_frame: bool },
}
