use serde::{Deserialize, Serialize};

use crate::presence::Buddy;
use crate::window::Xid;

/// All operations the shell can request on tracked hosts.
///
/// Starting to track a window is not a command: it needs a live window
/// handle, see [`ShellStore::track_window`](super::ShellStore::track_window).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Stop tracking a window and destroy its host.
    UntrackWindow { xid: Xid },
    /// Focus moved to `xid`, or to no window at all.
    ActivateWindow { xid: Option<Xid> },
    PresentActivity { xid: Xid },
    CloseActivity { xid: Xid },
    ShareActivity { xid: Xid },
    InviteBuddy { xid: Xid, buddy: Buddy },
    /// Show chat over the active activity.
    ShowChat { frame_was_visible: bool },
    /// Hide chat over the active activity.
    HideChat,
}
