use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::host::{ActivityHost, HostServices};
use crate::shell::errors::DispatchError;
use crate::shell::events::Event;
use crate::shell::store::Store;
use crate::shell::types::Command;
use crate::window::{WindowHandle, Xid};

/// Default Store implementation: owns every host and the active selection.
pub struct ShellStore {
    services: HostServices,
    hosts: BTreeMap<Xid, ActivityHost>,
    active: Option<Xid>,
}

impl ShellStore {
    pub fn new(services: HostServices) -> Self {
        Self {
            services,
            hosts: BTreeMap::new(),
            active: None,
        }
    }

    /// Start hosting the activity that owns `window`.
    ///
    /// A window whose host cannot be constructed is not tracked.
    pub fn track_window(
        &mut self,
        window: Box<dyn WindowHandle>,
    ) -> Result<Vec<Event>, DispatchError> {
        let xid = window.xid();
        if self.hosts.contains_key(&xid) {
            return Err(DispatchError::AlreadyTracked { xid });
        }

        let host = ActivityHost::new(&self.services, window)?;
        let overlay = host.has_overlay();
        let event = Event::HostTracked {
            xid,
            activity_id: host.get_id().to_string(),
            activity_type: host.get_type().to_string(),
        };
        self.hosts.insert(xid, host);

        info!(
            event = "core.shell.host_tracked",
            xid = xid,
            overlay = overlay,
            host_count = self.hosts.len()
        );
        Ok(vec![event])
    }

    pub fn host(&self, xid: Xid) -> Option<&ActivityHost> {
        self.hosts.get(&xid)
    }

    pub fn host_mut(&mut self, xid: Xid) -> Option<&mut ActivityHost> {
        self.hosts.get_mut(&xid)
    }

    pub fn active_xid(&self) -> Option<Xid> {
        self.active
    }

    pub fn active_host(&self) -> Option<&ActivityHost> {
        self.active.and_then(|xid| self.hosts.get(&xid))
    }

    /// Tracked window ids in ascending order.
    pub fn xids(&self) -> Vec<Xid> {
        self.hosts.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    fn tracked_mut(&mut self, xid: Xid) -> Result<&mut ActivityHost, DispatchError> {
        self.hosts
            .get_mut(&xid)
            .ok_or(DispatchError::NotTracked { xid })
    }

    fn active_mut(&mut self) -> Result<(Xid, &mut ActivityHost), DispatchError> {
        let xid = self.active.ok_or(DispatchError::NoActiveHost)?;
        let host = self
            .hosts
            .get_mut(&xid)
            .ok_or(DispatchError::NoActiveHost)?;
        Ok((xid, host))
    }

    /// Move the active selection, deactivating the previous host first.
    fn switch_active(&mut self, xid: Option<Xid>) -> Vec<Event> {
        // Focus on an untracked window means no activity is active
        let next = xid.filter(|xid| self.hosts.contains_key(xid));
        if next == self.active {
            return Vec::new();
        }

        if let Some(previous) = self.active.and_then(|xid| self.hosts.get_mut(&xid)) {
            previous.set_active(false);
        }
        if let Some(current) = next.and_then(|xid| self.hosts.get_mut(&xid)) {
            current.set_active(true);
        }
        self.active = next;

        debug!(event = "core.shell.active_changed", xid = ?next);
        vec![Event::ActiveHostChanged { xid: next }]
    }
}

impl Store for ShellStore {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.shell.dispatch_started", command = ?cmd);

        let result = match cmd {
            Command::UntrackWindow { xid } => {
                let host = self
                    .hosts
                    .remove(&xid)
                    .ok_or(DispatchError::NotTracked { xid })?;
                host.destroy();

                let mut events = vec![Event::HostUntracked { xid }];
                if self.active == Some(xid) {
                    self.active = None;
                    events.push(Event::ActiveHostChanged { xid: None });
                }
                Ok(events)
            }
            Command::ActivateWindow { xid } => Ok(self.switch_active(xid)),
            Command::PresentActivity { xid } => {
                self.tracked_mut(xid)?.present();
                Ok(vec![Event::ActivityPresented { xid }])
            }
            Command::CloseActivity { xid } => {
                self.tracked_mut(xid)?.close();
                Ok(vec![Event::ActivityCloseRequested { xid }])
            }
            Command::ShareActivity { xid } => {
                self.tracked_mut(xid)?.share()?;
                Ok(vec![Event::ActivityShared { xid }])
            }
            Command::InviteBuddy { xid, buddy } => {
                self.tracked_mut(xid)?.invite(&buddy)?;
                Ok(vec![Event::BuddyInvited {
                    xid,
                    buddy: buddy.name,
                }])
            }
            Command::ShowChat { frame_was_visible } => {
                let (xid, host) = self.active_mut()?;
                host.chat_show(frame_was_visible);
                Ok(vec![Event::ChatShown { xid }])
            }
            Command::HideChat => {
                let (xid, host) = self.active_mut()?;
                let restore_frame = host.chat_hide();
                Ok(vec![Event::ChatHidden { xid, restore_frame }])
            }
        };

        match &result {
            Ok(events) => info!(event = "core.shell.dispatch_completed", event_count = events.len()),
            Err(e) => info!(event = "core.shell.dispatch_failed", error = %e),
        }

        result
    }
}
