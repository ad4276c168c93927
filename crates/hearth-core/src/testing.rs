//! Test doubles for every collaborator trait.
//!
//! Each fake shares its state through `Rc<RefCell<..>>` so tests can steer
//! behavior and inspect side effects after handing the fake to a host.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use crate::bundles::{BundleInfo, BundleRegistry};
use crate::chat::{ActivityBinding, ChatWidget, ChatWidgetFactory};
use crate::control::{ActivityAddress, ActivityControl, ControlConnector, ControlError};
use crate::host::{ActivityHost, HostError, HostServices, HostSettings};
use crate::overlay::{Overlay, OverlaySubsystem};
use crate::peer::{PeerError, PeerMessenger, StreamWriter};
use crate::presence::{Buddy, PeerService, PresenceActivity, PresenceDirectory};
use crate::window::{
    Drawable, Surface, Timestamp, WidgetId, WindowError, WindowHandle, WindowPosition,
    WindowSystem, WindowTypeHint, Xid,
};

type Shared<T> = Rc<RefCell<T>>;

fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

// --- surfaces ---------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SurfaceCall {
    Realize,
    SetDecorated(bool),
    SetTypeHint(WindowTypeHint),
    SetAcceptFocus(bool),
    SetTransientFor(Drawable),
    SetPosition(WindowPosition),
    SetDefaultSize(u32, u32),
    Embed(WidgetId),
    Show,
    ShowAll,
    Hide,
    Destroy,
}

#[derive(Debug, Default)]
pub(crate) struct SurfaceLog {
    pub calls: Vec<SurfaceCall>,
    pub visible: bool,
    pub fail_realize: bool,
}

impl SurfaceLog {
    pub fn destroy_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == SurfaceCall::Destroy)
            .count()
    }
}

pub(crate) struct FakeSurface {
    log: Shared<SurfaceLog>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self {
            log: shared(SurfaceLog::default()),
        }
    }

    pub fn failing_realize() -> Self {
        let surface = Self::new();
        surface.log.borrow_mut().fail_realize = true;
        surface
    }

    pub fn log(&self) -> Shared<SurfaceLog> {
        Rc::clone(&self.log)
    }

    fn record(&self, call: SurfaceCall) {
        self.log.borrow_mut().calls.push(call);
    }
}

impl Surface for FakeSurface {
    fn realize(&mut self) -> Result<(), WindowError> {
        self.record(SurfaceCall::Realize);
        if self.log.borrow().fail_realize {
            return Err(WindowError::RealizeFailed {
                message: "no display".to_string(),
            });
        }
        Ok(())
    }

    fn set_decorated(&mut self, decorated: bool) {
        self.record(SurfaceCall::SetDecorated(decorated));
    }

    fn set_type_hint(&mut self, hint: WindowTypeHint) {
        self.record(SurfaceCall::SetTypeHint(hint));
    }

    fn set_accept_focus(&mut self, accept: bool) {
        self.record(SurfaceCall::SetAcceptFocus(accept));
    }

    fn set_transient_for(&mut self, parent: Drawable) {
        self.record(SurfaceCall::SetTransientFor(parent));
    }

    fn set_position(&mut self, position: WindowPosition) {
        self.record(SurfaceCall::SetPosition(position));
    }

    fn set_default_size(&mut self, width: u32, height: u32) {
        self.record(SurfaceCall::SetDefaultSize(width, height));
    }

    fn embed(&mut self, child: WidgetId) {
        self.record(SurfaceCall::Embed(child));
    }

    fn show(&mut self) {
        self.record(SurfaceCall::Show);
        self.log.borrow_mut().visible = true;
    }

    fn show_all(&mut self) {
        self.record(SurfaceCall::ShowAll);
        self.log.borrow_mut().visible = true;
    }

    fn hide(&mut self) {
        self.record(SurfaceCall::Hide);
        self.log.borrow_mut().visible = false;
    }

    fn is_visible(&self) -> bool {
        self.log.borrow().visible
    }

    fn destroy(&mut self) {
        self.record(SurfaceCall::Destroy);
        self.log.borrow_mut().visible = false;
    }
}

// --- window system ----------------------------------------------------------

#[derive(Debug, Default)]
pub(crate) struct WindowSystemState {
    pub event_time: Timestamp,
    pub fail_realize: bool,
    pub foreign_gone: bool,
}

pub(crate) struct FakeWindowSystem {
    state: Shared<WindowSystemState>,
    surfaces: Shared<Vec<Shared<SurfaceLog>>>,
}

impl WindowSystem for FakeWindowSystem {
    fn current_event_time(&self) -> Timestamp {
        self.state.borrow().event_time
    }

    fn foreign_window(&self, xid: Xid) -> Result<Drawable, WindowError> {
        if self.state.borrow().foreign_gone {
            return Err(WindowError::ForeignWindowGone { xid });
        }
        Ok(Drawable::foreign(xid))
    }

    fn create_toplevel(&self) -> Box<dyn Surface> {
        let surface = if self.state.borrow().fail_realize {
            FakeSurface::failing_realize()
        } else {
            FakeSurface::new()
        };
        self.surfaces.borrow_mut().push(surface.log());
        Box::new(surface)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum WindowCall {
    Activate(Timestamp),
    Close(Timestamp),
}

#[derive(Debug, Default)]
pub(crate) struct WindowLog {
    pub calls: Vec<WindowCall>,
}

pub(crate) struct FakeWindow {
    xid: Xid,
    name: String,
    log: Shared<WindowLog>,
}

impl WindowHandle for FakeWindow {
    fn xid(&self) -> Xid {
        self.xid
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn activate(&self, timestamp: Timestamp) {
        self.log.borrow_mut().calls.push(WindowCall::Activate(timestamp));
    }

    fn close(&self, timestamp: Timestamp) {
        self.log.borrow_mut().calls.push(WindowCall::Close(timestamp));
    }
}

// --- control channel --------------------------------------------------------

#[derive(Debug)]
pub(crate) struct ControlState {
    pub reachable: bool,
    pub fail_identity: bool,
    pub fail_share: bool,
    pub activity_id: String,
    pub activity_type: String,
    pub shared: bool,
    pub share_calls: usize,
    pub connected_to: Vec<String>,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            reachable: true,
            fail_identity: false,
            fail_share: false,
            activity_id: "abc123".to_string(),
            activity_type: "org.example.Foo".to_string(),
            shared: false,
            share_calls: 0,
            connected_to: Vec::new(),
        }
    }
}

pub(crate) struct FakeConnector {
    state: Shared<ControlState>,
}

impl ControlConnector for FakeConnector {
    fn connect(&self, address: &ActivityAddress) -> Result<Box<dyn ActivityControl>, ControlError> {
        let mut state = self.state.borrow_mut();
        if !state.reachable {
            return Err(ControlError::NotRunning {
                path: format!("/fake/{}.sock", address.service_name()),
            });
        }
        state.connected_to.push(address.service_name().to_string());
        Ok(Box::new(FakeControl {
            state: Rc::clone(&self.state),
        }))
    }
}

struct FakeControl {
    state: Shared<ControlState>,
}

impl FakeControl {
    fn identity(&self, value: String) -> Result<String, ControlError> {
        if self.state.borrow().fail_identity {
            return Err(ControlError::RemoteError {
                message: "[not_ready] still loading".to_string(),
            });
        }
        Ok(value)
    }
}

impl ActivityControl for FakeControl {
    fn get_id(&self) -> Result<String, ControlError> {
        let id = self.state.borrow().activity_id.clone();
        self.identity(id)
    }

    fn get_type(&self) -> Result<String, ControlError> {
        let activity_type = self.state.borrow().activity_type.clone();
        self.identity(activity_type)
    }

    fn get_shared(&self) -> Result<bool, ControlError> {
        Ok(self.state.borrow().shared)
    }

    fn share(&self) -> Result<(), ControlError> {
        let mut state = self.state.borrow_mut();
        if state.fail_share {
            return Err(ControlError::RemoteError {
                message: "[share_failed] no network".to_string(),
            });
        }
        state.share_calls += 1;
        state.shared = true;
        Ok(())
    }
}

// --- presence & bundles -----------------------------------------------------

#[derive(Debug)]
pub(crate) struct PresenceState {
    pub activities: Vec<PresenceActivity>,
    pub owner: Buddy,
}

impl Default for PresenceState {
    fn default() -> Self {
        Self {
            activities: Vec::new(),
            owner: Buddy::new("marco"),
        }
    }
}

pub(crate) struct FakePresence {
    state: Shared<PresenceState>,
}

impl PresenceDirectory for FakePresence {
    fn get_activity(&self, activity_id: &str) -> Option<PresenceActivity> {
        self.state
            .borrow()
            .activities
            .iter()
            .find(|activity| activity.id == activity_id)
            .cloned()
    }

    fn get_owner(&self) -> Buddy {
        self.state.borrow().owner.clone()
    }
}

pub(crate) struct FakeBundles {
    bundles: HashMap<String, BundleInfo>,
}

impl FakeBundles {
    fn with_foo() -> Self {
        let mut bundles = HashMap::new();
        bundles.insert(
            "org.example.Foo".to_string(),
            BundleInfo::new(
                "Foo".to_string(),
                "org.example.Foo".to_string(),
                "foo-icon".to_string(),
                PathBuf::from("/bundles/Foo.activity"),
            ),
        );
        Self { bundles }
    }
}

impl BundleRegistry for FakeBundles {
    fn get_bundle(&self, service_name: &str) -> Option<BundleInfo> {
        self.bundles.get(service_name).cloned()
    }
}

// --- overlay & chat ---------------------------------------------------------

#[derive(Debug)]
pub(crate) struct OverlayState {
    pub attachable: bool,
}

#[derive(Debug, Default)]
pub(crate) struct OverlayLog {
    pub calls: Vec<&'static str>,
    pub visible: bool,
}

pub(crate) struct FakeOverlays {
    state: Shared<OverlayState>,
    log: Shared<OverlayLog>,
}

impl OverlaySubsystem for FakeOverlays {
    fn try_attach(&self, target: Drawable) -> Option<Box<dyn Overlay>> {
        if !self.state.borrow().attachable {
            return None;
        }
        Some(Box::new(FakeOverlay {
            drawable: Drawable::overlay(target.xid() + 1),
            log: Rc::clone(&self.log),
        }))
    }
}

struct FakeOverlay {
    drawable: Drawable,
    log: Shared<OverlayLog>,
}

impl Overlay for FakeOverlay {
    fn drawable(&self) -> Drawable {
        self.drawable
    }

    fn show_all(&mut self) {
        let mut log = self.log.borrow_mut();
        log.calls.push("show_all");
        log.visible = true;
    }

    fn hide(&mut self) {
        let mut log = self.log.borrow_mut();
        log.calls.push("hide");
        log.visible = false;
    }
}

#[derive(Debug, Default)]
pub(crate) struct ChatLog {
    pub created: Vec<ActivityBinding>,
    pub share_calls: usize,
}

pub(crate) struct FakeChatFactory {
    log: Shared<ChatLog>,
}

impl ChatWidgetFactory for FakeChatFactory {
    fn create(&self, activity: &ActivityBinding) -> Box<dyn ChatWidget> {
        let mut log = self.log.borrow_mut();
        log.created.push(activity.clone());
        Box::new(FakeChatWidget {
            id: WidgetId(log.created.len() as u64),
            log: Rc::clone(&self.log),
        })
    }
}

struct FakeChatWidget {
    id: WidgetId,
    log: Shared<ChatLog>,
}

impl ChatWidget for FakeChatWidget {
    fn widget_id(&self) -> WidgetId {
        self.id
    }

    fn share(&mut self) {
        self.log.borrow_mut().share_calls += 1;
    }
}

// --- peers ------------------------------------------------------------------

#[derive(Debug, Default)]
pub(crate) struct PeerLog {
    pub fail_open: bool,
    pub fail_send: bool,
    pub opened: Vec<(String, u16)>,
    pub requests: Vec<(String, Vec<String>)>,
}

pub(crate) struct FakePeers {
    log: Shared<PeerLog>,
}

impl PeerMessenger for FakePeers {
    fn open_writer(&self, service: &PeerService) -> Result<Box<dyn StreamWriter>, PeerError> {
        let mut log = self.log.borrow_mut();
        if log.fail_open {
            return Err(PeerError::ConnectFailed {
                endpoint: format!("{}:{}", service.address, service.port),
                message: "connection refused".to_string(),
            });
        }
        log.opened.push((service.address.clone(), service.port));
        Ok(Box::new(FakeWriter {
            log: Rc::clone(&self.log),
        }))
    }
}

struct FakeWriter {
    log: Shared<PeerLog>,
}

impl StreamWriter for FakeWriter {
    fn custom_request(&mut self, method: &str, params: &[&str]) -> Result<(), PeerError> {
        let mut log = self.log.borrow_mut();
        if log.fail_send {
            return Err(PeerError::Io(std::io::Error::other("broken pipe")));
        }
        log.requests.push((
            method.to_string(),
            params.iter().map(|p| p.to_string()).collect(),
        ));
        Ok(())
    }
}

// --- fixture ----------------------------------------------------------------

/// A full set of fakes wired into [`HostServices`].
pub(crate) struct Fixture {
    pub windows: Shared<WindowSystemState>,
    pub surfaces: Shared<Vec<Shared<SurfaceLog>>>,
    pub window_log: Shared<WindowLog>,
    pub control: Shared<ControlState>,
    pub presence: Shared<PresenceState>,
    pub overlays: Shared<OverlayState>,
    pub overlay_log: Shared<OverlayLog>,
    pub chat: Shared<ChatLog>,
    pub peers: Shared<PeerLog>,
    pub settings: HostSettings,
    services: HostServices,
}

impl Fixture {
    pub fn new() -> Self {
        let windows = shared(WindowSystemState::default());
        let surfaces = shared(Vec::new());
        let control = shared(ControlState::default());
        let presence = shared(PresenceState::default());
        let overlays = shared(OverlayState { attachable: true });
        let overlay_log = shared(OverlayLog::default());
        let chat = shared(ChatLog::default());
        let peers = shared(PeerLog::default());
        let settings = HostSettings::default();

        let services = HostServices {
            windows: Rc::new(FakeWindowSystem {
                state: Rc::clone(&windows),
                surfaces: Rc::clone(&surfaces),
            }),
            control: Rc::new(FakeConnector {
                state: Rc::clone(&control),
            }),
            presence: Rc::new(FakePresence {
                state: Rc::clone(&presence),
            }),
            bundles: Rc::new(FakeBundles::with_foo()),
            overlays: Rc::new(FakeOverlays {
                state: Rc::clone(&overlays),
                log: Rc::clone(&overlay_log),
            }),
            chat: Rc::new(FakeChatFactory {
                log: Rc::clone(&chat),
            }),
            peers: Rc::new(FakePeers {
                log: Rc::clone(&peers),
            }),
            settings: settings.clone(),
        };

        Self {
            windows,
            surfaces,
            window_log: shared(WindowLog::default()),
            control,
            presence,
            overlays,
            overlay_log,
            chat,
            peers,
            settings,
            services,
        }
    }

    pub fn services(&self) -> &HostServices {
        &self.services
    }

    pub fn window(&self, xid: Xid) -> Box<dyn WindowHandle> {
        Box::new(FakeWindow {
            xid,
            name: "Foo Activity".to_string(),
            log: Rc::clone(&self.window_log),
        })
    }

    pub fn host(&self, xid: Xid) -> Result<ActivityHost, HostError> {
        ActivityHost::new(&self.services, self.window(xid))
    }
}
