use serde::{Deserialize, Serialize};

/// Numeric window identifier assigned by the windowing system.
pub type Xid = u32;

/// Event timestamp used to stamp window-manager requests.
pub type Timestamp = u32;

/// Opaque identifier of an embeddable widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

/// Where a drawable came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawableKind {
    /// A window owned by another process, wrapped for local use.
    Foreign,
    /// A compositing surface layered over a foreign window.
    Overlay,
}

/// A reference to something other surfaces can be made transient for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Drawable {
    xid: Xid,
    kind: DrawableKind,
}

impl Drawable {
    pub fn foreign(xid: Xid) -> Self {
        Self {
            xid,
            kind: DrawableKind::Foreign,
        }
    }

    pub fn overlay(xid: Xid) -> Self {
        Self {
            xid,
            kind: DrawableKind::Overlay,
        }
    }

    pub fn xid(&self) -> Xid {
        self.xid
    }

    pub fn kind(&self) -> DrawableKind {
        self.kind
    }

    pub fn is_overlay(&self) -> bool {
        self.kind == DrawableKind::Overlay
    }
}

/// Window-manager hint describing a surface's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowTypeHint {
    Normal,
    Dialog,
}

/// Placement policy for a top-level surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowPosition {
    None,
    Center,
    /// Stay centered even after the surface is resized.
    CenterAlways,
}
