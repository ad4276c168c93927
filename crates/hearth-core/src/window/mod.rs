//! Window-system collaborator interfaces.
//!
//! The shell never talks to a toolkit directly. Everything it needs from the
//! windowing system is expressed by the traits in [`traits`]; the value types
//! in [`types`] are plain handles that can be copied around freely.

pub mod errors;
pub mod traits;
pub mod types;

pub use errors::WindowError;
pub use traits::{Surface, WindowHandle, WindowSystem};
pub use types::{Drawable, DrawableKind, Timestamp, WidgetId, WindowPosition, WindowTypeHint, Xid};
