use super::events::Event;
use super::types::Command;

/// Trait for dispatching shell commands.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received.
/// - **Error handling**: Implementations define their own error type.
/// - **Events**: On success, dispatch returns the events describing what
///   changed, in the order they happened. A command may produce none (for
///   example activating the window that is already active).
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}
