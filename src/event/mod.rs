mod bus;
mod events;

pub use bus::{EventBus, EventRecorder};
pub use events::DiagramEvent;

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &DiagramEvent);
}
