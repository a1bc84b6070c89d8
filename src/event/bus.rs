use log::trace;
use parking_lot::Mutex;
use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use crate::event::{DiagramEvent, EventHandler};

/// Fans diagram events out to subscribed handlers, in subscription order.
///
/// For one editor transition the order is fixed: the change events of the
/// command (added, changed, moved, deleted) come first, then one
/// `WarningsChanged` per element whose cached warnings differ after the
/// refresh. Undo and redo refresh every cache before a single
/// `HistoryRestored` is sent. Rejected commands emit nothing.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("handler_count", &self.handler_count())
            .finish_non_exhaustive()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handler and returns how many are now subscribed.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) -> usize {
        let mut handlers = self.handlers.borrow_mut();
        handlers.push(handler);
        handlers.len()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn emit(&self, event: DiagramEvent) {
        trace!("emitting {event:?} to {} handlers", self.handler_count());
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler.handle_event(&event);
        }
    }
}

/// Buffers every event it receives until drained.
///
/// Clones share the same buffer, so one clone can be subscribed while the
/// UI keeps another to drain once per frame.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<DiagramEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes all buffered events, oldest first
    pub fn drain(&self) -> Vec<DiagramEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for EventRecorder {
    fn handle_event(&mut self, event: &DiagramEvent) {
        self.events.lock().push(event.clone());
    }
}
