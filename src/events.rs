//! Pointer event bus used for outside-interaction dismissal
//!
//! Every pointer-down the host receives is published here before it is routed
//! to the component under the pointer. Components subscribe for as long as
//! they live; dropping the returned [`Subscription`] unsubscribes.

use ratatui::layout::Position;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A pointer-down at a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub position: Position,
}

impl PointerEvent {
    pub fn down(column: u16, row: u16) -> Self {
        Self {
            position: Position::new(column, row),
        }
    }
}

type Handler = Rc<RefCell<dyn FnMut(&PointerEvent)>>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

impl BusInner {
    fn is_subscribed(&self, id: u64) -> bool {
        self.handlers.iter().any(|(handler_id, _)| *handler_id == id)
    }
}

/// Single-threaded publish/subscribe channel for pointer events
#[derive(Clone, Default)]
pub struct PointerBus {
    inner: Rc<RefCell<BusInner>>,
}

impl PointerBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl FnMut(&PointerEvent) + 'static) -> Subscription {
        let handler: Handler = Rc::new(RefCell::new(handler));
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.push((id, handler));
        tracing::trace!(subscription = id, "pointer bus subscribe");

        Subscription {
            bus: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver `event` to every current subscriber
    ///
    /// Handlers unsubscribed while the event is being delivered are skipped.
    pub fn publish(&self, event: PointerEvent) {
        let snapshot: Vec<(u64, Handler)> = self
            .inner
            .borrow()
            .handlers
            .iter()
            .map(|(id, handler)| (*id, Rc::clone(handler)))
            .collect();

        for (id, handler) in snapshot {
            if !self.inner.borrow().is_subscribed(id) {
                continue;
            }
            // A handler publishing recursively to itself is skipped.
            if let Ok(mut handler) = handler.try_borrow_mut() {
                (&mut *handler)(&event);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

impl fmt::Debug for PointerBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Live subscription; unsubscribes on drop
#[derive(Debug)]
pub struct Subscription {
    bus: Weak<RefCell<BusInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            if let Ok(mut inner) = bus.try_borrow_mut() {
                inner.handlers.retain(|(id, _)| *id != self.id);
                tracing::trace!(subscription = self.id, "pointer bus unsubscribe");
            }
        }
    }
}
