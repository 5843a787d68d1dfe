use crate::error::Error;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Notifications emitted by the selector. Observers re-read the selection on `Update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorEvent {
    Update,
}

impl SelectorEvent {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "update" => Some(Self::Update),
            _ => None,
        }
    }
}

/// Returned by [`EventBus::on`], used to deregister a single handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

impl HandlerId {
    pub fn as_u64(self) -> u64 {
        self.0
    }

    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }
}

pub type Handler = Box<dyn FnMut() -> Result<(), Error>>;

#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<SelectorEvent, Vec<(HandlerId, Handler)>>,
    // never rewound, so an id from before `clear` cannot remove a newer handler
    next_id: u64,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<_, _> = self
            .handlers
            .iter()
            .map(|(event, handlers)| (*event, handlers.len()))
            .collect();
        f.debug_struct("EventBus")
            .field("handlers", &counts)
            .finish_non_exhaustive()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, event: SelectorEvent, handler: F) -> HandlerId
    where
        F: FnMut() -> Result<(), Error> + 'static,
    {
        self.next_id += 1;
        let id = HandlerId(self.next_id);
        self.handlers
            .entry(event)
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Removes one handler, or every handler for `event` when `id` is `None`.
    /// Returns whether anything was removed.
    pub fn off(&mut self, event: SelectorEvent, id: Option<HandlerId>) -> bool {
        let Some(handlers) = self.handlers.get_mut(&event) else {
            return false;
        };

        let before = handlers.len();
        match id {
            Some(id) => handlers.retain(|(handler_id, _)| *handler_id != id),
            None => handlers.clear(),
        }
        handlers.len() != before
    }

    /// Calls the handlers for `event` in registration order. The first failing handler
    /// stops the emission and its error is returned.
    pub fn emit(&mut self, event: SelectorEvent) -> Result<(), Error> {
        let Some(handlers) = self.handlers.get_mut(&event) else {
            return Ok(());
        };

        for (_, handler) in handlers.iter_mut() {
            handler()?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    pub fn handler_count(&self, event: SelectorEvent) -> usize {
        self.handlers.get(&event).map_or(0, Vec::len)
    }
}

/// Handlers whose calls are recorded while the selector is borrowed and replayed after the
/// borrow has ended, so they can read the selection back.
pub struct DeferredHandlers<T> {
    queue: Rc<RefCell<Vec<T>>>,
}

impl<T> Default for DeferredHandlers<T> {
    fn default() -> Self {
        Self {
            queue: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T> std::fmt::Debug for DeferredHandlers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredHandlers")
            .field("queued", &self.queue.borrow().len())
            .finish()
    }
}

impl<T: Clone + 'static> DeferredHandlers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// An [`EventBus`] handler that queues `handler` each time the event fires.
    pub fn recorder(&self, handler: T) -> impl FnMut() -> Result<(), Error> + 'static {
        let queue = Rc::clone(&self.queue);
        move || {
            queue.borrow_mut().push(handler.clone());
            Ok(())
        }
    }

    /// Empties the queue, returning the calls in the order they were recorded.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }

    pub fn clear(&self) {
        self.queue.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

/// Calls each queued handler in order. The first error stops the replay and is returned.
pub fn replay<T, E>(queued: Vec<T>, mut call: impl FnMut(T) -> Result<(), E>) -> Result<(), E> {
    for handler in queued {
        call(handler)?;
    }
    Ok(())
}
