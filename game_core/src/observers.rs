//! Map observers: change notifications from the battle to whoever draws it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Something on the board changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEvent {
    /// The board was rebuilt with a fresh formation
    Reset { ships: usize },
    /// An invader was removed from the formation
    ShipDestroyed {
        row: usize,
        column: usize,
        remaining: usize,
    },
    /// The defender spent a shot this frame
    DefenderFired { shots_left: u32 },
    /// The last invader is gone
    Cleared,
}

/// Handle returned by [`MapObservers::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&MapEvent)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    observers: Vec<(ObserverId, Observer)>,
    // Set while observers are running; removals are applied afterwards
    dispatching: bool,
    in_flight: Vec<ObserverId>,
    removed: Vec<ObserverId>,
}

/// Shared observer registry. Clones refer to the same set of observers.
#[derive(Clone, Default)]
pub struct MapObservers {
    inner: Rc<RefCell<Registry>>,
}

impl MapObservers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; it receives every later event in subscription order
    pub fn subscribe(&self, observer: impl FnMut(&MapEvent) + 'static) -> ObserverId {
        let mut registry = self.inner.borrow_mut();
        let id = ObserverId(registry.next_id);
        registry.next_id += 1;
        registry.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if the id is unknown.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut registry = self.inner.borrow_mut();
        if registry.dispatching {
            let registered = registry.in_flight.contains(&id)
                || registry.observers.iter().any(|(observer_id, _)| *observer_id == id);
            if !registered || registry.removed.contains(&id) {
                return false;
            }
            registry.removed.push(id);
            return true;
        }
        let before = registry.observers.len();
        registry.observers.retain(|(observer_id, _)| *observer_id != id);
        registry.observers.len() != before
    }

    /// Deliver an event to every observer
    pub fn notify(&self, event: &MapEvent) {
        let mut running = {
            let mut registry = self.inner.borrow_mut();
            if registry.dispatching {
                // Re-entrant notify from inside an observer is dropped
                log::warn!("Nested map event ignored: {:?}", event);
                return;
            }
            registry.dispatching = true;
            registry.in_flight = registry.observers.iter().map(|(id, _)| *id).collect();
            std::mem::take(&mut registry.observers)
        };

        for (_, observer) in running.iter_mut() {
            observer(event);
        }

        let mut registry = self.inner.borrow_mut();
        // Observers subscribed during dispatch go after the existing ones
        running.append(&mut registry.observers);
        let removed = std::mem::take(&mut registry.removed);
        running.retain(|(id, _)| !removed.contains(id));
        registry.observers = running;
        registry.dispatching = false;
        registry.in_flight.clear();
    }

    pub fn len(&self) -> usize {
        let registry = self.inner.borrow();
        registry.in_flight.len() + registry.observers.len() - registry.removed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for MapObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapObservers")
            .field("observers", &self.len())
            .finish()
    }
}
