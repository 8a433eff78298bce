//! Listener registry
//!
//! Listeners are kept in subscription order. Each registration gets its own
//! id, so registering the same callback twice yields two independent entries
//! that both fire and can be removed separately.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A zero-argument callback run after every committed transition
pub(crate) type Listener = Rc<dyn Fn()>;

/// Identifies one listener registration within a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered list of registered listeners
#[derive(Default)]
pub(crate) struct Listeners {
    entries: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns false when `id` was already removed
    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Copy of the current list, used for one notification round
    pub(crate) fn snapshot(&self) -> Vec<Listener> {
        self.entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }
}

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe)
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: SubscriptionId,
    listeners: Weak<RefCell<Listeners>>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, listeners: &Rc<RefCell<Listeners>>) -> Self {
        Self {
            id,
            listeners: Rc::downgrade(listeners),
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Remove this registration from its store
    ///
    /// Returns true if the listener was still registered. Calling it again,
    /// or after the store is gone, returns false. A notification round that
    /// is already running still calls the listener.
    pub fn unsubscribe(&self) -> bool {
        match self.listeners.upgrade() {
            Some(listeners) => {
                let removed = listeners.borrow_mut().remove(self.id);
                if removed {
                    log::trace!("Listener {:?} unsubscribed", self.id);
                }
                removed
            }
            None => false,
        }
    }
}
