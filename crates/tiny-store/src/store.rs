use crate::error::StoreError;
use crate::listener::{Listeners, Subscription};
use crate::reducer::Reducer;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt;
use std::rc::{Rc, Weak};

/// Store - holds the current state and runs the dispatch/notify loop
///
/// The store is a handle: cloning it is cheap and every clone talks to the
/// same state, reducer and listener list. Stores built separately never
/// share anything.
///
/// - State is only replaced through [`Store::dispatch`]
/// - Listeners run after every committed transition, in subscription order,
///   and read the new state through [`Store::get_state`]
/// - The store does no change detection of its own; a reducer that returns
///   the same `Rc` still triggers a notification round
///
/// # Re-entrancy
///
/// Dispatching from inside a listener does not recurse. The action is queued
/// and applied once the running notification round has finished, before the
/// outermost `dispatch` call returns. Each round works on a snapshot of the
/// listener list taken when the round starts.
///
/// # Failures
///
/// A reducer error leaves the state untouched and skips notification. A
/// panicking listener unwinds out of `dispatch`; the transition it was
/// notified about stays committed, later listeners of that round are
/// skipped, and queued actions are discarded.
pub struct Store<S, A, E = Infallible> {
    inner: Rc<Inner<S, A, E>>,
}

struct Inner<S, A, E> {
    reducer: Box<dyn Reducer<S, A, Error = E>>,
    state: RefCell<Rc<S>>,
    listeners: Rc<RefCell<Listeners>>,
    queue: RefCell<VecDeque<A>>,
    dispatching: Cell<bool>,
    dispatch_count: Cell<u64>,
}

impl<S, A, E> Inner<S, A, E> {
    fn next_queued(&self) -> Option<A> {
        self.queue.borrow_mut().pop_front()
    }
}

/// Marks a dispatch as in progress; resets the store on exit, including unwinds
struct DispatchRound<'a, S, A, E> {
    inner: &'a Inner<S, A, E>,
}

impl<'a, S, A, E> DispatchRound<'a, S, A, E> {
    fn enter(inner: &'a Inner<S, A, E>) -> Self {
        inner.dispatching.set(true);
        Self { inner }
    }
}

impl<S, A, E> Drop for DispatchRound<'_, S, A, E> {
    fn drop(&mut self) {
        self.inner.dispatching.set(false);
        let discarded = self.inner.queue.borrow_mut().drain(..).count();
        if discarded > 0 {
            log::warn!("Discarded {} queued action(s) after failed dispatch", discarded);
        }
    }
}

impl<S, A, E> Store<S, A, E> {
    /// Create a store, using `A::default()` as the bootstrap action
    pub fn new<R>(reducer: R) -> Result<Self, StoreError<E>>
    where
        R: Reducer<S, A, Error = E> + 'static,
        A: Default,
    {
        Self::with_init_action(reducer, A::default())
    }

    /// Create a store with an explicit bootstrap action
    ///
    /// The reducer is called once with no previous state. If it fails, no
    /// store is created.
    pub fn with_init_action<R>(reducer: R, init: A) -> Result<Self, StoreError<E>>
    where
        R: Reducer<S, A, Error = E> + 'static,
    {
        let initial = reducer.reduce(None, &init).map_err(|e| {
            log::warn!("Reducer failed to produce the initial state");
            StoreError::Bootstrap(e)
        })?;
        log::debug!("Store initialized");

        Ok(Self {
            inner: Rc::new(Inner {
                reducer: Box::new(reducer),
                state: RefCell::new(initial),
                listeners: Rc::new(RefCell::new(Listeners::default())),
                queue: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
                dispatch_count: Cell::new(0),
            }),
        })
    }

    /// Get the current state
    pub fn get_state(&self) -> Rc<S> {
        Rc::clone(&self.inner.state.borrow())
    }

    /// Apply an action and notify listeners
    ///
    /// Called from inside a listener, the action is queued and `Ok(())` is
    /// returned right away; a failure of the queued action is reported by
    /// the outermost `dispatch` instead.
    pub fn dispatch(&self, action: A) -> Result<(), StoreError<E>> {
        if self.inner.dispatching.get() {
            log::debug!("Dispatch during notification, queueing action");
            self.inner.queue.borrow_mut().push_back(action);
            return Ok(());
        }

        let _round = DispatchRound::enter(&self.inner);
        self.apply(action)?;
        while let Some(action) = self.inner.next_queued() {
            self.apply(action)?;
        }
        Ok(())
    }

    fn apply(&self, action: A) -> Result<(), StoreError<E>> {
        let current = self.get_state();
        let next = self
            .inner
            .reducer
            .reduce(Some(Rc::clone(&current)), &action)
            .map_err(|e| {
                log::warn!("Reducer rejected action, keeping previous state");
                StoreError::Reducer(e)
            })?;

        if Rc::ptr_eq(&current, &next) {
            log::trace!("Reducer returned the previous state");
        }
        drop(current);

        *self.inner.state.borrow_mut() = next;
        self.inner
            .dispatch_count
            .set(self.inner.dispatch_count.get() + 1);

        let listeners = self.inner.listeners.borrow().snapshot();
        log::trace!("Notifying {} listener(s)", listeners.len());
        for listener in listeners {
            listener();
        }
        Ok(())
    }

    /// Register a listener to run after every dispatch
    ///
    /// The same callback may be registered more than once; each
    /// registration is called once per dispatch.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.inner.listeners.borrow_mut().add(Rc::new(listener));
        log::trace!("Listener {:?} subscribed", id);
        Subscription::new(id, &self.inner.listeners)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Number of committed transitions, not counting the bootstrap
    pub fn dispatch_count(&self) -> u64 {
        self.inner.dispatch_count.get()
    }

    /// Non-owning handle, for listeners that need to reach their own store
    pub fn downgrade(&self) -> WeakStore<S, A, E> {
        WeakStore {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl<S, A, E> Clone for Store<S, A, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: fmt::Debug, A, E> fmt::Debug for Store<S, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.inner.state.borrow())
            .field("listeners", &self.listener_count())
            .field("dispatch_count", &self.dispatch_count())
            .finish()
    }
}

/// Weak counterpart of [`Store`]
///
/// A listener holding a strong `Store` clone keeps the store alive through
/// its own registration. Capture a `WeakStore` instead.
pub struct WeakStore<S, A, E = Infallible> {
    inner: Weak<Inner<S, A, E>>,
}

impl<S, A, E> WeakStore<S, A, E> {
    pub fn upgrade(&self) -> Option<Store<S, A, E>> {
        self.inner.upgrade().map(|inner| Store { inner })
    }
}

impl<S, A, E> Clone for WeakStore<S, A, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}
