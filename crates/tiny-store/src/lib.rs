//! # tiny-store
//!
//! A minimal store/reducer state container with unidirectional data flow.
//!
//! ```text
//! dispatch(action) → reducer(state, action) → commit → listeners → get_state()
//! ```
//!
//! - The reducer is the only place new state is computed; it also builds
//!   the initial state when called with `None`
//! - The store owns the current state and is the single writer
//! - Listeners are told *that* something happened and pull the state
//!   themselves
//! - Reducers reuse the `Rc` of every untouched substructure, so consumers
//!   detect changes with pointer comparisons ([`shared`])
//!
//! Everything is single-threaded and synchronous. A `Store` is neither
//! `Send` nor `Sync`.
//!
//! ## Usage
//!
//! ```rust
//! use std::convert::Infallible;
//! use std::rc::Rc;
//! use tiny_store::Store;
//!
//! #[derive(Default)]
//! enum Counter {
//!     #[default]
//!     Init,
//!     Add(u32),
//! }
//!
//! fn reduce(state: Option<Rc<u32>>, action: &Counter) -> Result<Rc<u32>, Infallible> {
//!     let Some(state) = state else {
//!         return Ok(Rc::new(0));
//!     };
//!     match action {
//!         Counter::Add(n) => Ok(Rc::new(*state + n)),
//!         Counter::Init => Ok(state),
//!     }
//! }
//!
//! let store: Store<u32, Counter> = Store::new(reduce)?;
//! let weak = store.downgrade();
//! store.subscribe(move || {
//!     if let Some(store) = weak.upgrade() {
//!         println!("count is now {}", store.get_state());
//!     }
//! });
//! store.dispatch(Counter::Add(2))?;
//! assert_eq!(*store.get_state(), 2);
//! # Ok::<(), tiny_store::StoreError<Infallible>>(())
//! ```

mod error;
mod listener;
mod reducer;
pub mod shared;
mod store;

// Re-export commonly used types
pub use error::StoreError;
pub use listener::{Subscription, SubscriptionId};
pub use reducer::Reducer;
pub use store::{Store, WeakStore};
