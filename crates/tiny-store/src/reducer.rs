//! Reducer contract
//!
//! A reducer is a pure function of `(previous state, action) -> next state`.
//! The store calls it once with `None` during construction to obtain the
//! initial state, and with `Some(current)` on every dispatch afterwards.
//!
//! Rules a reducer must follow:
//! - `None` in, fully initialized state out
//! - unrecognized action: return the input `Rc` untouched (same pointer)
//! - recognized action: return a new `Rc`, reusing the `Rc`s of every
//!   substructure the action did not touch (see [`crate::shared`])
//! - no side effects, deterministic
//!
//! The engine cannot check any of these. Violations only show up as
//! consumers redrawing too much or too little.

use std::rc::Rc;

/// Computes the next state from the previous one and an action
pub trait Reducer<S, A> {
    /// Error returned when the reducer refuses an action
    type Error;

    /// Produce the next state
    ///
    /// `state` is `None` exactly once, for the bootstrap transition.
    fn reduce(&self, state: Option<Rc<S>>, action: &A) -> Result<Rc<S>, Self::Error>;
}

impl<S, A, E, F> Reducer<S, A> for F
where
    F: Fn(Option<Rc<S>>, &A) -> Result<Rc<S>, E>,
{
    type Error = E;

    fn reduce(&self, state: Option<Rc<S>>, action: &A) -> Result<Rc<S>, E> {
        self(state, action)
    }
}
