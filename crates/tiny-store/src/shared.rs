//! Structural sharing helpers
//!
//! Reducers keep every untouched substructure behind the same `Rc` it had
//! in the previous state. Consumers then answer "did this part change?"
//! with a pointer comparison instead of a deep one:
//!
//! ```text
//! old state ──┬── title   (Rc A)        new state ──┬── title   (Rc C)  changed
//!             └── content (Rc B)                    └── content (Rc B)  same
//! ```

use std::rc::Rc;

/// True when both handles point at the same allocation
pub fn same<T>(a: &Rc<T>, b: &Rc<T>) -> bool {
    Rc::ptr_eq(a, b)
}

/// Change test for render layers that may not have a previous value yet
///
/// A missing previous value always counts as changed.
pub fn changed<T>(old: Option<&Rc<T>>, new: &Rc<T>) -> bool {
    match old {
        Some(old) => !Rc::ptr_eq(old, new),
        None => true,
    }
}

/// Copy the value behind `rc`, apply `update` to the copy, wrap it in a new `Rc`
///
/// The original allocation is never touched, even when `rc` is the only
/// handle to it. Fields of the copy that are themselves `Rc`s keep pointing
/// at the same allocations, which is what preserves sharing for siblings.
pub fn with<T, F>(rc: &Rc<T>, update: F) -> Rc<T>
where
    T: Clone,
    F: FnOnce(&mut T),
{
    let mut value = T::clone(rc);
    update(&mut value);
    Rc::new(value)
}
