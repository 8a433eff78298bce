use thiserror::Error;

/// Errors surfaced by the store engine
///
/// Both variants wrap the reducer's own error type. Listener failures are
/// not represented here: a panicking listener unwinds straight through
/// [`Store::dispatch`](crate::Store::dispatch).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError<E> {
    /// The reducer failed while producing the initial state; no store exists
    #[error("reducer failed to produce the initial state: {0}")]
    Bootstrap(E),

    /// The reducer rejected a dispatched action; the previous state was kept
    #[error("reducer failed to apply action: {0}")]
    Reducer(E),
}

impl<E> StoreError<E> {
    /// Unwrap the reducer error regardless of the phase it happened in
    pub fn into_inner(self) -> E {
        match self {
            StoreError::Bootstrap(e) | StoreError::Reducer(e) => e,
        }
    }
}
