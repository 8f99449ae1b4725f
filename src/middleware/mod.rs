//! Middleware plumbing between a store and the event adapter.
//!
//! A host store calls [`Middleware::dispatch`] once per action, handing it a
//! read-only view of the store and the next stage of its chain. This is the
//! `store -> next -> action` shape flattened into one call;
//! [`EventDispatchAdapter::bind`] gives back the curried form.

mod adapter;

pub use adapter::{create_adapter, EventDispatchAdapter};

/// Read access to the store's current state.
pub trait GetState {
    type State;

    fn get_state(&self) -> Self::State;
}

/// A stage in a store's dispatch chain.
pub trait Middleware<G: GetState, A> {
    type Error;

    /// Handle one action and hand it to `next`, returning what `next` returns.
    fn dispatch<N, R>(&mut self, store: &G, action: A, next: N) -> Result<R, Self::Error>
    where
        N: FnOnce(A) -> R;
}

/// A borrowed state exposed as a store.
#[derive(Debug)]
pub struct Snapshot<'a, S>(pub &'a S);

impl<'a, S> Clone for Snapshot<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S> Copy for Snapshot<'a, S> {}

impl<'a, S> GetState for Snapshot<'a, S> {
    type State = &'a S;

    fn get_state(&self) -> &'a S {
        self.0
    }
}
