//! A tiny single-middleware store, enough to drive the adapter the way a
//! real store would.

use std::cell::RefCell;
use std::rc::Rc;

use action_analytics::{GetState, Middleware};
use serde_json::{json, Value};

/// Current state; readable by middleware while the chain is running.
pub struct StateCell<S>(RefCell<Rc<S>>);

impl<S> GetState for StateCell<S> {
    type State = Rc<S>;

    fn get_state(&self) -> Rc<S> {
        self.0.borrow().clone()
    }
}

pub struct Store<S, A, M> {
    state: StateCell<S>,
    reducer: fn(&S, &A) -> S,
    middleware: M,
    reduced: Vec<A>,
}

impl<S, A, M> Store<S, A, M>
where
    A: Clone,
    M: Middleware<StateCell<S>, A>,
{
    pub fn new(initial: S, reducer: fn(&S, &A) -> S, middleware: M) -> Self {
        Store {
            state: StateCell(RefCell::new(Rc::new(initial))),
            reducer,
            middleware,
            reduced: Vec::new(),
        }
    }

    /// Run the action through the middleware and then the reducer.
    /// Returns the action, like a plain dispatch does.
    pub fn dispatch(&mut self, action: A) -> Result<A, M::Error> {
        let Store {
            state,
            reducer,
            middleware,
            reduced,
        } = self;
        let state = &*state;
        let reducer = *reducer;

        middleware.dispatch(state, action, |action| {
            let next = reducer(&state.get_state(), &action);
            *state.0.borrow_mut() = Rc::new(next);
            reduced.push(action.clone());
            action
        })
    }

    pub fn state(&self) -> Rc<S> {
        self.state.get_state()
    }

    /// Every action that reached the reducer, in order.
    pub fn reduced(&self) -> &[A] {
        &self.reduced
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }
}

pub fn init() -> Value {
    json!({ "items": [1, 2, 3] })
}

pub fn identity(state: &Value, _action: &Value) -> Value {
    state.clone()
}
