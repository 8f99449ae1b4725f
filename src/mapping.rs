use std::collections::HashMap;
use std::fmt;

use crate::action::Action;
use crate::event_result::EventResult;

/// A boxed `(state, action) -> events` function.
pub type MapFn<S, A> = Box<dyn Fn(&S, &A) -> EventResult>;

fn boxed<S, A, F, R>(f: F) -> MapFn<S, A>
where
    F: Fn(&S, &A) -> R + 'static,
    R: Into<EventResult>,
{
    Box::new(move |state: &S, action: &A| f(state, action).into())
}

/// How actions are translated into events.
///
/// A mapping is fixed when the adapter is built and never changes afterwards.
pub enum Mapping<S, A> {
    /// One function for every action.
    Function(MapFn<S, A>),
    /// One function per action type.
    Table(MappingTable<S, A>),
}

impl<S, A: Action> Mapping<S, A> {
    pub fn function<F, R>(f: F) -> Self
    where
        F: Fn(&S, &A) -> R + 'static,
        R: Into<EventResult>,
    {
        Mapping::Function(boxed(f))
    }

    pub fn table(table: MappingTable<S, A>) -> Self {
        Mapping::Table(table)
    }

    /// Run the mapping for one action.
    ///
    /// Returns `None` when the mapping is a table with no entry for the
    /// action's type; the caller decides whether that is fatal.
    pub fn resolve(&self, state: &S, action: &A) -> Option<EventResult> {
        match self {
            Mapping::Function(f) => Some(f(state, action)),
            Mapping::Table(table) => table
                .get(action.action_type())
                .map(|f| f(state, action)),
        }
    }
}

impl<S, A> From<MappingTable<S, A>> for Mapping<S, A> {
    fn from(table: MappingTable<S, A>) -> Self {
        Mapping::Table(table)
    }
}

impl<S, A> fmt::Debug for Mapping<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mapping::Function(_) => f.write_str("Mapping::Function(..)"),
            Mapping::Table(table) => f.debug_tuple("Mapping::Table").field(table).finish(),
        }
    }
}

/// Per-action-type mapping entries.
///
/// # Example
///
/// ```
/// use action_analytics::{Mapping, MappingTable};
/// use serde_json::Value;
///
/// let mapping: Mapping<Value, Value> = MappingTable::<Value, Value>::new()
///     .on("UserDidThing", |_, _| "user-did-thing")
///     .on("UserReadThing", |_, _| "user-read-thing")
///     .into();
/// ```
pub struct MappingTable<S, A> {
    entries: HashMap<String, MapFn<S, A>>,
}

impl<S, A> Default for MappingTable<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> MappingTable<S, A> {
    pub fn new() -> Self {
        MappingTable {
            entries: HashMap::new(),
        }
    }

    /// Add an entry, replacing any previous entry for the same type.
    pub fn on<F, R>(mut self, action_type: impl Into<String>, f: F) -> Self
    where
        F: Fn(&S, &A) -> R + 'static,
        R: Into<EventResult>,
    {
        self.insert(action_type, f);
        self
    }

    pub fn insert<F, R>(&mut self, action_type: impl Into<String>, f: F)
    where
        F: Fn(&S, &A) -> R + 'static,
        R: Into<EventResult>,
    {
        self.entries.insert(action_type.into(), boxed(f));
    }

    pub fn get(&self, action_type: &str) -> Option<&MapFn<S, A>> {
        self.entries.get(action_type)
    }

    pub fn contains(&self, action_type: &str) -> bool {
        self.entries.contains_key(action_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S, A> fmt::Debug for MappingTable<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_set().entries(keys).finish()
    }
}
