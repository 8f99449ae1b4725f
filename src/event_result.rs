use serde::Serialize;
use serde_json::Value;

use crate::event::{Candidate, Event};

/// What a mapping produced for one action.
///
/// A `Sequence` is validated element by element and invalid elements are
/// reported. A `Single` invalid candidate is dropped without a diagnostic.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EventResult {
    #[default]
    Nothing,
    Single(Candidate),
    Sequence(Vec<Candidate>),
}

impl EventResult {
    /// Serialize a typed value and classify the resulting JSON.
    ///
    /// Sequences serialize to arrays and are treated as a `Sequence`.
    pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(EventResult::from)
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, EventResult::Nothing)
    }

    /// Valid events in the order they would be forwarded.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        let candidates: &[Candidate] = match self {
            EventResult::Nothing => &[],
            EventResult::Single(candidate) => std::slice::from_ref(candidate),
            EventResult::Sequence(candidates) => candidates,
        };
        candidates.iter().filter_map(|candidate| match candidate {
            Candidate::Valid(event) => Some(event),
            Candidate::Invalid(_) => None,
        })
    }
}

impl From<Value> for EventResult {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                EventResult::Sequence(items.into_iter().map(Candidate::from).collect())
            }
            other => EventResult::Single(Candidate::from(other)),
        }
    }
}

impl From<Candidate> for EventResult {
    fn from(candidate: Candidate) -> Self {
        EventResult::Single(candidate)
    }
}

impl From<Event> for EventResult {
    fn from(event: Event) -> Self {
        EventResult::Single(Candidate::Valid(event))
    }
}

impl From<&str> for EventResult {
    fn from(name: &str) -> Self {
        EventResult::Single(Candidate::from(name))
    }
}

impl From<String> for EventResult {
    fn from(name: String) -> Self {
        EventResult::Single(Candidate::from(name))
    }
}

impl From<()> for EventResult {
    fn from(_: ()) -> Self {
        EventResult::Nothing
    }
}

impl<T: Into<EventResult>> From<Option<T>> for EventResult {
    fn from(value: Option<T>) -> Self {
        value.map_or(EventResult::Nothing, Into::into)
    }
}

impl<T: Into<Candidate>> From<Vec<T>> for EventResult {
    fn from(items: Vec<T>) -> Self {
        EventResult::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Candidate>, const N: usize> From<[T; N]> for EventResult {
    fn from(items: [T; N]) -> Self {
        EventResult::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Candidate>> FromIterator<T> for EventResult {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        EventResult::Sequence(iter.into_iter().map(Into::into).collect())
    }
}
