use std::borrow::Cow;

use serde_json::{Map, Value};

/// Property record forwarded alongside a named event.
pub type Properties = Map<String, Value>;

/// An analytics event ready to be handed to a reporting client.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// A bare event name with no properties.
    Name(String),
    /// A named event with a property record.
    ///
    /// The payload sent to the client is `properties` with `name` written
    /// into it (see [`Event::payload`]).
    Named { name: String, properties: Properties },
}

impl Event {
    /// Create a bare-name event.
    pub fn name_only(name: impl Into<String>) -> Self {
        Event::Name(name.into())
    }

    /// Create a named event, writing `name` into the property record.
    pub fn named(name: impl Into<String>, mut properties: Properties) -> Self {
        let name = name.into();
        properties.insert("name".to_string(), Value::String(name.clone()));
        Event::Named { name, properties }
    }

    /// Classify a raw value as an event.
    ///
    /// Strings become [`Event::Name`]; objects with a string `name` field
    /// become [`Event::Named`] carrying the whole object. Anything else is
    /// returned as an invalid candidate.
    pub fn from_value(value: Value) -> Candidate {
        Candidate::from(value)
    }

    pub fn name(&self) -> &str {
        match self {
            Event::Name(name) => name,
            Event::Named { name, .. } => name,
        }
    }

    /// The payload passed to the reporting client, if any.
    pub fn properties(&self) -> Option<&Properties> {
        match self {
            Event::Name(_) => None,
            Event::Named { properties, .. } => Some(properties),
        }
    }

    /// The record handed to the reporting client.
    ///
    /// Always carries `name`; a record that lacks it, or holds a different
    /// value, is copied and corrected.
    pub fn payload(&self) -> Option<Cow<'_, Properties>> {
        match self {
            Event::Name(_) => None,
            Event::Named { name, properties } => match properties.get("name") {
                Some(Value::String(existing)) if existing == name => {
                    Some(Cow::Borrowed(properties))
                }
                _ => {
                    let mut properties = properties.clone();
                    properties.insert("name".to_string(), Value::String(name.clone()));
                    Some(Cow::Owned(properties))
                }
            },
        }
    }

    /// The JSON form this event would have been classified from.
    pub fn into_value(self) -> Value {
        match self {
            Event::Name(name) => Value::String(name),
            Event::Named { properties, .. } => Value::Object(properties),
        }
    }
}

impl From<&str> for Event {
    fn from(name: &str) -> Self {
        Event::Name(name.to_string())
    }
}

impl From<String> for Event {
    fn from(name: String) -> Self {
        Event::Name(name)
    }
}

impl TryFrom<Value> for Event {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match Candidate::from(value) {
            Candidate::Valid(event) => Ok(event),
            Candidate::Invalid(value) => Err(value),
        }
    }
}

/// A single value produced by a mapping, before it is forwarded.
#[derive(Clone, Debug, PartialEq)]
pub enum Candidate {
    Valid(Event),
    /// A value that does not have an event shape.
    Invalid(Value),
}

impl Candidate {
    pub fn is_valid(&self) -> bool {
        matches!(self, Candidate::Valid(_))
    }
}

impl From<Event> for Candidate {
    fn from(event: Event) -> Self {
        Candidate::Valid(event)
    }
}

impl From<Value> for Candidate {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => Candidate::Valid(Event::Name(name)),
            Value::Object(properties) => {
                let name = properties
                    .get("name")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                match name {
                    Some(name) => Candidate::Valid(Event::Named { name, properties }),
                    None => Candidate::Invalid(Value::Object(properties)),
                }
            }
            other => Candidate::Invalid(other),
        }
    }
}

impl From<&str> for Candidate {
    fn from(name: &str) -> Self {
        Candidate::Valid(Event::from(name))
    }
}

impl From<String> for Candidate {
    fn from(name: String) -> Self {
        Candidate::Valid(Event::Name(name))
    }
}
