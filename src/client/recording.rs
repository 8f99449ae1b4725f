use std::fmt;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::ReportingClient;
use crate::event::Properties;

/// One recorded `log_event` call.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedEvent {
    pub name: String,
    pub properties: Option<Properties>,
}

impl LoggedEvent {
    pub fn new(name: impl Into<String>, properties: Option<Properties>) -> Self {
        LoggedEvent {
            name: name.into(),
            properties,
        }
    }

    /// The call as a `[name, properties]` pair, `null` when there were none.
    pub fn to_value(&self) -> Value {
        let properties = self
            .properties
            .clone()
            .map_or(Value::Null, Value::Object);
        Value::Array(vec![Value::String(self.name.clone()), properties])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordingClientError {
    LogPoisoned,
}

impl fmt::Display for RecordingClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordingClientError::LogPoisoned => write!(f, "recording client log poisoned"),
        }
    }
}

impl std::error::Error for RecordingClientError {}

/// A client that keeps every call in memory.
///
/// Clones share the same log, so a test can hand one clone to the adapter
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingClient {
    log: Arc<Mutex<Vec<LoggedEvent>>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(log: Arc<Mutex<Vec<LoggedEvent>>>) -> Self {
        RecordingClient { log }
    }

    /// A copy of every call so far, in call order.
    pub fn events(&self) -> Result<Vec<LoggedEvent>, RecordingClientError> {
        let log = self
            .log
            .lock()
            .map_err(|_| RecordingClientError::LogPoisoned)?;
        Ok(log.clone())
    }

    /// The log as a JSON array of `[name, properties]` pairs.
    pub fn to_value(&self) -> Result<Value, RecordingClientError> {
        let events = self.events()?;
        Ok(Value::Array(events.iter().map(LoggedEvent::to_value).collect()))
    }

    pub fn len(&self) -> Result<usize, RecordingClientError> {
        let log = self
            .log
            .lock()
            .map_err(|_| RecordingClientError::LogPoisoned)?;
        Ok(log.len())
    }

    pub fn is_empty(&self) -> Result<bool, RecordingClientError> {
        self.len().map(|len| len == 0)
    }

    pub fn clear(&self) -> Result<(), RecordingClientError> {
        let mut log = self
            .log
            .lock()
            .map_err(|_| RecordingClientError::LogPoisoned)?;
        log.clear();
        Ok(())
    }
}

impl ReportingClient for RecordingClient {
    type Error = RecordingClientError;

    fn log_event(
        &mut self,
        name: &str,
        properties: Option<&Properties>,
    ) -> Result<(), Self::Error> {
        let mut log = self
            .log
            .lock()
            .map_err(|_| RecordingClientError::LogPoisoned)?;
        log.push(LoggedEvent::new(name, properties.cloned()));
        Ok(())
    }
}
