use std::convert::Infallible;

use super::ReportingClient;
use crate::event::Properties;
use crate::EventEmitter;

/// A client that emits events through an [`EventEmitter`] for in-process
/// listeners.
///
/// Listeners receive the property record as a JSON string, or an empty
/// string for bare-name events.
pub struct EmitterClient {
    emitter: EventEmitter,
}

impl EmitterClient {
    pub fn new(emitter: EventEmitter) -> Self {
        EmitterClient { emitter }
    }

    /// Register a listener for an event name.
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(event, listener);
    }

    pub fn emitter_mut(&mut self) -> &mut EventEmitter {
        &mut self.emitter
    }

    pub fn into_emitter(self) -> EventEmitter {
        self.emitter
    }
}

impl ReportingClient for EmitterClient {
    type Error = Infallible;

    fn log_event(
        &mut self,
        name: &str,
        properties: Option<&Properties>,
    ) -> Result<(), Self::Error> {
        let payload = properties
            .map(|properties| serde_json::Value::Object(properties.clone()).to_string())
            .unwrap_or_default();
        self.emitter.emit(name, payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn listeners_receive_json_payload() {
        let mut client = EmitterClient::new(EventEmitter::new());
        let (tx, rx) = mpsc::channel::<String>();
        client.on("event-2", move |payload: String| {
            tx.send(payload).unwrap();
        });

        client
            .log_event("event-2", json!({ "name": "event-2", "something": "else" }).as_object())
            .unwrap();

        let payload = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value, json!({ "name": "event-2", "something": "else" }));
    }

    #[test]
    fn bare_events_send_empty_payload() {
        let mut client = EmitterClient::new(EventEmitter::new());
        let (tx, rx) = mpsc::channel::<String>();
        client.on("event-1", move |payload: String| {
            tx.send(payload).unwrap();
        });

        client.log_event("event-1", None).unwrap();

        assert_eq!(rx.recv_timeout(Duration::from_secs(1)).unwrap(), "");
    }
}
