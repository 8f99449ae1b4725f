use std::convert::Infallible;

use super::ReportingClient;
use crate::event::Properties;

/// A client that writes each event as an `info` trace record.
///
/// Handy as a stand-in during development when no analytics backend is
/// wired up.
#[derive(Debug, Clone, Default)]
pub struct LogClient {
    label: Option<String>,
}

impl LogClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every record with a label, e.g. the backend this replaces.
    pub fn with_label(label: impl Into<String>) -> Self {
        LogClient {
            label: Some(label.into()),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl ReportingClient for LogClient {
    type Error = Infallible;

    fn log_event(
        &mut self,
        name: &str,
        properties: Option<&Properties>,
    ) -> Result<(), Self::Error> {
        let label = self.label.as_deref().unwrap_or("analytics");
        match properties {
            Some(properties) => {
                let properties = serde_json::Value::Object(properties.clone());
                tracing::info!(client = label, event = name, properties = %properties, "[EVENT]");
            }
            None => tracing::info!(client = label, event = name, "[EVENT]"),
        }
        Ok(())
    }
}
