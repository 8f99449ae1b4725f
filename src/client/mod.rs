//! Reporting clients - where derived events are sent.
//!
//! The adapter only ever calls [`ReportingClient::log_event`]. Transport,
//! batching and retries belong to the client.

#[cfg(feature = "emitter")]
mod emitter;
mod log;
mod recording;

use std::fmt;

use crate::event::Properties;

#[cfg(feature = "emitter")]
pub use emitter::EmitterClient;
pub use log::LogClient;
pub use recording::{LoggedEvent, RecordingClient, RecordingClientError};

/// An analytics sink with a single fire-and-forget logging call.
pub trait ReportingClient {
    type Error: fmt::Display;

    /// Log one event. `properties` is `None` for bare-name events.
    fn log_event(&mut self, name: &str, properties: Option<&Properties>)
        -> Result<(), Self::Error>;
}

impl<C: ReportingClient + ?Sized> ReportingClient for &mut C {
    type Error = C::Error;

    fn log_event(
        &mut self,
        name: &str,
        properties: Option<&Properties>,
    ) -> Result<(), Self::Error> {
        (**self).log_event(name, properties)
    }
}

impl<C: ReportingClient + ?Sized> ReportingClient for Box<C> {
    type Error = C::Error;

    fn log_event(
        &mut self,
        name: &str,
        properties: Option<&Properties>,
    ) -> Result<(), Self::Error> {
        (**self).log_event(name, properties)
    }
}
