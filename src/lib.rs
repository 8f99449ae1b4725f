//! Derive analytics events from store actions.
//!
//! An [`EventDispatchAdapter`] sits in a store's dispatch chain. For each
//! action it runs a [`Mapping`] against the current state, forwards every
//! valid [`Event`] to a [`ReportingClient`], and then passes the action on
//! unchanged.

mod action;
mod client;
mod config;
mod error;
mod event;
mod event_result;
mod mapping;
mod middleware;

pub use action::Action;
#[cfg(feature = "emitter")]
pub use client::EmitterClient;
pub use client::{LogClient, LoggedEvent, RecordingClient, RecordingClientError, ReportingClient};
pub use config::{AdapterConfig, ClientErrorPolicy, UnmappedAction};
pub use error::AdapterError;
pub use event::{Candidate, Event, Properties};
pub use event_result::EventResult;
pub use mapping::{MapFn, Mapping, MappingTable};
pub use middleware::{create_adapter, EventDispatchAdapter, GetState, Middleware, Snapshot};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
