//! Shared test harness: a minimal reducer store and a trace capture layer.

#![allow(dead_code)]

mod capture;
mod store;

pub use capture::{capture_events, Captured};
pub use store::{init, identity, StateCell, Store};
