use std::borrow::Borrow;
use std::fmt;

use serde_json::Value;

use super::{GetState, Middleware};
use crate::action::Action;
use crate::client::ReportingClient;
use crate::config::{AdapterConfig, ClientErrorPolicy, UnmappedAction};
use crate::error::AdapterError;
use crate::event::{Candidate, Event};
use crate::event_result::EventResult;
use crate::mapping::Mapping;

/// Build an adapter with the default configuration.
pub fn create_adapter<C, S, A>(
    client: C,
    mapping: impl Into<Mapping<S, A>>,
) -> EventDispatchAdapter<C, S, A>
where
    C: ReportingClient,
    A: Action,
{
    EventDispatchAdapter::new(client, mapping)
}

/// Derives analytics events from dispatched actions and forwards them to a
/// reporting client.
///
/// For every action the mapping is run against the current state, valid
/// events are logged in order, and then the unmodified action is handed to
/// the next stage exactly once.
///
/// # Example
///
/// ```
/// use action_analytics::{create_adapter, Mapping, RecordingClient, Snapshot};
/// use serde_json::{json, Value};
///
/// let client = RecordingClient::new();
/// let mut adapter = create_adapter(
///     client.clone(),
///     Mapping::function(|_: &Value, action: &Value| {
///         json!({ "name": "UserDidThing", "thing": action["type"] })
///     }),
/// );
///
/// let state = json!({ "items": [1, 2, 3] });
/// let passed = adapter
///     .handle(&Snapshot(&state), json!({ "type": "foo" }), |action| action)
///     .unwrap();
///
/// assert_eq!(passed, json!({ "type": "foo" }));
/// assert_eq!(
///     client.to_value().unwrap(),
///     json!([["UserDidThing", { "name": "UserDidThing", "thing": "foo" }]])
/// );
/// ```
pub struct EventDispatchAdapter<C, S, A> {
    client: C,
    mapping: Mapping<S, A>,
    config: AdapterConfig,
}

impl<C, S, A> EventDispatchAdapter<C, S, A>
where
    C: ReportingClient,
    A: Action,
{
    pub fn new(client: C, mapping: impl Into<Mapping<S, A>>) -> Self {
        Self::with_config(client, mapping, AdapterConfig::default())
    }

    pub fn with_config(
        client: C,
        mapping: impl Into<Mapping<S, A>>,
        config: AdapterConfig,
    ) -> Self {
        EventDispatchAdapter {
            client,
            mapping: mapping.into(),
            config,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn into_client(self) -> C {
        self.client
    }

    pub fn mapping(&self) -> &Mapping<S, A> {
        &self.mapping
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Report events for `action`, then pass it to `next`.
    ///
    /// State is read from the store once, before the mapping runs. If the
    /// mapping lookup or the client fails (see [`AdapterConfig`]), the error
    /// is returned and `next` is never called.
    pub fn handle<G, N, R>(
        &mut self,
        store: &G,
        action: A,
        next: N,
    ) -> Result<R, AdapterError<C::Error>>
    where
        G: GetState,
        G::State: Borrow<S>,
        N: FnOnce(A) -> R,
    {
        {
            let state = store.get_state();
            self.report(<G::State as Borrow<S>>::borrow(&state), &action)?;
        }
        Ok(next(action))
    }

    /// The curried form: bind a store and a next stage, get back a handler
    /// that takes actions.
    pub fn bind<'a, G, N, R>(
        &'a mut self,
        store: &'a G,
        mut next: N,
    ) -> impl FnMut(A) -> Result<R, AdapterError<C::Error>> + 'a
    where
        G: GetState,
        G::State: Borrow<S>,
        N: FnMut(A) -> R + 'a,
        R: 'a,
    {
        move |action| self.handle(store, action, &mut next)
    }

    /// Run the mapping for one action and forward the resulting events.
    ///
    /// Returns the number of events the client accepted.
    pub fn report(&mut self, state: &S, action: &A) -> Result<usize, AdapterError<C::Error>> {
        let result = match self.mapping.resolve(state, action) {
            Some(result) => result,
            None => match self.config.unmapped {
                UnmappedAction::Fail => {
                    return Err(AdapterError::UnmappedAction {
                        action_type: action.action_type().to_string(),
                    })
                }
                UnmappedAction::Ignore => {
                    tracing::trace!(
                        action_type = action.action_type(),
                        "no mapping entry for action"
                    );
                    EventResult::Nothing
                }
            },
        };

        match result {
            EventResult::Nothing | EventResult::Single(Candidate::Invalid(_)) => Ok(0),
            EventResult::Single(Candidate::Valid(event)) => {
                self.forward(&event).map(usize::from)
            }
            EventResult::Sequence(candidates) => {
                let mut forwarded = 0;
                for candidate in candidates {
                    match candidate {
                        Candidate::Valid(event) => {
                            if self.forward(&event)? {
                                forwarded += 1;
                            }
                        }
                        Candidate::Invalid(value) => self.warn_invalid(action, &value),
                    }
                }
                Ok(forwarded)
            }
        }
    }

    fn forward(&mut self, event: &Event) -> Result<bool, AdapterError<C::Error>> {
        tracing::debug!(event = event.name(), "forwarding event");
        let payload = event.payload();
        match self.client.log_event(event.name(), payload.as_deref()) {
            Ok(()) => Ok(true),
            Err(error) => match self.config.client_errors {
                ClientErrorPolicy::Propagate => Err(AdapterError::Client {
                    event: event.name().to_string(),
                    source: error,
                }),
                ClientErrorPolicy::Warn => {
                    tracing::warn!(
                        event = event.name(),
                        error = %error,
                        "reporting client failed to log event"
                    );
                    Ok(false)
                }
            },
        }
    }

    fn warn_invalid(&self, action: &A, candidate: &Value) {
        if self.config.diagnostics {
            tracing::warn!(
                action = ?action,
                candidate = %candidate,
                "action mapped to something that is not an event"
            );
        }
    }
}

impl<C, S, A, G> Middleware<G, A> for EventDispatchAdapter<C, S, A>
where
    C: ReportingClient,
    A: Action,
    G: GetState,
    G::State: Borrow<S>,
{
    type Error = AdapterError<C::Error>;

    fn dispatch<N, R>(&mut self, store: &G, action: A, next: N) -> Result<R, Self::Error>
    where
        N: FnOnce(A) -> R,
    {
        self.handle(store, action, next)
    }
}

impl<C: fmt::Debug, S, A> fmt::Debug for EventDispatchAdapter<C, S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatchAdapter")
            .field("client", &self.client)
            .field("mapping", &self.mapping)
            .field("config", &self.config)
            .finish()
    }
}
