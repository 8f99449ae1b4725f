use serde::Deserialize;

/// What to do when a table mapping has no entry for an action's type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmappedAction {
    /// Return [`AdapterError::UnmappedAction`](crate::AdapterError) without
    /// passing the action on.
    #[default]
    Fail,
    /// Treat the action as producing no events.
    Ignore,
}

/// What to do when the reporting client rejects an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientErrorPolicy {
    /// Stop at the first failure and return it; the action is not passed on.
    #[default]
    Propagate,
    /// Log the failure and keep going.
    Warn,
}

/// Adapter configuration.
///
/// Can be loaded from JSON; missing fields take their defaults:
///
/// ```
/// use action_analytics::{AdapterConfig, UnmappedAction};
///
/// let config: AdapterConfig =
///     serde_json::from_str(r#"{ "diagnostics": false, "unmapped": "ignore" }"#).unwrap();
/// assert!(!config.diagnostics);
/// assert_eq!(config.unmapped, UnmappedAction::Ignore);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Emit a warning for invalid events inside a sequence.
    pub diagnostics: bool,
    pub unmapped: UnmappedAction,
    pub client_errors: ClientErrorPolicy,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            diagnostics: true,
            unmapped: UnmappedAction::default(),
            client_errors: ClientErrorPolicy::default(),
        }
    }
}

impl AdapterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with diagnostics turned off.
    pub fn production() -> Self {
        Self {
            diagnostics: false,
            ..Self::default()
        }
    }

    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    pub fn with_unmapped(mut self, policy: UnmappedAction) -> Self {
        self.unmapped = policy;
        self
    }

    pub fn with_client_errors(mut self, policy: ClientErrorPolicy) -> Self {
        self.client_errors = policy;
        self
    }
}
