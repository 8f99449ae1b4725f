use std::error::Error;
use std::fmt;

/// Failure while handling one action.
///
/// `E` is the reporting client's error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterError<E> {
    /// A table mapping had no entry for the action's type.
    UnmappedAction { action_type: String },
    /// The reporting client failed to log an event.
    Client { event: String, source: E },
}

impl<E: fmt::Display> fmt::Display for AdapterError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterError::UnmappedAction { action_type } => {
                write!(f, "no mapping entry for action type {:?}", action_type)
            }
            AdapterError::Client { event, source } => {
                write!(f, "reporting client failed to log {:?}: {}", event, source)
            }
        }
    }
}

impl<E: Error + 'static> Error for AdapterError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AdapterError::Client { source, .. } => Some(source),
            AdapterError::UnmappedAction { .. } => None,
        }
    }
}
