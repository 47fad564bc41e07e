//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions on a screen (category picks, resets) and
/// are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
