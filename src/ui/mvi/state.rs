//! Base trait for UI state in the MVI architecture.

/// Marker trait for published UI state.
///
/// States are:
/// - Immutable (a change produces a new value, never an in-place edit)
/// - Self-contained (everything a renderer needs)
/// - Comparable (PartialEq decides whether a re-derivation is published)
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
