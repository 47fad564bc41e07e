//! Plumbing shared by the view model derivation tasks.

use tokio::sync::broadcast::{self, error::RecvError};

use crate::repository::MoviesChanged;

/// Outcome of waiting for the next repository signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChangeSignal {
    /// The collection changed; re-query and re-derive.
    Changed,
    /// The repository dropped its sender; no more signals will come.
    Closed,
}

/// Wait for the next change signal.
///
/// Signals carry no payload, so a lagged receiver is treated as a single
/// change: one re-derivation covers every skipped signal.
pub(crate) async fn next_change(changes: &mut broadcast::Receiver<MoviesChanged>) -> ChangeSignal {
    match changes.recv().await {
        Ok(MoviesChanged) => ChangeSignal::Changed,
        Err(RecvError::Lagged(skipped)) => {
            tracing::debug!(skipped, "Change receiver lagged, re-deriving once");
            ChangeSignal::Changed
        }
        Err(RecvError::Closed) => {
            tracing::info!("Repository change channel closed");
            ChangeSignal::Closed
        }
    }
}
