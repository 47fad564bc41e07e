//! Independently published part of a screen's state.

use tokio::sync::watch;

use crate::ui::mvi::UiState;

/// Latest-value cache plus change notification for one region.
///
/// Subscribers see the current snapshot immediately and are woken on every
/// publish. Only the derivation task of the owning view model publishes, so
/// snapshots are delivered in publish order and the newest always wins.
pub struct Region<S: UiState> {
    sender: watch::Sender<S>,
}

impl<S: UiState> Region<S> {
    pub fn new(initial: S) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.sender.subscribe()
    }

    /// Clone of the current snapshot.
    pub fn current(&self) -> S {
        self.sender.borrow().clone()
    }

    /// Replace the snapshot unless it is structurally equal to the current
    /// one. Returns whether subscribers were notified.
    pub fn publish(&self, snapshot: S) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == snapshot {
                return false;
            }
            *current = snapshot;
            true
        })
    }
}
