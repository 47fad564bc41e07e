use thiserror::Error;

use crate::model::MovieId;
use crate::repository::RepositoryError;

/// Destination requested by a screen event. Performing the navigation is up
/// to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    MovieDetails(MovieId),
}

/// Errors surfaced by view model operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewModelError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("View model derivation task is no longer running")]
    Closed,
}

impl ViewModelError {
    /// User-friendly message for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            ViewModelError::Repository(RepositoryError::NotFound { .. }) => {
                "This movie is no longer available"
            }
            ViewModelError::Repository(RepositoryError::DuplicateId { .. }) => {
                "The movie list contains conflicting entries"
            }
            ViewModelError::Closed => "This screen is no longer active",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_hides_internal_detail() {
        let err = ViewModelError::from(RepositoryError::NotFound { id: 42 });
        assert_eq!(err.user_message(), "This movie is no longer available");
        assert_eq!(err.to_string(), "Movie 42 not found");
    }

    #[test]
    fn closed_has_user_message() {
        assert_eq!(
            ViewModelError::Closed.user_message(),
            "This screen is no longer active"
        );
    }
}
