//! Movie repository seam.
//!
//! Storage and fetching live outside this crate; view models only see the
//! [`MovieRepository`] trait. [`InMemoryMovieRepository`] backs tests and the
//! preview binary.

mod memory;

use thiserror::Error;
use tokio::sync::broadcast;

use crate::model::{Movie, MovieCategory, MovieId};

pub use memory::{InMemoryMovieRepository, DEFAULT_CHANGE_CAPACITY};

/// Errors returned by repository queries and mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Movie {id} not found")]
    NotFound { id: MovieId },

    #[error("Movie {id} appears more than once")]
    DuplicateId { id: MovieId },
}

/// Signal that the movie collection changed and should be re-queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoviesChanged;

/// Queryable, observable collection of movies.
///
/// Queries return owned snapshots in repository iteration order. Change
/// signals may be sent from any thread.
pub trait MovieRepository: Send + Sync {
    /// Subscribe to change signals. Every successful mutation sends one.
    fn subscribe(&self) -> broadcast::Receiver<MoviesChanged>;

    fn get_all(&self) -> Vec<Movie>;

    fn get_favorites(&self) -> Vec<Movie> {
        self.get_all()
            .into_iter()
            .filter(|movie| movie.is_favorite)
            .collect()
    }

    fn get_by_id(&self, id: MovieId) -> Result<Movie, RepositoryError>;

    fn get_by_category(&self, category: MovieCategory) -> Vec<Movie> {
        self.get_all()
            .into_iter()
            .filter(|movie| movie.is_in(category))
            .collect()
    }

    /// Flip the favorite flag of `id` and return its new value.
    fn toggle_favorite(&self, id: MovieId) -> Result<bool, RepositoryError>;
}
