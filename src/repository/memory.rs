use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;

use crate::model::{find_duplicate_id, Movie, MovieId};
use crate::repository::{MovieRepository, MoviesChanged, RepositoryError};

/// Default buffer for change signals. Signals carry no payload, so a lagging
/// receiver loses nothing but redundant wake-ups.
pub const DEFAULT_CHANGE_CAPACITY: usize = 64;

/// Thread-safe in-memory movie collection.
///
/// Uses a read-write lock: queries share the lock, toggles and reloads take
/// it exclusively so each call applies exactly one flip.
#[derive(Clone)]
pub struct InMemoryMovieRepository {
    inner: Arc<RwLock<Vec<Movie>>>,
    changes: broadcast::Sender<MoviesChanged>,
}

impl InMemoryMovieRepository {
    /// Create a repository over `movies`.
    ///
    /// Fails with [`RepositoryError::DuplicateId`] if two movies share an id.
    pub fn new(movies: Vec<Movie>) -> Result<Self, RepositoryError> {
        Self::with_capacity(movies, DEFAULT_CHANGE_CAPACITY)
    }

    /// Create a repository with a specific change channel capacity.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_capacity(movies: Vec<Movie>, capacity: usize) -> Result<Self, RepositoryError> {
        check_unique(&movies)?;
        Ok(Self::build(movies, capacity))
    }

    fn build(movies: Vec<Movie>, capacity: usize) -> Self {
        let (changes, _) = broadcast::channel(capacity);
        Self {
            inner: Arc::new(RwLock::new(movies)),
            changes,
        }
    }

    /// Replace the whole collection, e.g. after a refresh from the network.
    ///
    /// A collection with duplicate ids is rejected and the current one kept.
    pub fn replace_all(&self, movies: Vec<Movie>) -> Result<(), RepositoryError> {
        check_unique(&movies)?;
        let count = movies.len();
        *self.inner.write() = movies;
        tracing::info!(count, "Movie collection replaced");
        self.notify();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    fn notify(&self) {
        // Only fails when nobody is subscribed.
        let _ = self.changes.send(MoviesChanged);
    }
}

impl Default for InMemoryMovieRepository {
    fn default() -> Self {
        Self::build(Vec::new(), DEFAULT_CHANGE_CAPACITY)
    }
}

fn check_unique(movies: &[Movie]) -> Result<(), RepositoryError> {
    match find_duplicate_id(movies) {
        Some(id) => {
            tracing::warn!(movie_id = id, "Rejected movie collection with duplicate id");
            Err(RepositoryError::DuplicateId { id })
        }
        None => Ok(()),
    }
}

impl MovieRepository for InMemoryMovieRepository {
    fn subscribe(&self) -> broadcast::Receiver<MoviesChanged> {
        self.changes.subscribe()
    }

    fn get_all(&self) -> Vec<Movie> {
        self.inner.read().clone()
    }

    fn get_by_id(&self, id: MovieId) -> Result<Movie, RepositoryError> {
        self.inner
            .read()
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound { id })
    }

    fn toggle_favorite(&self, id: MovieId) -> Result<bool, RepositoryError> {
        let is_favorite = {
            let mut movies = self.inner.write();
            let movie = movies
                .iter_mut()
                .find(|movie| movie.id == id)
                .ok_or(RepositoryError::NotFound { id })?;
            movie.is_favorite = !movie.is_favorite;
            movie.is_favorite
        };

        tracing::debug!(movie_id = id, is_favorite, "Favorite toggled");
        self.notify();
        Ok(is_favorite)
    }
}
