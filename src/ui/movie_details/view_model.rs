use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use crate::model::MovieId;
use crate::repository::{MovieRepository, MoviesChanged, RepositoryError};
use crate::ui::events::ViewModelError;
use crate::ui::movie_details::mapper::MovieDetailsMapper;
use crate::ui::movie_details::state::MovieDetailsViewState;
use crate::ui::region::Region;
use crate::ui::runtime::{next_change, ChangeSignal};
use crate::ui::scope::{ScopeHandle, ViewModelScope};

/// Details page state holder for one movie.
///
/// Construction fails if the movie is unknown. If it disappears later, the
/// last good snapshot stays published.
pub struct MovieDetailsViewModel {
    movie_id: MovieId,
    repository: Arc<dyn MovieRepository>,
    region: Arc<Region<MovieDetailsViewState>>,
    // Cancels the derivation task on drop
    _scope: ViewModelScope,
}

impl MovieDetailsViewModel {
    /// # Errors
    /// Returns [`RepositoryError::NotFound`] if `movie_id` is unknown.
    ///
    /// # Panics
    /// Panics outside a Tokio runtime.
    pub fn new(
        movie_id: MovieId,
        repository: Arc<dyn MovieRepository>,
        mapper: Arc<dyn MovieDetailsMapper>,
    ) -> Result<Self, ViewModelError> {
        let changes = repository.subscribe();
        let initial = derive(movie_id, repository.as_ref(), mapper.as_ref())?;
        let region = Arc::new(Region::new(initial));

        let scope = ViewModelScope::new();
        let task = MovieDetailsTask {
            movie_id,
            repository: Arc::clone(&repository),
            mapper,
            region: Arc::clone(&region),
            scope: scope.handle(),
        };
        tokio::spawn(task.run(changes));

        Ok(Self {
            movie_id,
            repository,
            region,
            _scope: scope,
        })
    }

    pub fn movie_id(&self) -> MovieId {
        self.movie_id
    }

    pub fn movie_details_view_state(&self) -> watch::Receiver<MovieDetailsViewState> {
        self.region.subscribe()
    }

    pub fn current(&self) -> MovieDetailsViewState {
        self.region.current()
    }

    /// Flip the favorite flag in the repository and return the new value.
    pub fn toggle_favorite(&self, movie_id: MovieId) -> Result<bool, ViewModelError> {
        self.repository.toggle_favorite(movie_id).map_err(|err| {
            tracing::warn!(movie_id, error = %err, "Details toggle favorite failed");
            ViewModelError::from(err)
        })
    }

    pub fn on_like_button_click(&self) -> Result<bool, ViewModelError> {
        self.toggle_favorite(self.movie_id)
    }
}

struct MovieDetailsTask {
    movie_id: MovieId,
    repository: Arc<dyn MovieRepository>,
    mapper: Arc<dyn MovieDetailsMapper>,
    region: Arc<Region<MovieDetailsViewState>>,
    scope: ScopeHandle,
}

impl MovieDetailsTask {
    async fn run(self, mut changes: broadcast::Receiver<MoviesChanged>) {
        loop {
            tokio::select! {
                biased;
                _ = self.scope.cancelled() => break,
                signal = next_change(&mut changes) => match signal {
                    ChangeSignal::Changed => self.refresh(),
                    ChangeSignal::Closed => break,
                },
            }
        }
        tracing::debug!(movie_id = self.movie_id, "Details derivation task stopped");
    }

    fn refresh(&self) {
        let view_state =
            match derive(self.movie_id, self.repository.as_ref(), self.mapper.as_ref()) {
                Ok(view_state) => view_state,
                Err(err) => {
                    tracing::warn!(
                        movie_id = self.movie_id,
                        error = %err,
                        "Movie details unavailable, keeping current snapshot"
                    );
                    return;
                }
            };
        if self.scope.is_cancelled() {
            return;
        }
        self.region.publish(view_state);
    }
}

fn derive(
    movie_id: MovieId,
    repository: &dyn MovieRepository,
    mapper: &dyn MovieDetailsMapper,
) -> Result<MovieDetailsViewState, RepositoryError> {
    let movie = repository.get_by_id(movie_id)?;
    Ok(mapper.to_movie_details_view_state(&movie))
}
