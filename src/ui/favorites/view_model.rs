use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use crate::model::MovieId;
use crate::repository::{MovieRepository, MoviesChanged};
use crate::ui::events::{Navigation, ViewModelError};
use crate::ui::favorites::mapper::FavoritesMapper;
use crate::ui::favorites::state::FavoritesViewState;
use crate::ui::region::Region;
use crate::ui::runtime::{next_change, ChangeSignal};
use crate::ui::scope::{ScopeHandle, ViewModelScope};

/// Favorites screen state holder.
///
/// Re-derives the grid on every repository change. Dropping the view model
/// stops its derivation task.
pub struct FavoritesViewModel {
    repository: Arc<dyn MovieRepository>,
    region: Arc<Region<FavoritesViewState>>,
    // Cancels the derivation task on drop
    _scope: ViewModelScope,
}

impl FavoritesViewModel {
    /// # Panics
    /// Panics outside a Tokio runtime.
    pub fn new(repository: Arc<dyn MovieRepository>, mapper: Arc<dyn FavoritesMapper>) -> Self {
        let changes = repository.subscribe();
        let initial = mapper.to_favorites_view_state(&repository.get_all());
        let region = Arc::new(Region::new(initial));

        let scope = ViewModelScope::new();
        let task = FavoritesTask {
            repository: Arc::clone(&repository),
            mapper,
            region: Arc::clone(&region),
            scope: scope.handle(),
        };
        tokio::spawn(task.run(changes));

        Self {
            repository,
            region,
            _scope: scope,
        }
    }

    pub fn favorites_view_state(&self) -> watch::Receiver<FavoritesViewState> {
        self.region.subscribe()
    }

    pub fn current(&self) -> FavoritesViewState {
        self.region.current()
    }

    /// Flip the favorite flag in the repository and return the new value.
    /// The grid updates through the repository's change signal.
    pub fn toggle_favorite(&self, movie_id: MovieId) -> Result<bool, ViewModelError> {
        self.repository.toggle_favorite(movie_id).map_err(|err| {
            tracing::warn!(movie_id, error = %err, "Favorites toggle favorite failed");
            ViewModelError::from(err)
        })
    }

    pub fn on_card_click(&self, movie_id: MovieId) -> Navigation {
        Navigation::MovieDetails(movie_id)
    }

    pub fn on_like_button_click(&self, movie_id: MovieId) -> Result<bool, ViewModelError> {
        self.toggle_favorite(movie_id)
    }
}

struct FavoritesTask {
    repository: Arc<dyn MovieRepository>,
    mapper: Arc<dyn FavoritesMapper>,
    region: Arc<Region<FavoritesViewState>>,
    scope: ScopeHandle,
}

impl FavoritesTask {
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
        tracing::debug!("Favorites derivation task stopped");
    }

    fn refresh(&self) {
        let view_state = self
            .mapper
            .to_favorites_view_state(&self.repository.get_all());
        if self.scope.is_cancelled() {
            return;
        }
        if self.region.publish(view_state) {
            tracing::trace!("Favorites re-derived");
        }
    }
}
