//! Home screen view model: three independently derived category carousels.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};

use crate::config::HomeConfig;
use crate::model::{Movie, MovieCategory, MovieCategoryFamily, MovieId};
use crate::repository::{MovieRepository, MoviesChanged};
use crate::ui::events::{Navigation, ViewModelError};
use crate::ui::home::intent::SelectionIntent;
use crate::ui::home::mapper::HomeScreenMapper;
use crate::ui::home::reducer::CategorySelectionReducer;
use crate::ui::home::state::{CategorySelection, HomeMovieCategoryViewState};
use crate::ui::mvi::Reducer;
use crate::ui::region::Region;
use crate::ui::runtime::{next_change, ChangeSignal};
use crate::ui::scope::{ScopeHandle, ViewModelScope};

enum HomeCommand {
    Select {
        family: MovieCategoryFamily,
        intent: SelectionIntent,
    },
}

/// Home screen state holder.
///
/// Each family (Popular, NowPlaying, Upcoming) is its own region with its
/// own selection and snapshot. A selection change re-derives only that
/// family; a repository change re-derives all three.
///
/// Dropping the view model stops its derivation task.
pub struct HomeViewModel {
    repository: Arc<dyn MovieRepository>,
    regions: HashMap<MovieCategoryFamily, Arc<Region<HomeMovieCategoryViewState>>>,
    commands: mpsc::UnboundedSender<HomeCommand>,
    // Cancels the derivation task on drop
    _scope: ViewModelScope,
}

impl HomeViewModel {
    /// Derive the initial carousels and start the derivation task.
    ///
    /// # Panics
    /// Panics outside a Tokio runtime, or if a configured selection does not
    /// belong to its family.
    pub fn new(
        repository: Arc<dyn MovieRepository>,
        mapper: Arc<dyn HomeScreenMapper>,
        config: &HomeConfig,
    ) -> Self {
        // Subscribe before the first query so no change slips in between.
        let changes = repository.subscribe();
        let movies = repository.get_all();

        let mut families = HashMap::new();
        let mut regions = HashMap::new();
        for family in MovieCategoryFamily::ALL {
            let selected = config.selected(family);
            assert!(
                family.contains(selected),
                "category {:?} does not belong to {:?}",
                selected,
                family
            );
            let selection = CategorySelection { family, selected };
            let region = Arc::new(Region::new(derive(mapper.as_ref(), selection, &movies)));
            regions.insert(family, Arc::clone(&region));
            families.insert(family, FamilyState { selection, region });
        }

        let (commands, command_rx) = mpsc::unbounded_channel();
        let scope = ViewModelScope::new();
        let task = HomeTask {
            repository: Arc::clone(&repository),
            mapper,
            families,
            scope: scope.handle(),
        };
        tokio::spawn(task.run(command_rx, changes));

        Self {
            repository,
            regions,
            commands,
            _scope: scope,
        }
    }

    /// Snapshot stream of one family's carousel.
    pub fn category_view_state(
        &self,
        family: MovieCategoryFamily,
    ) -> watch::Receiver<HomeMovieCategoryViewState> {
        self.region(family).subscribe()
    }

    pub fn popular_category_view_state(&self) -> watch::Receiver<HomeMovieCategoryViewState> {
        self.category_view_state(MovieCategoryFamily::Popular)
    }

    pub fn now_playing_category_view_state(&self) -> watch::Receiver<HomeMovieCategoryViewState> {
        self.category_view_state(MovieCategoryFamily::NowPlaying)
    }

    pub fn upcoming_category_view_state(&self) -> watch::Receiver<HomeMovieCategoryViewState> {
        self.category_view_state(MovieCategoryFamily::Upcoming)
    }

    /// Current carousel of `family` without subscribing.
    pub fn current(&self, family: MovieCategoryFamily) -> HomeMovieCategoryViewState {
        self.region(family).current()
    }

    /// Switch the selected category of `family`. The carousel update arrives
    /// on that family's stream.
    ///
    /// # Panics
    /// Panics if `category` does not belong to `family`.
    pub fn select_category(
        &self,
        family: MovieCategoryFamily,
        category: MovieCategory,
    ) -> Result<(), ViewModelError> {
        assert!(
            family.contains(category),
            "category {:?} does not belong to {:?}",
            category,
            family
        );
        self.send(HomeCommand::Select {
            family,
            intent: SelectionIntent::Select(category),
        })
    }

    /// Return `family` to its default category.
    pub fn reset_category(&self, family: MovieCategoryFamily) -> Result<(), ViewModelError> {
        self.send(HomeCommand::Select {
            family,
            intent: SelectionIntent::Reset,
        })
    }

    /// Flip the favorite flag in the repository and return the new value.
    /// Carousels update through the repository's change signal.
    pub fn toggle_favorite(&self, movie_id: MovieId) -> Result<bool, ViewModelError> {
        self.repository.toggle_favorite(movie_id).map_err(|err| {
            tracing::warn!(movie_id, error = %err, "Home toggle favorite failed");
            ViewModelError::from(err)
        })
    }

    pub fn on_card_click(&self, movie_id: MovieId) -> Navigation {
        Navigation::MovieDetails(movie_id)
    }

    pub fn on_like_button_click(&self, movie_id: MovieId) -> Result<bool, ViewModelError> {
        self.toggle_favorite(movie_id)
    }

    /// Category tab click hook. Not wired to selection; use
    /// [`HomeViewModel::select_category`] to switch categories.
    pub fn on_category_label_click(&self, item_id: u32) {
        tracing::debug!(item_id, "Category label clicked");
    }

    fn region(&self, family: MovieCategoryFamily) -> &Region<HomeMovieCategoryViewState> {
        // Every family is inserted in new()
        &self.regions[&family]
    }

    fn send(&self, command: HomeCommand) -> Result<(), ViewModelError> {
        self.commands
            .send(command)
            .map_err(|_| ViewModelError::Closed)
    }
}

struct FamilyState {
    selection: CategorySelection,
    region: Arc<Region<HomeMovieCategoryViewState>>,
}

/// Single derivation sequence of a home view model.
struct HomeTask {
    repository: Arc<dyn MovieRepository>,
    mapper: Arc<dyn HomeScreenMapper>,
    families: HashMap<MovieCategoryFamily, FamilyState>,
    scope: ScopeHandle,
}

impl HomeTask {
    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<HomeCommand>,
        mut changes: broadcast::Receiver<MoviesChanged>,
    ) {
        let mut changes_open = true;
        loop {
            tokio::select! {
                biased;
                _ = self.scope.cancelled() => break,
                command = commands.recv() => match command {
                    Some(HomeCommand::Select { family, intent }) => self.select(family, intent),
                    None => break,
                },
                signal = next_change(&mut changes), if changes_open => match signal {
                    ChangeSignal::Changed => self.refresh_all(),
                    ChangeSignal::Closed => changes_open = false,
                },
            }
        }
        tracing::debug!("Home derivation task stopped");
    }

    fn select(&mut self, family: MovieCategoryFamily, intent: SelectionIntent) {
        let Some(state) = self.families.get_mut(&family) else {
            return;
        };
        let selection = CategorySelectionReducer::reduce(state.selection, intent);
        if selection == state.selection {
            return;
        }
        state.selection = selection;
        tracing::debug!(?family, selected = ?selection.selected, "Category selected");

        let movies = self.repository.get_all();
        let view_state = derive(self.mapper.as_ref(), selection, &movies);
        if self.scope.is_cancelled() {
            return;
        }
        state.region.publish(view_state);
    }

    fn refresh_all(&self) {
        let movies = self.repository.get_all();
        for family in MovieCategoryFamily::ALL {
            let Some(state) = self.families.get(&family) else {
                continue;
            };
            let view_state = derive(self.mapper.as_ref(), state.selection, &movies);
            if self.scope.is_cancelled() {
                return;
            }
            if state.region.publish(view_state) {
                tracing::trace!(?family, "Home carousel re-derived");
            }
        }
    }
}

fn derive(
    mapper: &dyn HomeScreenMapper,
    selection: CategorySelection,
    movies: &[Movie],
) -> HomeMovieCategoryViewState {
    mapper.to_home_movie_category_view_state(
        selection.family.categories(),
        selection.selected,
        movies,
    )
}
