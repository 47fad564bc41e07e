use serde::Serialize;

use crate::model::MovieId;
use crate::ui::component::MovieCardViewState;
use crate::ui::mvi::UiState;

/// Favorites grid, in repository order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FavoritesViewState {
    pub favorites_movies: Vec<FavoritesMovieViewState>,
}

impl UiState for FavoritesViewState {}

impl FavoritesViewState {
    pub fn movie_ids(&self) -> Vec<MovieId> {
        self.favorites_movies.iter().map(|movie| movie.id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites_movies.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoritesMovieViewState {
    pub id: MovieId,
    pub movie_card_view_state: MovieCardViewState,
}
