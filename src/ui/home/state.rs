use serde::Serialize;

use crate::model::{MovieCategory, MovieCategoryFamily, MovieId};
use crate::ui::component::MovieCategoryLabelViewState;
use crate::ui::mvi::UiState;

/// Selected slot of one category family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySelection {
    pub family: MovieCategoryFamily,
    pub selected: MovieCategory,
}

impl CategorySelection {
    /// Selection at the family's default category.
    pub fn new(family: MovieCategoryFamily) -> Self {
        Self {
            family,
            selected: family.default_category(),
        }
    }
}

impl Default for CategorySelection {
    fn default() -> Self {
        Self::new(MovieCategoryFamily::Popular)
    }
}

impl UiState for CategorySelection {}

/// One carousel of the home feed: category tabs plus the movies of the
/// selected tab.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HomeMovieCategoryViewState {
    pub movie_categories: Vec<MovieCategoryLabelViewState>,
    pub movies: Vec<HomeMovieViewState>,
}

impl UiState for HomeMovieCategoryViewState {}

impl HomeMovieCategoryViewState {
    pub fn selected_label(&self) -> Option<&MovieCategoryLabelViewState> {
        self.movie_categories.iter().find(|label| label.is_selected)
    }

    pub fn movie_ids(&self) -> Vec<MovieId> {
        self.movies.iter().map(|movie| movie.id).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeMovieViewState {
    pub id: MovieId,
    pub image_url: String,
    pub is_favorite: bool,
}
