use crate::model::{Movie, MovieCategory};
use crate::ui::component::MovieCategoryLabelViewState;
use crate::ui::home::state::{HomeMovieCategoryViewState, HomeMovieViewState};

/// Maps movies and a family's selection to one home carousel.
pub trait HomeScreenMapper: Send + Sync {
    /// Build the carousel for `selected` out of `categories`.
    ///
    /// Labels follow `categories` order, movies follow `movies` order.
    ///
    /// # Panics
    /// Panics if `selected` is not one of `categories`.
    fn to_home_movie_category_view_state(
        &self,
        categories: &[MovieCategory],
        selected: MovieCategory,
        movies: &[Movie],
    ) -> HomeMovieCategoryViewState;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HomeScreenMapperImpl;

impl HomeScreenMapper for HomeScreenMapperImpl {
    fn to_home_movie_category_view_state(
        &self,
        categories: &[MovieCategory],
        selected: MovieCategory,
        movies: &[Movie],
    ) -> HomeMovieCategoryViewState {
        assert!(
            categories.contains(&selected),
            "selected category {:?} is not one of {:?}",
            selected,
            categories
        );

        let movie_categories = categories
            .iter()
            .map(|&category| MovieCategoryLabelViewState::new(category, category == selected))
            .collect();

        let movies = movies
            .iter()
            .filter(|movie| movie.is_in(selected))
            .map(|movie| HomeMovieViewState {
                id: movie.id,
                image_url: movie.image_url.clone(),
                is_favorite: movie.is_favorite,
            })
            .collect();

        HomeMovieCategoryViewState {
            movie_categories,
            movies,
        }
    }
}
