use crate::model::Movie;
use crate::ui::component::MovieCardViewState;
use crate::ui::favorites::state::{FavoritesMovieViewState, FavoritesViewState};

pub trait FavoritesMapper: Send + Sync {
    /// Keep the favorite movies, in input order.
    fn to_favorites_view_state(&self, movies: &[Movie]) -> FavoritesViewState;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FavoritesMapperImpl;

impl FavoritesMapper for FavoritesMapperImpl {
    fn to_favorites_view_state(&self, movies: &[Movie]) -> FavoritesViewState {
        let favorites_movies = movies
            .iter()
            .filter(|movie| movie.is_favorite)
            .map(|movie| FavoritesMovieViewState {
                id: movie.id,
                movie_card_view_state: MovieCardViewState {
                    image_url: movie.image_url.clone(),
                    is_favorite: movie.is_favorite,
                },
            })
            .collect();

        FavoritesViewState { favorites_movies }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MovieId;

    fn movie(id: MovieId, title: &str, is_favorite: bool) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            image_url: format!("https://img.example.com/{}.jpg", id),
            overview: String::new(),
            vote_average: 0.0,
            is_favorite,
            categories: Vec::new(),
            cast: Vec::new(),
            crew: Vec::new(),
        }
    }

    #[test]
    fn keeps_only_favorites() {
        let movies = vec![movie(1, "A", false), movie(2, "B", true)];
        let view_state = FavoritesMapperImpl.to_favorites_view_state(&movies);

        assert_eq!(view_state.movie_ids(), vec![2]);
        let card = &view_state.favorites_movies[0].movie_card_view_state;
        assert_eq!(card.image_url, "https://img.example.com/2.jpg");
        assert!(card.is_favorite);
    }

    #[test]
    fn preserves_source_order_without_sorting() {
        let movies = vec![
            movie(9, "Z", true),
            movie(3, "C", false),
            movie(5, "E", true),
            movie(1, "A", true),
        ];
        let view_state = FavoritesMapperImpl.to_favorites_view_state(&movies);
        assert_eq!(view_state.movie_ids(), vec![9, 5, 1]);
    }

    #[test]
    fn empty_input_is_valid_empty_state() {
        let view_state = FavoritesMapperImpl.to_favorites_view_state(&[]);
        assert!(view_state.is_empty());
        assert_eq!(view_state, FavoritesViewState::default());
    }

    #[test]
    fn no_favorites_is_empty_state() {
        let movies = vec![movie(1, "A", false), movie(2, "B", false)];
        assert!(FavoritesMapperImpl.to_favorites_view_state(&movies).is_empty());
    }
}
