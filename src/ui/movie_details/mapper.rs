use crate::model::Movie;
use crate::ui::component::{ActorCardViewState, CrewItemViewState};
use crate::ui::movie_details::state::MovieDetailsViewState;

pub trait MovieDetailsMapper: Send + Sync {
    /// Project every displayed field of `movie`. Missing cast or crew map to
    /// empty lists.
    fn to_movie_details_view_state(&self, movie: &Movie) -> MovieDetailsViewState;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MovieDetailsMapperImpl;

impl MovieDetailsMapper for MovieDetailsMapperImpl {
    fn to_movie_details_view_state(&self, movie: &Movie) -> MovieDetailsViewState {
        MovieDetailsViewState {
            id: movie.id,
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            image_url: movie.image_url.clone(),
            vote_average: movie.vote_average,
            is_favorite: movie.is_favorite,
            crew: movie.crew.iter().map(CrewItemViewState::from).collect(),
            cast: movie.cast.iter().map(ActorCardViewState::from).collect(),
        }
    }
}
