mod mapper;
mod state;
mod view_model;

pub use mapper::{FavoritesMapper, FavoritesMapperImpl};
pub use state::{FavoritesMovieViewState, FavoritesViewState};
pub use view_model::FavoritesViewModel;
