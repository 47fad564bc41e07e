mod intent;
mod mapper;
mod reducer;
mod state;
mod view_model;

pub use intent::SelectionIntent;
pub use mapper::{HomeScreenMapper, HomeScreenMapperImpl};
pub use reducer::CategorySelectionReducer;
pub use state::{CategorySelection, HomeMovieCategoryViewState, HomeMovieViewState};
pub use view_model::HomeViewModel;
