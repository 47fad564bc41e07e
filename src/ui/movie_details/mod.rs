mod mapper;
mod state;
mod view_model;

pub use mapper::{MovieDetailsMapper, MovieDetailsMapperImpl};
pub use state::MovieDetailsViewState;
pub use view_model::MovieDetailsViewModel;
