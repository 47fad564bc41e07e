//! Domain entities shared by the repository and the mappers.

mod category;
mod movie;

pub use category::{MovieCategory, MovieCategoryFamily};
pub use movie::{find_duplicate_id, Actor, Crewman, Movie, MovieId};
