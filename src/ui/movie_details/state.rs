use serde::Serialize;

use crate::model::MovieId;
use crate::ui::component::{ActorCardViewState, CrewItemViewState};
use crate::ui::mvi::UiState;

/// Full single-movie projection for the details page.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MovieDetailsViewState {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    pub image_url: String,
    pub vote_average: f32,
    pub is_favorite: bool,
    pub crew: Vec<CrewItemViewState>,
    pub cast: Vec<ActorCardViewState>,
}

impl UiState for MovieDetailsViewState {}

impl MovieDetailsViewState {
    /// User score as a 0 to 100 percentage, the way the score ring shows it.
    pub fn user_score_percent(&self) -> u8 {
        (self.vote_average.clamp(0.0, 10.0) * 10.0).round() as u8
    }
}
