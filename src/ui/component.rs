//! View-states of the reusable screen components (cards, labels, crew items).

use serde::Serialize;

use crate::model::{Actor, Crewman, MovieCategory};

/// Poster card with a like button.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MovieCardViewState {
    pub image_url: String,
    pub is_favorite: bool,
}

/// Tab label of one home category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieCategoryLabelViewState {
    /// Category ordinal, the UI key of the label.
    pub item_id: u32,
    pub is_selected: bool,
    pub text: String,
}

impl MovieCategoryLabelViewState {
    pub fn new(category: MovieCategory, is_selected: bool) -> Self {
        Self {
            item_id: category.ordinal(),
            is_selected,
            text: category.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorCardViewState {
    pub id: u32,
    pub name: String,
    pub character: String,
    pub image_url: Option<String>,
}

impl From<&Actor> for ActorCardViewState {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id,
            name: actor.name.clone(),
            character: actor.character.clone(),
            image_url: actor.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrewItemViewState {
    pub id: u32,
    pub name: String,
    pub job: String,
}

impl From<&Crewman> for CrewItemViewState {
    fn from(crewman: &Crewman) -> Self {
        Self {
            id: crewman.id,
            name: crewman.name.clone(),
            job: crewman.job.clone(),
        }
    }
}
