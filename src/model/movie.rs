use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::category::MovieCategory;

/// Stable identity of a movie across the repository, view-states and UI keys.
pub type MovieId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub overview: String,
    /// User score on a 0.0 to 10.0 scale.
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub is_favorite: bool,
    /// Home feed categories the movie is listed under.
    #[serde(default)]
    pub categories: Vec<MovieCategory>,
    #[serde(default)]
    pub cast: Vec<Actor>,
    #[serde(default)]
    pub crew: Vec<Crewman>,
}

impl Movie {
    pub fn is_in(&self, category: MovieCategory) -> bool {
        self.categories.contains(&category)
    }
}

/// First id that appears more than once in `movies`, if any.
pub fn find_duplicate_id(movies: &[Movie]) -> Option<MovieId> {
    let mut seen = HashSet::with_capacity(movies.len());
    movies
        .iter()
        .map(|movie| movie.id)
        .find(|id| !seen.insert(*id))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: u32,
    pub name: String,
    pub character: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crewman {
    pub id: u32,
    pub name: String,
    pub job: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_when_absent() {
        let movie: Movie = serde_json::from_str(
            r#"{"id": 7, "title": "Heat", "image_url": "https://img.example.com/heat.jpg"}"#,
        )
        .unwrap();
        assert_eq!(movie.id, 7);
        assert!(!movie.is_favorite);
        assert!(movie.overview.is_empty());
        assert!(movie.categories.is_empty());
        assert!(movie.cast.is_empty());
        assert!(movie.crew.is_empty());
    }

    #[test]
    fn is_in_checks_category_tags() {
        let movie: Movie = serde_json::from_str(
            r#"{"id": 1, "title": "A", "image_url": "u", "categories": ["POPULAR_ON_TV"]}"#,
        )
        .unwrap();
        assert!(movie.is_in(MovieCategory::PopularOnTv));
        assert!(!movie.is_in(MovieCategory::PopularStreaming));
    }

    #[test]
    fn find_duplicate_id_reports_first_repeat() {
        let movies: Vec<Movie> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "A", "image_url": "a"},
                {"id": 2, "title": "B", "image_url": "b"},
                {"id": 1, "title": "C", "image_url": "c"}
            ]"#,
        )
        .unwrap();
        assert_eq!(find_duplicate_id(&movies), Some(1));
        assert_eq!(find_duplicate_id(&movies[..2]), None);
    }
}
