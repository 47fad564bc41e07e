//! Movie data for previews and tests.
//!
//! Fixtures are handed to a repository explicitly; nothing here is global.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::{find_duplicate_id, Actor, Crewman, Movie, MovieCategory, MovieId};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixtures file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse fixtures file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate movie id {id} in fixtures")]
    DuplicateId { id: MovieId },
}

/// Load a JSON array of movies from `path`.
pub fn load_movies(path: &Path) -> Result<Vec<Movie>, FixtureError> {
    let content = fs::read_to_string(path).map_err(|e| FixtureError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let movies: Vec<Movie> =
        serde_json::from_str(&content).map_err(|e| FixtureError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

    if let Some(id) = find_duplicate_id(&movies) {
        return Err(FixtureError::DuplicateId { id });
    }

    Ok(movies)
}

/// Built-in catalogue covering every home category.
pub fn sample_movies() -> Vec<Movie> {
    vec![
        sample(
            1,
            "Iron Man",
            "https://image.tmdb.org/t/p/w500/78lPtwv72eTNqFW9COBYI0dWDJa.jpg",
            "After being held captive in an Afghan cave, billionaire engineer Tony Stark \
             creates a unique weaponized suit of armor to fight evil.",
            7.6,
            true,
            &[MovieCategory::PopularStreaming, MovieCategory::NowPlayingMovies],
        ),
        sample(
            2,
            "Gattaca",
            "https://image.tmdb.org/t/p/w500/gPQBgiSM9tT5QxlsKSOJsyqRpkJ.jpg",
            "In a future society in the era of indefinite eugenics, humans are set on \
             a life course depending on their DNA.",
            7.5,
            false,
            &[MovieCategory::PopularStreaming, MovieCategory::PopularForRent],
        ),
        sample(
            3,
            "Lion King",
            "https://image.tmdb.org/t/p/w500/sKCr78MXSLixwmZ8DyJLrpMsd15.jpg",
            "A young lion prince is cast out of his pride by his cruel uncle.",
            8.3,
            false,
            &[MovieCategory::PopularOnTv, MovieCategory::UpcomingToday],
        ),
        sample(
            4,
            "Puppy Love",
            "https://image.tmdb.org/t/p/w500/4l2ZcYFCvqnmhqVPzZ8ymxk6cOT.jpg",
            "An introverted woman and a chaotic man end up together when their dogs hook up.",
            6.9,
            true,
            &[MovieCategory::PopularInTheatres, MovieCategory::NowPlayingTv],
        ),
        sample(
            5,
            "Knives Out",
            "https://image.tmdb.org/t/p/w500/pThyQovXQrw2m0s9x82twj48Jq4.jpg",
            "A detective investigates the death of a patriarch of an eccentric, \
             combative family.",
            7.8,
            false,
            &[MovieCategory::PopularForRent, MovieCategory::UpcomingThisWeek],
        ),
        sample(
            6,
            "Cruella",
            "https://image.tmdb.org/t/p/w500/wToO8opxkGwKgSfJ1JK8tGvkG6U.jpg",
            "In 1970s London amidst the punk rock revolution, a young grifter sets out \
             to make a name for herself with her designs.",
            8.0,
            false,
            &[MovieCategory::NowPlayingMovies, MovieCategory::UpcomingToday],
        ),
    ]
}

fn sample(
    id: MovieId,
    title: &str,
    image_url: &str,
    overview: &str,
    vote_average: f32,
    is_favorite: bool,
    categories: &[MovieCategory],
) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        image_url: image_url.to_string(),
        overview: overview.to_string(),
        vote_average,
        is_favorite,
        categories: categories.to_vec(),
        cast: sample_cast(id),
        crew: sample_crew(id),
    }
}

fn sample_cast(movie_id: MovieId) -> Vec<Actor> {
    (1..=3)
        .map(|n| Actor {
            id: movie_id * 100 + n,
            name: format!("Actor {}", n),
            character: format!("Character {}", n),
            image_url: Some(format!(
                "https://image.tmdb.org/t/p/w200/actor_{}_{}.jpg",
                movie_id, n
            )),
        })
        .collect()
}

fn sample_crew(movie_id: MovieId) -> Vec<Crewman> {
    ["Director", "Screenplay", "Producer"]
        .iter()
        .zip(1..)
        .map(|(job, n)| Crewman {
            id: movie_id * 100 + 50 + n,
            name: format!("Crewman {}", n),
            job: job.to_string(),
        })
        .collect()
}
