//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use movieapp::model::{Actor, Crewman, Movie, MovieCategory, MovieId};
use movieapp::repository::InMemoryMovieRepository;
use tokio::sync::watch;

/// Upper bound for a view model to publish after a change.
pub const UPDATE_TIMEOUT: Duration = Duration::from_secs(2);

/// Time given to derivation tasks before asserting that nothing was published.
pub const SETTLE: Duration = Duration::from_millis(50);

/// Create a movie tagged with `categories`.
pub fn movie(id: MovieId, title: &str, is_favorite: bool, categories: &[MovieCategory]) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        image_url: format!("https://img.example.com/{}.jpg", id),
        overview: format!("Overview of {}", title),
        vote_average: 7.0,
        is_favorite,
        categories: categories.to_vec(),
        cast: vec![Actor {
            id: id * 10,
            name: format!("Lead of {}", title),
            character: "Hero".to_string(),
            image_url: None,
        }],
        crew: vec![Crewman {
            id: id * 10 + 1,
            name: format!("Director of {}", title),
            job: "Director".to_string(),
        }],
    }
}

pub fn repository(movies: Vec<Movie>) -> Arc<InMemoryMovieRepository> {
    Arc::new(InMemoryMovieRepository::new(movies).expect("test movie ids are unique"))
}

/// Wait for the next published snapshot.
pub async fn next_update<T: Clone>(rx: &mut watch::Receiver<T>) -> T {
    tokio::time::timeout(UPDATE_TIMEOUT, rx.changed())
        .await
        .expect("timed out waiting for a snapshot")
        .expect("view model stopped publishing");
    rx.borrow_and_update().clone()
}

/// Wait until a published snapshot satisfies `predicate`.
pub async fn wait_until<T: Clone>(rx: &mut watch::Receiver<T>, predicate: impl Fn(&T) -> bool) -> T {
    {
        let current = rx.borrow_and_update();
        if predicate(&*current) {
            return current.clone();
        }
    }
    loop {
        let snapshot = next_update(rx).await;
        if predicate(&snapshot) {
            return snapshot;
        }
    }
}

/// Let pending derivations run, then report whether `rx` saw a new snapshot.
pub async fn published_after_settle<T>(rx: &watch::Receiver<T>) -> bool {
    tokio::time::sleep(SETTLE).await;
    rx.has_changed().unwrap_or(false)
}
