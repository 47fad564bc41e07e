mod common;

use std::sync::Arc;

use common::{movie, next_update, published_after_settle, repository};
use movieapp::repository::{InMemoryMovieRepository, RepositoryError};
use movieapp::ui::movie_details::{
    MovieDetailsMapper, MovieDetailsMapperImpl, MovieDetailsViewModel,
};
use movieapp::ui::ViewModelError;

fn create_test_repository() -> Arc<InMemoryMovieRepository> {
    repository(vec![movie(1, "Alien", false, &[]), movie(2, "Aliens", true, &[])])
}

fn create_view_model(movie_id: u32, repository: Arc<InMemoryMovieRepository>) -> MovieDetailsViewModel {
    MovieDetailsViewModel::new(movie_id, repository, Arc::new(MovieDetailsMapperImpl)).unwrap()
}

#[tokio::test]
async fn initial_snapshot_projects_movie() {
    let view_model = create_view_model(1, create_test_repository());
    let details = view_model.current();

    assert_eq!(
        details,
        MovieDetailsMapperImpl.to_movie_details_view_state(&movie(1, "Alien", false, &[]))
    );
    assert_eq!(details.crew[0].job, "Director");
    assert_eq!(details.cast[0].character, "Hero");
    assert_eq!(view_model.movie_id(), 1);
}

#[tokio::test]
async fn like_button_toggles_own_movie() {
    let view_model = create_view_model(1, create_test_repository());
    let mut details = view_model.movie_details_view_state();

    assert_eq!(view_model.on_like_button_click(), Ok(true));
    let updated = next_update(&mut details).await;
    assert!(updated.is_favorite);
    assert_eq!(updated.title, "Alien");
}

#[tokio::test]
async fn other_movie_toggle_is_not_republished() {
    let repository = create_test_repository();
    let view_model = create_view_model(1, Arc::clone(&repository));
    let details = view_model.movie_details_view_state();

    view_model.toggle_favorite(2).unwrap();

    assert!(!published_after_settle(&details).await);
    assert!(!details.borrow().is_favorite);
}

#[tokio::test]
async fn missing_movie_is_not_found() {
    let result =
        MovieDetailsViewModel::new(999, create_test_repository(), Arc::new(MovieDetailsMapperImpl));

    assert!(matches!(
        result,
        Err(ViewModelError::Repository(RepositoryError::NotFound { id: 999 }))
    ));
}

#[tokio::test]
async fn like_after_removal_reports_not_found() {
    let repository = create_test_repository();
    let view_model = create_view_model(1, Arc::clone(&repository));
    let details = view_model.movie_details_view_state();
    let before = details.borrow().clone();

    repository.replace_all(vec![movie(2, "Aliens", true, &[])]).unwrap();

    assert_eq!(
        view_model.on_like_button_click(),
        Err(ViewModelError::Repository(RepositoryError::NotFound { id: 1 }))
    );
    assert!(!published_after_settle(&details).await);
    assert_eq!(*details.borrow(), before);
}

#[tokio::test]
async fn movie_removed_by_reload_keeps_last_snapshot() {
    let repository = create_test_repository();
    let view_model = create_view_model(2, Arc::clone(&repository));
    let details = view_model.movie_details_view_state();
    let before = details.borrow().clone();

    repository.replace_all(vec![movie(1, "Alien", false, &[])]).unwrap();

    assert!(!published_after_settle(&details).await);
    assert_eq!(*details.borrow(), before);
    assert_eq!(before.title, "Aliens");
}
