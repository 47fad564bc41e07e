use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use movieapp::config::Config;
use movieapp::fixtures::{load_movies, sample_movies};
use movieapp::logging::init_tracing;
use movieapp::model::{MovieCategoryFamily, MovieId};
use movieapp::repository::InMemoryMovieRepository;
use movieapp::ui::favorites::{FavoritesMapperImpl, FavoritesViewModel};
use movieapp::ui::home::{HomeMovieCategoryViewState, HomeScreenMapperImpl, HomeViewModel};
use movieapp::ui::movie_details::{
    MovieDetailsMapperImpl, MovieDetailsViewModel, MovieDetailsViewState,
};
use movieapp::ui::ViewModelError;

const UPDATE_TIMEOUT: Duration = Duration::from_secs(2);

/// Print the view-states the screens would render for a movie catalogue.
#[derive(Debug, Parser)]
#[command(name = "movieapp", version, about)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON movie list to load instead of the built-in sample
    #[arg(long)]
    fixtures: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Home feed carousels
    Home,
    /// Favorites grid
    Favorites,
    /// Details page of one movie
    Details { id: MovieId },
    /// Toggle a favorite and print the favorites grid after the update
    Toggle { id: MovieId },
}

#[derive(Serialize)]
struct HomePreview {
    popular: HomeMovieCategoryViewState,
    now_playing: HomeMovieCategoryViewState,
    upcoming: HomeMovieCategoryViewState,
}

#[derive(Serialize)]
struct DetailsPreview {
    #[serde(flatten)]
    details: MovieDetailsViewState,
    user_score_percent: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging);

    let movies = match cli.fixtures.as_ref().or(config.repository.fixtures.as_ref()) {
        Some(path) => load_movies(path)?,
        None => sample_movies(),
    };
    tracing::info!(count = movies.len(), "Movies loaded");

    let repository = Arc::new(InMemoryMovieRepository::with_capacity(
        movies,
        config.repository.change_channel_capacity,
    )?);

    match cli.command {
        Command::Home => {
            let view_model =
                HomeViewModel::new(repository, Arc::new(HomeScreenMapperImpl), &config.home);
            print_json(&HomePreview {
                popular: view_model.current(MovieCategoryFamily::Popular),
                now_playing: view_model.current(MovieCategoryFamily::NowPlaying),
                upcoming: view_model.current(MovieCategoryFamily::Upcoming),
            })
        }
        Command::Favorites => {
            let view_model = FavoritesViewModel::new(repository, Arc::new(FavoritesMapperImpl));
            print_json(&view_model.current())
        }
        Command::Details { id } => {
            let view_model =
                MovieDetailsViewModel::new(id, repository, Arc::new(MovieDetailsMapperImpl))
                    .map_err(report)?;
            let details = view_model.current();
            print_json(&DetailsPreview {
                user_score_percent: details.user_score_percent(),
                details,
            })
        }
        Command::Toggle { id } => {
            let view_model = FavoritesViewModel::new(repository, Arc::new(FavoritesMapperImpl));
            let mut updates = view_model.favorites_view_state();

            let is_favorite = view_model.toggle_favorite(id).map_err(report)?;
            tracing::info!(movie_id = id, is_favorite, "Favorite toggled");

            tokio::time::timeout(UPDATE_TIMEOUT, updates.changed())
                .await
                .context("Timed out waiting for the favorites update")??;
            let view_state = updates.borrow().clone();
            print_json(&view_state)
        }
    }
}

/// Lead with the user-facing message, keep the cause for the error chain.
fn report(err: ViewModelError) -> anyhow::Error {
    let message = err.user_message();
    anyhow::Error::new(err).context(message)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
