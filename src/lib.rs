//! View-state derivation layer of a movie browsing app.
//!
//! A [`repository::MovieRepository`] owns the movies and their favorite
//! flags. Screen view models in [`ui`] map the repository contents into
//! immutable per-screen snapshots and republish them whenever the
//! repository signals a change.

pub mod config;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod repository;
pub mod ui;
