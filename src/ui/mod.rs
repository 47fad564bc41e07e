//! Per-screen view models, mappers and view-states.
//!
//! Every screen follows the same shape: a pure mapper turns domain movies
//! (plus selection state) into an immutable view-state, and a view model
//! owns one derivation task that re-runs the mapper whenever the repository
//! signals a change and publishes the result on a [`watch`] channel.
//!
//! [`watch`]: tokio::sync::watch

pub mod component;
pub mod events;
pub mod favorites;
pub mod home;
pub mod movie_details;
pub mod mvi;
pub mod region;
mod runtime;
pub mod scope;

pub use events::{Navigation, ViewModelError};
