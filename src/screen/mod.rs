//! Presentation layer: per-screen state holders and the models they publish.

mod controller;
mod models;
pub mod screens;

pub use controller::{FetchController, FetchState, Loader, Phase};
pub use models::{MovieListUiModel, MovieUiModel};
