//! Movie catalog browser core.
//!
//! [`catalog`] talks to The Movie Database and turns its sparse JSON into
//! fully populated models. [`screen`] holds the per-screen fetch controllers
//! that a UI binds to.

pub mod catalog;
pub mod config;
pub mod screen;

pub use catalog::{
    CatalogError, Failure, FetchResult, ImageUrlBuilder, Movie, MovieDataSource, MovieList,
    MovieRepository, TimeWindow, TmdbDataSource,
};
pub use config::CatalogConfig;
pub use screen::{FetchController, FetchState, MovieListUiModel, MovieUiModel, Phase};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the default `cinescope=info` filter. Fails if a
/// subscriber is already installed.
pub fn init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "cinescope=info".into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
}

/// Build a repository backed by the remote API
pub fn remote_repository(config: &CatalogConfig) -> catalog::Result<MovieRepository> {
    Ok(MovieRepository::new(TmdbDataSource::new(config)?))
}
