use crate::catalog::{
    FetchResult,
    provider::{MovieDataSource, TimeWindow},
    types::{Movie, MovieList},
};
use std::sync::Arc;

/// Domain-facing access to movie data.
///
/// Forwards every call to the wrapped data source unchanged. Cloning is cheap
/// and clones share the same source.
#[derive(Clone)]
pub struct MovieRepository {
    remote: Arc<dyn MovieDataSource>,
}

impl MovieRepository {
    /// Create a repository over a data source
    pub fn new<S: MovieDataSource + 'static>(remote: S) -> Self {
        Self {
            remote: Arc::new(remote),
        }
    }

    /// Create a repository over an already shared data source
    #[must_use]
    pub fn from_shared(remote: Arc<dyn MovieDataSource>) -> Self {
        Self { remote }
    }

    pub async fn get_movie(&self, id: i64) -> FetchResult<Movie> {
        self.remote.get_movie(id).await
    }

    pub async fn get_popular_movies(&self) -> FetchResult<MovieList> {
        self.remote.get_popular_movies().await
    }

    pub async fn search_movies(&self, query: &str) -> FetchResult<MovieList> {
        self.remote.search_movies(query).await
    }

    pub async fn get_trending_movies(&self, window: TimeWindow) -> FetchResult<MovieList> {
        self.remote.get_trending_movies(window).await
    }

    pub async fn get_similar_movies(&self, id: i64) -> FetchResult<MovieList> {
        self.remote.get_similar_movies(id).await
    }

    pub async fn get_recommendations_movies(&self, id: i64) -> FetchResult<MovieList> {
        self.remote.get_recommendations_movies(id).await
    }
}

impl std::fmt::Debug for MovieRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieRepository").finish_non_exhaustive()
    }
}
