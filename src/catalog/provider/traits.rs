use crate::catalog::{
    FetchResult,
    types::{Movie, MovieList},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Time window for trending queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
}

impl TimeWindow {
    /// Path segment used by the trending endpoint
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            other => Err(format!("unknown time window: {other}")),
        }
    }
}

/// Source of movie data.
///
/// Each operation performs at most one request and never returns a raw
/// transport error: failures arrive already classified as a
/// [`Failure`](crate::catalog::Failure).
#[async_trait]
pub trait MovieDataSource: Send + Sync {
    /// Full details for one movie
    async fn get_movie(&self, id: i64) -> FetchResult<Movie>;

    /// First page of popular movies
    async fn get_popular_movies(&self) -> FetchResult<MovieList>;

    /// Free-text title search
    async fn search_movies(&self, query: &str) -> FetchResult<MovieList>;

    /// Trending movies for the given window
    async fn get_trending_movies(&self, window: TimeWindow) -> FetchResult<MovieList>;

    /// Movies similar to the given one
    async fn get_similar_movies(&self, id: i64) -> FetchResult<MovieList>;

    /// Recommendations based on the given movie
    async fn get_recommendations_movies(&self, id: i64) -> FetchResult<MovieList>;
}
