use super::api_types::{MovieDto, MovieListDto};
use crate::catalog::{
    FetchResult, Result,
    provider::{HttpClient, MovieDataSource, TimeWindow},
    types::{Movie, MovieList},
};
use crate::config::CatalogConfig;
use async_trait::async_trait;
use tracing::debug;

/// Remote data source backed by The Movie Database REST API
#[derive(Debug, Clone)]
pub struct TmdbDataSource {
    client: HttpClient,
}

impl TmdbDataSource {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(config)?,
        })
    }

    async fn fetch_movie(&self, id: i64) -> Result<Movie> {
        let endpoint = format!("movie/{id}");
        let movie: Option<MovieDto> = self.client.get(&endpoint).await?;

        Ok(movie.map(Movie::from).unwrap_or_default())
    }

    async fn fetch_list(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<MovieList> {
        let list: Option<MovieListDto> = self.client.get_with_params(endpoint, params).await?;
        let list = list.map(MovieList::from).unwrap_or_default();

        debug!(
            "{endpoint}: page {} of {}, {} results",
            list.page,
            list.total_pages,
            list.results.len()
        );

        Ok(list)
    }
}

#[async_trait]
impl MovieDataSource for TmdbDataSource {
    async fn get_movie(&self, id: i64) -> FetchResult<Movie> {
        Ok(self.fetch_movie(id).await?)
    }

    async fn get_popular_movies(&self) -> FetchResult<MovieList> {
        Ok(self.fetch_list("movie/popular", &[]).await?)
    }

    async fn search_movies(&self, query: &str) -> FetchResult<MovieList> {
        Ok(self.fetch_list("search/movie", &[("query", query)]).await?)
    }

    async fn get_trending_movies(&self, window: TimeWindow) -> FetchResult<MovieList> {
        let endpoint = format!("trending/movie/{window}");
        Ok(self.fetch_list(&endpoint, &[]).await?)
    }

    async fn get_similar_movies(&self, id: i64) -> FetchResult<MovieList> {
        let endpoint = format!("movie/{id}/similar");
        Ok(self.fetch_list(&endpoint, &[]).await?)
    }

    async fn get_recommendations_movies(&self, id: i64) -> FetchResult<MovieList> {
        let endpoint = format!("movie/{id}/recommendations");
        Ok(self.fetch_list(&endpoint, &[]).await?)
    }
}
