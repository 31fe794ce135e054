//! Controllers for each screen of the browser.
//!
//! Every screen pairs a [`FetchController`] with the repository call it needs
//! and a projection into UI models. Screens that act on one movie take its ID
//! as the fetch parameter.

use super::{
    controller::FetchController,
    models::{MovieListUiModel, MovieUiModel},
};
use crate::catalog::{
    CatalogError, Failure, FetchResult, MovieRepository, TimeWindow,
};

/// Parse the movie ID passed as a fetch parameter
fn movie_id(param: Option<&str>) -> FetchResult<i64> {
    param
        .and_then(|p| p.trim().parse().ok())
        .ok_or_else(|| {
            Failure::from(CatalogError::InvalidArgument(format!(
                "movie id {param:?} is not a number"
            )))
        })
}

/// Popular movies (home)
pub fn popular(repository: MovieRepository) -> FetchController<MovieListUiModel> {
    FetchController::new("popular", move |_param| {
        let repository = repository.clone();
        async move {
            repository
                .get_popular_movies()
                .await
                .map(MovieListUiModel::from)
        }
    })
}

/// Trending movies for a fixed window
pub fn trending(
    repository: MovieRepository,
    window: TimeWindow,
) -> FetchController<MovieListUiModel> {
    FetchController::new("trending", move |_param| {
        let repository = repository.clone();
        async move {
            repository
                .get_trending_movies(window)
                .await
                .map(MovieListUiModel::from)
        }
    })
}

/// Search results; the fetch parameter is the query, missing means empty
pub fn search(repository: MovieRepository) -> FetchController<MovieListUiModel> {
    FetchController::new("search", move |param: Option<String>| {
        let repository = repository.clone();
        async move {
            let query = param.unwrap_or_default();
            repository
                .search_movies(&query)
                .await
                .map(MovieListUiModel::from)
        }
    })
}

/// Detail header for one movie
pub fn movie_detail(repository: MovieRepository) -> FetchController<MovieUiModel> {
    FetchController::new("movie_detail", move |param: Option<String>| {
        let repository = repository.clone();
        async move {
            let id = movie_id(param.as_deref())?;
            repository.get_movie(id).await.map(MovieUiModel::from)
        }
    })
}

/// Movies similar to the one in the parameter
pub fn similar(repository: MovieRepository) -> FetchController<MovieListUiModel> {
    FetchController::new("similar", move |param: Option<String>| {
        let repository = repository.clone();
        async move {
            let id = movie_id(param.as_deref())?;
            repository
                .get_similar_movies(id)
                .await
                .map(MovieListUiModel::from)
        }
    })
}

/// Recommendations for the movie in the parameter
pub fn recommendations(repository: MovieRepository) -> FetchController<MovieListUiModel> {
    FetchController::new("recommendations", move |param: Option<String>| {
        let repository = repository.clone();
        async move {
            let id = movie_id(param.as_deref())?;
            repository
                .get_recommendations_movies(id)
                .await
                .map(MovieListUiModel::from)
        }
    })
}
