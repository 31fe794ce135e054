use crate::catalog::{Genre, Movie, MovieList};
use serde::Serialize;

/// Movie summary shown in grids, rows and the detail header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieUiModel {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub poster_path: String,
    pub genres: Vec<Genre>,
}

impl From<Movie> for MovieUiModel {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            overview: movie.overview,
            poster_path: movie.poster_path,
            genres: movie.genres,
        }
    }
}

/// One page of movie summaries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieListUiModel {
    pub results: Vec<MovieUiModel>,
    pub total_pages: i32,
    pub total_results: i64,
    pub current_page: i32,
}

impl MovieListUiModel {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl From<MovieList> for MovieListUiModel {
    fn from(list: MovieList) -> Self {
        Self {
            results: list.results.into_iter().map(MovieUiModel::from).collect(),
            total_pages: list.total_pages,
            total_results: list.total_results,
            current_page: list.page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_projection() {
        let movie = Movie {
            id: 7,
            title: "Heat".to_string(),
            overview: "A heist.".to_string(),
            poster_path: "/heat.jpg".to_string(),
            genres: vec![Genre {
                id: 80,
                name: "Crime".to_string(),
            }],
            budget: 60_000_000,
            ..Default::default()
        };

        let ui = MovieUiModel::from(movie);

        assert_eq!(ui.id, 7);
        assert_eq!(ui.title, "Heat");
        assert_eq!(ui.poster_path, "/heat.jpg");
        assert_eq!(ui.genres.len(), 1);
    }

    #[test]
    fn test_list_projection_keeps_order_and_paging() {
        let list = MovieList {
            page: 2,
            results: vec![
                Movie {
                    id: 1,
                    ..Default::default()
                },
                Movie {
                    id: 2,
                    ..Default::default()
                },
            ],
            total_pages: 5,
            total_results: 98,
        };

        let ui = MovieListUiModel::from(list);

        assert_eq!(ui.current_page, 2);
        assert_eq!(ui.total_pages, 5);
        assert_eq!(ui.total_results, 98);
        assert_eq!(
            ui.results.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }
}
