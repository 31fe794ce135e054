use serde::{Deserialize, Serialize};

// Paginated list responses (popular, search, trending, similar, recommendations)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MovieListDto {
    pub page: Option<i32>,
    pub results: Option<Vec<MovieDto>>,
    pub total_pages: Option<i32>,
    pub total_results: Option<i64>,
}

// List items and movie details share one shape; list items just leave most
// fields out.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MovieDto {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<i32>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub genres: Option<Vec<GenreDto>>,
    pub production_companies: Option<Vec<ProductionCompanyDto>>,
    pub production_countries: Option<Vec<ProductionCountryDto>>,
    pub spoken_languages: Option<Vec<SpokenLanguageDto>>,
    pub budget: Option<i64>,
    pub revenue: Option<i64>,
    pub status: Option<String>,
    pub homepage: Option<String>,
    pub imdb_id: Option<String>,
    pub original_title: Option<String>,
    pub adult: Option<bool>,
    pub tagline: Option<String>,
    pub original_language: Option<String>,
}

// Nested records
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenreDto {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProductionCompanyDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub logo_path: Option<String>,
    pub origin_country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProductionCountryDto {
    pub iso_3166_1: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SpokenLanguageDto {
    pub english_name: Option<String>,
    pub iso_639_1: Option<String>,
    pub name: Option<String>,
}
