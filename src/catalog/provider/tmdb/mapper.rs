//! Wire records to domain models.
//!
//! Every conversion is total: a missing field takes the domain default and
//! list order is kept as received.

use super::api_types::{
    GenreDto, MovieDto, MovieListDto, ProductionCompanyDto, ProductionCountryDto,
    SpokenLanguageDto,
};
use crate::catalog::types::{
    Genre, Movie, MovieList, ProductionCompany, ProductionCountry, SpokenLanguage,
};

fn map_all<D, M: From<D>>(items: Option<Vec<D>>) -> Vec<M> {
    items
        .unwrap_or_default()
        .into_iter()
        .map(M::from)
        .collect()
}

impl From<MovieDto> for Movie {
    fn from(dto: MovieDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            title: dto.title.unwrap_or_default(),
            overview: dto.overview.unwrap_or_default(),
            release_date: dto.release_date.unwrap_or_default(),
            runtime: dto.runtime.unwrap_or_default(),
            vote_average: dto.vote_average.unwrap_or_default(),
            vote_count: dto.vote_count.unwrap_or_default(),
            poster_path: dto.poster_path.unwrap_or_default(),
            backdrop_path: dto.backdrop_path.unwrap_or_default(),
            genres: map_all(dto.genres),
            production_companies: map_all(dto.production_companies),
            production_countries: map_all(dto.production_countries),
            spoken_languages: map_all(dto.spoken_languages),
            budget: dto.budget.unwrap_or_default(),
            revenue: dto.revenue.unwrap_or_default(),
            status: dto.status.unwrap_or_default(),
            homepage: dto.homepage.unwrap_or_default(),
            imdb_id: dto.imdb_id.unwrap_or_default(),
            original_title: dto.original_title.unwrap_or_default(),
            // Missing means adult, matching Movie::default
            adult: dto.adult.unwrap_or(true),
            tagline: dto.tagline.unwrap_or_default(),
            original_language: dto.original_language.unwrap_or_default(),
        }
    }
}

impl From<MovieListDto> for MovieList {
    fn from(dto: MovieListDto) -> Self {
        Self {
            page: dto.page.unwrap_or(1),
            results: map_all(dto.results),
            total_pages: dto.total_pages.unwrap_or(1),
            total_results: dto.total_results.unwrap_or_default(),
        }
    }
}

impl From<GenreDto> for Genre {
    fn from(dto: GenreDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            name: dto.name.unwrap_or_default(),
        }
    }
}

impl From<ProductionCompanyDto> for ProductionCompany {
    fn from(dto: ProductionCompanyDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            name: dto.name.unwrap_or_default(),
            logo_path: dto.logo_path.unwrap_or_default(),
            origin_country: dto.origin_country.unwrap_or_default(),
        }
    }
}

impl From<ProductionCountryDto> for ProductionCountry {
    fn from(dto: ProductionCountryDto) -> Self {
        Self {
            iso_3166_1: dto.iso_3166_1.unwrap_or_default(),
            name: dto.name.unwrap_or_default(),
        }
    }
}

impl From<SpokenLanguageDto> for SpokenLanguage {
    fn from(dto: SpokenLanguageDto) -> Self {
        Self {
            english_name: dto.english_name.unwrap_or_default(),
            iso_639_1: dto.iso_639_1.unwrap_or_default(),
            name: dto.name.unwrap_or_default(),
        }
    }
}
