use serde::{Deserialize, Serialize};

/// Full movie record.
///
/// Every field always holds a value; absent wire fields are replaced by the
/// defaults documented on [`Movie::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Catalog ID
    pub id: i64,
    /// Localized title
    pub title: String,
    /// Plot summary
    pub overview: String,
    /// Release date (YYYY-MM-DD), empty when unknown
    pub release_date: String,
    /// Runtime in minutes
    pub runtime: i32,
    /// Average rating (0-10 scale)
    pub vote_average: f64,
    /// Vote count
    pub vote_count: i64,
    /// Relative poster path (e.g. `/abc.jpg`)
    pub poster_path: String,
    /// Relative backdrop path
    pub backdrop_path: String,
    pub genres: Vec<Genre>,
    pub production_companies: Vec<ProductionCompany>,
    pub production_countries: Vec<ProductionCountry>,
    pub spoken_languages: Vec<SpokenLanguage>,
    /// Budget in USD
    pub budget: i64,
    /// Revenue in USD
    pub revenue: i64,
    /// Release status (e.g. "Released")
    pub status: String,
    pub homepage: String,
    pub imdb_id: String,
    /// Title in the original language
    pub original_title: String,
    pub adult: bool,
    pub tagline: String,
    /// ISO 639-1 code of the original language
    pub original_language: String,
}

impl Default for Movie {
    /// Zero for numbers, empty for strings and lists.
    ///
    /// `adult` defaults to `true`; existing screens rely on that value when the
    /// field is missing from a payload.
    fn default() -> Self {
        Self {
            id: 0,
            title: String::new(),
            overview: String::new(),
            release_date: String::new(),
            runtime: 0,
            vote_average: 0.0,
            vote_count: 0,
            poster_path: String::new(),
            backdrop_path: String::new(),
            genres: Vec::new(),
            production_companies: Vec::new(),
            production_countries: Vec::new(),
            spoken_languages: Vec::new(),
            budget: 0,
            revenue: 0,
            status: String::new(),
            homepage: String::new(),
            imdb_id: String::new(),
            original_title: String::new(),
            adult: true,
            tagline: String::new(),
            original_language: String::new(),
        }
    }
}

/// One page of a paginated movie query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieList {
    /// Page number, starting at 1
    pub page: i32,
    pub results: Vec<Movie>,
    pub total_pages: i32,
    pub total_results: i64,
}

impl Default for MovieList {
    fn default() -> Self {
        Self {
            page: 1,
            results: Vec::new(),
            total_pages: 1,
            total_results: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: i64,
    pub name: String,
    pub logo_path: String,
    /// ISO 3166-1 country code
    pub origin_country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub english_name: String,
    pub iso_639_1: String,
    pub name: String,
}
