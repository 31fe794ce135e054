mod image;
mod provider;
mod repository;
pub mod status;
mod types;


pub use image::{ImageUrlBuilder, IMAGE_FULL_SIZE};
pub use provider::{
    HttpClient, MovieDataSource, TimeWindow, TmdbDataSource,
    tmdb::api_types::{
        GenreDto, MovieDto, MovieListDto, ProductionCompanyDto, ProductionCountryDto,
        SpokenLanguageDto,
    },
};
pub use repository::MovieRepository;
pub use types::{Genre, Movie, MovieList, ProductionCompany, ProductionCountry, SpokenLanguage};

/// Catalog result type for internal plumbing
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Result type returned across the data-source boundary
pub type FetchResult<T> = std::result::Result<T, Failure>;

/// Catalog error types
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status}")]
    Api { status: u16 },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Other(String),
}

impl CatalogError {
    /// Classify the error into the numeric code shown to users.
    ///
    /// Non-HTTP causes get a negative synthetic code; see [`status`].
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::Network(e) if e.is_connect() => status::NO_CONNECTION,
            Self::Network(e) => match e.status() {
                Some(s) => i32::from(s.as_u16()),
                None if e.is_builder() => status::NOT_FOUND,
                None => status::IO_ERROR,
            },
            Self::Api { status } => i32::from(*status),
            Self::Decode(e) if e.is_data() => status::NULL_REFERENCE,
            Self::Decode(_) => status::GENERIC_ERROR,
            Self::InvalidArgument(_) => status::NOT_FOUND,
            Self::Config(_) | Self::Other(_) => status::GENERIC_ERROR,
        }
    }
}

/// A classified failure carrying the user-facing message.
///
/// The presentation layer only ever displays [`Failure::message`]; the code
/// is kept for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    pub code: i32,
    pub message: String,
}

impl Failure {
    /// Build a failure for a numeric code using the fixed message table
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        Self {
            code,
            message: status::describe(code),
        }
    }
}

impl From<CatalogError> for Failure {
    fn from(err: CatalogError) -> Self {
        let code = err.code();
        tracing::warn!("Request failed with code {code}: {err}");
        Self::from_code(code)
    }
}
