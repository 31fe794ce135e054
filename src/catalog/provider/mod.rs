pub mod tmdb;

mod http;
mod traits;

pub use http::HttpClient;
pub use tmdb::TmdbDataSource;
pub use traits::{MovieDataSource, TimeWindow};
