pub mod api_types;
mod mapper;
mod provider;

pub use provider::TmdbDataSource;
