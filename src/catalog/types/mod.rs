mod movie;

pub use movie::{Genre, Movie, MovieList, ProductionCompany, ProductionCountry, SpokenLanguage};
