mod catalog;
mod config;
mod movie;

pub use catalog::MovieCatalog;
pub use config::Config;
pub use movie::Movie;
