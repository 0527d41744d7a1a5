use std::fs::File;

use anyhow::{Context, Result};

use super::Movie;

/// The movie catalog, loaded once at startup and never written afterwards.
pub struct MovieCatalog {
    movies: Vec<Movie>,
}

impl MovieCatalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Couldn't open catalog file {path}"))?;
        let movies = serde_json::from_reader(file)
            .with_context(|| format!("Couldn't parse catalog file {path}"))?;
        Ok(Self::new(movies))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Records whose title contains `query` as a substring, catalog order.
    /// Matching is case-sensitive; the empty string matches every record.
    pub fn search_by_title(&self, query: &str) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|m| m.title.contains(query))
            .collect()
    }
}
