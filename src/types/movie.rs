use serde::{Deserialize, Serialize};

/// One record in the movie catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub genre: String,
    // raw string from the catalog file, format varies between entries
    pub release_date: String,
    pub director: String,
    pub actor: String,
    pub rating: f64,
    pub duration: u32,
    pub language: String,
    pub country: String,
    pub description: String,
}
