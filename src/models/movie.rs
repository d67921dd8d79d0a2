use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// A catalog row as served by the API.
///
/// Column names match the `movies` table so the same shape maps both plain
/// selects and the cart join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct Movie {
    pub movie_id: i32,
    pub title: String,
    pub year: i32,
    pub plot: String,
    pub genre: String,
    #[serde(rename = "imdb_id")]
    pub imdbid: String,
    /// Comma-separated display list, stored as a single column.
    pub actors: String,
}

/// Body of `POST /cart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub user_id: i64,
    pub movie_id: i32,
}

/// Seed record used by `movie-rental seed`. `movie_id` is optional so the
/// storage engine can assign it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMovie {
    #[serde(default)]
    pub movie_id: Option<i32>,
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default, alias = "imdb_id")]
    pub imdbid: String,
    #[serde(default)]
    pub actors: String,
}
