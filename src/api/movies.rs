use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::db::MovieFilter;
use crate::models::Movie;

/// `GET /movies` and `GET /movies/filter`.
///
/// Missing and empty query parameters both mean "no filter". A repeated
/// parameter uses its first value.
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let filter = MovieFilter::from_query_pairs(params);
    let movies = state
        .movies
        .list_movies(&filter)
        .await
        .map_err(|e| state.repository_error(e))?;

    Ok(Json(movies))
}

/// `GET /movies/{id}`. The id reaches the database as typed.
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let movie = state
        .movies
        .get_movie_by_id(&id)
        .await
        .map_err(|e| state.repository_error(e))?;

    movie
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Movie", id))
}
