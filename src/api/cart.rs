use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use std::sync::Arc;

use super::{ApiError, AppState, MessageResponse};
use crate::models::{AddToCartRequest, Movie};

/// `POST /cart`. Any body that does not decode as an [`AddToCartRequest`]
/// is a 400, and nothing is written.
pub async fn add_to_cart(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddToCartRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::validation(rejection.body_text()))?;

    state
        .cart
        .add_to_cart(&request.user_id.to_string(), request.movie_id)
        .await
        .map_err(|e| state.repository_error(e))?;

    Ok(Json(MessageResponse::new("Movie added to cart")))
}

/// `GET /cart/{user_id}`.
pub async fn view_cart(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let items = state
        .cart
        .get_cart_items(&user_id)
        .await
        .map_err(|e| state.repository_error(e))?;

    Ok(Json(items))
}
