use axum::Json;

use super::MessageResponse;

/// `GET /hello`
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello, World!"))
}
