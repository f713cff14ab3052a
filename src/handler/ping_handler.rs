use axum::response::IntoResponse;

// Liveness only, does not touch the database
pub async fn ping() -> impl IntoResponse {
    "pong"
}
