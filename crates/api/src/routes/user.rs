use axum::{Router, routing::post};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/users/register", post(handlers::user::register))
        .route("/api/users/login", post(handlers::user::login))
}
