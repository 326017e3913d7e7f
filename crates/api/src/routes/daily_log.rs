use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/daily-logs/add",
            post(handlers::daily_log::create_daily_log),
        )
        // `:id` here is the student id; a single log is fetched under /daily-log/:id
        .route(
            "/api/daily-logs/:id",
            get(handlers::daily_log::get_daily_logs_by_student)
                .put(handlers::daily_log::update_daily_log)
                .delete(handlers::daily_log::delete_daily_log),
        )
        .route(
            "/api/daily-logs/daily-log/:id",
            get(handlers::daily_log::get_daily_log_by_id),
        )
}
