use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/logbooks/add", post(handlers::logbook::create_logbook))
        .route(
            "/api/logbooks/:student_id",
            get(handlers::logbook::get_logbooks_by_student),
        )
        .route(
            "/api/logbooks/admin/logbooks",
            get(handlers::logbook::get_all_logbooks),
        )
        .route(
            "/api/logbooks/logbook/:id",
            get(handlers::logbook::get_logbook_by_id).delete(handlers::logbook::delete_logbook),
        )
        .route(
            "/api/logbooks/logbook/pdf/:id",
            get(handlers::logbook::download_logbook_pdf),
        )
        // Per-student dashboard counts
        .route(
            "/api/logbooks/total/:student_id",
            get(handlers::logbook::count_total_by_student),
        )
        .route(
            "/api/logbooks/approved/:student_id",
            get(handlers::logbook::count_approved_by_student),
        )
        .route(
            "/api/logbooks/unapproved/:student_id",
            get(handlers::logbook::count_unapproved_by_student),
        )
        // Supervisor dashboard counts
        .route(
            "/api/logbooks/admin/logbooks/total",
            get(handlers::logbook::count_total),
        )
        .route(
            "/api/logbooks/admin/logbooks/approved",
            get(handlers::logbook::count_approved),
        )
        .route(
            "/api/logbooks/admin/logbooks/unapproved",
            get(handlers::logbook::count_unapproved),
        )
        // Approval workflow, one single-statement transition per route
        .route(
            "/api/logbooks/admin/logbook/comments/:id",
            put(handlers::logbook::set_supervisor_comments),
        )
        .route(
            "/api/logbooks/admin/logbook/supervisor-phone/:id",
            put(handlers::logbook::set_supervisor_phone),
        )
        .route(
            "/api/logbooks/admin/logbook/signedby/:id",
            put(handlers::logbook::set_signed_by),
        )
        .route(
            "/api/logbooks/admin/logbook/approve/:id",
            put(handlers::logbook::approve_logbook),
        )
        .route("/api/logbooks/send-email", post(handlers::logbook::send_email))
}
