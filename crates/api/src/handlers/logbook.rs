use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use eyre::Result;
use logtrack_core::{
    errors::LogError,
    models::{
        MessageResponse,
        logbook::{
            CountFilter, CountResponse, CreateLogbookRequest, LogbookListResponse,
            LogbookResponse, SendEmailRequest, SetCommentsRequest, SetSignedByRequest,
            SetSupervisorPhoneRequest,
        },
    },
};
use logtrack_db::models::DbLogbook;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ApiState,
    middleware::{
        auth::{AuthUser, SupervisorUser},
        error_handling::{AppError, ValidJson},
    },
    report,
};

fn to_response(logbook: DbLogbook) -> LogbookResponse {
    LogbookResponse {
        id: logbook.id,
        student_id: logbook.student_id,
        week_number: logbook.week_number,
        weekly_summary: logbook.weekly_summary,
        daily_logs: logbook.daily_logs,
        department: logbook.department,
        student_name: logbook.student_name,
        school: logbook.school,
        supervisor_comments: logbook.supervisor_comments,
        supervisor_phone: logbook.supervisor_phone,
        signed_by: logbook.signed_by,
        is_approved: logbook.is_approved,
        created_at: logbook.created_at,
    }
}

async fn count(
    state: &ApiState,
    student_id: Option<Uuid>,
    filter: CountFilter,
) -> Result<Json<CountResponse>, AppError> {
    let count = logtrack_db::repositories::logbook::count_logbooks(&state.db_pool, student_id, filter)
        .await
        .map_err(LogError::Database)?;

    Ok(Json(CountResponse { count }))
}

#[axum::debug_handler]
pub async fn create_logbook(
    State(state): State<Arc<ApiState>>,
    _user: AuthUser,
    ValidJson(payload): ValidJson<CreateLogbookRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let daily_logs_present = payload
        .daily_logs
        .as_array()
        .map(|logs| !logs.is_empty())
        .unwrap_or(false);

    if payload.week_summary.trim().is_empty()
        || payload.department.trim().is_empty()
        || payload.student_name.trim().is_empty()
        || payload.school.trim().is_empty()
        || payload.week_number < 1
        || !daily_logs_present
    {
        return Err(AppError(LogError::Validation(
            "Please fill in all fields, ensure daily logs and week summary are recorded"
                .to_string(),
        )));
    }

    logtrack_db::repositories::logbook::create_logbook(
        &state.db_pool,
        payload.student_id,
        payload.week_number,
        &payload.week_summary,
        &payload.daily_logs,
        &payload.department,
        &payload.student_name,
        &payload.school,
    )
    .await
    .map_err(LogError::Database)?;

    Ok(Json(MessageResponse::new("Logbook created successfully")))
}

#[axum::debug_handler]
pub async fn get_logbooks_by_student(
    State(state): State<Arc<ApiState>>,
    _user: AuthUser,
    Path(student_id): Path<Uuid>,
) -> Result<Json<LogbookListResponse>, AppError> {
    let logbooks =
        logtrack_db::repositories::logbook::get_logbooks_by_student(&state.db_pool, student_id)
            .await
            .map_err(LogError::Database)?;

    Ok(Json(LogbookListResponse {
        data: logbooks.into_iter().map(to_response).collect(),
    }))
}

/// Supervisor dashboard: every student's logbooks.
#[axum::debug_handler]
pub async fn get_all_logbooks(
    State(state): State<Arc<ApiState>>,
    _user: SupervisorUser,
) -> Result<Json<LogbookListResponse>, AppError> {
    let logbooks = logtrack_db::repositories::logbook::get_all_logbooks(&state.db_pool)
        .await
        .map_err(LogError::Database)?;

    Ok(Json(LogbookListResponse {
        data: logbooks.into_iter().map(to_response).collect(),
    }))
}

#[axum::debug_handler]
pub async fn get_logbook_by_id(
    State(state): State<Arc<ApiState>>,
    _user: AuthUser,
    Path(logbook_id): Path<Uuid>,
) -> Result<Json<LogbookListResponse>, AppError> {
    let logbook = logtrack_db::repositories::logbook::get_logbook_by_id(&state.db_pool, logbook_id)
        .await
        .map_err(LogError::Database)?;

    Ok(Json(LogbookListResponse {
        data: logbook.map(to_response).into_iter().collect(),
    }))
}

#[axum::debug_handler]
pub async fn count_total_by_student(
    State(state): State<Arc<ApiState>>,
    _user: AuthUser,
    Path(student_id): Path<Uuid>,
) -> Result<Json<CountResponse>, AppError> {
    count(&state, Some(student_id), CountFilter::All).await
}

#[axum::debug_handler]
pub async fn count_approved_by_student(
    State(state): State<Arc<ApiState>>,
    _user: AuthUser,
    Path(student_id): Path<Uuid>,
) -> Result<Json<CountResponse>, AppError> {
    count(&state, Some(student_id), CountFilter::Approved).await
}

#[axum::debug_handler]
pub async fn count_unapproved_by_student(
    State(state): State<Arc<ApiState>>,
    _user: AuthUser,
    Path(student_id): Path<Uuid>,
) -> Result<Json<CountResponse>, AppError> {
    count(&state, Some(student_id), CountFilter::Unapproved).await
}

#[axum::debug_handler]
pub async fn count_total(
    State(state): State<Arc<ApiState>>,
    _user: SupervisorUser,
) -> Result<Json<CountResponse>, AppError> {
    count(&state, None, CountFilter::All).await
}

#[axum::debug_handler]
pub async fn count_approved(
    State(state): State<Arc<ApiState>>,
    _user: SupervisorUser,
) -> Result<Json<CountResponse>, AppError> {
    count(&state, None, CountFilter::Approved).await
}

#[axum::debug_handler]
pub async fn count_unapproved(
    State(state): State<Arc<ApiState>>,
    _user: SupervisorUser,
) -> Result<Json<CountResponse>, AppError> {
    count(&state, None, CountFilter::Unapproved).await
}

/// Sets supervisor comments. Empty or absent comments are stored as given.
#[axum::debug_handler]
pub async fn set_supervisor_comments(
    State(state): State<Arc<ApiState>>,
    _user: SupervisorUser,
    Path(id): Path<Uuid>,
    ValidJson(payload): ValidJson<SetCommentsRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    logtrack_db::repositories::logbook::set_supervisor_comments(
        &state.db_pool,
        id,
        payload.supervisor_comments.as_deref(),
    )
    .await
    .map_err(LogError::Database)?;

    Ok(Json(MessageResponse::new("Logbook updated successfully")))
}

#[axum::debug_handler]
pub async fn set_supervisor_phone(
    State(state): State<Arc<ApiState>>,
    _user: SupervisorUser,
    Path(id): Path<Uuid>,
    ValidJson(payload): ValidJson<SetSupervisorPhoneRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    logtrack_db::repositories::logbook::set_supervisor_phone(
        &state.db_pool,
        id,
        payload.supervisor_phone.as_deref(),
    )
    .await
    .map_err(LogError::Database)?;

    Ok(Json(MessageResponse::new("Logbook updated successfully")))
}

#[axum::debug_handler]
pub async fn set_signed_by(
    State(state): State<Arc<ApiState>>,
    _user: SupervisorUser,
    Path(id): Path<Uuid>,
    ValidJson(payload): ValidJson<SetSignedByRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    logtrack_db::repositories::logbook::set_signed_by(
        &state.db_pool,
        id,
        payload.signed_by.as_deref(),
    )
    .await
    .map_err(LogError::Database)?;

    Ok(Json(MessageResponse::new("Logbook updated successfully")))
}

/// Marks a logbook approved. Idempotent, and never reverts.
#[axum::debug_handler]
pub async fn approve_logbook(
    State(state): State<Arc<ApiState>>,
    _user: SupervisorUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    logtrack_db::repositories::logbook::approve_logbook(&state.db_pool, id)
        .await
        .map_err(LogError::Database)?;

    Ok(Json(MessageResponse::new("Logbook updated successfully")))
}

#[axum::debug_handler]
pub async fn delete_logbook(
    State(state): State<Arc<ApiState>>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    logtrack_db::repositories::logbook::delete_logbook(&state.db_pool, id)
        .await
        .map_err(LogError::Database)?;

    Ok(Json(MessageResponse::new("Logbook deleted successfully")))
}

/// Streams one logbook rendered as a weekly-report PDF attachment.
#[axum::debug_handler]
pub async fn download_logbook_pdf(
    State(state): State<Arc<ApiState>>,
    _user: AuthUser,
    Path(logbook_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let logbook = logtrack_db::repositories::logbook::get_logbook_by_id(&state.db_pool, logbook_id)
        .await
        .map_err(LogError::Database)?
        .ok_or_else(|| LogError::NotFound(format!("Logbook with ID {} not found", logbook_id)))?;

    let layout = report::ReportLayout::from_logbook(&logbook);
    let pdf_bytes = report::render_pdf(&layout).map_err(|e| LogError::Internal(e.into()))?;

    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/pdf"),
        ),
        (
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("attachment; filename=weekly-logs.pdf"),
        ),
    ];

    Ok((headers, pdf_bytes).into_response())
}

/// Delivers a notification email through the configured SMTP relay.
#[axum::debug_handler]
pub async fn send_email(
    State(state): State<Arc<ApiState>>,
    _user: AuthUser,
    ValidJson(payload): ValidJson<SendEmailRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let mailer = state.mailer.as_ref().ok_or_else(|| {
        LogError::Internal("Mail service is not configured".into())
    })?;

    mailer
        .send(&payload.from, &payload.to, &payload.subject, &payload.text)
        .await
        .map_err(|e| LogError::Internal(e.into()))?;

    Ok(Json(MessageResponse::new("Email sent successfully!")))
}
