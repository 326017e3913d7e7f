use axum::{
    Json,
    extract::{Path, State},
};
use eyre::Result;
use logtrack_core::{
    errors::LogError,
    models::{
        MessageResponse,
        daily_log::{
            CreateDailyLogRequest, DailyLogListResponse, DailyLogResponse, UpdateDailyLogRequest,
        },
    },
};
use logtrack_db::models::DbDailyLog;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ApiState,
    middleware::{
        auth::AuthUser,
        error_handling::{AppError, ValidJson},
    },
};

fn to_response(log: DbDailyLog) -> DailyLogResponse {
    DailyLogResponse {
        id: log.id,
        student_id: log.student_id,
        day: log.day,
        date: log.date,
        week_number: log.week_number,
        description_of_work: log.description_of_work,
        skills_learnt: log.skills_learnt,
        created_at: log.created_at,
    }
}

#[axum::debug_handler]
pub async fn create_daily_log(
    State(state): State<Arc<ApiState>>,
    _user: AuthUser,
    ValidJson(payload): ValidJson<CreateDailyLogRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if payload.day.trim().is_empty()
        || payload.description.trim().is_empty()
        || payload.skills_learnt.trim().is_empty()
        || payload.week_number < 1
    {
        return Err(AppError(LogError::Validation(
            "Please fill in all fields".to_string(),
        )));
    }

    // Duplicate (student, week, day, date) entries are rejected by the store's
    // unique index, so concurrent identical submissions cannot both land.
    logtrack_db::repositories::daily_log::create_daily_log(
        &state.db_pool,
        payload.student_id,
        &payload.day,
        payload.date,
        payload.week_number,
        &payload.description,
        &payload.skills_learnt,
    )
    .await
    .map_err(|e| {
        if logtrack_db::is_unique_violation(&e) {
            LogError::Conflict("Log already exists".to_string())
        } else {
            LogError::Database(e)
        }
    })?;

    Ok(Json(MessageResponse::new("Daily log created successfully")))
}

/// Returns all daily logs recorded by the student identified by the path id.
#[axum::debug_handler]
pub async fn get_daily_logs_by_student(
    State(state): State<Arc<ApiState>>,
    _user: AuthUser,
    Path(student_id): Path<Uuid>,
) -> Result<Json<DailyLogListResponse>, AppError> {
    let daily_logs =
        logtrack_db::repositories::daily_log::get_daily_logs_by_student(&state.db_pool, student_id)
            .await
            .map_err(LogError::Database)?;

    Ok(Json(DailyLogListResponse {
        data: daily_logs.into_iter().map(to_response).collect(),
    }))
}

/// Returns zero or one daily log by its own id, in the list-shaped envelope.
#[axum::debug_handler]
pub async fn get_daily_log_by_id(
    State(state): State<Arc<ApiState>>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DailyLogListResponse>, AppError> {
    let daily_log = logtrack_db::repositories::daily_log::get_daily_log_by_id(&state.db_pool, id)
        .await
        .map_err(LogError::Database)?;

    Ok(Json(DailyLogListResponse {
        data: daily_log.map(to_response).into_iter().collect(),
    }))
}

#[axum::debug_handler]
pub async fn update_daily_log(
    State(state): State<Arc<ApiState>>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
    ValidJson(payload): ValidJson<UpdateDailyLogRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if payload.day.trim().is_empty()
        || payload.description.trim().is_empty()
        || payload.skills_learnt.trim().is_empty()
        || payload.week_number < 1
    {
        return Err(AppError(LogError::Validation(
            "Please fill in all fields".to_string(),
        )));
    }

    // Full overwrite; updating a missing id is a silent no-op.
    logtrack_db::repositories::daily_log::update_daily_log(
        &state.db_pool,
        id,
        &payload.day,
        payload.date,
        payload.week_number,
        &payload.description,
        &payload.skills_learnt,
    )
    .await
    .map_err(LogError::Database)?;

    Ok(Json(MessageResponse::new("Daily log updated successfully")))
}

#[axum::debug_handler]
pub async fn delete_daily_log(
    State(state): State<Arc<ApiState>>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    logtrack_db::repositories::daily_log::delete_daily_log(&state.db_pool, id)
        .await
        .map_err(LogError::Database)?;

    Ok(Json(MessageResponse::new("Daily log deleted successfully")))
}
