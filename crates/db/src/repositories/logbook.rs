use crate::models::DbLogbook;
use chrono::Utc;
use eyre::Result;
use logtrack_core::models::logbook::CountFilter;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const LOGBOOK_COLUMNS: &str = "id, student_id, week_number, weekly_summary, daily_logs, \
     department, student_name, school, supervisor_comments, supervisor_phone, \
     signed_by, is_approved, created_at";

pub async fn create_logbook(
    pool: &Pool<Postgres>,
    student_id: Uuid,
    week_number: i32,
    weekly_summary: &str,
    daily_logs: &serde_json::Value,
    department: &str,
    student_name: &str,
    school: &str,
) -> Result<DbLogbook> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating logbook: id={}, student_id={}, week={}",
        id,
        student_id,
        week_number
    );

    let logbook = sqlx::query_as::<_, DbLogbook>(&format!(
        r#"
        INSERT INTO logbooks
            (id, student_id, week_number, weekly_summary, daily_logs, department,
             student_name, school, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {LOGBOOK_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(student_id)
    .bind(week_number)
    .bind(weekly_summary)
    .bind(daily_logs)
    .bind(department)
    .bind(student_name)
    .bind(school)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(logbook)
}

pub async fn get_logbooks_by_student(
    pool: &Pool<Postgres>,
    student_id: Uuid,
) -> Result<Vec<DbLogbook>> {
    let logbooks = sqlx::query_as::<_, DbLogbook>(&format!(
        r#"
        SELECT {LOGBOOK_COLUMNS}
        FROM logbooks
        WHERE student_id = $1
        ORDER BY week_number ASC
        "#
    ))
    .bind(student_id)
    .fetch_all(pool)
    .await?;

    Ok(logbooks)
}

pub async fn get_all_logbooks(pool: &Pool<Postgres>) -> Result<Vec<DbLogbook>> {
    let logbooks = sqlx::query_as::<_, DbLogbook>(&format!(
        r#"
        SELECT {LOGBOOK_COLUMNS}
        FROM logbooks
        ORDER BY created_at DESC
        "#
    ))
    .fetch_all(pool)
    .await?;

    Ok(logbooks)
}

pub async fn get_logbook_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbLogbook>> {
    let logbook = sqlx::query_as::<_, DbLogbook>(&format!(
        r#"
        SELECT {LOGBOOK_COLUMNS}
        FROM logbooks
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(logbook)
}

/// Counts logbooks, optionally scoped to one student, filtered by approval state.
pub async fn count_logbooks(
    pool: &Pool<Postgres>,
    student_id: Option<Uuid>,
    filter: CountFilter,
) -> Result<i64> {
    let approval = match filter {
        CountFilter::All => "",
        CountFilter::Approved => "AND is_approved = TRUE",
        CountFilter::Unapproved => "AND is_approved = FALSE",
    };

    let count: i64 = match student_id {
        Some(student_id) => {
            sqlx::query_scalar(&format!(
                "SELECT COUNT(*) FROM logbooks WHERE student_id = $1 {approval}"
            ))
            .bind(student_id)
            .fetch_one(pool)
            .await?
        }
        None => {
            sqlx::query_scalar(&format!(
                "SELECT COUNT(*) FROM logbooks WHERE TRUE {approval}"
            ))
            .fetch_one(pool)
            .await?
        }
    };

    Ok(count)
}

/// Sets supervisor comments. Null or empty comments are accepted as-is.
pub async fn set_supervisor_comments(
    pool: &Pool<Postgres>,
    id: Uuid,
    supervisor_comments: Option<&str>,
) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE logbooks
        SET supervisor_comments = $2
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(supervisor_comments)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn set_supervisor_phone(
    pool: &Pool<Postgres>,
    id: Uuid,
    supervisor_phone: Option<&str>,
) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE logbooks
        SET supervisor_phone = $2
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(supervisor_phone)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn set_signed_by(
    pool: &Pool<Postgres>,
    id: Uuid,
    signed_by: Option<&str>,
) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE logbooks
        SET signed_by = $2
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(signed_by)
    .execute(pool)
    .await?;

    Ok(())
}

/// Marks a logbook approved. Idempotent: re-approving an approved logbook is
/// a successful no-op, and no transition back to unapproved exists.
pub async fn approve_logbook(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE logbooks
        SET is_approved = TRUE
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete_logbook(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM logbooks
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
