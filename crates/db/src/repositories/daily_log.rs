use crate::models::DbDailyLog;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Inserts a daily log entry.
///
/// The (student_id, week_number, day, date) tuple carries a unique index, so a
/// duplicate submission fails here with a unique violation rather than being
/// screened by a racy read-then-write check. Callers can classify the failure
/// with [`crate::is_unique_violation`].
pub async fn create_daily_log(
    pool: &Pool<Postgres>,
    student_id: Uuid,
    day: &str,
    date: NaiveDate,
    week_number: i32,
    description_of_work: &str,
    skills_learnt: &str,
) -> Result<DbDailyLog> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating daily log: id={}, student_id={}, week={}, day={}",
        id,
        student_id,
        week_number,
        day
    );

    let daily_log = sqlx::query_as::<_, DbDailyLog>(
        r#"
        INSERT INTO daily_logs
            (id, student_id, day, date, week_number, description_of_work, skills_learnt, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, student_id, day, date, week_number, description_of_work,
                  skills_learnt, created_at
        "#,
    )
    .bind(id)
    .bind(student_id)
    .bind(day)
    .bind(date)
    .bind(week_number)
    .bind(description_of_work)
    .bind(skills_learnt)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(daily_log)
}

pub async fn get_daily_logs_by_student(
    pool: &Pool<Postgres>,
    student_id: Uuid,
) -> Result<Vec<DbDailyLog>> {
    let daily_logs = sqlx::query_as::<_, DbDailyLog>(
        r#"
        SELECT id, student_id, day, date, week_number, description_of_work,
               skills_learnt, created_at
        FROM daily_logs
        WHERE student_id = $1
        ORDER BY week_number ASC, date ASC
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?;

    Ok(daily_logs)
}

pub async fn get_daily_log_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbDailyLog>> {
    let daily_log = sqlx::query_as::<_, DbDailyLog>(
        r#"
        SELECT id, student_id, day, date, week_number, description_of_work,
               skills_learnt, created_at
        FROM daily_logs
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(daily_log)
}

/// Overwrites all mutable fields of a daily log. Updating a missing id is a no-op.
pub async fn update_daily_log(
    pool: &Pool<Postgres>,
    id: Uuid,
    day: &str,
    date: NaiveDate,
    week_number: i32,
    description_of_work: &str,
    skills_learnt: &str,
) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE daily_logs
        SET day = $2, date = $3, week_number = $4, description_of_work = $5, skills_learnt = $6
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(day)
    .bind(date)
    .bind(week_number)
    .bind(description_of_work)
    .bind(skills_learnt)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete_daily_log(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM daily_logs
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
