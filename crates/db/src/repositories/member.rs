use crate::models::DbMember;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_member(
    pool: &Pool<Postgres>,
    name: &str,
    email: &str,
    password_hash: &str,
    department: &str,
    role: &str,
) -> Result<DbMember> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating member: id={}, email={}, department={}, role={}",
        id,
        email,
        department,
        role
    );

    let member = sqlx::query_as::<_, DbMember>(
        r#"
        INSERT INTO members (id, name, email, password_hash, department, role, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, email, password_hash, department, role, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(department)
    .bind(role)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(member)
}

pub async fn get_member_by_email(pool: &Pool<Postgres>, email: &str) -> Result<Option<DbMember>> {
    let member = sqlx::query_as::<_, DbMember>(
        r#"
        SELECT id, name, email, password_hash, department, role, created_at
        FROM members
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(member)
}

pub async fn get_member_by_email_and_department(
    pool: &Pool<Postgres>,
    email: &str,
    department: &str,
) -> Result<Option<DbMember>> {
    let member = sqlx::query_as::<_, DbMember>(
        r#"
        SELECT id, name, email, password_hash, department, role, created_at
        FROM members
        WHERE email = $1 AND department = $2
        "#,
    )
    .bind(email)
    .bind(department)
    .fetch_optional(pool)
    .await?;

    Ok(member)
}
