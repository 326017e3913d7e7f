use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create members table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS members (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NOT NULL,
            department VARCHAR(255) NOT NULL,
            role VARCHAR(32) NOT NULL DEFAULT 'student',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create daily_logs table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS daily_logs (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            student_id UUID NOT NULL,
            day VARCHAR(32) NOT NULL,
            date DATE NOT NULL,
            week_number INTEGER NOT NULL,
            description_of_work TEXT NOT NULL,
            skills_learnt TEXT NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create logbooks table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS logbooks (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            student_id UUID NOT NULL,
            week_number INTEGER NOT NULL,
            weekly_summary TEXT NOT NULL,
            daily_logs JSONB NOT NULL,
            department VARCHAR(255) NOT NULL,
            student_name VARCHAR(255) NOT NULL,
            school VARCHAR(255) NOT NULL,
            supervisor_comments TEXT NULL,
            supervisor_phone VARCHAR(64) NULL,
            signed_by VARCHAR(255) NULL,
            is_approved BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // One daily log per (student, week, day, date). Enforced here so that
    // concurrent identical submissions cannot both slip past a read check.
    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_daily_logs_unique_entry
            ON daily_logs(student_id, week_number, day, date);
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_daily_logs_student_id ON daily_logs(student_id)",
        "CREATE INDEX IF NOT EXISTS idx_logbooks_student_id ON logbooks(student_id)",
        "CREATE INDEX IF NOT EXISTS idx_logbooks_is_approved ON logbooks(is_approved)",
        "CREATE INDEX IF NOT EXISTS idx_members_email ON members(email)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
