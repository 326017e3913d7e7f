use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbMember {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub department: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDailyLog {
    pub id: Uuid,
    pub student_id: Uuid,
    pub day: String,
    pub date: NaiveDate,
    pub week_number: i32,
    pub description_of_work: String,
    pub skills_learnt: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbLogbook {
    pub id: Uuid,
    pub student_id: Uuid,
    pub week_number: i32,
    pub weekly_summary: String,
    /// Embedded snapshot of the week's daily logs, as submitted by the client.
    pub daily_logs: serde_json::Value,
    pub department: String,
    pub student_name: String,
    pub school: String,
    pub supervisor_comments: Option<String>,
    pub supervisor_phone: Option<String>,
    pub signed_by: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}
