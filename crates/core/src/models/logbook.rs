use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogbookRequest {
    pub student_id: Uuid,
    pub week_number: i32,
    pub week_summary: String,
    /// Snapshot of the week's daily log entries, stored verbatim as JSONB.
    pub daily_logs: serde_json::Value,
    pub department: String,
    pub student_name: String,
    pub school: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogbookResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub week_number: i32,
    pub weekly_summary: String,
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogbookListResponse {
    pub data: Vec<LogbookResponse>,
}

/// Scope of a logbook count query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountFilter {
    All,
    Approved,
    Unapproved,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCommentsRequest {
    pub supervisor_comments: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSupervisorPhoneRequest {
    pub supervisor_phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSignedByRequest {
    pub signed_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendEmailRequest {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}
