use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDailyLogRequest {
    pub student_id: Uuid,
    pub day: String,
    pub date: NaiveDate,
    pub week_number: i32,
    pub description: String,
    pub skills_learnt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDailyLogRequest {
    pub day: String,
    pub date: NaiveDate,
    pub week_number: i32,
    pub description: String,
    pub skills_learnt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLogResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub day: String,
    pub date: NaiveDate,
    pub week_number: i32,
    pub description_of_work: String,
    pub skills_learnt: String,
    pub created_at: DateTime<Utc>,
}

/// List wrapper matching the `{"data": [...]}` shape of every read endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLogListResponse {
    pub data: Vec<DailyLogResponse>,
}
