mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::Utc;
use logtrack_core::models::logbook::CountFilter;
use logtrack_db::{mock::repositories::MockLogbookRepo, models::DbLogbook};
use mockall::predicate;
use uuid::Uuid;

const AUTHORIZATION: HeaderName = HeaderName::from_static("authorization");

fn logbook_row(student_id: Uuid, week_number: i32, is_approved: bool) -> DbLogbook {
    DbLogbook {
        id: Uuid::new_v4(),
        student_id,
        week_number,
        weekly_summary: "Worked on the reporting module".to_string(),
        daily_logs: serde_json::json!([
            {
                "day": "Monday",
                "date": "2024-01-01",
                "skills_learnt": "Rust",
                "description_of_work": "Implemented the report renderer"
            }
        ]),
        department: "engineering".to_string(),
        student_name: "Ama Mensah".to_string(),
        school: "Accra Technical University".to_string(),
        supervisor_comments: None,
        supervisor_phone: None,
        signed_by: None,
        is_approved,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_approve_is_idempotent() {
    let mut repo = MockLogbookRepo::new();
    let id = Uuid::new_v4();

    // Approving twice succeeds both times; the flag never reverts
    repo.expect_approve_logbook()
        .with(predicate::eq(id))
        .times(2)
        .returning(|_| Ok(()));
    repo.expect_get_logbook_by_id()
        .with(predicate::eq(id))
        .returning(|id| {
            let mut row = logbook_row(Uuid::new_v4(), 1, true);
            row.id = id;
            Ok(Some(row))
        });

    repo.approve_logbook(id).await.unwrap();
    repo.approve_logbook(id).await.unwrap();

    let logbook = repo.get_logbook_by_id(id).await.unwrap().unwrap();
    assert!(logbook.is_approved);
}

#[tokio::test]
async fn test_counts_partition_for_a_student() {
    let mut repo = MockLogbookRepo::new();
    let student_id = Uuid::new_v4();
    let rows = vec![
        logbook_row(student_id, 1, true),
        logbook_row(student_id, 2, true),
        logbook_row(student_id, 3, false),
    ];

    let rows_for_counts = rows.clone();
    repo.expect_count_logbooks()
        .returning(move |_, filter| {
            let count = rows_for_counts
                .iter()
                .filter(|row| match filter {
                    CountFilter::All => true,
                    CountFilter::Approved => row.is_approved,
                    CountFilter::Unapproved => !row.is_approved,
                })
                .count() as i64;
            Ok(count)
        });

    let total = repo
        .count_logbooks(Some(student_id), CountFilter::All)
        .await
        .unwrap();
    let approved = repo
        .count_logbooks(Some(student_id), CountFilter::Approved)
        .await
        .unwrap();
    let unapproved = repo
        .count_logbooks(Some(student_id), CountFilter::Unapproved)
        .await
        .unwrap();

    assert_eq!(total, 3);
    assert_eq!(approved + unapproved, total);
}

#[tokio::test]
async fn test_get_logbook_by_id_miss_is_empty() {
    let mut repo = MockLogbookRepo::new();
    let id = Uuid::new_v4();

    repo.expect_get_logbook_by_id()
        .with(predicate::eq(id))
        .returning(|_| Ok(None));

    let logbook = repo.get_logbook_by_id(id).await.unwrap();

    assert!(logbook.is_none());
}

#[tokio::test]
async fn test_create_logbook_with_missing_fields_is_bad_request() {
    let server = TestServer::new(common::test_app()).unwrap();

    let response = server
        .post("/api/logbooks/add")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&common::bearer("student")).unwrap(),
        )
        .json(&serde_json::json!({
            "studentId": Uuid::new_v4(),
            "weekNumber": 2,
            "weekSummary": "",
            "dailyLogs": [],
            "department": "",
            "studentName": "",
            "school": ""
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_logbook_with_empty_daily_logs_is_bad_request() {
    let server = TestServer::new(common::test_app()).unwrap();

    let response = server
        .post("/api/logbooks/add")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&common::bearer("student")).unwrap(),
        )
        .json(&serde_json::json!({
            "studentId": Uuid::new_v4(),
            "weekNumber": 2,
            "weekSummary": "Worked on the reporting module",
            "dailyLogs": [],
            "department": "engineering",
            "studentName": "Ama Mensah",
            "school": "Accra Technical University"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_logbook_with_week_zero_is_bad_request() {
    let server = TestServer::new(common::test_app()).unwrap();

    let response = server
        .post("/api/logbooks/add")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&common::bearer("student")).unwrap(),
        )
        .json(&serde_json::json!({
            "studentId": Uuid::new_v4(),
            "weekNumber": 0,
            "weekSummary": "Worked on the reporting module",
            "dailyLogs": [{"day": "Monday", "date": "2024-01-01"}],
            "department": "engineering",
            "studentName": "Ama Mensah",
            "school": "Accra Technical University"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_send_email_without_mailer_reports_failure() {
    // Test state is built with no SMTP configuration
    let server = TestServer::new(common::test_app()).unwrap();

    let response = server
        .post("/api/logbooks/send-email")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&common::bearer("student")).unwrap(),
        )
        .json(&serde_json::json!({
            "from": "noreply@example.com",
            "to": "supervisor@example.com",
            "subject": "Week 3 logbook",
            "text": "The logbook for week 3 is ready for review."
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_send_email_requires_authentication() {
    let server = TestServer::new(common::test_app()).unwrap();

    let response = server
        .post("/api/logbooks/send-email")
        .json(&serde_json::json!({
            "from": "noreply@example.com",
            "to": "supervisor@example.com",
            "subject": "Week 3 logbook",
            "text": "The logbook for week 3 is ready for review."
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
