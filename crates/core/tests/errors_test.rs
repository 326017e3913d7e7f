use logtrack_core::errors::{LogError, LogResult};
use pretty_assertions::assert_eq;

#[test]
fn test_log_error_display() {
    let not_found = LogError::NotFound("Logbook not found".to_string());
    let validation = LogError::Validation("Please fill in all fields".to_string());
    let conflict = LogError::Conflict("User already exists".to_string());
    let authentication = LogError::Authentication("Invalid credentials".to_string());
    let authorization = LogError::Authorization("Access denied".to_string());
    let database = LogError::Database(eyre::eyre!("Database connection failed"));

    assert_eq!(not_found.to_string(), "Resource not found: Logbook not found");
    assert_eq!(
        validation.to_string(),
        "Validation error: Please fill in all fields"
    );
    assert_eq!(conflict.to_string(), "Conflict: User already exists");
    assert_eq!(
        authentication.to_string(),
        "Authentication error: Invalid credentials"
    );
    assert_eq!(
        authorization.to_string(),
        "Authorization error: Access denied"
    );
    assert_eq!(
        database.to_string(),
        "Database error: Database connection failed"
    );
}

#[test]
fn test_log_error_from_eyre() {
    fn fails() -> LogResult<()> {
        Err(eyre::eyre!("boom"))?
    }

    match fails() {
        Err(LogError::Database(report)) => assert_eq!(report.to_string(), "boom"),
        other => panic!("Expected Database error, got: {:?}", other),
    }
}

#[test]
fn test_log_error_from_boxed() {
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "mail service down");
    let err: LogError = (Box::new(io_err) as Box<dyn std::error::Error + Send + Sync>).into();

    assert_eq!(err.to_string(), "Internal server error: mail service down");
}
