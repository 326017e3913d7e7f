pub mod daily_log;
pub mod logbook;
pub mod user;

use serde::{Deserialize, Serialize};

/// Generic `{"message": "..."}` body returned by mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
