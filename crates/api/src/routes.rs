pub mod daily_log;
pub mod health;
pub mod logbook;
pub mod user;
