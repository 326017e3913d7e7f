pub mod daily_log;
pub mod logbook;
pub mod member;
