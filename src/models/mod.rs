pub mod config;
pub mod daily_challenge;
pub mod problem;
pub mod schedule;

pub use daily_challenge::DailyChallenge;
// config and schedule are accessed as crate::models::config::load_config(), etc.
