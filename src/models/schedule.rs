use std::fs;
use std::path::Path;

use chrono::Local;
use tracing::debug;

use super::daily_challenge::DailyChallenge;

pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

pub fn load(path: &Path) -> Result<Vec<DailyChallenge>, String> {
    if !path.exists() {
        return Err(format!(
            "No challenge schedule found at {}",
            path.display()
        ));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let challenges: Vec<DailyChallenge> = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

    debug!(path = %path.display(), count = challenges.len(), "loaded challenge schedule");
    Ok(challenges)
}

/// First record scheduled on `date`; dates are compared as encoded.
pub fn for_date<'a>(challenges: &'a [DailyChallenge], date: &str) -> Option<&'a DailyChallenge> {
    challenges.iter().find(|c| c.challenge_date == date)
}
