use serde::{Deserialize, Serialize};

use super::problem::Problem;

/// One scheduled daily problem assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyChallenge {
    pub id: String,
    pub challenge_date: String,
    pub problem_id: String,
    pub difficulty: String,
    pub bonus_xp: u64,
    pub created_at: String,
    /// Present only when the producer expanded the `problem_id` reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<Problem>,
}

impl DailyChallenge {
    pub fn has_problem(&self) -> bool {
        self.problem.is_some()
    }
}

pub fn from_json(content: &str) -> Result<DailyChallenge, String> {
    serde_json::from_str(content).map_err(|e| format!("Invalid daily challenge: {}", e))
}

pub fn to_json(challenge: &DailyChallenge) -> Result<String, String> {
    serde_json::to_string_pretty(challenge)
        .map_err(|e| format!("Failed to serialize daily challenge: {}", e))
}
