use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    pub default_winner_count: usize,
    pub default_difficulty: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_winner_count: 1,
            default_difficulty: "chill".to_string(),
        }
    }
}
