use std::env;

use serde::{Deserialize, Serialize};

fn default_cache_file() -> String {
    "dailyWord.json".to_string()
}

fn default_max_attempts() -> u32 {
    3
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DailyConfig {
    #[serde(default = "default_cache_file")]
    pub cache_file: String,
    /// Candidate words tried before the fixed fallback is used
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl DailyConfig {
    pub fn new() -> Self {
        let cache_file = env::var("DAILY_WORD_FILE").unwrap_or_else(|_| default_cache_file());

        Self {
            cache_file,
            ..Self::default()
        }
    }
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            cache_file: default_cache_file(),
            max_attempts: default_max_attempts(),
        }
    }
}
