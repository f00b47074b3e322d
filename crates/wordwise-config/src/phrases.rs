use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where example phrases come from
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PhraseMode {
    /// Scrape contextual examples, falling back to the static table
    #[default]
    Live,
    /// Static table only, for deployments where the live source is unreliable
    Static,
}

impl FromStr for PhraseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(PhraseMode::Live),
            "static" => Ok(PhraseMode::Static),
            other => Err(format!("unknown phrase mode: {other}")),
        }
    }
}

impl fmt::Display for PhraseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhraseMode::Live => f.write_str("live"),
            PhraseMode::Static => f.write_str("static"),
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    2000
}

fn default_timeout_ms() -> u64 {
    10000
}

fn default_min_phrases() -> usize {
    1
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PhrasesConfig {
    pub mode: PhraseMode,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Per-attempt timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Fewer valid phrases than this switches to the static table
    #[serde(default = "default_min_phrases")]
    pub min_phrases: usize,
}

impl PhrasesConfig {
    pub fn new() -> Self {
        let mode = env::var("PHRASE_MODE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            mode,
            ..Self::default()
        }
    }
}

impl Default for PhrasesConfig {
    fn default() -> Self {
        Self {
            mode: PhraseMode::default(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            timeout_ms: default_timeout_ms(),
            min_phrases: default_min_phrases(),
        }
    }
}
