use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_output_path() -> String {
    "public/audio.mp3".to_string()
}

fn default_public_url() -> String {
    "/audio.mp3".to_string()
}

fn default_tts_url() -> String {
    "https://translate.google.com/translate_tts".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AudioConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Single file overwritten on every synthesis
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Reference handed back to callers in `WordInfo.audio`
    #[serde(default = "default_public_url")]
    pub public_url: String,
    #[serde(default = "default_tts_url")]
    pub tts_url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl AudioConfig {
    pub fn new() -> Self {
        let output_path = env::var("AUDIO_PATH").unwrap_or_else(|_| default_output_path());

        Self {
            output_path,
            ..Self::default()
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            output_path: default_output_path(),
            public_url: default_public_url(),
            tts_url: default_tts_url(),
            language: default_language(),
        }
    }
}
