use std::env;

use serde::{Deserialize, Serialize};

fn default_from_lang() -> String {
    "en".to_string()
}

fn default_to_lang() -> String {
    "pt".to_string()
}

fn default_reverso_url() -> String {
    "https://api.reverso.net/translate/v1/translation".to_string()
}

fn default_api_url() -> String {
    "https://api-free.deepl.com/v2/translate".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    /// Primary source for word translations and context examples
    #[serde(default = "default_reverso_url")]
    pub reverso_url: String,
    /// DeepL key; the secondary translator is only built when this is set
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        Self {
            api_key: env::var("DEEPL_API_KEY").unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn has_secondary(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            reverso_url: default_reverso_url(),
            api_key: String::new(),
            api_url: default_api_url(),
        }
    }
}
