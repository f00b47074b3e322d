use std::env;

use serde::{Deserialize, Serialize};

fn default_definition_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_definition_timeout_ms() -> u64 {
    5000
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Extra ipa-dict TSV merged over the embedded word list
    #[serde(default)]
    pub ipa_dict_path: Option<String>,
    #[serde(default = "default_definition_api_url")]
    pub definition_api_url: String,
    #[serde(default = "default_definition_timeout_ms")]
    pub definition_timeout_ms: u64,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        Self {
            ipa_dict_path: env::var("IPA_DICT_PATH").ok(),
            ..Self::default()
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            ipa_dict_path: None,
            definition_api_url: default_definition_api_url(),
            definition_timeout_ms: default_definition_timeout_ms(),
        }
    }
}
