use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use wordwise_config::dictionary::DictionaryConfig;
use wordwise_core::dictionary::{DefinitionSource, DictionaryError};

/// Client for dictionaryapi.dev style entry lookups
#[derive(Clone)]
pub struct FreeDictionaryApi {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl FreeDictionaryApi {
    pub fn new(client: reqwest::Client, base_url: String, timeout: Duration) -> Self {
        Self {
            client,
            base_url,
            timeout,
        }
    }

    pub fn from_config(client: reqwest::Client, config: &DictionaryConfig) -> Self {
        Self::new(
            client,
            config.definition_api_url.clone(),
            Duration::from_millis(config.definition_timeout_ms),
        )
    }

    fn entry_url(&self, word: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), word)
    }
}

#[async_trait]
impl DefinitionSource for FreeDictionaryApi {
    async fn definition(&self, word: &str) -> Result<Option<String>, DictionaryError> {
        let response = self
            .client
            .get(self.entry_url(word))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(into_dictionary_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("No dictionary entry for {word:?}");
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(DictionaryError::Upstream(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                DictionaryError::Timeout
            } else {
                DictionaryError::Malformed(format!("Failed to parse response: {e}"))
            }
        })?;

        first_definition(&json)
            .map(|definition| Some(definition.to_string()))
            .ok_or_else(|| DictionaryError::Malformed("No definition in response".to_string()))
    }
}

fn into_dictionary_error(e: reqwest::Error) -> DictionaryError {
    if e.is_timeout() {
        DictionaryError::Timeout
    } else {
        DictionaryError::Upstream(e.to_string())
    }
}

/// First definition across all meanings of the first entry
fn first_definition(json: &serde_json::Value) -> Option<&str> {
    json.pointer("/0/meanings")?
        .as_array()?
        .iter()
        .filter_map(|meaning| meaning["definitions"].as_array())
        .flatten()
        .find_map(|definition| definition["definition"].as_str())
        .map(str::trim)
}
