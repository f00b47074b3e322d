use async_trait::async_trait;
use wordwise_config::translator::TranslatorConfig;
use wordwise_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

/// DeepL REST translator, requires an API key
#[derive(Clone)]
pub struct DeepLTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl DeepLTranslator {
    pub fn new(client: reqwest::Client, api_key: String, api_url: String) -> Self {
        Self {
            client,
            api_key,
            api_url,
        }
    }

    /// `None` when no key is configured
    pub fn from_config(client: reqwest::Client, config: &TranslatorConfig) -> Option<Self> {
        config
            .has_secondary()
            .then(|| Self::new(client, config.api_key.clone(), config.api_url.clone()))
    }
}

#[async_trait]
impl Translator for DeepLTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let source_lang = from.to_uppercase();
        let target_lang = target_code(&to);
        let params = [
            ("text", text),
            ("source_lang", source_lang.as_str()),
            ("target_lang", target_lang.as_str()),
        ];

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(&params)
            .send()
            .await?;

        // 456: quota exhausted
        if response.status() == 429 || response.status() == 456 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if response.status() == 403 {
            return Err(TranslateError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        parse_translations(&json, text, from, to)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "DeepL".to_string(),
            requires_api_key: true,
        }
    }
}

/// DeepL wants a regional variant for Portuguese targets
fn target_code(to: &str) -> String {
    match to.to_lowercase().as_str() {
        "pt" => "PT-BR".to_string(),
        other => other.to_uppercase(),
    }
}

fn parse_translations(
    json: &serde_json::Value,
    text: &str,
    from: LanguageCode,
    to: LanguageCode,
) -> Result<Translation, TranslateError> {
    let translations = json["translations"]
        .as_array()
        .ok_or_else(|| TranslateError::MalformedResponse("No translations array".to_string()))?;

    let mut texts = translations
        .iter()
        .filter_map(|t| t["text"].as_str())
        .map(str::to_string);

    let translated = texts
        .next()
        .ok_or_else(|| TranslateError::EmptyResult(text.to_string()))?;

    Ok(Translation {
        text: translated,
        from,
        to,
        provider: "deepl".to_string(),
        alternatives: texts.collect(),
    })
}
