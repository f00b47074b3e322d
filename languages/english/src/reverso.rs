use async_trait::async_trait;
use serde::Deserialize;
use wordwise_translator::{
    ContextExample, ContextProvider, LanguageCode, ProviderMetadata, TranslateError, Translation,
    Translator,
};

/// Reverso translation endpoint, used for word translations and usage examples
#[derive(Clone)]
pub struct ReversoClient {
    client: reqwest::Client,
    api_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct ReversoResponse {
    #[serde(default)]
    translation: Vec<String>,
    #[serde(default, rename = "contextResults")]
    context_results: Option<ContextResults>,
}

#[derive(Debug, Default, Deserialize)]
struct ContextResults {
    #[serde(default)]
    results: Vec<ContextResult>,
}

#[derive(Debug, Default, Deserialize)]
struct ContextResult {
    #[serde(default)]
    translation: Option<String>,
    #[serde(default, rename = "sourceExamples")]
    source_examples: Vec<String>,
    #[serde(default, rename = "targetExamples")]
    target_examples: Vec<String>,
}

impl ReversoResponse {
    fn results(&self) -> &[ContextResult] {
        self.context_results
            .as_ref()
            .map(|c| c.results.as_slice())
            .unwrap_or_default()
    }

    fn into_translation(
        self,
        input: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let context: Vec<String> = self
            .results()
            .iter()
            .filter_map(|r| r.translation.clone())
            .collect();

        let mut translations = self.translation.into_iter();
        let text = translations
            .next()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| TranslateError::EmptyResult(input.to_string()))?;
        let alternatives = translations.chain(context).collect();

        Ok(Translation {
            text,
            from,
            to,
            provider: "reverso".to_string(),
            alternatives,
        })
    }

    fn into_examples(self) -> Vec<ContextExample> {
        self.context_results
            .map(|c| c.results)
            .unwrap_or_default()
            .into_iter()
            .flat_map(|r| r.source_examples.into_iter().zip(r.target_examples))
            .map(|(source, target)| ContextExample {
                source: Some(source),
                target: Some(target),
            })
            .collect()
    }
}

impl ReversoClient {
    pub fn new(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    async fn query(
        &self,
        input: &str,
        from: &str,
        to: &str,
        context: bool,
    ) -> Result<ReversoResponse, TranslateError> {
        let body = request_body(input, language_code(from)?, language_code(to)?, context);

        let response = self.client.post(&self.api_url).json(&body).send().await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| TranslateError::MalformedResponse(format!("Failed to parse response: {e}")))
    }
}

#[async_trait]
impl Translator for ReversoClient {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        // Context results carry alternative renderings for single words
        let context = !text.trim().contains(' ');
        let response = self.query(text, &from, &to, context).await?;
        response.into_translation(text, from, to)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Reverso".to_string(),
            requires_api_key: false,
        }
    }
}

#[async_trait]
impl ContextProvider for ReversoClient {
    async fn examples(
        &self,
        word: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Vec<ContextExample>, TranslateError> {
        let response = self.query(word, &from, &to, true).await?;
        Ok(response.into_examples())
    }
}

fn request_body(input: &str, from: &str, to: &str, context: bool) -> serde_json::Value {
    serde_json::json!({
        "format": "text",
        "from": from,
        "to": to,
        "input": input,
        "options": {
            "sentenceSplitter": !context,
            "origin": "translation.web",
            "contextResults": context,
            "languageDetection": false,
        }
    })
}

/// Reverso's three-letter codes for the two-letter codes used elsewhere
fn language_code(code: &str) -> Result<&'static str, TranslateError> {
    match code.to_lowercase().as_str() {
        "en" => Ok("eng"),
        "pt" => Ok("por"),
        "es" => Ok("spa"),
        "fr" => Ok("fra"),
        "de" => Ok("ger"),
        "it" => Ok("ita"),
        _ => Err(TranslateError::UnsupportedLanguage(code.to_string())),
    }
}
