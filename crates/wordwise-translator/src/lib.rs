pub mod context;

pub use context::{ContextExample, ContextProvider};

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
    pub alternatives: Vec<String>,
}

impl Translation {
    /// Main rendering followed by alternatives, blanks dropped
    pub fn candidates(&self) -> Vec<String> {
        std::iter::once(&self.text)
            .chain(self.alternatives.iter())
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Empty result for {0:?}")]
    EmptyResult(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_skip_blank_alternatives() {
        let translation = Translation {
            text: "casa".to_string(),
            from: "en".to_string(),
            to: "pt".to_string(),
            provider: "test".to_string(),
            alternatives: vec!["lar".to_string(), " ".to_string(), "residência".to_string()],
        };

        assert_eq!(translation.candidates(), vec!["casa", "lar", "residência"]);
    }
}
