use crate::{LanguageCode, TranslateError};

/// A bilingual usage example as returned by a context source
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ContextExample {
    pub source: Option<String>,
    pub target: Option<String>,
}

/// Source of real-world usage examples for a word
#[async_trait::async_trait]
pub trait ContextProvider: Send + Sync {
    async fn examples(
        &self,
        word: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Vec<ContextExample>, TranslateError>;
}
