use wordwise_types::Transcription;

/// Vocabulary and phonetic transcription lookups
#[async_trait::async_trait]
pub trait PhoneticSource: Send + Sync {
    /// Pick a random headword from the vocabulary
    async fn random_word(&self) -> Result<String, DictionaryError>;

    /// IPA and respelling for a word, `None` if the word is unknown
    async fn transcription(&self, word: &str) -> Result<Option<Transcription>, DictionaryError>;
}

/// Definition lookups against a dictionary service
#[async_trait::async_trait]
pub trait DefinitionSource: Send + Sync {
    /// First definition of a word, `None` when the service has no entry
    async fn definition(&self, word: &str) -> Result<Option<String>, DictionaryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Vocabulary is empty")]
    EmptyVocabulary,

    #[error("Request timed out")]
    Timeout,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
