use crate::dictionary::DictionaryError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Empty word after normalization")]
    EmptyWord,

    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
