/// Text-to-speech engine
#[async_trait::async_trait]
pub trait Synthesizer: Send + Sync {
    /// Synthesize `text` and return the public reference to the audio
    async fn synthesize(&self, text: &str) -> Result<String, SpeechError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Nothing to synthesize")]
    EmptyText,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
