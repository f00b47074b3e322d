use std::path::PathBuf;

use async_trait::async_trait;
use wordwise_config::audio::AudioConfig;
use wordwise_core::speech::{SpeechError, Synthesizer};

/// Google Translate text-to-speech, written to a single overwritten MP3 file
#[derive(Clone)]
pub struct GoogleTts {
    client: reqwest::Client,
    tts_url: String,
    language: String,
    output_path: PathBuf,
    public_url: String,
}

impl GoogleTts {
    pub fn new(
        client: reqwest::Client,
        tts_url: String,
        language: String,
        output_path: PathBuf,
        public_url: String,
    ) -> Self {
        Self {
            client,
            tts_url,
            language,
            output_path,
            public_url,
        }
    }

    pub fn from_config(client: reqwest::Client, config: &AudioConfig) -> Self {
        Self::new(
            client,
            config.tts_url.clone(),
            config.language.clone(),
            PathBuf::from(&config.output_path),
            config.public_url.clone(),
        )
    }

    async fn fetch(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let response = self
            .client
            .get(&self.tts_url)
            .query(&[
                ("ie", "UTF-8"),
                ("q", text),
                ("tl", self.language.as_str()),
                ("client", "tw-ob"),
            ])
            .send()
            .await
            .map_err(|e| SpeechError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SpeechError::Upstream(format!("HTTP {}", response.status())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Upstream(e.to_string()))?;

        if bytes.is_empty() {
            return Err(SpeechError::Upstream("Empty audio response".to_string()));
        }

        Ok(bytes.to_vec())
    }

    /// Overwrite the audio file and return its public reference
    async fn store(&self, audio: &[u8]) -> Result<String, SpeechError> {
        if let Some(parent) = self.output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.output_path, audio).await?;
        tracing::debug!(
            "Wrote {} bytes of audio to {}",
            audio.len(),
            self.output_path.display()
        );

        Ok(self.public_url.clone())
    }
}

#[async_trait]
impl Synthesizer for GoogleTts {
    async fn synthesize(&self, text: &str) -> Result<String, SpeechError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let audio = self.fetch(text).await?;
        self.store(&audio).await
    }
}
