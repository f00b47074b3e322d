use std::sync::Arc;

use wordwise_types::{Phrase, WordInfo};

use crate::cache::WordCache;
use crate::dictionary::PhoneticSource;
use crate::error::CoreError;
use crate::fallback::{
    IPA_UNAVAILABLE, PRONUNCIATION_UNAVAILABLE, TRANSLATION_UNAVAILABLE, default_word_info,
};
use crate::outcome::{Degradation, Outcome};
use crate::phrases::PhraseSource;
use crate::preprocess::{Preprocessor, WordPreprocessor};
use crate::speech::Synthesizer;
use crate::translation::TranslationChain;

/// Assembles translation, phrases, IPA and audio for a word.
///
/// The four sources are queried concurrently and fail independently.
/// Overlapping lookups of the same uncached word each hit the upstreams;
/// there is no request coalescing.
pub struct WordInfoAggregator {
    cache: WordCache,
    translations: TranslationChain,
    phrases: Arc<dyn PhraseSource>,
    phonetics: Arc<dyn PhoneticSource>,
    synthesizer: Option<Arc<dyn Synthesizer>>,
}

impl WordInfoAggregator {
    pub fn new(
        cache: WordCache,
        translations: TranslationChain,
        phrases: Arc<dyn PhraseSource>,
        phonetics: Arc<dyn PhoneticSource>,
    ) -> Self {
        Self {
            cache,
            translations,
            phrases,
            phonetics,
            synthesizer: None,
        }
    }

    pub fn with_synthesizer(mut self, synthesizer: Arc<dyn Synthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    pub fn cache(&self) -> &WordCache {
        &self.cache
    }

    /// Lookup that always yields a complete record, sentinel-filled on failure
    pub async fn word_info(&self, word: &str) -> WordInfo {
        match self.lookup(word).await {
            Ok(Outcome::Complete(info)) => info,
            Ok(Outcome::Degraded { value, reasons }) => {
                let reasons: Vec<String> = reasons.iter().map(ToString::to_string).collect();
                tracing::info!("Degraded lookup for {:?}: {}", value.word, reasons.join(", "));
                value
            }
            Err(e) => {
                tracing::error!("Word lookup for {word:?} failed: {e}");
                default_word_info(&WordPreprocessor.process(word))
            }
        }
    }

    pub async fn lookup(&self, word: &str) -> Result<Outcome<WordInfo>, CoreError> {
        let text = WordPreprocessor.process(word);
        if text.is_empty() {
            return Err(CoreError::EmptyWord);
        }

        if let Some(cached) = self.cache.get(&text).await {
            tracing::debug!("Cache hit for {text:?}");
            return Ok(Outcome::Complete(cached));
        }

        let (translation, phrases, transcription, audio) = tokio::join!(
            self.translations.translate_word(&text),
            self.phrases.phrases(&text),
            self.phonetics.transcription(&text),
            self.synthesize(&text),
        );

        let mut reasons = Vec::new();

        let (mut translation, translation_reasons) = translation.into_parts();
        reasons.extend(translation_reasons);
        if translation.is_empty() {
            translation.push(TRANSLATION_UNAVAILABLE.to_string());
        }

        let (phrases, phrase_reasons) = phrases.into_parts();
        reasons.extend(phrase_reasons);
        let phrases: Vec<Phrase> = phrases.into_iter().filter(Phrase::is_complete).collect();

        let (ipa, pronounce) = match transcription? {
            Some(t) => (t.ipa, t.pronounce),
            None => {
                reasons.push(Degradation::IpaUnavailable);
                (
                    IPA_UNAVAILABLE.to_string(),
                    PRONUNCIATION_UNAVAILABLE.to_string(),
                )
            }
        };

        let (audio, audio_reason) = audio;
        reasons.extend(audio_reason);

        let info = WordInfo {
            word: text.clone(),
            audio,
            translation,
            phrases,
            ipa,
            pronounce,
        };

        tracing::info!(
            "Word info for {:?}: {} translations, {} phrases, audio: {}",
            info.word,
            info.translation.len(),
            info.phrases.len(),
            info.audio.is_some()
        );

        self.cache.insert(text, info.clone()).await;

        Ok(Outcome::with_reasons(info, reasons))
    }

    async fn synthesize(&self, text: &str) -> (Option<String>, Option<Degradation>) {
        let Some(synthesizer) = &self.synthesizer else {
            return (None, None);
        };

        match synthesizer.synthesize(text).await {
            Ok(reference) => (Some(reference), None),
            Err(e) => {
                tracing::warn!("Audio synthesis for {text:?} failed: {e}");
                (None, Some(Degradation::AudioUnavailable))
            }
        }
    }
}
