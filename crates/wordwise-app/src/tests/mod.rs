
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::TimeDelta;
use wordwise_config::Config;
use wordwise_core::daily::{DailyWordGenerator, DailyWordStore};
use wordwise_core::dictionary::{DefinitionSource, DictionaryError, PhoneticSource};
use wordwise_core::phrases::StaticPhraseSource;
use wordwise_core::translation::TranslationChain;
use wordwise_core::{SystemClock, WordCache, WordInfoAggregator};
use wordwise_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};
use wordwise_types::Transcription;

use crate::state::AppState;

struct FixedTranslator;

#[async_trait]
impl Translator for FixedTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let text = match text {
            "tide" => "maré",
            _ => "A subida e descida do mar.",
        };
        Ok(Translation {
            text: text.to_string(),
            from,
            to,
            provider: "fixed".to_string(),
            alternatives: vec![],
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fixed".to_string(),
            requires_api_key: false,
        }
    }
}

struct OneWord;

#[async_trait]
impl PhoneticSource for OneWord {
    async fn random_word(&self) -> Result<String, DictionaryError> {
        Ok("tide".to_string())
    }

    async fn transcription(&self, word: &str) -> Result<Option<Transcription>, DictionaryError> {
        Ok((word == "tide").then(|| Transcription {
            ipa: "/ˈtaɪd/".to_string(),
            pronounce: "TYD".to_string(),
        }))
    }
}

struct OneDefinition;

#[async_trait]
impl DefinitionSource for OneDefinition {
    async fn definition(&self, word: &str) -> Result<Option<String>, DictionaryError> {
        Ok((word == "tide").then(|| "The rise and fall of the sea.".to_string()))
    }
}

/// App state over in-process collaborators, files kept under `dir`
pub(crate) fn test_state(dir: &Path) -> Arc<AppState> {
    let mut config = Config::default();
    config.daily.cache_file = dir.join("dailyWord.json").display().to_string();
    config.audio.output_path = dir.join("audio.mp3").display().to_string();

    let clock = Arc::new(SystemClock);
    let translator = Arc::new(FixedTranslator);
    let aggregator = WordInfoAggregator::new(
        WordCache::new(TimeDelta::hours(24), clock.clone()),
        TranslationChain::new(translator.clone(), "en".into(), "pt".into()),
        Arc::new(StaticPhraseSource),
        Arc::new(OneWord),
    );
    let daily = DailyWordGenerator::new(
        Arc::new(OneWord),
        Arc::new(OneDefinition),
        translator,
        DailyWordStore::new(&config.daily.cache_file),
        clock,
    );

    Arc::new(AppState::new(config, aggregator, daily))
}
