use std::sync::Arc;

use anyhow::Context;
use wordwise_config::{Config, PhraseMode};
use wordwise_core::daily::{DailyWordGenerator, DailyWordStore};
use wordwise_core::phrases::{LivePhraseSource, PhraseSource, StaticPhraseSource};
use wordwise_core::translation::TranslationChain;
use wordwise_core::{Clock, RetryPolicy, SystemClock, WordCache, WordInfoAggregator};
use wordwise_lang_english::{
    DeepLTranslator, FreeDictionaryApi, GoogleTts, IpaDictionary, ReversoClient, http_client,
};
use wordwise_translator::Translator;

pub struct AppState {
    pub config: Config,
    pub aggregator: WordInfoAggregator,
    pub daily: DailyWordGenerator,
}

impl AppState {
    pub fn new(config: Config, aggregator: WordInfoAggregator, daily: DailyWordGenerator) -> Self {
        Self {
            config,
            aggregator,
            daily,
        }
    }

    /// Wire the live collaborators described by `config`
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let client = http_client(&config.network);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let from = config.translator.from_lang.clone();
        let to = config.translator.to_lang.clone();

        let dictionary = Arc::new(
            IpaDictionary::from_config(&config.dictionary)
                .context("Failed to load IPA dictionary")?,
        );
        let reverso = Arc::new(ReversoClient::new(
            client.clone(),
            config.translator.reverso_url.clone(),
        ));
        let deepl: Option<Arc<dyn Translator>> =
            DeepLTranslator::from_config(client.clone(), &config.translator)
                .map(|t| Arc::new(t) as Arc<dyn Translator>);

        let mut translations = TranslationChain::new(reverso.clone(), from.clone(), to.clone());
        if let Some(deepl) = &deepl {
            translations = translations.with_secondary(Arc::clone(deepl));
        }

        let phrases: Arc<dyn PhraseSource> = match config.phrases.mode {
            PhraseMode::Live => Arc::new(LivePhraseSource::from_config(
                reverso.clone(),
                from.clone(),
                to.clone(),
                &config.phrases,
            )),
            PhraseMode::Static => Arc::new(StaticPhraseSource),
        };

        let mut aggregator = WordInfoAggregator::new(
            WordCache::from_config(&config.cache, clock.clone()),
            translations,
            phrases,
            dictionary.clone(),
        );
        if config.audio.enabled {
            aggregator = aggregator.with_synthesizer(Arc::new(GoogleTts::from_config(
                client.clone(),
                &config.audio,
            )));
        }

        // Definitions go through DeepL when a key is configured
        let definition_translator: Arc<dyn Translator> = match &deepl {
            Some(deepl) => Arc::clone(deepl),
            None => reverso,
        };

        let daily = DailyWordGenerator::new(
            dictionary,
            Arc::new(FreeDictionaryApi::from_config(client, &config.dictionary)),
            definition_translator,
            DailyWordStore::new(&config.daily.cache_file),
            clock,
        )
        .with_retry(RetryPolicy::immediate(config.daily.max_attempts))
        .with_languages(from, to);

        tracing::info!(
            "Translators: Reverso{}",
            if deepl.is_some() { " + DeepL" } else { "" }
        );

        Ok(Self::new(config, aggregator, daily))
    }
}
