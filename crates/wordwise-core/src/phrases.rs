use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use wordwise_config::phrases::PhrasesConfig;
use wordwise_translator::{ContextExample, ContextProvider, LanguageCode, TranslateError};
use wordwise_types::Phrase;

use crate::fallback::{table_phrases, templated_phrases};
use crate::outcome::{Degradation, Outcome};
use crate::retry::RetryPolicy;

/// Strategy for producing example phrases for a word
#[async_trait]
pub trait PhraseSource: Send + Sync {
    async fn phrases(&self, word: &str) -> Outcome<Vec<Phrase>>;
}

/// Static table, templated phrases for words it does not know
pub struct StaticPhraseSource;

#[async_trait]
impl PhraseSource for StaticPhraseSource {
    async fn phrases(&self, word: &str) -> Outcome<Vec<Phrase>> {
        match table_phrases(word) {
            Some(phrases) => Outcome::Complete(phrases),
            None => Outcome::degraded(templated_phrases(word), Degradation::PhrasesTemplated),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum FetchError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Upstream(#[from] TranslateError),
}

/// Contextual examples from a live provider, static table when too few survive
pub struct LivePhraseSource {
    provider: Arc<dyn ContextProvider>,
    retry: RetryPolicy,
    timeout: Duration,
    min_phrases: usize,
    from: LanguageCode,
    to: LanguageCode,
}

impl LivePhraseSource {
    pub fn new(provider: Arc<dyn ContextProvider>, from: LanguageCode, to: LanguageCode) -> Self {
        Self::from_config(provider, from, to, &PhrasesConfig::default())
    }

    pub fn from_config(
        provider: Arc<dyn ContextProvider>,
        from: LanguageCode,
        to: LanguageCode,
        config: &PhrasesConfig,
    ) -> Self {
        Self {
            provider,
            retry: RetryPolicy::from(config),
            timeout: Duration::from_millis(config.timeout_ms),
            min_phrases: config.min_phrases,
            from,
            to,
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_min_phrases(mut self, min_phrases: usize) -> Self {
        self.min_phrases = min_phrases;
        self
    }

    async fn fetch_once(&self, word: &str) -> Result<Vec<Phrase>, FetchError> {
        let request = self
            .provider
            .examples(word, self.from.clone(), self.to.clone());

        let examples = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))??;

        Ok(to_phrases(examples))
    }

    fn table_fallback(word: &str) -> Outcome<Vec<Phrase>> {
        match table_phrases(word) {
            Some(phrases) => Outcome::degraded(phrases, Degradation::PhrasesFromTable),
            None => Outcome::degraded(templated_phrases(word), Degradation::PhrasesTemplated),
        }
    }
}

#[async_trait]
impl PhraseSource for LivePhraseSource {
    async fn phrases(&self, word: &str) -> Outcome<Vec<Phrase>> {
        let fetched = self
            .retry
            .run("phrases", move |_| self.fetch_once(word))
            .await;

        match fetched {
            Ok(phrases) if phrases.len() >= self.min_phrases => {
                tracing::debug!("Found {} phrases for {word:?}", phrases.len());
                Outcome::Complete(phrases)
            }
            Ok(phrases) => {
                tracing::info!(
                    "Only {} usable phrases for {word:?}, using static table",
                    phrases.len()
                );
                Self::table_fallback(word)
            }
            Err(e) => {
                tracing::warn!("Phrase lookup for {word:?} failed: {e}");
                Self::table_fallback(word)
            }
        }
    }
}

/// Keep examples carrying both sides, with highlight markup removed
fn to_phrases(examples: Vec<ContextExample>) -> Vec<Phrase> {
    examples
        .into_iter()
        .filter_map(|example| {
            let english = strip_markup(example.source.as_deref()?);
            let portuguese = strip_markup(example.target.as_deref()?);
            Some(Phrase::new(english, portuguese))
        })
        .filter(Phrase::is_complete)
        .collect()
}

/// Drops `<tag>` and `</tag>`; a `<` not followed by a letter or `/` is text
fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_tag = false;

    while let Some(c) = chars.next() {
        match c {
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            '<' if chars
                .peek()
                .is_some_and(|next| next.is_ascii_alphabetic() || *next == '/') =>
            {
                in_tag = true
            }
            _ => out.push(c),
        }
    }

    out.trim().to_string()
}
