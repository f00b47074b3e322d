//! Stub collaborators with call counters for unit tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use wordwise_translator::{
    ContextExample, ContextProvider, LanguageCode, ProviderMetadata, TranslateError, Translation,
    Translator,
};
use wordwise_types::Transcription;

use crate::dictionary::{DefinitionSource, DictionaryError, PhoneticSource};
use crate::speech::{SpeechError, Synthesizer};

/// `Some(list)` answers with the list, `None` fails every call
pub struct StubTranslator {
    pub answer: Option<Vec<String>>,
    pub calls: AtomicUsize,
}

impl StubTranslator {
    pub fn answering(answer: &[&str]) -> Self {
        Self {
            answer: Some(answer.iter().map(|s| s.to_string()).collect()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(
        &self,
        _text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let answer = self
            .answer
            .clone()
            .ok_or_else(|| TranslateError::ApiError("HTTP 503".to_string()))?;
        let mut answer = answer.into_iter();

        Ok(Translation {
            text: answer.next().unwrap_or_default(),
            from,
            to,
            provider: "stub".to_string(),
            alternatives: answer.collect(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "stub".to_string(),
            requires_api_key: false,
        }
    }
}

/// Fails `failures` times, then answers with `examples`
pub struct StubContext {
    pub examples: Vec<ContextExample>,
    pub failures: usize,
    pub delay: Duration,
    pub calls: AtomicUsize,
}

impl StubContext {
    pub fn with_pairs(pairs: &[(&str, &str)]) -> Self {
        let examples = pairs
            .iter()
            .map(|(source, target)| ContextExample {
                source: Some(source.to_string()),
                target: Some(target.to_string()),
            })
            .collect();

        Self {
            examples,
            failures: 0,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContextProvider for StubContext {
    async fn examples(
        &self,
        _word: &str,
        _from: LanguageCode,
        _to: LanguageCode,
    ) -> Result<Vec<ContextExample>, TranslateError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if call < self.failures {
            return Err(TranslateError::ApiError("HTTP 502".to_string()));
        }
        Ok(self.examples.clone())
    }
}

pub struct StubPhonetics {
    pub words: Vec<String>,
    pub transcriptions: HashMap<String, Transcription>,
    pub broken: bool,
    pub random_calls: AtomicUsize,
    pub transcription_calls: AtomicUsize,
}

impl StubPhonetics {
    pub fn new(entries: &[(&str, &str, &str)]) -> Self {
        Self {
            words: entries.iter().map(|(w, _, _)| w.to_string()).collect(),
            transcriptions: entries
                .iter()
                .map(|(w, ipa, pronounce)| {
                    (
                        w.to_string(),
                        Transcription {
                            ipa: ipa.to_string(),
                            pronounce: pronounce.to_string(),
                        },
                    )
                })
                .collect(),
            broken: false,
            random_calls: AtomicUsize::new(0),
            transcription_calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.random_calls.load(Ordering::SeqCst) + self.transcription_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PhoneticSource for StubPhonetics {
    async fn random_word(&self) -> Result<String, DictionaryError> {
        // Cycles through the word list so each attempt sees a new candidate
        let call = self.random_calls.fetch_add(1, Ordering::SeqCst);
        if self.words.is_empty() {
            return Err(DictionaryError::EmptyVocabulary);
        }
        Ok(self.words[call % self.words.len()].clone())
    }

    async fn transcription(&self, word: &str) -> Result<Option<Transcription>, DictionaryError> {
        self.transcription_calls.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(DictionaryError::Upstream("corrupt entry".to_string()));
        }
        Ok(self.transcriptions.get(word).cloned())
    }
}

/// Words missing from `definitions` answer like a 404
pub struct StubDefinitions {
    pub definitions: HashMap<String, String>,
    pub timeout: bool,
    pub delay: Duration,
    pub calls: AtomicUsize,
}

impl StubDefinitions {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            definitions: entries
                .iter()
                .map(|(w, d)| (w.to_string(), d.to_string()))
                .collect(),
            timeout: false,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DefinitionSource for StubDefinitions {
    async fn definition(&self, word: &str) -> Result<Option<String>, DictionaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.timeout {
            return Err(DictionaryError::Timeout);
        }
        Ok(self.definitions.get(word).cloned())
    }
}

pub struct StubSynthesizer {
    pub broken: bool,
    pub calls: AtomicUsize,
}

impl StubSynthesizer {
    pub fn new(broken: bool) -> Self {
        Self {
            broken,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Synthesizer for StubSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<String, SpeechError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(SpeechError::Upstream("HTTP 500".to_string()));
        }
        Ok("/audio.mp3".to_string())
    }
}
