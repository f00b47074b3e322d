use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;
use wordwise_config::daily::DailyConfig;
use wordwise_translator::{LanguageCode, Translator};
use wordwise_types::DailyWordRecord;

use crate::clock::Clock;
use crate::dictionary::{DefinitionSource, DictionaryError, PhoneticSource};
use crate::error::CoreError;
use crate::fallback::{PHONETIC_UNAVAILABLE, fallback_daily_record};
use crate::outcome::{Degradation, Outcome};
use crate::retry::RetryPolicy;

/// Single JSON file holding the current word of the day
pub struct DailyWordStore {
    path: PathBuf,
}

impl DailyWordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored record, `None` if the file does not exist yet
    pub async fn load(&self) -> Result<Option<DailyWordRecord>, CoreError> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&data)?))
    }

    /// Replace the stored record
    pub async fn save(&self, record: &DailyWordRecord) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(record)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

struct Candidate {
    word: String,
    phonetic: String,
    definition: String,
}

#[derive(Debug, thiserror::Error)]
enum CandidateError {
    #[error("vocabulary unavailable: {0}")]
    Vocabulary(DictionaryError),

    #[error("lookup for {word:?} failed: {source}")]
    Lookup {
        word: String,
        source: DictionaryError,
    },

    #[error("no definition for {0:?}")]
    NoDefinition(String),
}

/// Picks, defines and translates one word per calendar day
pub struct DailyWordGenerator {
    vocabulary: Arc<dyn PhoneticSource>,
    definitions: Arc<dyn DefinitionSource>,
    translator: Arc<dyn Translator>,
    store: DailyWordStore,
    clock: Arc<dyn Clock>,
    retry: RetryPolicy,
    from: LanguageCode,
    to: LanguageCode,
    /// Held from the cache check through the save
    generating: Mutex<()>,
}

impl DailyWordGenerator {
    pub fn new(
        vocabulary: Arc<dyn PhoneticSource>,
        definitions: Arc<dyn DefinitionSource>,
        translator: Arc<dyn Translator>,
        store: DailyWordStore,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            vocabulary,
            definitions,
            translator,
            store,
            clock,
            retry: RetryPolicy::immediate(DailyConfig::default().max_attempts),
            from: "en".to_string(),
            to: "pt".to_string(),
            generating: Mutex::new(()),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_languages(mut self, from: LanguageCode, to: LanguageCode) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Today's word; falls back to the fixed record on any failure
    pub async fn generate(&self) -> DailyWordRecord {
        match self.try_generate().await {
            Ok(outcome) => outcome.into_value(),
            Err(e) => {
                tracing::error!("Daily word generation failed: {e}");
                fallback_daily_record(self.clock.today())
            }
        }
    }

    /// Concurrent callers wait for one generation and then read its saved record
    pub async fn try_generate(&self) -> Result<Outcome<DailyWordRecord>, CoreError> {
        let _guard = self.generating.lock().await;
        let today = self.clock.today();

        if let Some(cached) = self.cached(&today).await {
            tracing::info!("Using cached daily word {:?}", cached.daily_word);
            return Ok(Outcome::Complete(cached));
        }

        tracing::info!("Generating new daily word for {today}");

        let candidate = self
            .retry
            .run("daily word", move |_| self.candidate())
            .await;

        let outcome = match candidate {
            Ok(candidate) => self.finish(candidate, today).await,
            Err(CandidateError::Vocabulary(e)) => return Err(e.into()),
            Err(e) => {
                tracing::warn!("No usable daily word candidate ({e}), using fallback");
                Outcome::degraded(fallback_daily_record(today), Degradation::FallbackDailyWord)
            }
        };

        match self.store.save(outcome.value()).await {
            Ok(()) => tracing::info!("Saved daily word {:?}", outcome.value().daily_word),
            Err(e) => tracing::error!(
                "Failed to save daily word to {}: {e}",
                self.store.path().display()
            ),
        }

        Ok(outcome)
    }

    async fn cached(&self, today: &str) -> Option<DailyWordRecord> {
        match self.store.load().await {
            Ok(Some(record)) if record.is_valid_for(today) => Some(record),
            Ok(Some(record)) => {
                tracing::debug!("Stored daily word is from {}, regenerating", record.date);
                None
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Ignoring unreadable daily word cache: {e}");
                None
            }
        }
    }

    async fn candidate(&self) -> Result<Candidate, CandidateError> {
        let word = self
            .vocabulary
            .random_word()
            .await
            .map_err(CandidateError::Vocabulary)?;

        let lookup_failed = |source| CandidateError::Lookup {
            word: word.clone(),
            source,
        };

        let phonetic = self
            .vocabulary
            .transcription(&word.to_lowercase())
            .await
            .map_err(lookup_failed)?
            .and_then(|t| [t.pronounce, t.ipa].into_iter().find(|p| !p.is_empty()))
            .unwrap_or_else(|| PHONETIC_UNAVAILABLE.to_string());

        let definition = self
            .definitions
            .definition(&word)
            .await
            .map_err(lookup_failed)?
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| CandidateError::NoDefinition(word.clone()))?;

        Ok(Candidate {
            word,
            phonetic,
            definition,
        })
    }

    async fn finish(&self, candidate: Candidate, today: String) -> Outcome<DailyWordRecord> {
        let translated = match self
            .translator
            .translate(&candidate.definition, self.from.clone(), self.to.clone())
            .await
        {
            Ok(t) if !t.text.trim().is_empty() => Some(t.text),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Failed to translate definition of {:?}: {e}", candidate.word);
                None
            }
        };

        let untranslated = translated.is_none();
        let record = DailyWordRecord {
            date: today,
            daily_word: candidate.word,
            definition: candidate.definition,
            phonetic: candidate.phonetic,
            translated_definition: translated,
        };

        if untranslated {
            Outcome::degraded(record, Degradation::DefinitionUntranslated)
        } else {
            Outcome::Complete(record)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::{Local, TimeDelta, TimeZone};
    use tempfile::TempDir;

    use super::*;
    use crate::clock::ManualClock;
    use crate::fallback::{FALLBACK_DAILY_WORD, FALLBACK_DEFINITION};
    use crate::testing::{StubDefinitions, StubPhonetics, StubTranslator};

    struct Fixture {
        dir: TempDir,
        clock: Arc<ManualClock>,
        vocabulary: Arc<StubPhonetics>,
        definitions: Arc<StubDefinitions>,
        translator: Arc<StubTranslator>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                dir: TempDir::new().unwrap(),
                clock: Arc::new(ManualClock::new(
                    Local.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
                )),
                vocabulary: Arc::new(StubPhonetics::new(&[
                    ("Zyzzyva", "", ""),
                    ("tide", "/taɪd/", "TYD"),
                ])),
                definitions: Arc::new(StubDefinitions::new(&[(
                    "tide",
                    "The rise and fall of the sea.",
                )])),
                translator: Arc::new(StubTranslator::answering(&["A subida e descida do mar."])),
            }
        }

        fn path(&self) -> PathBuf {
            self.dir.path().join("cache").join("dailyWord.json")
        }

        fn generator(&self) -> DailyWordGenerator {
            DailyWordGenerator::new(
                self.vocabulary.clone(),
                self.definitions.clone(),
                self.translator.clone(),
                DailyWordStore::new(self.path()),
                self.clock.clone(),
            )
        }

        fn upstream_calls(&self) -> usize {
            self.vocabulary.calls() + self.definitions.calls() + self.translator.calls()
        }
    }

    #[tokio::test]
    async fn test_skips_undefined_candidate() {
        let fixture = Fixture::new();
        let outcome = fixture.generator().try_generate().await.unwrap();

        assert!(!outcome.is_degraded());
        let record = outcome.into_value();
        assert_eq!(record.date, "2024/05/01");
        assert_eq!(record.daily_word, "tide");
        assert_eq!(record.phonetic, "TYD");
        assert_eq!(record.definition, "The rise and fall of the sea.");
        assert_eq!(
            record.translated_definition.as_deref(),
            Some("A subida e descida do mar.")
        );
        assert_eq!(fixture.definitions.calls(), 2);
    }

    #[tokio::test]
    async fn test_same_day_reuses_stored_record() {
        let fixture = Fixture::new();
        let generator = fixture.generator();

        let first = generator.generate().await;
        let stored = std::fs::read(fixture.path()).unwrap();
        let calls = fixture.upstream_calls();

        fixture.clock.advance(TimeDelta::hours(10));
        let second = generator.generate().await;

        assert_eq!(first, second);
        assert_eq!(fixture.upstream_calls(), calls);
        assert_eq!(std::fs::read(fixture.path()).unwrap(), stored);
    }

    #[tokio::test]
    async fn test_new_day_regenerates() {
        let fixture = Fixture::new();
        let generator = fixture.generator();

        generator.generate().await;
        fixture.clock.advance(TimeDelta::days(1));
        let next = generator.generate().await;

        assert_eq!(next.date, "2024/05/02");
        let stored: DailyWordRecord =
            serde_json::from_str(&std::fs::read_to_string(fixture.path()).unwrap()).unwrap();
        assert_eq!(stored, next);
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_word() {
        let mut fixture = Fixture::new();
        fixture.vocabulary = Arc::new(StubPhonetics::new(&[
            ("tide", "/taɪd/", "TYD"),
            ("moon", "/muːn/", "MOON"),
        ]));
        let mut definitions = StubDefinitions::new(&[
            ("tide", "The rise and fall of the sea."),
            ("moon", "The natural satellite of the earth."),
        ]);
        definitions.delay = Duration::from_millis(50);
        fixture.definitions = Arc::new(definitions);

        let generator = fixture.generator();
        let (first, second) = tokio::join!(generator.generate(), generator.generate());

        assert_eq!(first, second);
        assert_eq!(fixture.definitions.calls(), 1);
        let stored: DailyWordRecord =
            serde_json::from_str(&std::fs::read_to_string(fixture.path()).unwrap()).unwrap();
        assert_eq!(stored, first);
    }

    #[tokio::test]
    async fn test_all_not_found_uses_fallback() {
        let mut fixture = Fixture::new();
        fixture.definitions = Arc::new(StubDefinitions::new(&[]));

        let outcome = fixture.generator().try_generate().await.unwrap();

        assert_eq!(fixture.definitions.calls(), 3);
        assert_eq!(outcome.reasons(), &[Degradation::FallbackDailyWord]);
        assert_eq!(
            outcome.value(),
            &DailyWordRecord {
                date: "2024/05/01".to_string(),
                daily_word: "welcome".to_string(),
                definition: "An expression of greeting".to_string(),
                phonetic: "/ˈwelkəm/".to_string(),
                translated_definition: Some("Uma expressão de cumprimento".to_string()),
            }
        );
        assert!(fixture.path().exists());
    }

    #[tokio::test]
    async fn test_timeouts_use_fallback() {
        let mut fixture = Fixture::new();
        let mut definitions = StubDefinitions::new(&[("tide", "unused")]);
        definitions.timeout = true;
        fixture.definitions = Arc::new(definitions);

        let record = fixture.generator().generate().await;

        assert_eq!(record.daily_word, FALLBACK_DAILY_WORD);
        assert_eq!(record.definition, FALLBACK_DEFINITION);
    }

    #[tokio::test]
    async fn test_translation_failure_keeps_candidate() {
        let mut fixture = Fixture::new();
        fixture.translator = Arc::new(StubTranslator::failing());

        let outcome = fixture.generator().try_generate().await.unwrap();

        assert_eq!(outcome.reasons(), &[Degradation::DefinitionUntranslated]);
        assert_eq!(outcome.value().daily_word, "tide");
        assert!(outcome.value().translated_definition.is_none());
    }

    #[tokio::test]
    async fn test_stale_or_corrupt_file_is_ignored() {
        let fixture = Fixture::new();
        std::fs::create_dir_all(fixture.path().parent().unwrap()).unwrap();
        std::fs::write(fixture.path(), "{ not json").unwrap();

        let record = fixture.generator().generate().await;
        assert_eq!(record.daily_word, "tide");

        let mut stale = record.clone();
        stale.date = "2024/04/30".to_string();
        stale.daily_word = "yesterday".to_string();
        std::fs::write(fixture.path(), serde_json::to_string(&stale).unwrap()).unwrap();

        let record = fixture.generator().generate().await;
        assert_eq!(record.date, "2024/05/01");
        assert_ne!(record.daily_word, "yesterday");
    }

    #[tokio::test]
    async fn test_empty_vocabulary_returns_unsaved_fallback() {
        let mut fixture = Fixture::new();
        fixture.vocabulary = Arc::new(StubPhonetics::new(&[]));

        let generator = fixture.generator();
        assert!(matches!(
            generator.try_generate().await,
            Err(CoreError::Dictionary(DictionaryError::EmptyVocabulary))
        ));

        let record = generator.generate().await;
        assert_eq!(record.daily_word, FALLBACK_DAILY_WORD);
        assert_eq!(record.date, "2024/05/01");
        assert!(!fixture.path().exists());
    }
}
