use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use wordwise_config::dictionary::DictionaryConfig;
use wordwise_core::dictionary::{DictionaryError, PhoneticSource};
use wordwise_core::fallback::PRONUNCIATION_UNAVAILABLE;
use wordwise_types::Transcription;

use crate::respelling::respell;

/// English vocabulary with IPA transcriptions
pub struct IpaDictionary {
    entries: HashMap<String, String>,
    words: Vec<String>,
}

impl IpaDictionary {
    /// Create empty dictionary
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            words: Vec::new(),
        }
    }

    /// Create with embedded everyday words
    pub fn with_defaults() -> Self {
        let common_words = [
            ("apple", "/ˈæpəl/"),
            ("beautiful", "/ˈbjutəfəl/"),
            ("book", "/ˈbʊk/"),
            ("bridge", "/ˈbɹɪdʒ/"),
            ("candle", "/ˈkændəl/"),
            ("cat", "/ˈkæt/"),
            ("city", "/ˈsɪti/"),
            ("cloud", "/ˈklaʊd/"),
            ("computer", "/kəmˈpjutɚ/"),
            ("courage", "/ˈkɝɪdʒ/"),
            ("dog", "/ˈdɔɡ/"),
            ("dream", "/ˈdɹim/"),
            ("family", "/ˈfæməli/"),
            ("forest", "/ˈfɔɹəst/"),
            ("friend", "/ˈfɹɛnd/"),
            ("garden", "/ˈɡɑɹdən/"),
            ("happy", "/ˈhæpi/"),
            ("harvest", "/ˈhɑɹvəst/"),
            ("home", "/ˈhoʊm/"),
            ("house", "/ˈhaʊs/"),
            ("island", "/ˈaɪlənd/"),
            ("journey", "/ˈdʒɝni/"),
            ("kitchen", "/ˈkɪtʃən/"),
            ("knowledge", "/ˈnɑlɪdʒ/"),
            ("language", "/ˈlæŋɡwɪdʒ/"),
            ("light", "/ˈlaɪt/"),
            ("love", "/ˈlʌv/"),
            ("morning", "/ˈmɔɹnɪŋ/"),
            ("mountain", "/ˈmaʊntən/"),
            ("music", "/ˈmjuzɪk/"),
            ("ocean", "/ˈoʊʃən/"),
            ("patience", "/ˈpeɪʃəns/"),
            ("river", "/ˈɹɪvɚ/"),
            ("school", "/ˈskul/"),
            ("season", "/ˈsizən/"),
            ("thought", "/ˈθɔt/"),
            ("tide", "/ˈtaɪd/"),
            ("water", "/ˈwɔtɚ/"),
            ("weather", "/ˈwɛðɚ/"),
            ("window", "/ˈwɪndoʊ/"),
            ("world", "/ˈwɝɫd/"),
        ];

        let mut dict = Self::new();
        dict.extend(
            common_words
                .iter()
                .map(|(word, ipa)| (word.to_string(), ipa.to_string())),
        );
        dict
    }

    /// Load an ipa-dict TSV file (`word\t/ipa/, /alt/`), first transcription wins
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let content = std::fs::read_to_string(path)?;
        let mut dict = Self::new();
        dict.extend(content.lines().filter_map(parse_line));
        Ok(dict)
    }

    /// Embedded words, plus the configured TSV file merged on top
    pub fn from_config(config: &DictionaryConfig) -> Result<Self, DictionaryError> {
        let mut dict = Self::with_defaults();

        if let Some(path) = &config.ipa_dict_path {
            let extra = Self::load_from_file(path)?;
            tracing::info!("Loaded {} IPA entries from {path}", extra.len());
            dict.merge(extra);
        }

        Ok(dict)
    }

    pub fn merge(&mut self, other: IpaDictionary) {
        self.extend(other.entries);
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn extend(&mut self, entries: impl IntoIterator<Item = (String, String)>) {
        self.entries.extend(entries);
        self.words = self.entries.keys().cloned().collect();
        self.words.sort();
    }
}

impl Default for IpaDictionary {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let (word, transcriptions) = line.split_once('\t')?;
    let word = word.trim().to_lowercase();
    let ipa = transcriptions.split(',').next()?.trim();

    if word.is_empty() || ipa.is_empty() {
        return None;
    }

    let ipa = if ipa.starts_with('/') {
        ipa.to_string()
    } else {
        format!("/{ipa}/")
    };

    Some((word, ipa))
}

#[async_trait]
impl PhoneticSource for IpaDictionary {
    async fn random_word(&self) -> Result<String, DictionaryError> {
        self.words
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(DictionaryError::EmptyVocabulary)
    }

    async fn transcription(&self, word: &str) -> Result<Option<Transcription>, DictionaryError> {
        Ok(self.get(word).map(|ipa| {
            let pronounce = respell(ipa);
            Transcription {
                ipa: ipa.to_string(),
                pronounce: if pronounce.is_empty() {
                    PRONUNCIATION_UNAVAILABLE.to_string()
                } else {
                    pronounce
                },
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_line_uses_first_alternative() {
        assert_eq!(
            parse_line("either\t/ˈiðɚ/, /ˈaɪðɚ/"),
            Some(("either".to_string(), "/ˈiðɚ/".to_string()))
        );
        assert_eq!(
            parse_line("Tide\tˈtaɪd"),
            Some(("tide".to_string(), "/ˈtaɪd/".to_string()))
        );
        assert_eq!(parse_line("orphan"), None);
        assert_eq!(parse_line("\t/ə/"), None);
    }

    #[test]
    fn test_file_entries_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tide\t/tʌɪd/").unwrap();
        writeln!(file, "zephyr\t/ˈzɛfɚ/").unwrap();

        let config = DictionaryConfig {
            ipa_dict_path: Some(file.path().display().to_string()),
            ..DictionaryConfig::default()
        };
        let dict = IpaDictionary::from_config(&config).unwrap();

        assert_eq!(dict.get("tide"), Some("/tʌɪd/"));
        assert_eq!(dict.get("Zephyr"), Some("/ˈzɛfɚ/"));
        assert_eq!(dict.len(), IpaDictionary::with_defaults().len() + 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let config = DictionaryConfig {
            ipa_dict_path: Some("/nonexistent/en_US.tsv".to_string()),
            ..DictionaryConfig::default()
        };
        assert!(matches!(
            IpaDictionary::from_config(&config),
            Err(DictionaryError::IoError(_))
        ));
    }

    #[tokio::test]
    async fn test_transcription() {
        let dict = IpaDictionary::with_defaults();

        let home = dict.transcription("home").await.unwrap().unwrap();
        assert_eq!(home.ipa, "/ˈhoʊm/");
        assert_eq!(home.pronounce, "HOHM");

        assert!(dict.transcription("zeitgeist").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_random_word() {
        let dict = IpaDictionary::with_defaults();
        let word = dict.random_word().await.unwrap();
        assert!(dict.get(&word).is_some());

        let empty = IpaDictionary::new();
        assert!(matches!(
            empty.random_word().await,
            Err(DictionaryError::EmptyVocabulary)
        ));
    }
}
