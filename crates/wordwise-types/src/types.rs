use serde::{Deserialize, Serialize};

/// Everything known about a single looked-up word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordInfo {
    pub word: String,
    /// Public reference to the synthesized pronunciation, if any
    pub audio: Option<String>,
    pub translation: Vec<String>,
    pub phrases: Vec<Phrase>,
    pub ipa: String,
    pub pronounce: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phrase {
    pub english: String,
    pub portuguese: String,
}

impl Phrase {
    pub fn new(english: impl Into<String>, portuguese: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            portuguese: portuguese.into(),
        }
    }

    /// Both sides carry text
    pub fn is_complete(&self) -> bool {
        !self.english.trim().is_empty() && !self.portuguese.trim().is_empty()
    }
}

/// Word of the day as persisted in the daily cache file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyWordRecord {
    /// Local calendar day, `YYYY/MM/DD`
    pub date: String,
    #[serde(default)]
    pub daily_word: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default)]
    pub translated_definition: Option<String>,
}

impl DailyWordRecord {
    /// Usable as the record for `today`
    pub fn is_valid_for(&self, today: &str) -> bool {
        self.date == today && !self.daily_word.is_empty() && !self.definition.is_empty()
    }
}

/// IPA symbols plus a reader-friendly respelling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcription {
    pub ipa: String,
    pub pronounce: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PronunciationScore {
    pub similarity: f64,
    pub confidence_score: f64,
    pub total: f64,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "excellent")]
    Excellent,
    #[serde(rename = "good, keep practicing")]
    Good,
    #[serde(rename = "try again")]
    TryAgain,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Excellent => "excellent",
            Verdict::Good => "good, keep practicing",
            Verdict::TryAgain => "try again",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_record_uses_camel_case_keys() {
        let record = DailyWordRecord {
            date: "2024/01/02".to_string(),
            daily_word: "tide".to_string(),
            definition: "The rise and fall of the sea".to_string(),
            phonetic: "/taɪd/".to_string(),
            translated_definition: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["dailyWord"], "tide");
        assert!(json["translatedDefinition"].is_null());
    }

    #[test]
    fn test_daily_record_validity() {
        let mut record = DailyWordRecord {
            date: "2024/01/02".to_string(),
            daily_word: "tide".to_string(),
            definition: "The rise and fall of the sea".to_string(),
            phonetic: String::new(),
            translated_definition: None,
        };

        assert!(record.is_valid_for("2024/01/02"));
        assert!(!record.is_valid_for("2024/01/03"));

        record.definition.clear();
        assert!(!record.is_valid_for("2024/01/02"));
    }

    #[test]
    fn test_phrase_completeness() {
        assert!(Phrase::new("I see", "Eu vejo").is_complete());
        assert!(!Phrase::new("", "Eu vejo").is_complete());
        assert!(!Phrase::new("I see", "  ").is_complete());
    }

    #[test]
    fn test_verdict_serializes_as_message() {
        let json = serde_json::to_string(&Verdict::Good).unwrap();
        assert_eq!(json, "\"good, keep practicing\"");
        assert_eq!(Verdict::TryAgain.as_str(), "try again");
    }
}
