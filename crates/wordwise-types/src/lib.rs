pub mod types;

pub use types::{DailyWordRecord, Phrase, PronunciationScore, Transcription, Verdict, WordInfo};
