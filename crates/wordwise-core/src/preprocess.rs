use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default lookup-key normalization
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC) folds width variants and ligatures
        let text: String = text.nfkc().collect();

        text.replace(['\n', '\r'], " ").trim().to_lowercase()
    }
}

pub struct WordPreprocessor;
impl Preprocessor for WordPreprocessor {}
