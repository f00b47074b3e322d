use std::collections::HashSet;
use std::sync::Arc;

use wordwise_translator::{LanguageCode, TranslateError, Translator};

use crate::fallback::{placeholder_translation, table_translation};
use crate::outcome::{Degradation, Outcome};

/// Primary provider, optional secondary provider, static table, placeholder
pub struct TranslationChain {
    primary: Arc<dyn Translator>,
    secondary: Option<Arc<dyn Translator>>,
    from: LanguageCode,
    to: LanguageCode,
}

impl TranslationChain {
    pub fn new(primary: Arc<dyn Translator>, from: LanguageCode, to: LanguageCode) -> Self {
        Self {
            primary,
            secondary: None,
            from,
            to,
        }
    }

    pub fn with_secondary(mut self, secondary: Arc<dyn Translator>) -> Self {
        self.secondary = Some(secondary);
        self
    }

    /// Translations of `word`; never empty
    pub async fn translate_word(&self, word: &str) -> Outcome<Vec<String>> {
        match self.ask(self.primary.as_ref(), word).await {
            Ok(translations) => return Outcome::Complete(translations),
            Err(e) => tracing::warn!(
                "{} failed to translate {word:?}: {e}",
                self.primary.metadata().name
            ),
        }

        if let Some(secondary) = &self.secondary {
            match self.ask(secondary.as_ref(), word).await {
                Ok(translations) => {
                    return Outcome::degraded(translations, Degradation::TranslationFromSecondary);
                }
                Err(e) => tracing::warn!(
                    "{} failed to translate {word:?}: {e}",
                    secondary.metadata().name
                ),
            }
        }

        match table_translation(word) {
            Some(translations) => Outcome::degraded(translations, Degradation::TranslationFromTable),
            None => Outcome::degraded(
                vec![placeholder_translation(word)],
                Degradation::TranslationPlaceholder,
            ),
        }
    }

    async fn ask(
        &self,
        translator: &dyn Translator,
        word: &str,
    ) -> Result<Vec<String>, TranslateError> {
        let translation = translator
            .translate(word, self.from.clone(), self.to.clone())
            .await?;
        let translations = dedup_preserving_order(translation.candidates());

        if translations.is_empty() {
            return Err(TranslateError::EmptyResult(word.to_string()));
        }
        Ok(translations)
    }
}

/// Set semantics, first occurrence wins
pub fn dedup_preserving_order(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
