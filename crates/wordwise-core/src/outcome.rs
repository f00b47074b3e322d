use std::fmt;

/// Why a value was assembled from something other than its primary source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Degradation {
    TranslationFromSecondary,
    TranslationFromTable,
    TranslationPlaceholder,
    PhrasesFromTable,
    PhrasesTemplated,
    IpaUnavailable,
    AudioUnavailable,
    DefinitionUntranslated,
    FallbackDailyWord,
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Degradation::TranslationFromSecondary => "translation from secondary provider",
            Degradation::TranslationFromTable => "translation from static table",
            Degradation::TranslationPlaceholder => "translation placeholder",
            Degradation::PhrasesFromTable => "phrases from static table",
            Degradation::PhrasesTemplated => "templated phrases",
            Degradation::IpaUnavailable => "ipa unavailable",
            Degradation::AudioUnavailable => "audio unavailable",
            Degradation::DefinitionUntranslated => "definition not translated",
            Degradation::FallbackDailyWord => "fallback daily word",
        };
        f.write_str(reason)
    }
}

/// A value plus whether every part of it came from its primary source
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Complete(T),
    Degraded { value: T, reasons: Vec<Degradation> },
}

impl<T> Outcome<T> {
    pub fn degraded(value: T, reason: Degradation) -> Self {
        Outcome::Degraded {
            value,
            reasons: vec![reason],
        }
    }

    /// Build from collected reasons; none means complete
    pub fn with_reasons(value: T, reasons: Vec<Degradation>) -> Self {
        if reasons.is_empty() {
            Outcome::Complete(value)
        } else {
            Outcome::Degraded { value, reasons }
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Complete(value) | Outcome::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Complete(value) | Outcome::Degraded { value, .. } => value,
        }
    }

    pub fn reasons(&self) -> &[Degradation] {
        match self {
            Outcome::Complete(_) => &[],
            Outcome::Degraded { reasons, .. } => reasons,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }

    /// Split into the value and its reasons
    pub fn into_parts(self) -> (T, Vec<Degradation>) {
        match self {
            Outcome::Complete(value) => (value, Vec::new()),
            Outcome::Degraded { value, reasons } => (value, reasons),
        }
    }
}
