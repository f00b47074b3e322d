use wordwise_types::{PronunciationScore, Verdict};

const SIMILARITY_WEIGHT: f64 = 0.7;
const CONFIDENCE_WEIGHT: f64 = 0.3;

/// Case-insensitive similarity in percent
pub fn similarity(spoken: &str, target: &str) -> f64 {
    let spoken = spoken.to_lowercase();
    let target = target.to_lowercase();

    if spoken == target {
        return 100.0;
    }

    let max_len = spoken.chars().count().max(target.chars().count()) as f64;
    let distance = strsim::levenshtein(&spoken, &target) as f64;

    ((max_len - distance) / max_len * 100.0).max(0.0)
}

/// Score a spoken attempt at `target`; `confidence` is the recognizer's 0..1 value
pub fn score(spoken: &str, target: &str, confidence: f64) -> PronunciationScore {
    let similarity = similarity(spoken, target);
    let confidence = if confidence.is_finite() {
        confidence.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let confidence_score = confidence * 100.0;
    let total = SIMILARITY_WEIGHT * similarity + CONFIDENCE_WEIGHT * confidence_score;

    PronunciationScore {
        similarity,
        confidence_score,
        total,
        verdict: verdict(total),
    }
}

/// Boundaries belong to the lower tier
pub fn verdict(total: f64) -> Verdict {
    if total > 85.0 {
        Verdict::Excellent
    } else if total > 70.0 {
        Verdict::Good
    } else {
        Verdict::TryAgain
    }
}
