/// IPA symbols and their reader-friendly spelling, longest first
const SYMBOLS: &[(&str, &str)] = &[
    ("tʃ", "ch"),
    ("dʒ", "j"),
    ("aɪ", "y"),
    ("aʊ", "ow"),
    ("ɔɪ", "oy"),
    ("oʊ", "oh"),
    ("əʊ", "oh"),
    ("eɪ", "ay"),
    ("ɪə", "eer"),
    ("ɛə", "air"),
    ("ʊə", "oor"),
    ("ər", "er"),
    ("ɜr", "ur"),
    ("ɝ", "ur"),
    ("ɚ", "er"),
    ("ə", "uh"),
    ("ʌ", "uh"),
    ("æ", "a"),
    ("ɑ", "ah"),
    ("ɒ", "o"),
    ("ɔ", "aw"),
    ("ɛ", "eh"),
    ("ɜ", "ur"),
    ("ɪ", "ih"),
    ("ʊ", "uu"),
    ("a", "ah"),
    ("e", "ay"),
    ("i", "ee"),
    ("o", "oh"),
    ("u", "oo"),
    ("θ", "th"),
    ("ð", "dh"),
    ("ʃ", "sh"),
    ("ʒ", "zh"),
    ("ŋ", "ng"),
    ("j", "y"),
    ("ɹ", "r"),
    ("ɡ", "g"),
    ("ɫ", "l"),
    ("ɾ", "t"),
];

/// Respell an IPA transcription such as `/kəmˈpjutɚ/` as `kuhm-PYOOTER`.
///
/// Stress marks and syllable dots split segments; the primary-stressed
/// segment is capitalized. Length marks and unknown symbols are dropped.
pub fn respell(ipa: &str) -> String {
    let body = ipa.trim().trim_matches('/');

    let mut segments: Vec<(String, bool)> = Vec::new();
    let mut current = String::new();
    let mut stressed = false;

    let mut rest = body;
    while let Some(c) = rest.chars().next() {
        if matches!(c, 'ˈ' | 'ˌ' | '.' | ' ' | '-') {
            if !current.is_empty() {
                segments.push((std::mem::take(&mut current), stressed));
            }
            stressed = c == 'ˈ';
            rest = &rest[c.len_utf8()..];
            continue;
        }

        if let Some((symbol, spelling)) = SYMBOLS.iter().find(|(s, _)| rest.starts_with(s)) {
            current.push_str(spelling);
            rest = &rest[symbol.len()..];
        } else {
            if c.is_ascii_alphabetic() {
                current.push(c.to_ascii_lowercase());
            }
            rest = &rest[c.len_utf8()..];
        }
    }

    if !current.is_empty() {
        segments.push((current, stressed));
    }

    segments
        .into_iter()
        .map(|(segment, stressed)| {
            if stressed {
                segment.to_uppercase()
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
