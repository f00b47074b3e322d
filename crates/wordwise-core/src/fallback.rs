use wordwise_types::{DailyWordRecord, Phrase, WordInfo};

pub const TRANSLATION_UNAVAILABLE: &str = "translation unavailable";
pub const IPA_UNAVAILABLE: &str = "IPA unavailable";
pub const PRONUNCIATION_UNAVAILABLE: &str = "pronunciation unavailable";
pub const PHONETIC_UNAVAILABLE: &str = "Phonetic not available";

pub const FALLBACK_DAILY_WORD: &str = "welcome";
pub const FALLBACK_DEFINITION: &str = "An expression of greeting";
pub const FALLBACK_PHONETIC: &str = "/ˈwelkəm/";
pub const FALLBACK_TRANSLATED_DEFINITION: &str = "Uma expressão de cumprimento";

const COMMON_TRANSLATIONS: &[(&str, &[&str])] = &[
    ("hello", &["olá", "oi"]),
    ("goodbye", &["adeus", "tchau"]),
    ("welcome", &["bem-vindo", "boas-vindas"]),
    ("thanks", &["obrigado", "valeu"]),
    ("please", &["por favor"]),
    ("house", &["casa", "lar"]),
    ("home", &["lar", "casa"]),
    ("water", &["água"]),
    ("food", &["comida", "alimento"]),
    ("book", &["livro", "reservar"]),
    ("friend", &["amigo", "amiga"]),
    ("family", &["família"]),
    ("love", &["amor", "amar"]),
    ("time", &["tempo", "hora", "vez"]),
    ("day", &["dia"]),
    ("night", &["noite"]),
    ("world", &["mundo"]),
    ("work", &["trabalho", "trabalhar"]),
    ("school", &["escola"]),
    ("car", &["carro"]),
    ("dog", &["cachorro", "cão"]),
    ("cat", &["gato"]),
    ("good", &["bom", "boa"]),
    ("bad", &["mau", "ruim"]),
    ("happy", &["feliz"]),
    ("learn", &["aprender"]),
    ("speak", &["falar"]),
    ("read", &["ler"]),
    ("write", &["escrever"]),
    ("word", &["palavra"]),
];

const COMMON_PHRASES: &[(&str, &[(&str, &str)])] = &[
    (
        "hello",
        &[
            ("Hello, how are you?", "Olá, como você está?"),
            ("She said hello to everyone.", "Ela disse olá para todos."),
        ],
    ),
    (
        "welcome",
        &[
            ("Welcome to our home.", "Bem-vindo à nossa casa."),
            ("You are always welcome here.", "Você é sempre bem-vindo aqui."),
        ],
    ),
    (
        "house",
        &[
            ("They bought a new house.", "Eles compraram uma casa nova."),
            ("The house is on the hill.", "A casa fica na colina."),
        ],
    ),
    (
        "water",
        &[
            ("Can I have a glass of water?", "Posso tomar um copo de água?"),
            ("The water is cold.", "A água está fria."),
        ],
    ),
    (
        "book",
        &[
            ("I am reading a good book.", "Estou lendo um bom livro."),
            ("We need to book a table.", "Precisamos reservar uma mesa."),
        ],
    ),
    (
        "friend",
        &[
            ("He is my best friend.", "Ele é meu melhor amigo."),
            ("I met a friend at the park.", "Encontrei um amigo no parque."),
        ],
    ),
    (
        "love",
        &[
            ("I love learning languages.", "Eu amo aprender idiomas."),
            ("Love is patient.", "O amor é paciente."),
        ],
    ),
    (
        "time",
        &[
            ("What time is it?", "Que horas são?"),
            ("We had a great time.", "Nós nos divertimos muito."),
        ],
    ),
    (
        "learn",
        &[
            ("I want to learn English.", "Eu quero aprender inglês."),
            ("Children learn quickly.", "Crianças aprendem rápido."),
        ],
    ),
    (
        "word",
        &[
            ("What does this word mean?", "O que esta palavra significa?"),
            ("She kept her word.", "Ela cumpriu sua palavra."),
        ],
    ),
];

/// Translations for a handful of common words
pub fn table_translation(word: &str) -> Option<Vec<String>> {
    COMMON_TRANSLATIONS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, translations)| translations.iter().map(|t| t.to_string()).collect())
}

/// Last-resort translation entry
pub fn placeholder_translation(word: &str) -> String {
    format!("{word} ({TRANSLATION_UNAVAILABLE})")
}

/// Example phrases for a handful of common words
pub fn table_phrases(word: &str) -> Option<Vec<Phrase>> {
    COMMON_PHRASES
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, phrases)| {
            phrases
                .iter()
                .map(|(english, portuguese)| Phrase::new(*english, *portuguese))
                .collect()
        })
}

/// Generic phrases built around any word
pub fn templated_phrases(word: &str) -> Vec<Phrase> {
    vec![
        Phrase::new(
            format!("How do you use the word \"{word}\"?"),
            format!("Como se usa a palavra \"{word}\"?"),
        ),
        Phrase::new(
            format!("I learned the word \"{word}\" today."),
            format!("Eu aprendi a palavra \"{word}\" hoje."),
        ),
    ]
}

/// Record returned when a lookup fails outright
pub fn default_word_info(word: &str) -> WordInfo {
    WordInfo {
        word: word.to_string(),
        audio: None,
        translation: vec![TRANSLATION_UNAVAILABLE.to_string()],
        phrases: Vec::new(),
        ipa: IPA_UNAVAILABLE.to_string(),
        pronounce: PRONUNCIATION_UNAVAILABLE.to_string(),
    }
}

/// The fixed "welcome" word of the day
pub fn fallback_daily_record(date: String) -> DailyWordRecord {
    DailyWordRecord {
        date,
        daily_word: FALLBACK_DAILY_WORD.to_string(),
        definition: FALLBACK_DEFINITION.to_string(),
        phonetic: FALLBACK_PHONETIC.to_string(),
        translated_definition: Some(FALLBACK_TRANSLATED_DEFINITION.to_string()),
    }
}
