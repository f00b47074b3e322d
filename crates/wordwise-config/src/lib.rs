use serde::{Deserialize, Serialize};

use self::audio::AudioConfig;
use self::cache::CacheConfig;
use self::daily::DailyConfig;
use self::dictionary::DictionaryConfig;
use self::network::NetworkConfig;
use self::phrases::PhrasesConfig;
use self::server::ServerConfig;
use self::translator::TranslatorConfig;

pub mod audio;
pub mod cache;
pub mod daily;
pub mod dictionary;
pub mod network;
pub mod phrases;
pub mod server;
pub mod translator;

pub use phrases::PhraseMode;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub network: NetworkConfig,
    pub translator: TranslatorConfig,
    pub phrases: PhrasesConfig,
    pub dictionary: DictionaryConfig,
    pub cache: CacheConfig,
    pub daily: DailyConfig,
    pub audio: AudioConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            server: ServerConfig::new(),
            network: NetworkConfig::new(),
            translator: TranslatorConfig::new(),
            phrases: PhrasesConfig::new(),
            dictionary: DictionaryConfig::new(),
            cache: CacheConfig::new(),
            daily: DailyConfig::new(),
            audio: AudioConfig::new(),
        }
    }
}
