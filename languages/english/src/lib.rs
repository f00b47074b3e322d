pub mod dictionary_api;
pub mod ipa_dict;
pub mod respelling;
pub mod reverso;
pub mod translator;
pub mod tts;

pub use dictionary_api::FreeDictionaryApi;
pub use ipa_dict::IpaDictionary;
pub use respelling::respell;
pub use reverso::ReversoClient;
pub use translator::DeepLTranslator;
pub use tts::GoogleTts;

/// Shared HTTP client for the upstream services
pub fn http_client(network: &wordwise_config::network::NetworkConfig) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(network.request_timeout())
        .user_agent(network.user_agent.clone())
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to build configured HTTP client, using defaults: {e}");
            reqwest::Client::new()
        })
}
