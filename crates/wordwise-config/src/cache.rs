use std::env;

use serde::{Deserialize, Serialize};

fn default_ttl_hours() -> u64 {
    24
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,
}

impl CacheConfig {
    pub fn new() -> Self {
        let ttl_hours = env::var("CACHE_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_ttl_hours);

        Self { ttl_hours }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
        }
    }
}
