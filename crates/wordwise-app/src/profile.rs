use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use wordwise_config::Config;

/// Load a JSON config file, or build one from the environment when no path is given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No config file given, using environment defaults");
        return Ok(Config::new());
    };

    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}
