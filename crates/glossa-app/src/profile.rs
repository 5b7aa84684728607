use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use glossa_config::Config;

/// Load the default config shipped in the repo
fn load_repo_default_config() -> anyhow::Result<Config> {
    tracing::info!("Loading repo default config...");
    let file = File::open("config.json")?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

/// Repo config if present, otherwise built-in defaults; environment
/// variables override either.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = if Path::new("config.json").exists() {
        load_repo_default_config()?
    } else {
        Config::default()
    };

    config.apply_env();

    Ok(config)
}
