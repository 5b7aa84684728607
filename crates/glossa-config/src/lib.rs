use std::env;

use serde::{Deserialize, Serialize};

use self::client::ClientConfig;
use self::reveal::RevealConfig;
use self::speech::SpeechConfig;

pub mod client;
pub mod reveal;
pub mod speech;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
    pub speech: SpeechConfig,
    pub reveal: RevealConfig,
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Environment always wins over file values for the secret and the
    /// model selection.
    pub fn apply_env(&mut self) {
        if let Ok(key) = env::var("GEMINI_API_KEY") {
            self.client.api_key = key;
        }
        if let Ok(url) = env::var("GLOSSA_API_URL") {
            self.client.api_url = url;
        }
        if let Ok(model) = env::var("GLOSSA_MODEL") {
            self.client.model = model;
        }
    }
}
