use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_command() -> String {
    "espeak".to_string()
}

fn default_voice() -> String {
    "en".to_string()
}

fn default_rate() -> u32 {
    160
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SpeechConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// External TTS command, invoked fire-and-forget
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    /// Words per minute
    #[serde(default = "default_rate")]
    pub rate: u32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            command: default_command(),
            voice: default_voice(),
            rate: default_rate(),
        }
    }
}
