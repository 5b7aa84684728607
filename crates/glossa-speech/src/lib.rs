use std::process::Stdio;

use glossa_config::speech::SpeechConfig;
use tokio::process::Command;

/// Speech-output collaborator: fire-and-forget, no result consumed.
pub trait Speaker: Send + Sync {
    fn speak(&self, text: &str);
}

/// Speaks through an external TTS command (espeak by default) with a fixed
/// English voice and rate. Failures are logged and never surfaced.
pub struct CommandSpeaker {
    command: String,
    voice: String,
    rate: u32,
}

impl CommandSpeaker {
    pub fn new(config: &SpeechConfig) -> Self {
        Self {
            command: config.command.clone(),
            voice: config.voice.clone(),
            rate: config.rate,
        }
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, text: &str) {
        if text.is_empty() {
            return;
        }

        let spawned = Command::new(&self.command)
            .arg("-v")
            .arg(&self.voice)
            .arg("-s")
            .arg(self.rate.to_string())
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(_child) => tracing::debug!("speaking: {}", text),
            Err(e) => tracing::warn!("speech command '{}' failed to start: {}", self.command, e),
        }
    }
}

/// Used when speech is disabled in the config.
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn speak(&self, _text: &str) {}
}
