use serde::{Deserialize, Serialize};

fn default_body_type_ms() -> u64 {
    15
}

fn default_headword_type_ms() -> u64 {
    30
}

fn default_typing_hold_ms() -> u64 {
    200
}

/// Timings for the staged reveal of a parsed explanation
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RevealConfig {
    /// Per-character interval when typing body text
    #[serde(default = "default_body_type_ms")]
    pub body_type_ms: u64,
    /// Per-character interval when typing the headword
    #[serde(default = "default_headword_type_ms")]
    pub headword_type_ms: u64,
    /// Hold after the last typed character before the typing state exits
    #[serde(default = "default_typing_hold_ms")]
    pub typing_hold_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            body_type_ms: default_body_type_ms(),
            headword_type_ms: default_headword_type_ms(),
            typing_hold_ms: default_typing_hold_ms(),
        }
    }
}
