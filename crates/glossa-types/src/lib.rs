mod types;

pub use types::{AppEvent, ParsedExplanation};
