use std::time::Duration;

use glossa_types::ParsedExplanation;

/// Presentation phase of the lookup surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pre-first-query only; never re-entered
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Field categories in their fixed reveal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCategory {
    Definition,
    Examples,
    Synonyms,
    Antonyms,
    Translation,
    Idioms,
}

impl FieldCategory {
    pub const ORDERED: [FieldCategory; 6] = [
        FieldCategory::Definition,
        FieldCategory::Examples,
        FieldCategory::Synonyms,
        FieldCategory::Antonyms,
        FieldCategory::Translation,
        FieldCategory::Idioms,
    ];

    /// Cosmetic stagger measured from the end of headword typing,
    /// strictly increasing down the field order.
    pub fn reveal_delay(self) -> Duration {
        let ms = match self {
            FieldCategory::Definition => 120,
            FieldCategory::Examples => 240,
            FieldCategory::Synonyms => 360,
            FieldCategory::Antonyms => 480,
            FieldCategory::Translation => 600,
            FieldCategory::Idioms => 720,
        };
        Duration::from_millis(ms)
    }
}

/// State machine driving the progressive reveal of one explanation.
///
/// Owned by the single interaction loop; all transitions happen there, so no
/// synchronization is needed. The timer that paces typing lives with the
/// renderer, this type only tracks how far typing has progressed.
pub struct RevealController {
    phase: Phase,
    explanation: Option<ParsedExplanation>,
    /// Query of the in-flight or last accepted lookup, parser fallback
    pending_query: Option<String>,
    /// One-way flag: layout stays in its results position after the first
    /// submission, never reset
    has_searched: bool,
    typed_chars: usize,
    typing_done: bool,
}

impl RevealController {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            explanation: None,
            pending_query: None,
            has_searched: false,
            typed_chars: 0,
            typing_done: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn explanation(&self) -> Option<&ParsedExplanation> {
        self.explanation.as_ref()
    }

    pub fn pending_query(&self) -> Option<&str> {
        self.pending_query.as_deref()
    }

    /// Accept a query submission, entering `Loading`.
    ///
    /// Returns the trimmed query when accepted. Rejected (returns `None`)
    /// while a fetch is outstanding or when the query trims to nothing; the
    /// caller must not start a fetch in that case. Acceptance clears the
    /// previous explanation and error immediately so stale content never
    /// shows during the new fetch.
    pub fn submit(&mut self, query: &str) -> Option<String> {
        if self.is_loading() {
            return None;
        }

        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        self.explanation = None;
        self.typed_chars = 0;
        self.typing_done = false;
        self.pending_query = Some(query.to_string());
        self.has_searched = true;
        self.phase = Phase::Loading;

        Some(query.to_string())
    }

    /// `Loading -> Ready`: store the result and arm headword typing.
    pub fn complete(&mut self, parsed: ParsedExplanation) {
        if self.phase != Phase::Loading {
            return;
        }

        self.explanation = Some(parsed);
        self.typed_chars = 0;
        self.typing_done = false;
        self.phase = Phase::Ready;
    }

    /// `Loading -> Failed`: nothing stored, next submission is a fresh try.
    pub fn fail(&mut self) {
        if self.phase != Phase::Loading {
            return;
        }

        self.phase = Phase::Failed;
    }

    /// Reveal one more headword character. Returns `false` once every
    /// character is visible (the hold and exit are the driver's job).
    pub fn advance_typing(&mut self) -> bool {
        let total = self.headword_len();
        if self.typed_chars < total {
            self.typed_chars += 1;
        }
        self.typed_chars < total
    }

    /// Exit the typing sub-state; later renders show the headword in full.
    pub fn finish_typing(&mut self) {
        self.typed_chars = self.headword_len();
        self.typing_done = true;
    }

    pub fn typing_done(&self) -> bool {
        self.typing_done
    }

    /// Currently visible headword prefix (char-aligned, not byte-aligned).
    pub fn typed_headword(&self) -> String {
        match &self.explanation {
            Some(parsed) if self.typing_done => parsed.headword.clone(),
            Some(parsed) => parsed.headword.chars().take(self.typed_chars).collect(),
            None => String::new(),
        }
    }

    fn headword_len(&self) -> usize {
        self.explanation
            .as_ref()
            .map(|parsed| parsed.headword.chars().count())
            .unwrap_or(0)
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new()
    }
}
