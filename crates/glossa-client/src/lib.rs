mod gemini;
mod prompt;

pub use gemini::GeminiClient;
pub use prompt::explanation_prompt;

/// Text-generation provider interface
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one prompt; `Ok(None)` means the call succeeded but produced no
    /// text content
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

/// Failure taxonomy of one lookup. Both variants surface to the user as the
/// same generic try-again message; the distinction is for the logs.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("service returned no text")]
    EmptyResponse,

    #[error("text generation failed: {0}")]
    Service(#[from] GenerateError),
}

/// One lookup per user submission: build the prompt, run it once, hand back
/// the raw response text. No retry, no timeout, no caching.
#[derive(Clone)]
pub struct ExplanationClient<G> {
    generator: G,
}

impl<G: TextGenerator> ExplanationClient<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub async fn fetch(&self, query: &str) -> Result<String, LookupError> {
        let prompt = explanation_prompt(query);
        let text = self.generator.generate(&prompt).await?;

        match text {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(LookupError::EmptyResponse),
        }
    }
}
