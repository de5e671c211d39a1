//! Text-generation model abstraction
//!
//! The recommender only needs "prompt in, text out", so the model vendor sits
//! behind this trait and tests swap in a mock.
use crate::error::AppResult;

pub mod gemini;

pub use gemini::GeminiGenerator;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TitleGenerator: Send + Sync {
    /// Sends a prompt and returns the model's plain-text reply
    async fn generate(&self, prompt: &str) -> AppResult<String>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}
