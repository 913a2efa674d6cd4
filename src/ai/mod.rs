//! Text generation providers for caption copy
//!
//! Exposes a single-call capability trait with live Gemini/OpenAI clients, a
//! deterministic stub, and a builder-style mock for tests.

pub mod gemini;
pub mod mock;
pub mod openai;
pub mod stub;

pub use gemini::GeminiCaptionClient;
pub use mock::MockCaptionClient;
pub use openai::OpenAiCaptionClient;
pub use stub::StubCaptionClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CaptionService: Send + Sync {
    /// Generate one raw caption for an already-rendered prompt.
    async fn generate_text(&self, prompt: &str, max_tokens: u32) -> Result<String>;
}
