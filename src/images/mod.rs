//! Image lookup capability
//!
//! Two strategies behind one trait: a live Unsplash search that resolves real
//! photo URLs, and an offline suggestion mode that derives plausible search
//! phrases instead. Each result is either resolved (`url` set) or a bare
//! suggestion (`url` absent), never both.

pub mod mock;
pub mod suggest;
pub mod unsplash;

pub use mock::MockImageClient;
pub use suggest::SuggestionClient;
pub use unsplash::UnsplashClient;

use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One image lookup outcome: a search query plus an optional resolved URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResult {
    pub query: String,
    pub url: Option<String>,
}

#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Look up at most `limit` image results for `query`.
    async fn resolve(&self, query: &str, limit: usize) -> Result<Vec<ImageResult>>;
}
