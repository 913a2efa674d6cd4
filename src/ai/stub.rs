use super::CaptionService;
use crate::Result;
use async_trait::async_trait;

/// Offline caption provider used when no credential is configured.
///
/// Returns deterministic placeholder copy without touching the network; the
/// orchestrator's uniqueness guard differentiates repeated variants.
pub struct StubCaptionClient;

impl StubCaptionClient {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StubCaptionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptionService for StubCaptionClient {
    async fn generate_text(&self, _prompt: &str, _max_tokens: u32) -> Result<String> {
        Ok("Celebrate savings with our limited-time offer! #Deal #Promo".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_is_deterministic() {
        let client = StubCaptionClient::new();
        let first = client.generate_text("prompt one", 140).await.unwrap();
        let second = client.generate_text("prompt two", 140).await.unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
