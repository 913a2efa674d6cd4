use super::{ImageResult, ImageSource};
use crate::Result;
use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Phrase modifiers combined with the topic to form search suggestions.
const MODIFIERS: &[&str] = &[
    "product flatlay",
    "happy customers",
    "lifestyle shot",
    "discount banner",
    "seasonal promo graphic",
    "close-up detail",
];

/// Offline image strategy: derives 1-3 search phrases from the query without
/// any network call. Selection is seeded from the query so repeated runs
/// produce the same suggestions.
pub struct SuggestionClient;

impl SuggestionClient {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SuggestionClient {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_for(query: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    query.hash(&mut hasher);
    hasher.finish()
}

#[async_trait]
impl ImageSource for SuggestionClient {
    async fn resolve(&self, query: &str, limit: usize) -> Result<Vec<ImageResult>> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed_for(query));
        let count = limit.clamp(1, 3).min(MODIFIERS.len());

        let picks = MODIFIERS.choose_multiple(&mut rng, count);
        let topic = query.trim();

        Ok(picks
            .map(|modifier| ImageResult {
                query: format!("{} {}", topic, modifier),
                url: None,
            })
            .collect())
    }
}
