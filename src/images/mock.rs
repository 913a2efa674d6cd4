use super::{ImageResult, ImageSource};
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Builder-style image mock returning queued results.
pub struct MockImageClient {
    results: Arc<Mutex<Vec<ImageResult>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageClient {
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_result(self, query: String, url: Option<String>) -> Self {
        self.results.lock().unwrap().push(ImageResult { query, url });
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockImageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageSource for MockImageClient {
    async fn resolve(&self, query: &str, limit: usize) -> Result<Vec<ImageResult>> {
        *self.call_count.lock().unwrap() += 1;

        let results = self.results.lock().unwrap();
        if results.is_empty() {
            // Default mock response: one resolved hit per requested slot
            Ok((0..limit.max(1))
                .map(|i| ImageResult {
                    query: query.to_string(),
                    url: Some(format!("https://images.test/{}.jpg", i)),
                })
                .collect())
        } else {
            Ok(results.iter().take(limit.max(1)).cloned().collect())
        }
    }
}
