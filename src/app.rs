//! Campaign orchestration: caption generation, scrubbing, image pairing.

use crate::ai::{
    CaptionService, GeminiCaptionClient, OpenAiCaptionClient, StubCaptionClient,
};
use crate::images::{ImageSource, SuggestionClient, UnsplashClient};
use crate::models::{Campaign, Config, ImageBank, LlmProvider, Variant};
use crate::{prompts, scrub, Error, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Caption retries per variant before falling back to a tagged duplicate.
const MAX_UNIQUENESS_ATTEMPTS: usize = 4;

const CAPTION_MAX_TOKENS: u32 = 140;

/// Coordinates the caption provider and image source for one campaign build.
pub struct App {
    captions: Box<dyn CaptionService>,
    images: Box<dyn ImageSource>,
    open_links: bool,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub captions: Box<dyn CaptionService>,
    pub images: Box<dyn ImageSource>,
}

impl App {
    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and local harnesses that
    /// need to inject mocks.
    pub fn with_services(services: AppServices, open_links: bool) -> Self {
        Self {
            captions: services.captions,
            images: services.images,
            open_links,
        }
    }

    /// Construct an app from a loaded configuration and run options.
    pub fn new(config: &Config, image_bank: ImageBank, open_links: bool) -> Result<Self> {
        let captions = Self::build_caption_client(config)?;
        let images = Self::build_image_source(config, image_bank);
        Ok(Self::with_services(AppServices { captions, images }, open_links))
    }

    fn build_caption_client(config: &Config) -> Result<Box<dyn CaptionService>> {
        let provider = LlmProvider::parse(&config.llm_provider)?;

        Ok(match provider {
            LlmProvider::Stub => {
                info!("Caption provider: stub");
                Box::new(StubCaptionClient::new())
            }
            LlmProvider::Google => match &config.google_api_key {
                Some(key) => {
                    info!("Caption provider: Gemini (model: {})", config.llm_model);
                    Box::new(GeminiCaptionClient::new(
                        key.clone(),
                        config.llm_model.clone(),
                    ))
                }
                None => {
                    info!("GOOGLE_API_KEY not set, using stub captions");
                    Box::new(StubCaptionClient::new())
                }
            },
            LlmProvider::OpenAi => {
                let key = config.openai_api_key.clone().ok_or_else(|| {
                    Error::Config(
                        "OPENAI_API_KEY not set but the openai provider was selected".to_string(),
                    )
                })?;
                info!("Caption provider: OpenAI (model: {})", config.llm_model);
                Box::new(OpenAiCaptionClient::new(key, config.llm_model.clone()))
            }
            LlmProvider::Anthropic => {
                warn!("Anthropic support is stubbed, returning placeholder captions");
                Box::new(StubCaptionClient::new())
            }
        })
    }

    fn build_image_source(config: &Config, image_bank: ImageBank) -> Box<dyn ImageSource> {
        match image_bank {
            ImageBank::Unsplash => match &config.unsplash_access_key {
                Some(key) => {
                    info!("Image bank: Unsplash");
                    Box::new(UnsplashClient::new(key.clone()))
                }
                None => {
                    warn!("UNSPLASH_ACCESS_KEY not set, falling back to suggestion mode");
                    Box::new(SuggestionClient::new())
                }
            },
            ImageBank::Suggest => {
                info!("Image bank: suggestions");
                Box::new(SuggestionClient::new())
            }
        }
    }

    /// Build the full campaign: exactly `variants` scrubbed captions, each
    /// paired with an image query and an optional resolved URL.
    pub async fn build_campaign(&self, topic: &str, variants: usize) -> Result<Campaign> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(Error::Validation("Topic must not be empty".to_string()));
        }
        if variants == 0 {
            return Err(Error::Validation(
                "Variant count must be at least 1".to_string(),
            ));
        }

        info!("Building campaign for '{}' ({} variants)", topic, variants);

        // One lookup fetches the whole image pool; variants cycle through it.
        let image_pool = self.images.resolve(topic, variants).await?;

        let mut seen: HashSet<String> = HashSet::new();
        let mut results = Vec::with_capacity(variants);

        for index in 0..variants {
            let text = self.generate_unique_caption(topic, index, &mut seen).await?;

            let (image_query, image_url) = if image_pool.is_empty() {
                (topic.to_string(), None)
            } else {
                let choice = &image_pool[index % image_pool.len()];
                let url = if self.open_links {
                    choice.url.clone()
                } else {
                    None
                };
                (choice.query.clone(), url)
            };

            results.push(Variant {
                text,
                image_query,
                image_url,
            });
        }

        Ok(Campaign::new(topic.to_string(), results))
    }

    /// Generate a caption distinct from earlier variants.
    ///
    /// Re-prompts with a different angle when the provider repeats itself;
    /// after the attempt budget, tags the caption instead so stub providers
    /// still yield N distinct variants.
    async fn generate_unique_caption(
        &self,
        topic: &str,
        index: usize,
        seen: &mut HashSet<String>,
    ) -> Result<String> {
        let mut last_candidate = String::new();

        for attempt in 0..MAX_UNIQUENESS_ATTEMPTS {
            let prompt = prompts::caption_prompt(topic, index, attempt);
            let raw = self.captions.generate_text(&prompt, CAPTION_MAX_TOKENS).await?;
            let candidate = scrub::clean(&raw);
            let norm = normalize_for_uniqueness(&candidate);

            if !norm.is_empty() && seen.insert(norm) {
                return Ok(candidate);
            }
            last_candidate = candidate;
        }

        // A provider can scrub down to nothing; tag a topic-derived
        // placeholder rather than an empty caption.
        if last_candidate.is_empty() {
            last_candidate = scrub::clean(&format!("Stay tuned for {}!", topic));
        }

        let mut tagged = format!("{} · v{}", last_candidate, index + 1);
        let mut k = 2;
        while !seen.insert(normalize_for_uniqueness(&tagged)) {
            tagged = format!("{} · v{}.{}", last_candidate, index + 1, k);
            k += 1;
        }
        Ok(tagged)
    }

    /// Build the campaign and print or write the pretty JSON payload.
    pub async fn run(&self, topic: &str, variants: usize, output: Option<&Path>) -> Result<()> {
        let campaign = self.build_campaign(topic, variants).await?;
        let json = serde_json::to_string_pretty(&campaign)?;

        match output {
            Some(path) => {
                fs::write(path, &json)?;
                info!("Saved campaign to {}", path.display());
            }
            None => println!("{}", json),
        }

        Ok(())
    }
}

/// Case/whitespace-insensitive caption key used for variant deduplication.
fn normalize_for_uniqueness(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
