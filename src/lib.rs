//! VibeWriter - generates social media caption campaigns for a topic
//!
//! Produces N post variants for a campaign brief by calling a pluggable text
//! provider, scrubbing the output, and pairing each variant with an image
//! lookup (a resolved Unsplash URL or a search-query suggestion).

pub mod ai;
pub mod app;
pub mod error;
pub mod images;
pub mod models;
pub mod prompts;
pub mod scrub;

pub use error::{Error, Result};
