pub mod caption;
pub mod client;

pub use caption::OpenAiCaptionClient;
