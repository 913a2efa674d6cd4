use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vibewriter::app::App;
use vibewriter::models::{Config, ImageBank};

#[derive(Debug, Parser)]
#[command(name = "vibewriter")]
#[command(about = "Generate social media post variants for a campaign topic")]
struct CliArgs {
    /// Campaign topic or brief.
    #[arg(long)]
    topic: String,

    /// Number of post variants to generate.
    #[arg(long, default_value_t = 3)]
    variants: usize,

    /// Model name override (defaults to LLM_MODEL).
    #[arg(long)]
    model: Option<String>,

    /// Text provider: stub|google|openai|anthropic (defaults to LLM_PROVIDER).
    #[arg(long)]
    llm_provider: Option<String>,

    /// Image source: unsplash|suggest.
    #[arg(long, default_value = "unsplash")]
    image_bank: String,

    /// Include resolved image URLs in the output JSON.
    #[arg(long)]
    open_links: bool,

    /// Output file path (JSON). Prints to stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vibewriter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting vibewriter");

    let args = CliArgs::parse();

    let config = Config::from_env().with_overrides(args.llm_provider.clone(), args.model.clone());

    let app = match ImageBank::parse(&args.image_bank)
        .and_then(|image_bank| App::new(&config, image_bank, args.open_links))
    {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    match app
        .run(&args.topic, args.variants, args.output.as_deref())
        .await
    {
        Ok(_) => {
            info!("Campaign generation completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Campaign generation failed: {}", e);
            std::process::exit(1);
        }
    }
}
