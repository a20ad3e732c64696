//! Dyslexia screening CLI
//!
//! Screens a handwriting image and prints the verdict.

use anyhow::Result;
use clap::Parser;
use dyslexia_screening::{HandwritingScreener, RecognitionConfig, Verdict};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "dyslexia-screening")]
#[command(about = "Screen a handwriting sample for dyslexia likelihood")]
struct Args {
    /// Path to the handwriting image (jpg, png)
    image: PathBuf,

    /// Recognition model override
    #[arg(long)]
    model: Option<String>,

    /// Recognition API base URL override
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "dyslexia_screening=info"
                    .parse()
                    .expect("directive is compile-time constant"),
            ),
        )
        .init();

    let args = Args::parse();

    let mut config = RecognitionConfig::from_env()?;
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    info!(image = %args.image.display(), "screening handwriting sample");

    let screener = HandwritingScreener::new(config)?;
    let verdict = screener.predict(&args.image).await?;

    match verdict {
        Verdict::LowRisk => {
            println!("The handwriting sample indicates a very slim chance of dyslexia.");
        }
        Verdict::HighRisk => {
            println!("The handwriting sample indicates a high likelihood of dyslexia.");
        }
    }

    Ok(())
}
