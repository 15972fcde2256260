use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use tokio::io::AsyncReadExt;

use pdf_render::{
    ChromeEngine, RenderFailure, RenderJob, default_output_dir, render_with_engine,
};

#[derive(Parser)]
#[command(name = "pdfgen", about = "Print-ready PDF rendering driver", version)]
struct Cli {
    /// Directory for generated PDF files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Chrome/Chromium binary to use instead of discovery
    #[arg(long)]
    chrome: Option<PathBuf>,

    /// Virtual-time budget granted to the page for loading, in milliseconds
    #[arg(long, default_value = "10000")]
    virtual_time_budget_ms: u32,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let failure = RenderFailure::new(err.to_string());
            match serde_json::to_string(&failure) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!(r#"{{"success":false,"error":"result serialization failed"}}"#),
            }
            ExitCode::FAILURE
        }
    }
}

/// Read one job from stdin, render it, and return the result JSON line.
async fn run(cli: Cli) -> anyhow::Result<String> {
    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    debug!("Read job input: {} bytes", input.len());

    // Parse before any engine work so malformed input never launches a browser.
    let job = RenderJob::from_json(&input)?;

    let engine = match cli.chrome {
        Some(path) => ChromeEngine::with_binary(path),
        None => ChromeEngine::discover()?,
    }
    .virtual_time_budget_ms(cli.virtual_time_budget_ms);

    let output_dir = cli.output_dir.unwrap_or_else(default_output_dir);
    let result = render_with_engine(&job, Box::new(engine), &output_dir).await?;

    Ok(serde_json::to_string(&result)?)
}
