//! Work order extraction CLI
//!
//! Fetches a repair request email, extracts a work order record through
//! Gemini, and prints a printable form or the raw record JSON.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use workorder::ai::GeminiExtractor;
use workorder::{
    render_text, sample_message, CannedMessageSource, ExtractorCredentials, FormView,
    InboundMessage, WorkOrderController,
};

#[derive(Parser)]
#[command(name = "workorder")]
#[command(about = "Email-to-work-order extraction CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bundled sample repair request email
    Sample,

    /// Fetch a message, extract a work order, and print the form
    Extract {
        /// Read the email body from a file instead of the bundled sample
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the record as JSON instead of the printable form
        #[arg(long)]
        json: bool,

        /// Write the output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Override the extraction model (default: GEMINI_MODEL or gemini-3-flash-preview)
        #[arg(long)]
        model: Option<String>,

        /// Override the extraction timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sample => cmd_sample(),
        Commands::Extract {
            input,
            json,
            out,
            model,
            timeout_secs,
        } => cmd_extract(input, json, out, model, timeout_secs).await,
    }
}

fn cmd_sample() -> Result<()> {
    let message = sample_message();

    println!("Subject: {}", message.subject);
    println!("From: {}", message.sender);
    println!("Date: {}", message.date);
    println!();
    println!("{}", message.body);

    Ok(())
}

async fn cmd_extract(
    input: Option<PathBuf>,
    json: bool,
    out: Option<PathBuf>,
    model: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<()> {
    let mut credentials =
        ExtractorCredentials::from_env().context("missing extraction credentials")?;
    if let Some(model) = model {
        credentials = credentials.with_model(model);
    }
    let extractor = GeminiExtractor::new(&credentials);

    let source = match &input {
        Some(path) => {
            let body = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let subject = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let message = InboundMessage::new(
                subject,
                "(local file)",
                chrono::Local::now().format("%b %-d, %Y").to_string(),
                body,
            );
            CannedMessageSource::new().with_message(message)
        }
        None => CannedMessageSource::new(),
    };

    let mut controller = WorkOrderController::new(source, extractor);
    if let Some(secs) = timeout_secs {
        controller = controller.with_extract_timeout(Duration::from_secs(secs));
    }

    controller
        .request_message()
        .await
        .context("failed to load the message")?;
    let record = controller
        .transform()
        .await
        .context("failed to extract a work order")?;

    let mut output = if json {
        serde_json::to_string_pretty(record)?
    } else {
        render_text(&FormView::from_record(record))
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }

    match out {
        Some(path) => std::fs::write(&path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{output}"),
    }

    Ok(())
}
