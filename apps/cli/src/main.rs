use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;
use tokio::io::AsyncReadExt;
use tokio_util::sync::CancellationToken;

use viralscript_core::{
    GenerationOptions, GenerationRequest, Provider, Session, format_result_readable,
    generate_script,
};

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Gemini,
    Openai,
    Grok,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Gemini => Provider::Gemini,
            CliProvider::Openai => Provider::Openai,
            CliProvider::Grok => Provider::Grok,
        }
    }
}

#[derive(Parser)]
#[command(name = "viralscript")]
#[command(
    about = "Analyze a proven short-video script and generate an AI-written script for a new topic"
)]
struct Cli {
    /// Topic for the new video
    topic: String,

    /// Path to the reference script file; "-" reads from stdin
    #[arg(short, long)]
    reference: PathBuf,

    /// Output language for the analysis and the new script (e.g., "ko", "en")
    #[arg(short, long, default_value = "ko")]
    lang: String,

    /// AI provider for script generation
    #[arg(short, long, default_value = "gemini")]
    provider: CliProvider,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    timeout: u64,

    /// Write the readable report to this file as well
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

async fn read_reference(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        tokio::io::stdin().read_to_string(&mut buffer).await?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read reference script from {}", path.display()))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let provider: Provider = cli.provider.into();

    // Validate API key early
    if let Err(e) = provider.validate_api_key() {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    let reference_script = read_reference(&cli.reference).await?;

    let request = match GenerationRequest::new(reference_script, cli.topic) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    println!(
        "\n{}  {}\n",
        style("viralscript").cyan().bold(),
        style("Script Alchemist").dim()
    );

    let options = GenerationOptions {
        language: cli.lang.clone(),
        timeout: Duration::from_secs(cli.timeout),
    };

    // Ctrl-C cancels the in-flight request
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_cancel.cancel();
        }
    });

    let mut session = Session::new();
    let status = format!("Analyzing script structure with {}...", provider.name());
    session.begin(status.clone())?;
    let spinner = create_spinner(&status);

    match generate_script(&request, &provider, &options, &cancel).await {
        Ok(result) => {
            session.complete(result);
            spinner.finish_with_message(format!(
                "{} Script generated ({})",
                style("✓").green().bold(),
                provider.name()
            ));
        }
        Err(e) => {
            session.fail(e.to_string());
            spinner.finish_and_clear();
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    }

    println!("{}", style("─".repeat(60)).dim());

    // Human-readable output, straight from the session container
    if let Some(result) = session.result() {
        let readable = format_result_readable(result);
        println!("{}", readable);

        if let Some(path) = &cli.output {
            fs::write(path, &readable).await?;
            println!(
                "\n{} {}\n",
                style("Saved:").dim(),
                style(path.display()).cyan()
            );
        }
    }

    Ok(())
}
