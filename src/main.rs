// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use doc_summarize::utils::logging::{format_error, format_heading, format_success, format_warning};
use doc_summarize::{
    Config, DocumentProcessor, ExtractionSpinner, JsonExporter, ProcessingReport, Validator,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "doc_summarize")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Extract, clean and summarize a PDF, Word or plain text document", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "DOC_SUMMARIZE_CONFIG",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the beginning of the cleaned document text
    Preview {
        file: PathBuf,

        #[arg(long, value_name = "NUM")]
        chars: Option<usize>,
    },

    /// Show the preview followed by the extractive summary
    Summarize {
        file: PathBuf,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also write the JSON report to this path
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Show the preview, then ask before summarizing
    Interactive { file: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    doc_summarize::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", format_error(&format!("{err:#}")));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    debug!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        debug!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Preview { file, chars } => cmd_preview(config, &file, chars, cli.color),
        Commands::Summarize {
            file,
            json,
            output,
            pretty,
        } => cmd_summarize(&config, &file, json, output, pretty, cli.color),
        Commands::Interactive { file } => cmd_interactive(&config, &file, cli.color),
    }
}

fn cmd_preview(
    mut config: Config,
    file: &Path,
    chars: Option<usize>,
    colored: bool,
) -> Result<ExitCode> {
    if let Some(chars) = chars {
        Validator::validate_preview_chars(chars)?;
        config.preview.max_chars = chars;
    }

    let processor = DocumentProcessor::new(config);
    let report = extract(&processor, file, false, colored)?;
    if report_rejection(&report) {
        return Ok(ExitCode::FAILURE);
    }

    print_preview(&report);
    Ok(ExitCode::SUCCESS)
}

fn cmd_summarize(
    config: &Config,
    file: &Path,
    json: bool,
    output: Option<PathBuf>,
    pretty: bool,
    colored: bool,
) -> Result<ExitCode> {
    let processor = DocumentProcessor::new(config.clone());
    let report = extract(&processor, file, true, colored)?;
    if report_rejection(&report) {
        return Ok(ExitCode::FAILURE);
    }

    let exporter = JsonExporter::new(pretty);

    if json {
        println!("{}", exporter.to_json(&report)?);
    } else {
        print_preview(&report);
        print_summary(&report);
    }

    if let Some(output) = output {
        let written = exporter
            .export(&report, &output)
            .with_context(|| format!("Failed to write report to {}", output.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("Report written to {}", written.display()))
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_interactive(config: &Config, file: &Path, colored: bool) -> Result<ExitCode> {
    let processor = DocumentProcessor::new(config.clone());
    let mut report = extract(&processor, file, false, colored)?;
    if report_rejection(&report) {
        return Ok(ExitCode::FAILURE);
    }

    print_preview(&report);

    if confirm("Summarize this document? [y/N] ")? {
        processor.summarize(&mut report);
        print_summary(&report);
    } else {
        info!("Summary skipped");
    }

    Ok(ExitCode::SUCCESS)
}

fn extract(
    processor: &DocumentProcessor,
    file: &Path,
    summarize: bool,
    colored: bool,
) -> Result<ProcessingReport> {
    let name = file.display().to_string();
    let spinner = ExtractionSpinner::start(&name, colored);
    let report = processor
        .process_path(file, summarize)
        .with_context(|| format!("Failed to process {}", name));
    spinner.finish();

    let report = report?;
    debug!(
        "Extracted {} characters ({:.1}% kept after cleanup) in {} ms ({:.0} bytes/s)",
        report.stats.clean_chars,
        report.stats.retention_rate(),
        report.stats.duration_ms,
        report.stats.bytes_per_second()
    );
    Ok(report)
}

fn report_rejection(report: &ProcessingReport) -> bool {
    match &report.notice {
        Some(notice) => {
            eprintln!("{}", format_error(notice));
            true
        }
        None => false,
    }
}

fn print_preview(report: &ProcessingReport) {
    println!("{}", format_heading("Preview"));
    if report.preview.is_empty() {
        println!("{}", format_warning("No text could be extracted from this document"));
    } else {
        println!("{}", report.preview);
    }
    println!();
}

fn print_summary(report: &ProcessingReport) {
    if let Some(summary) = &report.summary {
        println!("{}", summary.render().trim_end());
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read answer")?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
