use anyhow::{Context, Result};
use clap::Parser;
use docstamp::{DocstampConfig, DocumentPipeline};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docstamp")]
#[command(version, about = "stamp version metadata, render the changelog and build the PDF", long_about = None)]
struct Cli {
    /// project root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// version date (YYYY-MM-DD), defaults to today
    #[arg(long, value_name = "YYYY-MM-DD")]
    version_date: Option<String>,

    /// only update version and changelog, do not build the PDF
    #[arg(long)]
    no_build: bool,

    /// print the current version and exit, takes precedence over other modes
    #[arg(long)]
    print_version: bool,

    /// only regenerate the changelog, ignores --version-date and --no-build
    #[arg(long)]
    changelog_only: bool,

    /// output format (json or human)
    #[arg(short, long, default_value = "human")]
    format: OutputFormat,

    /// log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Json,
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = DocstampConfig::load_or_default(&cli.path)
        .with_context(|| format!("failed to load configuration from {}", cli.path.display()))?;
    let pipeline = DocumentPipeline::new(config);

    if cli.print_version {
        return handle_print_version(&pipeline, &cli.format);
    }

    if cli.changelog_only {
        return handle_changelog_only(&pipeline, &cli.format);
    }

    handle_build(&pipeline, &cli.format, cli.version_date.as_deref(), cli.no_build)
}

fn handle_print_version(pipeline: &DocumentPipeline, format: &OutputFormat) -> Result<()> {
    let version = pipeline
        .current_version()
        .context("failed to read current version")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "version": version });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{}", version),
    }
    Ok(())
}

fn handle_changelog_only(pipeline: &DocumentPipeline, format: &OutputFormat) -> Result<()> {
    let report = pipeline
        .regenerate_changelog()
        .context("changelog generation failed")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!("generated changelog: {}", report.output_path.display());
            println!("found {} version entries", report.entry_count);
        }
    }
    Ok(())
}

fn handle_build(
    pipeline: &DocumentPipeline,
    format: &OutputFormat,
    version_date: Option<&str>,
    no_build: bool,
) -> Result<()> {
    let info = pipeline
        .compute_version(version_date)
        .context("failed to compute version")?;
    if let OutputFormat::Human = format {
        println!("{}", info);
    }

    let summary = pipeline
        .run(&info, no_build)
        .context("documentation build failed")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "version": summary.version,
                "changelog": summary.changelog.as_ref().ok(),
                "changelog_error": summary.changelog.as_ref().err().map(|e| e.to_string()),
                "artifact": summary.build.as_ref().map(|outcome| &outcome.artifact),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!(
                "updated version to {} in {}",
                info.version,
                pipeline.config().metadata_path().display()
            );
            match &summary.changelog {
                Ok(report) => println!(
                    "generated changelog: {} ({} version entries)",
                    report.output_path.display(),
                    report.entry_count
                ),
                Err(_) => println!("changelog not regenerated, see warning above"),
            }
            if let Some(outcome) = &summary.build {
                println!("PDF built successfully: {}", outcome.artifact.display());
            }
        }
    }

    Ok(())
}
