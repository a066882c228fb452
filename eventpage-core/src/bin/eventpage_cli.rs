//! Event Page CLI - Editor and Export Front End
//!
//! Commands: presets, init, check, render, preview, export, apply
//! Outputs JSON to stdout, logs to stderr
//! Returns 2 when validation blocks an export

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use eventpage_core::{
    assist, AssistCopy, AssistError, ConfigError, EventConfig, ExportPipeline, FailureMode,
    PipelineError, ThemePreset,
};

#[derive(Parser)]
#[command(name = "eventpage-cli")]
#[command(about = "Event Page CLI - configure, preview and export event pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Event config JSON (defaults to the built-in record)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List theme presets
    Presets,

    /// Print the default event config
    Init,

    /// Check a config for problems
    Check {
        #[arg(long, value_enum, default_value_t = ModeArg::Block)]
        failure_mode: ModeArg,
    },

    /// Render the page
    Render {
        #[command(flatten)]
        edits: Edits,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the page as a data: URL for a preview frame
    Preview {
        #[command(flatten)]
        edits: Edits,
    },

    /// Validate and export the page to <slug>.html
    Export {
        #[command(flatten)]
        edits: Edits,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        #[arg(long, value_enum, default_value_t = ModeArg::Block)]
        failure_mode: ModeArg,
    },

    /// Print the config after applying edits
    Apply {
        #[command(flatten)]
        edits: Edits,
    },
}

#[derive(Args)]
struct Edits {
    /// Theme preset to apply
    #[arg(short, long)]
    preset: Option<ThemePreset>,

    /// Assistant response JSON to merge
    #[arg(short, long)]
    assist: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Block,
    Warn,
}

impl From<ModeArg> for FailureMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Block => FailureMode::Block,
            ModeArg::Warn => FailureMode::Warn,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Assist(#[from] AssistError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            println!("{}", serde_json::json!({ "success": false, "error": e.to_string() }));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let base = match &cli.config {
        Some(path) => EventConfig::load(path)?,
        None => EventConfig::default(),
    };

    match cli.command {
        Commands::Presets => {
            let presets: Vec<_> = ThemePreset::ALL
                .iter()
                .map(|p| serde_json::json!({
                    "name": p.name(),
                    "colors": p.colors(),
                    "active": ThemePreset::active(&base) == Some(*p),
                }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&presets)?);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Init => {
            println!("{}", EventConfig::default().to_json_pretty()?);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Check { failure_mode } => {
            let result = ExportPipeline::new(failure_mode.into()).validate(&base);
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(if result.valid { ExitCode::SUCCESS } else { ExitCode::from(2) })
        }

        Commands::Render { edits, out } => {
            let config = apply_edits(base, &edits)?;
            let html = ExportPipeline::default().preview(&config);
            match out {
                Some(path) => write_file(&path, &html)?,
                None => print!("{}", html),
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Preview { edits } => {
            let config = apply_edits(base, &edits)?;
            println!("{}", ExportPipeline::default().preview_data_url(&config));
            Ok(ExitCode::SUCCESS)
        }

        Commands::Export { edits, dir, failure_mode } => {
            let config = apply_edits(base, &edits)?;
            let pipeline = ExportPipeline::new(failure_mode.into());

            let page = match pipeline.export(&config) {
                Ok(page) => page,
                Err(PipelineError::ValidationFailed(result)) => {
                    let output = serde_json::json!({
                        "success": false,
                        "error": format!("Validation failed: {}", result.summary()),
                        "validation": result,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                    return Ok(ExitCode::from(2));
                }
                Err(e) => return Err(e.into()),
            };

            let path = page.write_to(&dir)?;
            let output = serde_json::json!({
                "success": true,
                "path": path.display().to_string(),
                "page": page,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Apply { edits } => {
            let config = apply_edits(base, &edits)?;
            println!("{}", config.to_json_pretty()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn apply_edits(mut config: EventConfig, edits: &Edits) -> Result<EventConfig, CliError> {
    if let Some(preset) = edits.preset {
        preset.apply(&mut config);
    }
    if let Some(path) = &edits.assist {
        assist::ensure_ready(&config)?;
        let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let report = AssistCopy::from_json(&raw)?.merge_into(&mut config);
        tracing::info!(updated = report.updated.len(), "Merged assistant copy");
    }
    Ok(config)
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Wrote rendered page");
    Ok(())
}
