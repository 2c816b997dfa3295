//! Text analysis CLI application.
//!
//! This binary exposes the textsift library on the command line. Text is read
//! from `--input` or stdin and results are printed as pretty JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use textsift::config::{DEFAULT_CONFIG_FILE, DEFAULT_LOG_LEVEL};
use textsift::{
    analyze_text, clean_text, extract_entities, find_patterns, normalize_user, parse_log,
    registry, smart_replace, transform::render_receipt, validate_format, CleanOperation, Config,
    Contraction, RawUserData, ReceiptLine, ReplaceOptions,
};

/// Text Analysis Tool
///
/// Validate formats, extract entities, and analyze text or logs.
#[derive(Parser)]
#[command(name = "textsift")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./textsift.toml when present)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a value against a named format (phone, date, time, email, url, ssn)
    Validate {
        /// Format name
        format: String,

        /// Value to validate
        value: String,
    },

    /// List the built-in formats and their fields
    Formats,

    /// Extract prices, percentages, years, sentences, questions, and quotes
    Extract {
        /// Input text file (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Find integers, decimals, and casing patterns
    Patterns {
        /// Input text file (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Compute word, line, and sentence statistics
    Analyze {
        /// Input text file (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Parse a `[date time] LEVEL: message` log and summarize it
    Log {
        /// Input log file (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Print only the summary, not every record
        #[arg(long)]
        summary_only: bool,
    },

    /// Run a cleaning pipeline over the text
    Clean {
        /// Input text file (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Cleaning operation, in order (can be specified multiple times)
        #[arg(long = "op", value_name = "OPERATION")]
        operations: Vec<String>,
    },

    /// Censor, respace, and expand text
    Replace {
        /// Input text file (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Mask dash-separated phone numbers
        #[arg(long)]
        censor_phone: bool,

        /// Mask email addresses
        #[arg(long)]
        censor_email: bool,

        /// Normalize spacing around punctuation
        #[arg(long)]
        fix_spacing: bool,

        /// Spell out standalone numbers 1 to 10
        #[arg(long)]
        number_to_word: bool,

        /// Whole-word replacement as FROM=TO (can be specified multiple times)
        #[arg(long = "contraction", value_name = "FROM=TO")]
        contractions: Vec<String>,
    },

    /// Print a receipt table
    Receipt {
        /// Item as NAME:PRICE:QTY (can be specified multiple times)
        #[arg(long = "item", value_name = "NAME:PRICE:QTY", required = true)]
        items: Vec<String>,
    },

    /// Normalize a user record given as a JSON object
    User {
        /// Input JSON file (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

/// Command handler carrying the resolved configuration.
struct AnalysisHandler {
    config: Config,
}

impl AnalysisHandler {
    fn new(config: Config) -> Self {
        Self { config }
    }

    fn run(&self, command: &Commands) -> Result<ExitCode> {
        match command {
            Commands::Validate { format, value } => {
                let result = validate_format(value, format);
                print_json(&result)?;
                Ok(if result.matched {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                })
            }
            Commands::Formats => {
                let formats: Vec<FormatInfo> = registry()
                    .iter()
                    .map(|spec| FormatInfo {
                        name: spec.name(),
                        fields: spec.fields(),
                    })
                    .collect();
                print_json(&formats)?;
                Ok(ExitCode::SUCCESS)
            }
            Commands::Extract { input } => {
                print_json(&extract_entities(&read_input(input.as_deref())?))?;
                Ok(ExitCode::SUCCESS)
            }
            Commands::Patterns { input } => {
                print_json(&find_patterns(&read_input(input.as_deref())?))?;
                Ok(ExitCode::SUCCESS)
            }
            Commands::Analyze { input } => {
                print_json(&analyze_text(&read_input(input.as_deref())?))?;
                Ok(ExitCode::SUCCESS)
            }
            Commands::Log {
                input,
                summary_only,
            } => {
                let report = parse_log(&read_input(input.as_deref())?);
                debug!(records = report.records.len(), "parsed log");
                if *summary_only {
                    print_json(&report.summary)?;
                } else {
                    print_json(&report)?;
                }
                Ok(ExitCode::SUCCESS)
            }
            Commands::Clean { input, operations } => {
                let operations = self.resolve_operations(operations)?;
                let text = read_input(input.as_deref())?;
                print_json(&clean_text(&text, &operations))?;
                Ok(ExitCode::SUCCESS)
            }
            Commands::Replace {
                input,
                censor_phone,
                censor_email,
                fix_spacing,
                number_to_word,
                contractions,
            } => {
                let mut options = self.config.replace.clone();
                options.censor_phone |= *censor_phone;
                options.censor_email |= *censor_email;
                options.fix_spacing |= *fix_spacing;
                options.number_to_word |= *number_to_word;
                for raw in contractions {
                    options.contractions.push(parse_contraction(raw)?);
                }

                let text = read_input(input.as_deref())?;
                println!("{}", replace_text(&text, &options)?);
                Ok(ExitCode::SUCCESS)
            }
            Commands::Receipt { items } => {
                let lines = items
                    .iter()
                    .map(|raw| raw.parse::<ReceiptLine>())
                    .collect::<Result<Vec<_>, _>>()
                    .context("Invalid receipt item")?;
                println!("{}", render_receipt(&lines));
                Ok(ExitCode::SUCCESS)
            }
            Commands::User { input } => {
                let raw: RawUserData = serde_json::from_str(&read_input(input.as_deref())?)
                    .context("User record must be a JSON object")?;
                print_json(&normalize_user(&raw))?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    /// Command-line operations win; otherwise the configured pipeline runs.
    fn resolve_operations(&self, names: &[String]) -> Result<Vec<CleanOperation>> {
        let operations = if names.is_empty() {
            self.config.pipeline.operations.clone()
        } else {
            names
                .iter()
                .map(|name| name.parse::<CleanOperation>())
                .collect::<Result<Vec<_>, _>>()?
        };

        if operations.is_empty() {
            anyhow::bail!("No cleaning operations specified. Use --op or [pipeline] in the config.");
        }
        Ok(operations)
    }
}

#[derive(Serialize)]
struct FormatInfo<'a> {
    name: &'a str,
    fields: Vec<&'a str>,
}

fn replace_text(text: &str, options: &ReplaceOptions) -> Result<String> {
    smart_replace(text, options).with_context(|| "Substitution failed")
}

/// Parses a `FROM=TO` contraction argument.
fn parse_contraction(raw: &str) -> Result<Contraction> {
    match raw.split_once('=') {
        Some((from, to)) if !from.is_empty() => Ok(Contraction::new(from, to)),
        _ => anyhow::bail!("Invalid contraction '{}': expected FROM=TO", raw),
    }
}

/// Reads the whole input file, or stdin when no file is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Resolves the configuration. A missing `--config` file falls back to the
/// defaults with a warning; the implicit default file is optional.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                Ok(Config::load(default)?)
            } else {
                Ok(Config::default())
            }
        }
    }
}

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Installs the stderr subscriber before the config is read.
///
/// `RUST_LOG` and `--verbose` pin the filter. Otherwise the returned handle
/// lets the configured level replace the default once the config is loaded.
fn init_tracing(verbose: bool) -> Option<FilterHandle> {
    let from_env = EnvFilter::try_from_default_env().ok();
    let pinned = from_env.is_some() || verbose;
    let filter = from_env.unwrap_or_else(|| {
        EnvFilter::new(if verbose { "debug" } else { DEFAULT_LOG_LEVEL })
    });

    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    (!pinned).then_some(handle)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let filter = init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref())?;

    if let Some(filter) = filter {
        filter
            .reload(EnvFilter::new(&config.logging.level))
            .context("Failed to apply configured log level")?;
    }

    let handler = AnalysisHandler::new(config);
    handler.run(&cli.command)
}
