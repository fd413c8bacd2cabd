//! # mwclient CLI
//!
//! Command-line helper for inspecting saved MediaWiki API responses.
//!
//! Usage:
//!   mwclient check [FILES]...
//!   mwclient check --config classifier.json response.json
//!   mwclient config
//!
//! Examples:
//!   curl -s 'https://en.wikipedia.org/w/api.php?action=query&meta=tokens&format=json' | mwclient check
//!   mwclient check --fatal-only saved/*.json
//!
//! Exit codes: 0 when clean, 1 when the API reported problems, 2 when a
//! response was malformed or could not be read.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use mwclient_api::{
    as_api_problem, has_fatal, is_api_err, Classifier, ClassifierConfig, Error,
    MalformedPolicy, MultiError, Result,
};
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const EXIT_OK: i32 = 0;
const EXIT_PROBLEMS: i32 = 1;
const EXIT_MALFORMED: i32 = 2;

const STDIN: &str = "-";

#[derive(Parser)]
#[command(name = "mwclient")]
#[command(author, version, about = "mwclient - inspect MediaWiki API responses")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the errors and warnings contained in API responses
    Check {
        /// Response files to check; stdin when none are given or for "-"
        files: Vec<String>,

        /// Classifier configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log malformed sections instead of reporting them
        #[arg(long)]
        skip_malformed: bool,

        /// Only API errors (not warnings) lead to a non-zero exit code
        #[arg(long)]
        fatal_only: bool,
    },
    /// Print the effective classifier configuration
    Config {
        /// Classifier configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::new(format!("warn,mwclient_api={level},mwclient={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .compact()
        .init();
}

fn load_config(path: Option<&Path>) -> Result<ClassifierConfig> {
    match path {
        Some(path) => ClassifierConfig::from_path(path),
        None => Ok(ClassifierConfig::default()),
    }
}

fn build_classifier(path: Option<&Path>, skip_malformed: bool) -> Result<Classifier> {
    let mut config = load_config(path)?;
    if skip_malformed {
        config = config.with_malformed(MalformedPolicy::Skip);
    }
    Classifier::new(config)
}

/// Read and decode one response; `-` is stdin
fn read_response(source: &str) -> Result<Value> {
    let input = if source == STDIN {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| Error::from(e).with_operation("cli::read"))?;
        buf
    } else {
        fs::read_to_string(source).map_err(|e| {
            Error::from(e)
                .with_operation("cli::read")
                .with_context("path", source)
        })?
    };

    serde_json::from_str(&input).map_err(|e| {
        Error::from(e)
            .with_operation("cli::parse")
            .with_context("source", source)
    })
}

/// Exit code for one classified response
fn exit_code(problems: Option<&MultiError>, fatal_only: bool) -> i32 {
    match problems {
        None => EXIT_OK,
        Some(multi) if !is_api_err(multi) => EXIT_MALFORMED,
        Some(multi) if fatal_only && !has_fatal(multi) => EXIT_OK,
        Some(_) => EXIT_PROBLEMS,
    }
}

fn report(source: &str, multi: &MultiError) {
    for err in multi.iter() {
        match as_api_problem(err) {
            Some(problem) => println!("{}: [{}] {}", source, problem.severity(), err),
            None => {
                let label = match err.downcast_ref::<Error>() {
                    Some(e) if e.kind().is_response_problem() => "malformed",
                    _ => "error",
                };
                println!("{}: [{}] {}", source, label, err);
            }
        }
    }
}

fn check_source(classifier: &Classifier, source: &str, fatal_only: bool) -> i32 {
    let resp = match read_response(source) {
        Ok(resp) => resp,
        Err(e) => {
            eprintln!("{}: {}", source, e);
            return EXIT_MALFORMED;
        }
    };

    let (_, problems) = classifier.extract(&resp);
    match &problems {
        None => {
            info!(source, "response is clean");
            println!("{}: ok", source);
        }
        Some(multi) => {
            debug!(source, count = multi.len(), "response reported problems");
            report(source, multi);
        }
    }
    exit_code(problems.as_ref(), fatal_only)
}

fn run_check(
    files: &[String],
    config: Option<&Path>,
    skip_malformed: bool,
    fatal_only: bool,
) -> Result<i32> {
    let classifier = build_classifier(config, skip_malformed)?;

    let stdin = [STDIN.to_string()];
    let sources = if files.is_empty() { &stdin[..] } else { files };

    Ok(sources
        .iter()
        .map(|source| check_source(&classifier, source, fatal_only))
        .max()
        .unwrap_or(EXIT_OK))
}

fn show_config(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let rendered = serde_json::to_string_pretty(&config)
        .map_err(|e| Error::from(e).with_operation("cli::config"))?;
    println!("{}", rendered);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command {
        Commands::Check {
            files,
            config,
            skip_malformed,
            fatal_only,
        } => match run_check(&files, config.as_deref(), skip_malformed, fatal_only) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_MALFORMED
            }
        },
        Commands::Config { config } => match show_config(config.as_deref()) {
            Ok(()) => EXIT_OK,
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_MALFORMED
            }
        },
    };

    std::process::exit(code);
}
