//! Kupu - Main entrypoint.
//!
//! Loads configuration, seeds a trie from the configured dictionary and runs
//! one lookup, completion or spell-check command against it.

use clap::{Parser, Subcommand};
use kupu_lib::config::{ConfigLoader, KupuConfig, LogConfig, ENV_PREFIX};
use kupu_lib::data_structures::KupuTrie;
use kupu_lib::dictionary::Dictionary;
use kupu_lib::error::{report_error, ErrorContext, KupuError, KupuResult};
use kupu_lib::render::{self, OutputFormat};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

/// Command line arguments for Kupu.
#[derive(Parser, Debug)]
#[clap(name = "Kupu", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word-list file to load in addition to the seed words
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the autocomplete, spell check and prediction demo
    Demo,

    /// List the words starting with a prefix
    Complete {
        /// Prefix to complete
        prefix: String,
    },

    /// Predict words from a prefix
    Predict {
        /// Prefix to predict from
        prefix: String,
    },

    /// Check the spelling of a word
    Check {
        /// Word to check
        word: String,
    },

    /// Look up an exact word
    Search {
        /// Word to look up
        word: String,
    },

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(config: &LogConfig) -> KupuResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(config.source_location)
        .with_file(config.source_location);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| KupuError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Writes the default configuration as TOML to `output`.
fn write_default_config(output: &Path) -> KupuResult<()> {
    info!("Generating default configuration");
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, KupuConfig::default().to_toml()?)?;
    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Builds the trie from the configured dictionary.
fn load_trie(config: &KupuConfig) -> KupuResult<KupuTrie> {
    let trie = Dictionary::from_config(&config.dictionary)?.build_trie();
    info!(words = trie.len(), "trie ready");
    Ok(trie)
}

fn run(args: Args, mut config: KupuConfig) -> KupuResult<()> {
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    if args.dictionary.is_some() {
        config.dictionary.path = args.dictionary;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.command.unwrap_or(Command::Demo) {
        Command::GenConfig { output } => write_default_config(&output)?,
        Command::Demo => render::demo(&mut out, &load_trie(&config)?, format)?,
        Command::Complete { prefix } => {
            render::autocomplete(&mut out, &load_trie(&config)?, &prefix, format)?
        }
        Command::Predict { prefix } => {
            render::predict(&mut out, &load_trie(&config)?, &prefix, format)?
        }
        Command::Check { word } => {
            render::spell_check(&mut out, &load_trie(&config)?, &word, format)?
        }
        Command::Search { word } => render::search(&mut out, &load_trie(&config)?, &word, format)?,
    }
    out.flush()?;
    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = <Args as clap::Parser>::parse();
    kupu_lib::init();

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = loader.load();
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            report_error(loader.error_context(e));
            process::exit(1);
        }
    };

    if let Err(e) = run(args, config) {
        report_error(ErrorContext::new(e, "kupu"));
        process::exit(1);
    }
}
