//! Command-line front end for the kata utilities.
//!
//! Each subcommand maps onto one library operation. Record paths default to
//! the data directory named in `kata.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use kata::core::brackets::first_mismatch;
use kata::core::intervals::{Interval, format_intervals, merge};
use kata::core::record::demo_records;
use kata::core::spiral::spiral_order;
use kata::exit_codes;
use kata::io::config::{DEFAULT_CONFIG_PATH, KataConfig, load_config, write_config};
use kata::io::record_store::RecordStore;
use kata::io::text_file::count_lines_words;
use kata::logging;
use kata::timing::timed;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "kata",
    version,
    about = "Interval merging, spiral read-out, bracket checks and record files"
)]
struct Cli {
    /// TOML config file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default config file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
    /// Merge overlapping intervals given as START,END.
    Merge {
        #[arg(required = true, allow_hyphen_values = true)]
        intervals: Vec<Interval>,
    },
    /// Print a JSON grid (e.g. `[[1,2],[3,4]]`) in clockwise spiral order.
    Spiral { grid: String },
    /// Check that (), [] and {} nest correctly.
    Brackets { text: String },
    /// Count lines and words in a text file.
    Count { path: PathBuf },
    /// Read, write and convert record files.
    Records {
        #[command(subcommand)]
        command: RecordsCommand,
    },
}

#[derive(Subcommand)]
enum RecordsCommand {
    /// Write the demo records.
    Sample {
        #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
        format: FormatArg,
        /// Target file; defaults to the configured file for `--format`.
        path: Option<PathBuf>,
    },
    /// Print the records in a file, one per line.
    Show {
        /// Defaults to the configured delimited file.
        path: Option<PathBuf>,
    },
    /// Read one record file and write it in the format of the target extension.
    Convert { from: PathBuf, to: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Merge { intervals } => {
            println!("{}", format_intervals(&merge(&intervals)));
            Ok(exit_codes::OK)
        }
        Command::Spiral { grid } => cmd_spiral(&grid),
        Command::Brackets { text } => Ok(cmd_brackets(&text)),
        Command::Count { path } => {
            let stats = timed("count", || count_lines_words(&path));
            println!("{}", stats);
            Ok(exit_codes::OK)
        }
        Command::Records { command } => {
            let cfg = load_config(&cli.config).context("load config")?;
            cmd_records(&cfg, command)
        }
    }
}

fn cmd_init(config_path: &Path, force: bool) -> Result<i32> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    write_config(config_path, &KataConfig::default())
        .with_context(|| format!("write {}", config_path.display()))?;
    Ok(exit_codes::OK)
}

fn cmd_spiral(grid: &str) -> Result<i32> {
    let grid: Vec<Vec<i64>> = serde_json::from_str(grid).context("parse grid json")?;
    let order = spiral_order(&grid);
    println!("{}", serde_json::to_string(&order).context("serialize spiral order")?);
    Ok(exit_codes::OK)
}

fn cmd_brackets(text: &str) -> i32 {
    match first_mismatch(text) {
        None => {
            println!("balanced");
            exit_codes::OK
        }
        Some(offset) => {
            println!("unbalanced at {}", offset);
            exit_codes::UNBALANCED
        }
    }
}

fn cmd_records(cfg: &KataConfig, command: RecordsCommand) -> Result<i32> {
    let store = RecordStore::new(cfg.records.repair);
    match command {
        RecordsCommand::Sample { format, path } => {
            let path = path.unwrap_or_else(|| match format {
                FormatArg::Csv => cfg.delimited_path(),
                FormatArg::Json => cfg.structured_path(),
            });
            ensure_parent(&path)?;
            let records = demo_records();
            match format {
                FormatArg::Csv => store.write_delimited(&path, &records),
                FormatArg::Json => store.write_structured(&path, &records),
            }
            debug!(path = %path.display(), records = records.len(), "sample written");
        }
        RecordsCommand::Show { path } => {
            let path = path.unwrap_or_else(|| cfg.delimited_path());
            for record in store.read(&path) {
                println!("{}", record);
            }
        }
        RecordsCommand::Convert { from, to } => {
            let records = store.read(&from);
            ensure_parent(&to)?;
            store.write(&to, &records);
            debug!(
                from = %from.display(),
                to = %to.display(),
                records = records.len(),
                "converted"
            );
        }
    }
    Ok(exit_codes::OK)
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display())),
        _ => Ok(()),
    }
}
