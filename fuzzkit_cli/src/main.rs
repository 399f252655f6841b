use fuzzkit_core::config::{FuzzkitConfig, OutputFormat, RandomSettings};
use fuzzkit_core::{BoolSet, HarnessError, StringSet, generate_random_with, strings};

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_FILE: &str = "fuzzkit.toml";

#[derive(Parser, Debug)]
#[clap(author, version, about = "Print fuzz input sets", long_about = None)]
struct Cli {
    #[clap(short, long = "config", value_parser)]
    config_file: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every named set.
    List,
    /// Print one named set.
    Show {
        set: String,
        /// Which catalog `set` is looked up in.
        #[clap(short, long, value_enum, default_value_t = SetKind::String)]
        kind: SetKind,
        #[clap(short, long)]
        limit: Option<usize>,
        #[clap(long)]
        seed: Option<u64>,
        #[clap(short, long, value_enum)]
        format: Option<Format>,
    },
    /// Print freshly generated alphanumeric strings.
    Random {
        #[clap(short, long)]
        count: Option<usize>,
        #[clap(short = 'n', long)]
        length: Option<usize>,
        #[clap(long)]
        seed: Option<u64>,
        #[clap(short, long, value_enum)]
        format: Option<Format>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SetKind {
    String,
    Bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Lines,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Lines => OutputFormat::Lines,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// A command with every option settled: flags first, then config, then defaults.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    List {
        format: OutputFormat,
    },
    ShowStrings {
        set: StringSet,
        limit: Option<usize>,
        seed: Option<u64>,
        format: OutputFormat,
    },
    ShowBools {
        set: BoolSet,
        limit: Option<usize>,
        format: OutputFormat,
    },
    Random {
        count: usize,
        length: usize,
        seed: Option<u64>,
        format: OutputFormat,
    },
}

fn resolve(command: Command, config: &FuzzkitConfig) -> Result<Action, HarnessError> {
    let pick_format = |flag: Option<Format>| {
        flag.map(OutputFormat::from).unwrap_or(config.output.format)
    };

    let action = match command {
        Command::List => Action::List {
            format: config.output.format,
        },
        Command::Show {
            set,
            kind,
            limit,
            seed,
            format,
        } => {
            let limit = limit.or(config.output.limit);
            let format = pick_format(format);
            match kind {
                SetKind::String => Action::ShowStrings {
                    set: set.parse()?,
                    limit,
                    seed: seed.or(config.random.seed),
                    format,
                },
                SetKind::Bool => Action::ShowBools {
                    set: set.parse()?,
                    limit,
                    format,
                },
            }
        }
        Command::Random {
            count,
            length,
            seed,
            format,
        } => Action::Random {
            count: count.unwrap_or(config.random.count),
            length: length.unwrap_or(config.random.length),
            seed: seed.or(config.random.seed),
            format: pick_format(format),
        },
    };

    Ok(action)
}

/// Loads `config_file` if given, else `fuzzkit.toml` from `search_dir` if it
/// exists, else the built-in defaults.
fn load_config(
    config_file: Option<PathBuf>,
    search_dir: &Path,
) -> Result<FuzzkitConfig, anyhow::Error> {
    match config_file {
        Some(config_path) => {
            info!("Loading configuration from specified path: {config_path:?}");
            FuzzkitConfig::load_from_file(&config_path)
        }
        None => {
            let default_config_path = search_dir.join(DEFAULT_CONFIG_FILE);
            if default_config_path.exists() {
                info!("No config file specified, loading default: {default_config_path:?}");
                FuzzkitConfig::load_from_file(&default_config_path)
            } else {
                debug!(
                    "No config file specified and '{DEFAULT_CONFIG_FILE}' not found, using defaults"
                );
                Ok(FuzzkitConfig::default())
            }
        }
    }
}

fn random_settings(seed: Option<u64>) -> RandomSettings {
    RandomSettings {
        seed,
        ..RandomSettings::default()
    }
}

/// Writes one value per line using `{:?}`, so whitespace and quotes stay visible.
fn write_lines<T: std::fmt::Debug>(out: &mut impl Write, set: &[T]) -> io::Result<()> {
    for value in set {
        writeln!(out, "{value:?}")?;
    }
    Ok(())
}

fn write_set<T>(set: &[T], format: OutputFormat) -> Result<(), anyhow::Error>
where
    T: std::fmt::Debug + serde::Serialize,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Lines => write_lines(&mut out, set)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(set)?)?,
    }
    out.flush()?;
    Ok(())
}

fn run(action: Action) -> Result<(), anyhow::Error> {
    match action {
        Action::List { format } => match format {
            OutputFormat::Json => {
                let names = json!({
                    "string": StringSet::ALL.iter().map(|s| s.name()).collect::<Vec<_>>(),
                    "bool": BoolSet::ALL.iter().map(|s| s.name()).collect::<Vec<_>>(),
                });
                println!("{names}");
            }
            OutputFormat::Lines => {
                for set in StringSet::ALL {
                    println!("string {set}");
                }
                for set in BoolSet::ALL {
                    println!("bool {set}");
                }
            }
        },
        Action::ShowStrings {
            set,
            limit,
            seed,
            format,
        } => {
            let mut rng = random_settings(seed).rng();
            let mut values = set.generate_with(&mut *rng);
            if let Some(max) = limit {
                values = strings::limit(values, max);
            }
            info!("Printing {} strings from '{set}'", values.len());
            write_set(&values, format)?;
        }
        Action::ShowBools { set, limit, format } => {
            let mut values = set.generate();
            if let Some(max) = limit {
                values.truncate(max);
            }
            write_set(&values, format)?;
        }
        Action::Random {
            count,
            length,
            seed,
            format,
        } => {
            let mut rng = random_settings(seed).rng();
            let values = generate_random_with(&mut *rng, count, length);
            write_set(&values, format)?;
        }
    }

    Ok(())
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config_file, Path::new("."))?;
    debug!("Effective configuration: {config:?}");

    let action = resolve(cli.command, &config)?;
    debug!("Resolved action: {action:?}");
    run(action)
}
