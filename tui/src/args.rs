//! Parsing command-line arguments.

use anyhow::{bail, Context, Result};
use clap::{command, value_parser, Arg, ArgAction};
use lifepad_lib::{Catalog, Config};
use std::{ffi::OsStr, fs, path::Path, path::PathBuf};

fn parse_density(s: &str) -> Result<f64, String> {
    let density = s.parse::<f64>().map_err(|e| e.to_string())?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(String::from("density must be between 0 and 1"))
    }
}

fn parse_pattern(s: &str) -> Result<String, String> {
    let catalog = Catalog::builtin();
    match catalog.find(s) {
        Some(pattern) => Ok(pattern.name.to_string()),
        None => {
            let names: Vec<_> = catalog.patterns().iter().map(|p| p.name).collect();
            Err(format!("possible patterns: {}", names.join(", ")))
        }
    }
}

/// Reads a configuration file. The format is chosen by the extension.
fn read_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = match path.extension().and_then(OsStr::to_str) {
        Some("toml") => toml::from_str(&text)
            .with_context(|| format!("invalid TOML in {}", path.display()))?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
            .with_context(|| format!("invalid YAML in {}", path.display()))?,
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("invalid JSON in {}", path.display()))?,
        _ => bail!("unsupported config file format: {}", path.display()),
    };
    Ok(config)
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) generations: u64,
    pub(crate) log_file: Option<PathBuf>,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

impl Args {
    /// Parses the command-line arguments.
    ///
    /// Values given on the command line override the ones in the config file.
    pub(crate) fn parse() -> Result<Self> {
        let app = command!()
            .long_about(
                "An editable Conway's Game of Life sandbox.\n\
                 \n\
                 Draw cells with the mouse, stamp patterns, and watch them evolve.\n\
                 The world is bounded: cells outside of it are always dead.\n\
                 \n\
                 Without the TUI, the final world is printed in a mix of Plaintext \n\
                 and RLE format.\n\
                 * Dead cells are represented by `.`;\n\
                 * Living cells are represented by `o`;\n\
                 * Each line is ended with `$`;\n\
                 * The whole pattern is ended with `!`\n",
            )
            .arg(
                Arg::new("WIDTH")
                    .help("Width of the world [default: 64]")
                    .index(1)
                    .value_parser(value_parser!(i32).range(1..)),
            )
            .arg(
                Arg::new("HEIGHT")
                    .help("Height of the world [default: 32]")
                    .index(2)
                    .value_parser(value_parser!(i32).range(1..)),
            )
            .arg(
                Arg::new("DENSITY")
                    .help("Probability for a cell to be alive in a random fill [default: 0.5]")
                    .short('d')
                    .long("density")
                    .value_parser(parse_density),
            )
            .arg(
                Arg::new("SEED")
                    .help("Seed for random fills")
                    .long_help(
                        "Seed for random fills\n\
                         Without a seed, the random source is seeded from the OS.\n",
                    )
                    .short('s')
                    .long("seed")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("PATTERN")
                    .help("Initially selected pattern [default: Glider]")
                    .short('p')
                    .long("pattern")
                    .value_parser(parse_pattern),
            )
            .arg(
                Arg::new("INTERVAL")
                    .help("Milliseconds between two generations when running [default: 100]")
                    .short('i')
                    .long("interval")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("RANDOM")
                    .help("Starts from a random fill")
                    .short('r')
                    .long("random")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("RUN")
                    .help("Starts running right away")
                    .long("run")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("CONFIG")
                    .help("Reads the configuration from a file")
                    .long_help(
                        "Reads the configuration from a file\n\
                         Supported formats are TOML (.toml), YAML (.yaml, .yml) and JSON (.json).\n\
                         Values given on the command line override the ones in the file.\n",
                    )
                    .short('c')
                    .long("config")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("LOGFILE")
                    .help("Writes the log to a file")
                    .long_help(
                        "Writes the log to a file\n\
                         The level is set by the RUST_LOG environment variable.\n\
                         Without this option, the log goes to stderr, \
                         except in the TUI, where it is discarded.\n",
                    )
                    .short('l')
                    .long("log-file")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("GENERATIONS")
                    .help("Number of generations to advance before printing")
                    .long_help(
                        "Number of generations to advance before printing\n\
                         Only useful when --no-tui is set.\n",
                    )
                    .short('g')
                    .long("generations")
                    .default_value("0")
                    .value_parser(value_parser!(u64)),
            );

        #[cfg(feature = "tui")]
        let app = app.arg(
            Arg::new("NOTUI")
                .help("Prints the world without entering the TUI")
                .short('n')
                .long("no-tui")
                .action(ArgAction::SetTrue),
        );

        let matches = app.get_matches();

        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => read_config(path)?,
            None => Config::default(),
        };
        if let Some(&width) = matches.get_one::<i32>("WIDTH") {
            config.width = width;
        }
        if let Some(&height) = matches.get_one::<i32>("HEIGHT") {
            config.height = height;
        }
        if let Some(&density) = matches.get_one::<f64>("DENSITY") {
            config.density = density;
        }
        if let Some(&seed) = matches.get_one::<u64>("SEED") {
            config.seed = Some(seed);
        }
        if let Some(pattern) = matches.get_one::<String>("PATTERN") {
            config.pattern = pattern.clone();
        }
        if let Some(&interval_ms) = matches.get_one::<u64>("INTERVAL") {
            config.interval_ms = interval_ms;
        }
        if matches.get_flag("RANDOM") {
            config.random = true;
        }
        if matches.get_flag("RUN") {
            config.running = true;
        }

        Ok(Args {
            config,
            generations: matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(0),
            log_file: matches.get_one::<PathBuf>("LOGFILE").cloned(),
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }
}
