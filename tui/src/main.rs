mod args;
#[cfg(feature = "tui")]
mod camera;
mod cli;
#[cfg(feature = "tui")]
mod tui;

use anyhow::{Context, Result};
use args::Args;
use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing_subscriber::EnvFilter;

/// Where the log goes.
#[derive(Clone, Debug, PartialEq, Eq)]
enum LogTarget {
    File(PathBuf),
    Stderr,
    /// The TUI owns the terminal, so nothing may be written to it.
    Discard,
}

impl LogTarget {
    fn new(log_file: Option<&Path>, tui: bool) -> Self {
        match log_file {
            Some(path) => LogTarget::File(path.to_path_buf()),
            None if tui => LogTarget::Discard,
            None => LogTarget::Stderr,
        }
    }
}

fn init_tracing(target: &LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    let _ = match target {
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::Discard => builder.with_writer(io::sink).try_init(),
    };
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse()?;
    #[cfg(feature = "tui")]
    let tui = !args.no_tui;
    #[cfg(not(feature = "tui"))]
    let tui = false;
    init_tracing(&LogTarget::new(args.log_file.as_deref(), tui))?;

    #[cfg(feature = "tui")]
    if tui {
        return tui::run(args);
    }
    cli::run(args)
}
