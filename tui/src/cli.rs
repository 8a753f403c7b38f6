//! Running without the TUI.

use crate::args::Args;
use anyhow::{Context, Result};
use lifepad_lib::Command;
use log::info;

/// Advances the world the given number of generations and prints it.
pub(crate) fn run(args: Args) -> Result<()> {
    let mut session = args
        .config
        .session()
        .context("invalid configuration")?;
    for _ in 0..args.generations {
        session.apply(Command::Step)?;
    }
    let world = session.world();
    info!(
        "Generation {}, population {}",
        world.generation(),
        world.population()
    );
    print!("{}", world.rle());
    Ok(())
}
