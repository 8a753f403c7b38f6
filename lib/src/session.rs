//! The editing session.
//!
//! A [`Session`] owns a [`World`] together with everything a frontend
//! needs to edit it: the selected pattern and its rotation, whether the
//! simulation is running, and the random source for random fills.
//! Frontends drive it with [`Command`]s.

use crate::{
    cells::{Coord, Offset},
    error::Error,
    patterns::{Catalog, Direction, Pattern},
    world::World,
};
use log::debug;
use rand::{rngs::StdRng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default density of random fills.
pub const DEFAULT_DENSITY: f64 = 0.5;

/// A discrete editing command, already resolved to world coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Command {
    /// Draws (`true`) or erases (`false`) a cell.
    ToggleCell(Coord, bool),
    /// Advances one generation.
    Step,
    /// Starts or stops advancing on every [`tick`](Session::tick).
    SetRunning(bool),
    /// Clears the world and fills it at random.
    Randomize,
    /// Clears the world, resets the generation count and stops running.
    ClearWorld,
    /// Moves the preview of the current pattern to the given anchor.
    PreviewPattern(Coord),
    /// Stamps the current pattern at the given anchor.
    CommitPattern(Coord),
    /// Removes the preview.
    ClearPreview,
    /// Selects the next or previous rotation of the current pattern.
    CycleVariant(Direction),
    /// Selects a pattern by its position in the catalog.
    SelectPattern(usize),
}

/// An editing session.
#[derive(Clone, Debug)]
pub struct Session {
    world: World,
    catalog: &'static Catalog,

    /// Position of the selected pattern in the catalog.
    selected: usize,

    /// Index of the selected rotation of that pattern.
    variant: usize,

    running: bool,
    density: f64,
    rng: StdRng,
}

impl Session {
    /// Creates a session over the world, using the built-in catalog
    /// and a random source seeded from the OS.
    pub fn new(world: World) -> Self {
        Session::with_rng(world, StdRng::from_entropy())
    }

    /// Creates a session with the given random source.
    pub fn with_rng(world: World, rng: StdRng) -> Self {
        Session {
            world,
            catalog: Catalog::builtin(),
            selected: 0,
            variant: 0,
            running: false,
            density: DEFAULT_DENSITY,
            rng,
        }
    }

    /// Replaces the pattern catalog. The first pattern is selected.
    ///
    /// Returns an error if the catalog is empty or if some pattern
    /// in it has no variants. The session is left unchanged then.
    pub fn set_catalog(&mut self, catalog: &'static Catalog) -> Result<(), Error> {
        catalog.check()?;
        self.catalog = catalog;
        self.selected = 0;
        self.variant = 0;
        Ok(())
    }

    /// Sets the density of random fills.
    pub fn set_density(&mut self, density: f64) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidDensity(density));
        }
        self.density = density;
        Ok(())
    }

    /// The world.
    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The pattern catalog.
    #[inline]
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Whether the world advances on every [`tick`](Self::tick).
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn density(&self) -> f64 {
        self.density
    }

    /// The selected pattern.
    pub fn pattern(&self) -> &'static Pattern {
        &self.catalog.patterns()[self.selected]
    }

    /// Position of the selected pattern in the catalog.
    #[inline]
    pub fn pattern_index(&self) -> usize {
        self.selected
    }

    /// Index of the selected rotation.
    #[inline]
    pub fn variant_index(&self) -> usize {
        self.variant
    }

    /// Offsets of the selected rotation of the selected pattern.
    pub fn current_offsets(&self) -> &'static [Offset] {
        self.pattern().variant(self.variant as isize)
    }

    /// Applies a command.
    pub fn apply(&mut self, command: Command) -> Result<(), Error> {
        match command {
            Command::ToggleCell(coord, alive) => {
                if let Err(e) = self.world.set_cell(coord, alive) {
                    debug!("Ignored a cell edit: {}", e);
                }
            }
            Command::Step => self.world.advance(),
            Command::SetRunning(running) => self.running = running,
            Command::Randomize => {
                self.world.clear_all();
                self.world.randomize((0, 0), self.density, &mut self.rng)?;
            }
            Command::ClearWorld => {
                self.world.reset();
                self.running = false;
            }
            Command::PreviewPattern(anchor) => {
                self.world.clear_previews();
                self.world.stamp_preview(anchor, self.current_offsets());
            }
            Command::CommitPattern(anchor) => {
                self.world.commit_pattern(anchor, self.current_offsets());
                self.world.clear_previews();
            }
            Command::ClearPreview => self.world.clear_previews(),
            Command::CycleVariant(direction) => {
                self.variant = self.pattern().cycle_variant_index(self.variant, direction);
            }
            Command::SelectPattern(index) => {
                let pattern = self
                    .catalog
                    .get(index)
                    .ok_or_else(|| Error::UnknownPattern(index.to_string()))?;
                debug!("Selected pattern {}", pattern.name);
                self.selected = index;
                self.variant = 0;
            }
        }
        Ok(())
    }

    /// Advances one generation if the session is running.
    ///
    /// Returns whether it advanced.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.world.advance();
        }
        self.running
    }
}
