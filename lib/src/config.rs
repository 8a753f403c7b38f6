//! Session configuration.

use crate::{
    error::Error,
    patterns::Catalog,
    session::{Command, Session},
    world::World,
};
use educe::Educe;
use rand::{rngs::StdRng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Session configuration.
///
/// The world and the session will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width.
    #[educe(Default = 64)]
    pub width: i32,

    /// Height.
    #[educe(Default = 32)]
    pub height: i32,

    /// The probability for a cell to be alive in a random fill.
    #[educe(Default = 0.5)]
    pub density: f64,

    /// Seed of the random source.
    ///
    /// `None` means that it is seeded from the OS.
    pub seed: Option<u64>,

    /// Name of the initially selected pattern.
    #[educe(Default = "Glider")]
    pub pattern: String,

    /// Whether to start advancing right away.
    pub running: bool,

    /// Whether to start from a random fill instead of an empty world.
    pub random: bool,

    /// Milliseconds between two generations when running.
    #[educe(Default = 100)]
    pub interval_ms: u64,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: i32, height: i32) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the density of random fills.
    pub fn set_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets the seed of the random source.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Sets the initially selected pattern.
    pub fn set_pattern<S: ToString>(mut self, pattern: S) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    /// Sets whether to start advancing right away.
    pub fn set_running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    /// Sets whether to start from a random fill.
    pub fn set_random(mut self, random: bool) -> Self {
        self.random = random;
        self
    }

    /// Sets the milliseconds between two generations.
    pub fn set_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Creates a new empty world from the configuration.
    pub fn world(&self) -> Result<World, Error> {
        World::new(self.width, self.height)
    }

    /// Creates a new session from the configuration.
    ///
    /// Returns an error if the size, the density or the pattern is invalid.
    pub fn session(&self) -> Result<Session, Error> {
        let world = self.world()?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut session = Session::with_rng(world, rng);
        session.set_density(self.density)?;
        let index = Catalog::builtin()
            .position(&self.pattern)
            .ok_or_else(|| Error::UnknownPattern(self.pattern.clone()))?;
        session.apply(Command::SelectPattern(index))?;
        if self.random {
            session.apply(Command::Randomize)?;
        }
        session.apply(Command::SetRunning(self.running))?;
        Ok(session)
    }
}
