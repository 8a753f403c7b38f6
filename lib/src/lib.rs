//! An editable [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! sandbox.
//!
//! The [`World`] is a bounded grid of cells that advances one generation at
//! a time. A [`Session`] wraps it with the state of an editor (selected
//! pattern, rotation, running or paused) and is driven by [`Command`]s.

mod cells;
mod config;
mod error;
pub mod patterns;
pub mod rule;
mod session;
mod view;
mod world;

pub use cells::{Cell, Coord, Offset};
pub use config::Config;
pub use error::Error;
pub use patterns::{Catalog, Direction, Pattern};
pub use session::{Command, Session, DEFAULT_DENSITY};
pub use view::{resolve_cursor, Identity, ScreenToWorld};
pub use world::World;
