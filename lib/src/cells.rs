//! Cells in the cellular automaton.

use crate::rule;
use std::fmt::{Debug, Error, Formatter};

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`, both 0-indexed.
/// `x` is the column and `y` is the row.
pub type Coord = (i32, i32);

/// An offset `(dx, dy)` relative to some anchor cell.
pub type Offset = (i32, i32);

/// A cell in the cellular automaton.
///
/// Neighbors are stored as indices into the cell array of the
/// [`World`](crate::World) that owns the cell.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// The state of the cell in the current generation.
    pub(crate) alive: bool,

    /// The state of the cell in the next generation.
    ///
    /// It is only meaningful between [`compute_next_state`](Self::compute_next_state)
    /// and [`commit`](Self::commit).
    pub(crate) pending_alive: bool,

    /// Whether a pattern preview covers the cell.
    ///
    /// Purely cosmetic. It never takes part in the rule.
    pub(crate) preview: bool,

    /// Indices of the neighbors in the world.
    ///
    /// Neighbors outside the world are simply left out,
    /// so a cell on the border has fewer than 8 of them.
    pub(crate) nbhd: Vec<usize>,
}

impl Cell {
    /// Whether the cell is alive in the current generation.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Whether a pattern preview covers the cell.
    #[inline]
    pub fn is_preview(&self) -> bool {
        self.preview
    }

    /// Number of neighbors inside the world.
    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.nbhd.len()
    }

    #[inline]
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// Flips the state of the cell.
    #[inline]
    pub fn toggle(&mut self) {
        self.alive = !self.alive;
    }

    #[inline]
    pub fn set_preview(&mut self, preview: bool) {
        self.preview = preview;
    }

    #[inline]
    pub fn clear_preview(&mut self) {
        self.preview = false;
    }

    /// Kills the cell and removes the preview. Neighbors are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.alive = false;
        self.preview = false;
    }

    /// Number of living neighbors, looked up in `cells`.
    pub(crate) fn live_neighbors(&self, cells: &[Cell]) -> usize {
        self.nbhd.iter().filter(|&&i| cells[i].alive).count()
    }

    /// Computes the state in the next generation and stores it in
    /// [`pending_alive`](#structfield.pending_alive).
    ///
    /// `live_neighbors` must be counted from the current generation,
    /// before any cell in the world is committed.
    #[inline]
    pub(crate) fn compute_next_state(&mut self, live_neighbors: usize) {
        self.pending_alive = rule::successor(self.alive, live_neighbors);
    }

    /// Makes the computed next state the current one.
    #[inline]
    pub(crate) fn commit(&mut self) {
        self.alive = self.pending_alive;
    }
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.debug_struct("Cell")
            .field("alive", &self.alive)
            .field("preview", &self.preview)
            .field("nbhd", &self.nbhd.len())
            .finish()
    }
}
