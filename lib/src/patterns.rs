//! Predefined patterns that can be stamped onto the world.
//!
//! Each pattern comes with a list of variants, one for each distinct
//! rotation. The rotations are written out by hand, so nothing is
//! rotated at runtime.

use crate::{cells::Offset, error::Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// The name of the pattern.
    pub name: &'static str,

    /// Offsets of the living cells relative to the anchor,
    /// one list for each rotation.
    ///
    /// There is always at least one variant.
    pub variants: &'static [&'static [Offset]],
}

/// Which way to cycle through the variants of a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

impl Pattern {
    /// Number of variants.
    #[inline]
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Gets a variant.
    ///
    /// The index is taken modulo the number of variants,
    /// so any integer is valid, including negative ones.
    pub fn variant(&self, index: isize) -> &'static [Offset] {
        let count = self.variant_count() as isize;
        self.variants[index.rem_euclid(count) as usize]
    }

    /// The index of the next variant, wrapping around at the end.
    #[inline]
    pub fn next_variant_index(&self, current: usize) -> usize {
        (current + 1) % self.variant_count()
    }

    /// The index of the previous variant, wrapping around at the start.
    #[inline]
    pub fn previous_variant_index(&self, current: usize) -> usize {
        let count = self.variant_count();
        (current % count + count - 1) % count
    }

    /// Moves a variant index one step in the given direction.
    pub fn cycle_variant_index(&self, current: usize, direction: Direction) -> usize {
        match direction {
            Direction::Forward => self.next_variant_index(current),
            Direction::Backward => self.previous_variant_index(current),
        }
    }
}

const GLIDER: Pattern = Pattern {
    name: "Glider",
    variants: &[
        &[(1, 0), (1, 1), (-1, 0), (0, 1), (1, -1)],
        &[(0, -1), (-1, 0), (-1, 1), (0, 1), (1, 1)],
        &[(0, -1), (-1, -1), (1, -1), (1, 0), (0, 1)],
        &[(0, -1), (-1, 1), (-1, 0), (-1, -1), (1, 0)],
    ],
};

const BLINKER: Pattern = Pattern {
    name: "Blinker",
    variants: &[&[(-1, 0), (0, 0), (1, 0)], &[(0, -1), (0, 0), (0, 1)]],
};

const TOAD: Pattern = Pattern {
    name: "Toad",
    variants: &[
        &[(0, 0), (1, 0), (2, 0), (-1, 1), (0, 1), (1, 1)],
        &[(0, 0), (0, 1), (0, 2), (-1, -1), (-1, 0), (-1, 1)],
    ],
};

const BEACON: Pattern = Pattern {
    name: "Beacon",
    variants: &[
        &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
        &[(0, 0), (0, 1), (-1, 0), (-1, 1), (-2, 2), (-2, 3), (-3, 2), (-3, 3)],
    ],
};

const LWSS: Pattern = Pattern {
    name: "Lightweight spaceship",
    variants: &[
        &[(-1, -2), (2, -2), (-2, -1), (-2, 0), (2, 0), (-2, 1), (-1, 1), (0, 1), (1, 1)],
        &[(2, -1), (2, 2), (1, -2), (0, -2), (0, 2), (-1, -2), (-1, -1), (-1, 0), (-1, 1)],
        &[(1, 2), (-2, 2), (2, 1), (2, 0), (-2, 0), (2, -1), (1, -1), (0, -1), (-1, -1)],
        &[(-2, 1), (-2, -2), (-1, 2), (0, 2), (0, -2), (1, 2), (1, 1), (1, 0), (1, -1)],
    ],
};

const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    variants: &[
        &[(0, -1), (1, -1), (-1, 0), (0, 0), (0, 1)],
        &[(1, 0), (1, 1), (0, -1), (0, 0), (-1, 0)],
        &[(0, 1), (-1, 1), (1, 0), (0, 0), (0, -1)],
        &[(-1, 0), (-1, -1), (0, 1), (0, 0), (1, 0)],
    ],
};

const BLOCK: Pattern = Pattern {
    name: "Block",
    variants: &[&[(0, 0), (1, 0), (0, 1), (1, 1)]],
};

static BUILTIN: Catalog = Catalog {
    patterns: &[GLIDER, BLINKER, TOAD, BEACON, LWSS, R_PENTOMINO, BLOCK],
};

/// A fixed collection of named patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Catalog {
    patterns: &'static [Pattern],
}

impl Catalog {
    /// Creates a catalog from a list of patterns.
    ///
    /// Every pattern must have at least one variant.
    /// [`check`](Self::check) tells whether that holds.
    pub const fn new(patterns: &'static [Pattern]) -> Self {
        Catalog { patterns }
    }

    /// Checks that the catalog is not empty and that every pattern
    /// has at least one variant.
    pub fn check(&self) -> Result<(), Error> {
        if self.patterns.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        match self.patterns.iter().find(|p| p.variants.is_empty()) {
            Some(pattern) => Err(Error::NoVariants(pattern.name.to_string())),
            None => Ok(()),
        }
    }

    /// The built-in catalog.
    ///
    /// It contains, in this order: Glider, Blinker, Toad, Beacon,
    /// Lightweight spaceship, R-pentomino and Block.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All the patterns.
    #[inline]
    pub fn patterns(&self) -> &'static [Pattern] {
        self.patterns
    }

    /// Number of patterns.
    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Gets a pattern by its position in the catalog.
    pub fn get(&self, index: usize) -> Option<&'static Pattern> {
        self.patterns.get(index)
    }

    /// Finds the position of a pattern by its name, ignoring ASCII case.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.patterns
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Finds a pattern by its name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&'static Pattern> {
        self.position(name).map(|i| &self.patterns[i])
    }

    /// Gets a variant of a pattern.
    ///
    /// See [`Pattern::variant`].
    pub fn variant(&self, name: &str, index: isize) -> Result<&'static [Offset], Error> {
        self.find(name)
            .map(|pattern| pattern.variant(index))
            .ok_or_else(|| Error::UnknownPattern(name.to_string()))
    }
}
