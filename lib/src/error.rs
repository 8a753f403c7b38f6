//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Unable to set cell at {0:?}.
    SetCellError(Coord),
    /// Width and height should be positive.
    NonPositiveError,
    /// Density should be between 0 and 1, got {0}.
    InvalidDensity(f64),
    /// No such pattern: {0:?}.
    UnknownPattern(String),
    /// Invalid character in plaintext: {0:?}.
    InvalidChar(char),
    /// The pattern catalog is empty.
    EmptyCatalog,
    /// Pattern {0:?} has no variants.
    NoVariants(String),
}
