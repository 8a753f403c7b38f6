//! The rule of the cellular automaton.
//!
//! Only Conway's Game of Life is supported. For the notation, see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

/// The rule string.
pub const RULE_STRING: &str = "B3/S23";

/// The state of a cell in the next generation, given its current state
/// and the number of its living neighbors.
#[inline]
pub fn successor(alive: bool, live_neighbors: usize) -> bool {
    match (alive, live_neighbors) {
        // Survival.
        (true, 2) | (true, 3) => true,
        // Birth.
        (false, 3) => true,
        _ => false,
    }
}
