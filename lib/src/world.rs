//! The world.

use crate::{
    cells::{Cell, Coord, Offset},
    error::Error,
    rule::RULE_STRING,
};
use log::{debug, trace};
use rand::{distributions::Bernoulli, Rng};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// The Moore neighborhood, as `(dy, dx)`.
const NBHD: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The world.
///
/// A bounded rectangle of cells. Everything outside of it is dead,
/// and there is no wraparound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    /// Width.
    width: i32,

    /// Height.
    height: i32,

    /// All the cells, row by row.
    ///
    /// The cell at `(x, y)` has index `y * width + x`.
    /// The slice is never resized, so the neighbor indices stay valid
    /// throughout the lifetime of the world.
    cells: Box<[Cell]>,

    /// Number of generations advanced so far.
    generation: u64,
}

impl World {
    /// Creates a new world where all cells are dead.
    ///
    /// Returns an error if the width or the height is not positive.
    pub fn new(width: i32, height: i32) -> Result<Self, Error> {
        if width <= 0 || height <= 0 {
            return Err(Error::NonPositiveError);
        }
        let size = width as usize * height as usize;
        debug!("Creating a {}x{} world", width, height);
        Ok(World {
            width,
            height,
            cells: vec![Cell::default(); size].into_boxed_slice(),
            generation: 0,
        }
        .init_nbhd())
    }

    /// Links the cells to their neighbors.
    ///
    /// Neighbors outside the world are skipped.
    fn init_nbhd(mut self) -> Self {
        for y in 0..self.height {
            for x in 0..self.width {
                let nbhd = NBHD
                    .iter()
                    .map(|&(dy, dx)| (x + dx, y + dy))
                    .filter(|&coord| self.contains(coord))
                    .map(|coord| self.index(coord))
                    .collect();
                let index = self.index((x, y));
                self.cells[index].nbhd = nbhd;
            }
        }
        self
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of generations advanced since the world was created or reset.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the coordinates are inside the world.
    #[inline]
    pub fn contains(&self, (x, y): Coord) -> bool {
        0 <= x && x < self.width && 0 <= y && y < self.height
    }

    #[inline]
    fn index(&self, (x, y): Coord) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// All cells, row by row.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Gets the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the world.
    /// Use [`find_cell`](Self::find_cell) when it might be.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> &Cell {
        assert!(self.contains((x, y)), "cell {:?} is outside the world", (x, y));
        &self.cells[self.index((x, y))]
    }

    /// Gets a mutable reference to the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the world.
    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> &mut Cell {
        assert!(self.contains((x, y)), "cell {:?} is outside the world", (x, y));
        let index = self.index((x, y));
        &mut self.cells[index]
    }

    /// Finds a cell by its coordinates.
    pub fn find_cell(&self, coord: Coord) -> Option<&Cell> {
        if self.contains(coord) {
            Some(&self.cells[self.index(coord)])
        } else {
            None
        }
    }

    fn find_cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        if self.contains(coord) {
            let index = self.index(coord);
            Some(&mut self.cells[index])
        } else {
            None
        }
    }

    /// Sets the state of a cell.
    ///
    /// Returns an error if the cell is outside the world.
    pub fn set_cell(&mut self, coord: Coord, alive: bool) -> Result<(), Error> {
        let cell = self
            .find_cell_mut(coord)
            .ok_or(Error::SetCellError(coord))?;
        cell.set_alive(alive);
        Ok(())
    }

    /// Advances one generation.
    ///
    /// Every cell computes its next state from the current generation
    /// before any cell is committed.
    pub fn advance(&mut self) {
        for i in 0..self.cells.len() {
            let count = self.cells[i].live_neighbors(&self.cells);
            self.cells[i].compute_next_state(count);
        }
        for cell in self.cells.iter_mut() {
            cell.commit();
        }
        self.generation += 1;
        trace!("Advanced to generation {}", self.generation);
    }

    /// Advances `n` generations.
    pub fn advance_by(&mut self, n: u64) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Fills the cells to the right of and below `origin` at random.
    ///
    /// Each cell is alive with probability `density`, independently.
    /// Cells outside that region keep their states.
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        origin: Coord,
        density: f64,
        rng: &mut R,
    ) -> Result<(), Error> {
        let dist = Bernoulli::new(density).map_err(|_| Error::InvalidDensity(density))?;
        let (x0, y0) = (origin.0.max(0), origin.1.max(0));
        for y in y0..self.height {
            for x in x0..self.width {
                let index = self.index((x, y));
                self.cells[index].alive = rng.sample(dist);
            }
        }
        debug!(
            "Randomized the world from {:?} with density {}",
            origin, density
        );
        Ok(())
    }

    /// Writes a block of states.
    ///
    /// `rows[i][j]` goes to `(origin.0 + j, origin.1 + i)`.
    /// Parts of the block outside the world are ignored.
    pub fn paste<T: AsRef<[bool]>>(&mut self, origin: Coord, rows: &[T]) {
        for (i, row) in rows.iter().enumerate() {
            for (j, &alive) in row.as_ref().iter().enumerate() {
                let coord = (origin.0 + j as i32, origin.1 + i as i32);
                if let Some(cell) = self.find_cell_mut(coord) {
                    cell.alive = alive;
                }
            }
        }
    }

    /// Kills every cell and removes every preview.
    ///
    /// The generation count is kept; see [`reset`](Self::reset).
    pub fn clear_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear();
        }
        debug!("Cleared the world");
    }

    /// Clears the world and sets the generation count back to 0.
    pub fn reset(&mut self) {
        self.clear_all();
        self.generation = 0;
    }

    /// Removes every preview.
    pub fn clear_previews(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear_preview();
        }
    }

    /// Marks the cells at `anchor + offset` as previews.
    ///
    /// Offsets that fall outside the world are skipped.
    pub fn stamp_preview(&mut self, anchor: Coord, offsets: &[Offset]) {
        for &(dx, dy) in offsets {
            if let Some(cell) = self.find_cell_mut((anchor.0 + dx, anchor.1 + dy)) {
                cell.set_preview(true);
            }
        }
    }

    /// Makes the cells at `anchor + offset` alive.
    ///
    /// Offsets that fall outside the world are skipped.
    pub fn commit_pattern(&mut self, anchor: Coord, offsets: &[Offset]) {
        for &(dx, dy) in offsets {
            if let Some(cell) = self.find_cell_mut((anchor.0 + dx, anchor.1 + dy)) {
                cell.set_alive(true);
            }
        }
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// Displays the world in [Plaintext](https://conwaylife.com/wiki/Plaintext)
    /// format, without header.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`.
    pub fn plaintext(&self) -> String {
        let mut str = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(self.width as usize) {
            for cell in row {
                str.push(if cell.alive { 'o' } else { '.' });
            }
            str.push('\n');
        }
        str
    }

    /// Displays the world in a mix of [Plaintext](https://conwaylife.com/wiki/Plaintext)
    /// and [RLE](https://conwaylife.com/wiki/Rle) format.
    ///
    /// Cells are written as in [`plaintext`](Self::plaintext),
    /// each line is ended with `$`, and the last one with `!`.
    pub fn rle(&self) -> String {
        let mut str = format!(
            "x = {}, y = {}, rule = {}\n",
            self.width, self.height, RULE_STRING
        );
        for (y, row) in self.cells.chunks(self.width as usize).enumerate() {
            for cell in row {
                str.push(if cell.alive { 'o' } else { '.' });
            }
            if y as i32 == self.height - 1 {
                str.push('!')
            } else {
                str.push('$')
            };
            str.push('\n');
        }
        str
    }

    /// Reads a world from a picture in Plaintext format.
    ///
    /// `.` is dead, `o`, `O` and `*` are alive. Lines starting with `!`
    /// are comments. The width of the world is the length of the longest
    /// line; shorter lines are padded with dead cells.
    pub fn from_plaintext(text: &str) -> Result<Self, Error> {
        let rows = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.starts_with('!'))
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '.' => Ok(false),
                        'o' | 'O' | '*' => Ok(true),
                        c => Err(Error::InvalidChar(c)),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut world = World::new(width as i32, rows.len() as i32)?;
        world.paste((0, 0), &rows);
        Ok(world)
    }
}

impl FromStr for World {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        World::from_plaintext(s)
    }
}

impl Display for World {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plaintext())
    }
}
