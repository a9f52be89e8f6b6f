use crate::{parse_rle, BitGrid, Config, Error, MemoryView, Result, Seed};
use tracing::{debug, trace};


/// Row and column offsets of the 8 neighbours of a cell.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Conway's Game of Life on a `width x height` torus.
///
/// Holds two equally sized fields: `current` is the one exposed to readers,
/// `scratch` receives the next generation during `tick` and then the two
/// swap roles.
pub struct Engine {
    current: BitGrid,
    scratch: BitGrid,
    generation: u64,
}

impl Engine {
    /// Create a `width x height` field filled according to `seed`.
    ///
    /// `width >= 1 && height >= 1`
    pub fn new(width: u32, height: u32, seed: Seed) -> Result<Self> {
        let mut current = BitGrid::blank(width, height)?;
        let scratch = BitGrid::blank(width, height)?;
        seed.apply(&mut current)?;
        debug!(width, height, population = current.population(), "engine created");
        Ok(Self {
            current,
            scratch,
            generation: 0,
        })
    }

    /// Create a field of the default size.
    pub fn with_seed(seed: Seed) -> Result<Self> {
        Self::new(Config::DEFAULT_WIDTH, Config::DEFAULT_HEIGHT, seed)
    }

    /// Create a field filled with dead cells.
    pub fn blank(width: u32, height: u32) -> Result<Self> {
        Self::new(width, height, Seed::Blank)
    }

    /// Parse RLE format into the top left corner of a `width x height` field.
    pub fn from_rle(data: &[u8], width: u32, height: u32) -> Result<Self> {
        let pattern = parse_rle(data)?;
        if pattern.width > width || pattern.height > height {
            return Err(Error::Rle(format!(
                "{}x{} pattern does not fit into {}x{} field",
                pattern.width, pattern.height, width, height
            )));
        }
        let mut engine = Self::blank(width, height)?;
        for (row, col) in pattern.alive {
            engine.current.set(row, col, true)?;
        }
        Ok(engine)
    }

    pub fn width(&self) -> u32 {
        self.current.width()
    }

    pub fn height(&self) -> u32 {
        self.current.height()
    }

    /// Number of generations computed since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> u64 {
        self.current.population()
    }

    /// The field readers currently see.
    pub fn grid(&self) -> &BitGrid {
        &self.current
    }

    pub fn get_cell(&self, row: u32, col: u32) -> Result<bool> {
        self.current.get(row, col)
    }

    pub fn set_cell(&mut self, row: u32, col: u32, state: bool) -> Result<()> {
        self.current.set(row, col, state)
    }

    /// Flips a cell of the current field; the next `tick` sees the change.
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<()> {
        self.current.toggle(row, col)
    }

    /// Kills every cell. The generation counter is kept.
    pub fn clear(&mut self) {
        self.current.clear();
    }

    pub fn live_neighbor_count(&self, row: u32, col: u32) -> Result<u8> {
        self.current.index(row, col)?;
        Ok(Self::count_neighbors(&self.current, row, col))
    }

    /// Edges wrap around: `((r + dr + height) % height, (c + dc + width) % width)`.
    fn count_neighbors(grid: &BitGrid, row: u32, col: u32) -> u8 {
        let (w, h) = (grid.width() as i64, grid.height() as i64);
        let (row, col) = (row as i64, col as i64);
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| {
                let r = (row + dr + h) % h;
                let c = (col + dc + w) % w;
                grid.bit((r * w + c) as usize) as u8
            })
            .sum()
    }

    fn next_state(alive: bool, neighbors: u8) -> bool {
        matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
    }

    /// Advances the field by one generation.
    ///
    /// Pointers previously obtained from `cells` are invalidated.
    pub fn tick(&mut self) {
        let (current, scratch) = (&self.current, &mut self.scratch);
        for row in 0..current.height() {
            for col in 0..current.width() {
                let idx = row as usize * current.width() as usize + col as usize;
                let neighbors = Self::count_neighbors(current, row, col);
                scratch.put(idx, Self::next_state(current.bit(idx), neighbors));
            }
        }
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        trace!(generation = self.generation, "tick");
    }

    /// Advances the field by `generations` generations.
    pub fn update(&mut self, generations: u64) {
        for _ in 0..generations {
            self.tick();
        }
        debug!(
            generation = self.generation,
            population = self.population(),
            "field updated"
        );
    }

    /// Zero-copy view of the current field, valid until the next `tick`.
    pub fn cells(&self) -> MemoryView<'_> {
        MemoryView::new(self.current.as_bytes(), self.current.area())
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.current, f)
    }
}
