use crate::grid::{neighbors4, Coord, GridMask};

/// A boolean grid the size of the mask. Used for the dessert and suburb
/// flags and for snake-occupancy lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagGrid {
    height: usize,
    width: usize,
    bits: Vec<bool>,
}

impl FlagGrid {
    pub fn empty(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            bits: vec![false; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, (i, j): Coord) -> bool {
        self.bits[i * self.width + j]
    }

    pub fn set(&mut self, (i, j): Coord, value: bool) {
        self.bits[i * self.width + j] = value;
    }

    pub fn toggle(&mut self, (i, j): Coord) {
        self.bits[i * self.width + j] = !self.bits[i * self.width + j];
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.bits.iter().any(|&b| b)
    }

    /// Positions of all set flags in row-major order.
    pub fn iter_set(&self) -> impl Iterator<Item = Coord> + '_ {
        let w = self.width;
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(move |(idx, _)| (idx / w, idx % w))
    }

    pub fn neighbors(&self, cell: Coord) -> impl Iterator<Item = Coord> {
        neighbors4(self.height, self.width, cell)
    }
}

/// The mutable optimization state: the snake plus the auxiliary flag grids.
///
/// Treated as an immutable value: move operators clone it and return a new
/// state, so snapshotting the best-seen state is a plain `clone()` with no
/// aliasing concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Ordered river cells. Consecutive entries are 4-adjacent; no entry
    /// touches any other entry except its immediate neighbors in the
    /// sequence.
    pub snake: Vec<Coord>,
    pub desserts: FlagGrid,
    pub suburbs: FlagGrid,
}

impl SearchState {
    pub fn new(snake: Vec<Coord>, height: usize, width: usize) -> Self {
        Self {
            snake,
            desserts: FlagGrid::empty(height, width),
            suburbs: FlagGrid::empty(height, width),
        }
    }

    pub fn height(&self) -> usize {
        self.desserts.height()
    }

    pub fn width(&self) -> usize {
        self.desserts.width()
    }

    /// Snake occupancy as a grid, for O(1) membership checks.
    pub fn snake_grid(&self) -> FlagGrid {
        let mut grid = FlagGrid::empty(self.height(), self.width());
        for &cell in &self.snake {
            grid.set(cell, true);
        }
        grid
    }

    /// True when every structural invariant holds: the snake is a simple
    /// non-self-touching path of usable cells, no path cell carries a flag,
    /// and a multi-cell suburb set is a single connected blob.
    pub fn invariants_hold(&self, mask: &GridMask) -> bool {
        let occupied = self.snake_grid();
        if occupied.count() != self.snake.len() {
            return false; // duplicate cell
        }
        for (idx, &cell) in self.snake.iter().enumerate() {
            if !mask.usable(cell) {
                return false;
            }
            if self.desserts.get(cell) || self.suburbs.get(cell) {
                return false;
            }
            for n in mask.neighbors(cell) {
                if !occupied.get(n) {
                    continue;
                }
                let pos = self.snake.iter().position(|&c| c == n);
                match pos {
                    Some(p) if p + 1 == idx || idx + 1 == p => {}
                    _ => return false,
                }
            }
        }
        suburb_cluster_connected(&self.suburbs)
    }
}

/// Cluster-connectivity invariant: with more than one suburb cell, every
/// suburb cell must have at least one suburb 4-neighbor and the whole set
/// must form one connected blob.
pub fn suburb_cluster_connected(suburbs: &FlagGrid) -> bool {
    let total = suburbs.count();
    if total <= 1 {
        return true;
    }
    let Some(seed) = suburbs.iter_set().next() else {
        return true;
    };
    let mut seen = FlagGrid::empty(suburbs.height(), suburbs.width());
    let mut stack = vec![seed];
    seen.set(seed, true);
    let mut reached = 1;
    while let Some(cell) = stack.pop() {
        for n in suburbs.neighbors(cell) {
            if suburbs.get(n) && !seen.get(n) {
                seen.set(n, true);
                reached += 1;
                stack.push(n);
            }
        }
    }
    reached == total
}
