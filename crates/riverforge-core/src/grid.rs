use crate::error::{RfResult, RiverForgeError};
use fastrand::Rng;
use itertools::Itertools;

/// A cell position as (row, col).
pub type Coord = (usize, usize);

const OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// In-bounds 4-neighborhood of a cell on an `height` x `width` grid.
pub(crate) fn neighbors4(
    height: usize,
    width: usize,
    (i, j): Coord,
) -> impl Iterator<Item = Coord> {
    let (h, w) = (height as i64, width as i64);
    OFFSETS.into_iter().filter_map(move |(di, dj)| {
        let (ni, nj) = (i as i64 + di, j as i64 + dj);
        (ni >= 0 && ni < h && nj >= 0 && nj < w).then_some((ni as usize, nj as usize))
    })
}

/// The usable/unusable classification over all cells. Built once before a
/// run and passed read-only into every core function; never a global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMask {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl GridMask {
    /// A mask with every cell usable.
    pub fn open(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![true; height * width],
        }
    }

    pub fn from_fn<F: FnMut(Coord) -> bool>(height: usize, width: usize, mut f: F) -> Self {
        let cells = (0..height)
            .cartesian_product(0..width)
            .map(|cell| f(cell))
            .collect();
        Self {
            height,
            width,
            cells,
        }
    }

    /// Parses the text mask format: one line per row, `.` usable,
    /// `#` blocked. All rows must have the same width.
    pub fn parse(text: &str) -> RfResult<Self> {
        let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        if rows.is_empty() {
            return Err(RiverForgeError::MaskParse("mask is empty".into()));
        }
        let width = rows[0].chars().count();
        let mut cells = Vec::with_capacity(rows.len() * width);
        for (i, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(RiverForgeError::MaskParse(format!(
                    "row {} has width {} but row 0 has width {}",
                    i,
                    row.chars().count(),
                    width
                )));
            }
            for (j, c) in row.chars().enumerate() {
                match c {
                    '.' => cells.push(true),
                    '#' => cells.push(false),
                    other => {
                        return Err(RiverForgeError::MaskParse(format!(
                            "unexpected character '{}' at row {}, col {}",
                            other, i, j
                        )))
                    }
                }
            }
        }
        Ok(Self {
            height: rows.len(),
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn usable(&self, (i, j): Coord) -> bool {
        self.cells[i * self.width + j]
    }

    pub fn usable_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Every cell position in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        (0..self.height).cartesian_product(0..self.width)
    }

    pub fn neighbors(&self, cell: Coord) -> impl Iterator<Item = Coord> {
        neighbors4(self.height, self.width, cell)
    }

    /// Pre-run check: a mask with no usable cell cannot be optimized.
    pub fn validate(&self) -> RfResult<()> {
        if self.usable_count() == 0 {
            return Err(RiverForgeError::EmptyMask);
        }
        Ok(())
    }

    fn border_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells()
            .filter(|&(i, j)| i == 0 || i == self.height - 1 || j == 0 || j == self.width - 1)
    }

    pub fn has_usable_border(&self) -> bool {
        self.border_cells().any(|c| self.usable(c))
    }

    /// Picks the cell the river starts from.
    ///
    /// Preference order: usable left/right-border cells excluding corners,
    /// then top/bottom-border cells excluding corners (uniformly at random
    /// within a tier), then the first usable border cell scanning left
    /// column, right column, top row, bottom row. On grids with two or
    /// fewer rows (resp. columns) the corner exclusion is vacuous, so a
    /// single-row mask still resolves through the left/right tier.
    pub fn choose_start(&self, rng: &mut Rng) -> RfResult<Coord> {
        let (h, w) = (self.height, self.width);

        let side_rows: Vec<usize> = if h > 2 {
            (1..h - 1).collect()
        } else {
            (0..h).collect()
        };
        let mut candidates: Vec<Coord> = Vec::new();
        for &i in &side_rows {
            if self.usable((i, 0)) {
                candidates.push((i, 0));
            }
            if w > 1 && self.usable((i, w - 1)) {
                candidates.push((i, w - 1));
            }
        }
        if !candidates.is_empty() {
            return Ok(candidates[rng.usize(0..candidates.len())]);
        }

        let top_cols: Vec<usize> = if w > 2 {
            (1..w - 1).collect()
        } else {
            (0..w).collect()
        };
        for &j in &top_cols {
            if self.usable((0, j)) {
                candidates.push((0, j));
            }
            if h > 1 && self.usable((h - 1, j)) {
                candidates.push((h - 1, j));
            }
        }
        if !candidates.is_empty() {
            return Ok(candidates[rng.usize(0..candidates.len())]);
        }

        for i in 0..h {
            if self.usable((i, 0)) {
                return Ok((i, 0));
            }
        }
        for i in 0..h {
            if self.usable((i, w - 1)) {
                return Ok((i, w - 1));
            }
        }
        for j in 0..w {
            if self.usable((0, j)) {
                return Ok((0, j));
            }
        }
        for j in 0..w {
            if self.usable((h - 1, j)) {
                return Ok((h - 1, j));
            }
        }
        Err(RiverForgeError::NoStartCell)
    }
}
