//! The 64³ cell lattice and its coordinate/index mapping.

/// Side length of the cubic lattice.
pub const LATTICE_SIDE: i16 = 64;

/// Total number of cells in the lattice.
pub const CELL_COUNT: usize = (LATTICE_SIDE as usize) * (LATTICE_SIDE as usize) * (LATTICE_SIDE as usize);

/// An integer lattice coordinate. Also used for neighbor offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Coord {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Coord { x, y, z }
    }

    /// Component-wise sum, used to apply a neighbor offset.
    #[inline]
    pub fn offset(self, by: Coord) -> Coord {
        // Saturated results are far outside the lattice and read as dead.
        Coord::new(
            self.x.saturating_add(by.x),
            self.y.saturating_add(by.y),
            self.z.saturating_add(by.z),
        )
    }

    /// Inverse of [`index_of`].
    pub fn from_index(idx: usize) -> Coord {
        let side = LATTICE_SIDE as usize;
        Coord::new(
            (idx % side) as i16,
            ((idx / side) % side) as i16,
            (idx / (side * side)) as i16,
        )
    }
}

/// Check if coordinates are within lattice bounds. The lattice never wraps.
#[inline]
pub fn in_bounds(x: i16, y: i16, z: i16) -> bool {
    (0..LATTICE_SIDE).contains(&x) && (0..LATTICE_SIDE).contains(&y) && (0..LATTICE_SIDE).contains(&z)
}

/// Linear index `x + y·N + z·N²`, or `None` for any out-of-bounds axis.
#[inline]
pub fn index_of(x: i16, y: i16, z: i16) -> Option<usize> {
    if !in_bounds(x, y, z) {
        return None;
    }
    let side = LATTICE_SIDE as usize;
    Some(z as usize * side * side + y as usize * side + x as usize)
}

/// A full lattice of boolean cell states, stored flat in index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    cells: Vec<bool>,
}

impl Default for Lattice {
    fn default() -> Self {
        Self::new()
    }
}

impl Lattice {
    /// An all-dead lattice.
    pub fn new() -> Self {
        Lattice {
            cells: vec![false; CELL_COUNT],
        }
    }

    /// Rebuild a lattice from a cell slice in index order.
    ///
    /// Returns `None` if the slice is not exactly [`CELL_COUNT`] long.
    pub fn from_cells(cells: &[bool]) -> Option<Self> {
        if cells.len() != CELL_COUNT {
            return None;
        }
        Some(Lattice {
            cells: cells.to_vec(),
        })
    }

    /// Read a cell. Out-of-bounds coordinates are absent, never alive.
    #[inline]
    pub fn get(&self, x: i16, y: i16, z: i16) -> bool {
        match index_of(x, y, z) {
            Some(idx) => self.cells[idx],
            None => false,
        }
    }

    /// Write a cell. Out-of-bounds coordinates are silently ignored.
    pub fn set(&mut self, x: i16, y: i16, z: i16, alive: bool) {
        if let Some(idx) = index_of(x, y, z) {
            self.cells[idx] = alive;
        }
    }

    #[inline]
    pub fn get_at(&self, c: Coord) -> bool {
        self.get(c.x, c.y, c.z)
    }

    #[inline]
    pub fn set_at(&mut self, c: Coord, alive: bool) {
        self.set(c.x, c.y, c.z, alive)
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = false);
    }

    /// Read-only view of all cells keyed by linear index.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of every live cell, in index order.
    pub fn live_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(idx, _)| Coord::from_index(idx))
    }

    /// Inclusive bounding box of live cells, or `None` if the lattice is empty.
    pub fn live_bounds(&self) -> Option<(Coord, Coord)> {
        let mut coords = self.live_coords();
        let first = coords.next()?;
        Some(coords.fold((first, first), |(lo, hi), c| {
            (
                Coord::new(lo.x.min(c.x), lo.y.min(c.y), lo.z.min(c.z)),
                Coord::new(hi.x.max(c.x), hi.y.max(c.y), hi.z.max(c.z)),
            )
        }))
    }

    /// Swap in a fully computed next generation.
    pub(crate) fn replace_cells(&mut self, next: Vec<bool>) {
        debug_assert_eq!(next.len(), CELL_COUNT);
        self.cells = next;
    }

    /// Export all cells into `out_buf` as 1 (alive) / 0 (dead), keyed by linear index.
    ///
    /// # Returns
    /// Number of bytes written, or 0 if the buffer is too small.
    pub fn export_cells(&self, out_buf: &mut [u8]) -> u64 {
        if out_buf.len() < CELL_COUNT {
            return 0;
        }
        for (dst, &alive) in out_buf.iter_mut().zip(&self.cells) {
            *dst = alive as u8;
        }
        CELL_COUNT as u64
    }

    /// Export a rectangular region into a flat buffer.
    ///
    /// # Layout
    /// The buffer is filled in z,y,x order (z changes slowest, x changes fastest).
    /// `min` is inclusive, `max` exclusive; both are clamped to the lattice.
    ///
    /// # Returns
    /// Number of bytes written to the buffer, or 0 on an empty region or short buffer.
    pub fn export_region(&self, out_buf: &mut [u8], min: Coord, max: Coord) -> u64 {
        let clamp = |v: i16| v.clamp(0, LATTICE_SIDE);
        let (min_x, min_y, min_z) = (clamp(min.x), clamp(min.y), clamp(min.z));
        let (max_x, max_y, max_z) = (clamp(max.x), clamp(max.y), clamp(max.z));

        if min_x >= max_x || min_y >= max_y || min_z >= max_z {
            return 0;
        }

        let total_size =
            (max_x - min_x) as usize * (max_y - min_y) as usize * (max_z - min_z) as usize;
        if out_buf.len() < total_size {
            return 0;
        }

        let mut offset = 0;
        for z in min_z..max_z {
            for y in min_y..max_y {
                for x in min_x..max_x {
                    out_buf[offset] = self.get(x, y, z) as u8;
                    offset += 1;
                }
            }
        }

        offset as u64
    }
}
