//! Double-buffered generation stepping with B3/S34 rules.
//!
//! The next generation is computed into a fresh buffer from an immutable view
//! of the current lattice, then swapped in whole. Readers never observe a
//! partially computed generation.

use rayon::prelude::*;

use super::lattice::{Lattice, CELL_COUNT, LATTICE_SIDE};
use super::rule::{count_live_neighbors, next_state};
use crate::error::EngineError;

const SLAB: usize = (LATTICE_SIDE as usize) * (LATTICE_SIDE as usize);

/// Advances a [`Lattice`] one generation at a time.
///
/// Owns the rayon pool the next buffer is computed on. With one worker the
/// computation is effectively sequential.
pub struct StepEngine {
    thread_pool: rayon::ThreadPool,
}

impl StepEngine {
    /// Create an engine with the given worker count (0 is treated as 1).
    pub fn new(num_threads: usize) -> Result<Self, EngineError> {
        let num_threads = num_threads.max(1);
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()?;
        Ok(StepEngine { thread_pool })
    }

    pub fn num_threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }

    /// Compute the next generation of `lattice` without modifying it.
    pub fn next_generation(&self, lattice: &Lattice) -> Vec<bool> {
        let mut next = vec![false; CELL_COUNT];

        // Cells farther than one step from every live cell have no live
        // neighbors and stay dead.
        let Some((lo, hi)) = lattice.live_bounds() else {
            return next;
        };
        let (x0, y0, z0) = ((lo.x - 1).max(0), (lo.y - 1).max(0), (lo.z - 1).max(0));
        let max = LATTICE_SIDE - 1;
        let (x1, y1, z1) = ((hi.x + 1).min(max), (hi.y + 1).min(max), (hi.z + 1).min(max));

        self.thread_pool.install(|| {
            next.par_chunks_mut(SLAB)
                .enumerate()
                .filter(|(z, _)| (z0 as usize..=z1 as usize).contains(z))
                .for_each(|(z, slab)| {
                    let z = z as i16;
                    for y in y0..=y1 {
                        for x in x0..=x1 {
                            let neighbors = count_live_neighbors(lattice, x, y, z);
                            let offset = y as usize * LATTICE_SIDE as usize + x as usize;
                            slab[offset] = next_state(lattice.get(x, y, z), neighbors);
                        }
                    }
                });
        });

        next
    }

    /// Step the lattice forward by one generation.
    pub fn step(&self, lattice: &mut Lattice) {
        let next = self.next_generation(lattice);
        lattice.replace_cells(next);
    }
}
