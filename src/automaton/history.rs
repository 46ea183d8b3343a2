//! Bounded generation history.
//!
//! Stores a full lattice snapshot at each generation boundary. The number of
//! retained snapshots is the run's generation counter, and the cap on it is
//! what freezes a run.

use std::collections::VecDeque;

use super::lattice::Lattice;

/// Generations a run may advance before it freezes.
pub const MAX_GENERATIONS: usize = 80;

/// Immutable copy of every cell state at one generation boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    cells: Box<[bool]>,
}

impl Snapshot {
    pub fn capture(lattice: &Lattice) -> Self {
        Snapshot {
            cells: lattice.cells().into(),
        }
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Rebuild the lattice this snapshot was taken from.
    pub fn to_lattice(&self) -> Lattice {
        // Snapshots are only ever captured from a full lattice.
        Lattice::from_cells(&self.cells).unwrap_or_default()
    }
}

/// FIFO log of snapshots (oldest first), never longer than its capacity.
#[derive(Debug)]
pub struct GenerationHistory {
    snapshots: VecDeque<Snapshot>,
    capacity: usize,
}

impl Default for GenerationHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationHistory {
    /// History capped at [`MAX_GENERATIONS`].
    pub fn new() -> Self {
        Self::with_capacity(MAX_GENERATIONS)
    }

    /// History with a specific cap (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        GenerationHistory {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a snapshot, evicting the oldest if the cap would be exceeded.
    ///
    /// Returns the evicted snapshot, if any.
    pub fn push(&mut self, snapshot: Snapshot) -> Option<Snapshot> {
        self.snapshots.push_back(snapshot);
        if self.snapshots.len() > self.capacity {
            self.snapshots.pop_front()
        } else {
            None
        }
    }

    /// Remove and return the newest snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// The generation counter.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the history has reached its cap.
    pub fn is_full(&self) -> bool {
        self.snapshots.len() >= self.capacity
    }

    pub fn oldest(&self) -> Option<&Snapshot> {
        self.snapshots.front()
    }

    pub fn newest(&self) -> Option<&Snapshot> {
        self.snapshots.back()
    }

    /// Snapshots in order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }
}
