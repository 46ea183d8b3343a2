//! Core automaton logic: lattice, rule, stepping, seeding and history.
//!
//! Nothing in here knows about lifecycle or timing; the controller in
//! `simulation` drives these parts. The FFI layer in `ffi/` only reaches them
//! through the controller.

pub mod cluster;
pub mod history;
pub mod lattice;
pub mod rule;
pub mod stepping;

pub use cluster::{generate_cluster, ClusterSeeder, MAX_CLUSTER_SIZE, MIN_CLUSTER_SIZE};
pub use history::{GenerationHistory, Snapshot, MAX_GENERATIONS};
pub use lattice::{in_bounds, index_of, Coord, Lattice, CELL_COUNT, LATTICE_SIDE};
pub use rule::{count_live_neighbors, next_state, NEIGHBOR_OFFSETS};
pub use stepping::StepEngine;
