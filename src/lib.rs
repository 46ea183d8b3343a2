//! Lattice Life - 3D Cellular Automaton Engine
//!
//! A B3/S34 automaton on a fixed 64³ lattice with a 26-cell Moore
//! neighborhood, seeded from randomly grown connected clusters. A run
//! advances on a throttled generation clock and freezes after 80 generations.
//!
//! The [`Simulation`] controller is the entry point for Rust callers; the
//! `ffi` module exposes the same surface through a C ABI.

pub mod automaton;
pub mod clock;
pub mod config;
pub mod error;
pub mod ffi;
pub mod simulation;
pub mod state;


pub use automaton::{Coord, Lattice, CELL_COUNT, LATTICE_SIDE, MAX_GENERATIONS};
pub use config::{ClockMode, EngineConfig, SeedInput, SeedParams};
pub use error::{ConfigError, EngineError};
pub use simulation::Simulation;
pub use state::{Command, ControlAvailability, Lifecycle, StatusReport};
