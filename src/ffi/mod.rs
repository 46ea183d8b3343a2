//! C FFI layer for embedding hosts.
//!
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in `simulation` and `automaton`. These functions are thin
//! wrappers that handle null checks, pointer safety, and C-to-Rust conversions.

pub mod cells;
pub mod control;
pub mod lifecycle;

pub use cells::{gol_extract_cells, gol_extract_region, gol_get_cell, gol_live_count};
pub use control::{
    gol_frame, gol_get_controls, gol_get_seed, gol_go, gol_pause, gol_reset, gol_set_seed,
    gol_set_seed_str, gol_step_back, gol_step_forward,
};
pub use lifecycle::{
    gol_create, gol_create_from_json, gol_create_seeded, gol_destroy, gol_get_generation,
    gol_get_lifecycle,
};
