//! Run commands, frame ticks, and seed input.

use std::ffi::{c_char, CStr};
use std::time::Duration;

use crate::config::{SeedInput, SeedParams};
use crate::simulation::Simulation;
use crate::state::Command;

pub const CONTROL_GO: u8 = 1 << 0;
pub const CONTROL_PAUSE: u8 = 1 << 1;
pub const CONTROL_STEP_FORWARD: u8 = 1 << 2;
pub const CONTROL_STEP_BACK: u8 = 1 << 3;
pub const CONTROL_RESET: u8 = 1 << 4;

unsafe fn apply(ptr: *mut Simulation, command: Command) {
    if ptr.is_null() {
        return;
    }
    (*ptr).apply(command);
}

/// Starts, resumes, or restarts a run.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null (no-op)
#[no_mangle]
pub unsafe extern "C" fn gol_go(ptr: *mut Simulation) {
    apply(ptr, Command::Go);
}

/// Pauses a running simulation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null (no-op)
#[no_mangle]
pub unsafe extern "C" fn gol_pause(ptr: *mut Simulation) {
    apply(ptr, Command::Pause);
}

/// Advances one generation when not running.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null (no-op)
#[no_mangle]
pub unsafe extern "C" fn gol_step_forward(ptr: *mut Simulation) {
    apply(ptr, Command::StepForward);
}

/// Rewinds one generation when not running.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null (no-op)
#[no_mangle]
pub unsafe extern "C" fn gol_step_back(ptr: *mut Simulation) {
    apply(ptr, Command::StepBack);
}

/// Returns to idle with a fresh preview cluster.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null (no-op)
#[no_mangle]
pub unsafe extern "C" fn gol_reset(ptr: *mut Simulation) {
    apply(ptr, Command::Reset);
}

/// Frame callback. Call once per display frame.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// Number of generations committed during this call (0 if ptr is null).
#[no_mangle]
pub unsafe extern "C" fn gol_frame(ptr: *mut Simulation, dt_us: u64) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).on_frame(Duration::from_micros(dt_us))
}

/// Sets the seed coordinate (1-based) and cluster size. Values are clamped.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null (no-op)
#[no_mangle]
pub unsafe extern "C" fn gol_set_seed(ptr: *mut Simulation, x: i32, y: i32, z: i32, cluster_size: i32) {
    if ptr.is_null() {
        return;
    }
    (*ptr).set_seed_input(&SeedInput {
        x: Some(x as i64),
        y: Some(y as i64),
        z: Some(z as i64),
        cluster_size: Some(cluster_size as i64),
    });
}

/// Sets the seed from text fields, as typed into number boxes. Malformed or
/// null fields fall back to their defaults; everything else is clamped.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null (no-op)
/// - each text pointer must be null or a valid NUL-terminated string
#[no_mangle]
pub unsafe extern "C" fn gol_set_seed_str(
    ptr: *mut Simulation,
    x: *const c_char,
    y: *const c_char,
    z: *const c_char,
    cluster_size: *const c_char,
) {
    if ptr.is_null() {
        return;
    }
    let params = SeedParams::parse(
        text_or_empty(x),
        text_or_empty(y),
        text_or_empty(z),
        text_or_empty(cluster_size),
    );
    (*ptr).set_params(params);
}

unsafe fn text_or_empty<'a>(text: *const c_char) -> &'a str {
    if text.is_null() {
        return "";
    }
    CStr::from_ptr(text).to_str().unwrap_or("")
}

/// Reads back the seed coordinate as a 1-based triple for input widgets.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
/// - `out_xyz` must point to 3 writable `i64`s, or be null
///
/// # Returns
/// 1 on success, 0 if either pointer is null.
#[no_mangle]
pub unsafe extern "C" fn gol_get_seed(ptr: *const Simulation, out_xyz: *mut i64) -> u8 {
    if ptr.is_null() || out_xyz.is_null() {
        return 0;
    }
    let (x, y, z) = (*ptr).params().display_seed();
    let out = std::slice::from_raw_parts_mut(out_xyz, 3);
    out.copy_from_slice(&[x, y, z]);
    1
}

/// Which commands currently have an effect, as a `CONTROL_*` bitmask.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The bitmask, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_get_controls(ptr: *const Simulation) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    let controls = (*ptr).controls();
    [
        (Command::Go, CONTROL_GO),
        (Command::Pause, CONTROL_PAUSE),
        (Command::StepForward, CONTROL_STEP_FORWARD),
        (Command::StepBack, CONTROL_STEP_BACK),
        (Command::Reset, CONTROL_RESET),
    ]
    .iter()
    .filter(|(command, _)| controls.allows(*command))
    .fold(0, |mask, (_, bit)| mask | bit)
}
