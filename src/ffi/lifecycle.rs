//! Simulation creation, destruction, and lifecycle queries.

use std::ffi::{c_char, CStr};

use crate::config::EngineConfig;
use crate::simulation::Simulation;

fn into_handle(sim: Result<Simulation, crate::error::EngineError>) -> *mut Simulation {
    match sim {
        Ok(sim) => Box::into_raw(Box::new(sim)),
        Err(err) => {
            log::warn!("simulation not created: {}", err);
            std::ptr::null_mut()
        }
    }
}

/// Creates an idle simulation with the default config and an entropy-seeded RNG.
///
/// # Returns
/// A pointer to a new Simulation, or null on failure.
///
/// # Safety
/// The returned pointer must eventually be freed with `gol_destroy()`.
#[no_mangle]
pub extern "C" fn gol_create() -> *mut Simulation {
    into_handle(Simulation::new(&EngineConfig::default()))
}

/// Creates an idle simulation whose clusters are reproducible from `rng_seed`.
///
/// # Returns
/// A pointer to a new Simulation, or null on failure.
#[no_mangle]
pub extern "C" fn gol_create_seeded(rng_seed: u64) -> *mut Simulation {
    into_handle(Simulation::seeded(rng_seed))
}

/// Creates a simulation from a JSON config string.
///
/// # Safety
/// - `json` must be null or a valid NUL-terminated string
///
/// # Returns
/// A pointer to a new Simulation, or null if `json` is null, not UTF-8,
/// or not a valid config.
#[no_mangle]
pub unsafe extern "C" fn gol_create_from_json(json: *const c_char) -> *mut Simulation {
    if json.is_null() {
        return std::ptr::null_mut();
    }

    let Ok(text) = CStr::from_ptr(json).to_str() else {
        log::warn!("simulation config is not valid UTF-8");
        return std::ptr::null_mut();
    };

    match EngineConfig::from_json(text) {
        Ok(config) => into_handle(Simulation::new(&config)),
        Err(err) => {
            log::warn!("simulation not created: {}", err);
            std::ptr::null_mut()
        }
    }
}

/// Destroys a simulation and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by a `gol_create*` function, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn gol_destroy(ptr: *mut Simulation) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter (history length).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_get_generation(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation() as u64
}

/// Gets the lifecycle state.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// 0 = idle, 1 = running, 2 = paused, 3 = frozen, -1 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_get_lifecycle(ptr: *const Simulation) -> i32 {
    if ptr.is_null() {
        return -1;
    }
    (*ptr).lifecycle() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::ptr;

    #[test]
    fn test_create_and_destroy() {
        unsafe {
            let sim = gol_create();
            assert!(!sim.is_null());

            // Should not crash
            gol_destroy(sim);
        }
    }

    #[test]
    fn test_initial_state() {
        unsafe {
            let sim = gol_create_seeded(42);
            assert_eq!(gol_get_generation(sim), 0);
            assert_eq!(gol_get_lifecycle(sim), 0);
            gol_destroy(sim);
        }
    }

    #[test]
    fn test_create_from_json() {
        unsafe {
            let json = CString::new(r#"{ "rng_seed": 5, "seed": { "cluster_size": 9 } }"#).unwrap();
            let sim = gol_create_from_json(json.as_ptr());
            assert!(!sim.is_null());
            assert_eq!((*sim).params().cluster_size, 9);
            gol_destroy(sim);

            let bad = CString::new(r#"{ "clock": { "mode": "fixed_period", "period_ms": 0 } }"#).unwrap();
            assert!(gol_create_from_json(bad.as_ptr()).is_null());

            assert!(gol_create_from_json(ptr::null()).is_null());
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            gol_destroy(ptr::null_mut()); // Should not crash
            assert_eq!(gol_get_generation(ptr::null()), 0);
            assert_eq!(gol_get_lifecycle(ptr::null()), -1);
        }
    }
}
