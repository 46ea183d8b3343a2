//! Read-only cell access for visualization.

use crate::automaton::Coord;
use crate::simulation::Simulation;

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn gol_get_cell(ptr: *const Simulation, x: i16, y: i16, z: i16) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).lattice().get(x, y, z) as u8
}

/// Counts live cells.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The live cell count, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_live_count(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).lattice().live_count() as u64
}

/// Extracts every cell into a flat buffer keyed by linear index `x + y·64 + z·64²`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
/// - `out_buf` must point to at least `buf_len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written (64³), or 0 on null pointers or a short buffer.
#[no_mangle]
pub unsafe extern "C" fn gol_extract_cells(
    ptr: *const Simulation,
    out_buf: *mut u8,
    buf_len: usize,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let out_slice = std::slice::from_raw_parts_mut(out_buf, buf_len);
    (*ptr).lattice().export_cells(out_slice)
}

/// Extracts a rectangular region of cells into a flat output buffer.
/// The buffer is filled in z,y,x order (z changes slowest, x changes fastest).
/// Bounds are clamped to the lattice; `min` is inclusive and `max` exclusive.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
/// - `out_buf` must point to at least `buf_len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written, or 0 on null pointers, an empty region, or a short buffer.
#[no_mangle]
pub unsafe extern "C" fn gol_extract_region(
    ptr: *const Simulation,
    out_buf: *mut u8,
    buf_len: usize,
    min_x: i16,
    min_y: i16,
    min_z: i16,
    max_x: i16,
    max_y: i16,
    max_z: i16,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let out_slice = std::slice::from_raw_parts_mut(out_buf, buf_len);
    (*ptr).lattice().export_region(
        out_slice,
        Coord::new(min_x, min_y, min_z),
        Coord::new(max_x, max_y, max_z),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{index_of, CELL_COUNT};
    use crate::ffi::lifecycle::{gol_create_seeded, gol_destroy};
    use std::ptr;

    #[test]
    fn test_preview_is_visible() {
        unsafe {
            let sim = gol_create_seeded(1);
            // Default seed is (32,32,32) 1-based
            assert_eq!(gol_get_cell(sim, 31, 31, 31), 1);
            assert_eq!(gol_live_count(sim), 6);

            // Out of bounds reads are dead
            assert_eq!(gol_get_cell(sim, -1, 0, 0), 0);
            assert_eq!(gol_get_cell(sim, 64, 0, 0), 0);

            gol_destroy(sim);
        }
    }

    #[test]
    fn test_extract_cells() {
        unsafe {
            let sim = gol_create_seeded(2);
            let mut buffer = vec![0u8; CELL_COUNT];
            let written = gol_extract_cells(sim, buffer.as_mut_ptr(), buffer.len());

            assert_eq!(written, CELL_COUNT as u64);
            assert_eq!(buffer.iter().filter(|&&b| b == 1).count(), 6);
            assert_eq!(buffer[index_of(31, 31, 31).unwrap()], 1);

            let mut short = vec![0u8; 16];
            assert_eq!(gol_extract_cells(sim, short.as_mut_ptr(), short.len()), 0);

            gol_destroy(sim);
        }
    }

    #[test]
    fn test_extract_region_around_seed() {
        unsafe {
            let sim = gol_create_seeded(3);
            // A 6-cell cluster stays within 5 cells of the seed.
            let mut buffer = vec![0u8; 11 * 11 * 11];
            let written = gol_extract_region(sim, buffer.as_mut_ptr(), buffer.len(), 26, 26, 26, 37, 37, 37);

            assert_eq!(written, 11 * 11 * 11);
            assert_eq!(buffer.iter().filter(|&&b| b == 1).count(), 6);

            gol_destroy(sim);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            let mut buffer = vec![0u8; 8];
            assert_eq!(gol_get_cell(ptr::null(), 0, 0, 0), 0);
            assert_eq!(gol_live_count(ptr::null()), 0);
            assert_eq!(gol_extract_cells(ptr::null(), buffer.as_mut_ptr(), 8), 0);
            assert_eq!(
                gol_extract_region(ptr::null(), buffer.as_mut_ptr(), 8, 0, 0, 0, 2, 2, 2),
                0
            );

            let sim = gol_create_seeded(4);
            assert_eq!(gol_extract_cells(sim, ptr::null_mut(), 0), 0);
            gol_destroy(sim);
        }
    }
}
