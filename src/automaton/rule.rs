//! Moore neighborhood (26 neighbors) and the B3/S34 transition rule.

use super::lattice::{Coord, Lattice};

/// The 26 non-zero offsets in `{-1,0,1}³`, z-major.
pub const NEIGHBOR_OFFSETS: [Coord; 26] = build_offsets();

const fn build_offsets() -> [Coord; 26] {
    let mut out = [Coord::new(0, 0, 0); 26];
    let mut n = 0;
    let mut dz = -1;
    while dz <= 1 {
        let mut dy = -1;
        while dy <= 1 {
            let mut dx = -1;
            while dx <= 1 {
                // Skip the center cell
                if !(dx == 0 && dy == 0 && dz == 0) {
                    out[n] = Coord::new(dx, dy, dz);
                    n += 1;
                }
                dx += 1;
            }
            dy += 1;
        }
        dz += 1;
    }
    out
}

/// Neighbor count a dead cell needs to be born.
pub const BIRTH: u8 = 3;

/// Inclusive neighbor range a live cell needs to survive.
pub const SURVIVAL: (u8, u8) = (3, 4);

/// Count live neighbors. Out-of-bounds neighbors count as dead.
pub fn count_live_neighbors(lattice: &Lattice, x: i16, y: i16, z: i16) -> u8 {
    let origin = Coord::new(x, y, z);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&offset| lattice.get_at(origin.offset(offset)))
        .count() as u8
}

/// Next state of one cell given its current state and live neighbor count.
///
/// - alive with 3 or 4 neighbors survives, otherwise dies
/// - dead with exactly 3 neighbors is born, otherwise stays dead
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    if alive {
        (SURVIVAL.0..=SURVIVAL.1).contains(&neighbors)
    } else {
        neighbors == BIRTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_offsets_are_the_26_unique_neighbors() {
        let unique: HashSet<Coord> = NEIGHBOR_OFFSETS.iter().copied().collect();
        assert_eq!(unique.len(), 26);
        assert!(!unique.contains(&Coord::new(0, 0, 0)));
        assert!(NEIGHBOR_OFFSETS
            .iter()
            .all(|o| [o.x, o.y, o.z].iter().all(|v| (-1..=1).contains(v))));
    }

    #[test]
    fn test_count_neighbors_cross() {
        let mut lattice = Lattice::new();

        // Cross pattern: center + 4 neighbors in the xy plane
        lattice.set(4, 4, 4, true);
        lattice.set(3, 4, 4, true);
        lattice.set(5, 4, 4, true);
        lattice.set(4, 3, 4, true);
        lattice.set(4, 5, 4, true);

        assert_eq!(count_live_neighbors(&lattice, 4, 4, 4), 4);
        // Each arm sees the center and the two arms diagonal to it
        assert_eq!(count_live_neighbors(&lattice, 3, 4, 4), 3);
        assert_eq!(count_live_neighbors(&lattice, 4, 5, 4), 3);
        // A cell above the center sees all five
        assert_eq!(count_live_neighbors(&lattice, 4, 4, 5), 5);
        // Far cell
        assert_eq!(count_live_neighbors(&lattice, 0, 0, 0), 0);
    }

    #[test]
    fn test_count_neighbors_full_block() {
        let mut lattice = Lattice::new();
        for z in 9..12 {
            for y in 9..12 {
                for x in 9..12 {
                    lattice.set(x, y, z, true);
                }
            }
        }
        assert_eq!(count_live_neighbors(&lattice, 10, 10, 10), 26);
    }

    #[test]
    fn test_corner_sees_only_seven_neighbors() {
        let mut lattice = Lattice::new();
        for z in 0..2 {
            for y in 0..2 {
                for x in 0..2 {
                    lattice.set(x, y, z, true);
                }
            }
        }
        assert_eq!(count_live_neighbors(&lattice, 0, 0, 0), 7);
    }

    #[test]
    fn test_no_wraparound_at_faces() {
        let mut lattice = Lattice::new();
        lattice.set(63, 0, 0, true);
        lattice.set(0, 63, 0, true);
        lattice.set(0, 0, 63, true);
        assert_eq!(count_live_neighbors(&lattice, 0, 0, 0), 0);
    }

    #[test]
    fn test_extreme_origins_count_zero() {
        let mut lattice = Lattice::new();
        lattice.set(0, 0, 0, true);
        lattice.set(63, 63, 63, true);
        assert_eq!(count_live_neighbors(&lattice, i16::MAX, i16::MAX, i16::MAX), 0);
        assert_eq!(count_live_neighbors(&lattice, i16::MIN, 0, i16::MAX), 0);
        assert_eq!(Coord::new(i16::MAX, 0, 0).offset(Coord::new(1, 0, 0)).x, i16::MAX);
    }

    #[test]
    fn test_rule_table_all_counts() {
        for n in 0u8..=26 {
            let born = next_state(false, n);
            let survives = next_state(true, n);
            assert_eq!(born, n == 3, "dead cell with {} neighbors", n);
            assert_eq!(survives, n == 3 || n == 4, "live cell with {} neighbors", n);
        }
    }
}
