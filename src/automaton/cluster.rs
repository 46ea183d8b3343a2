//! Randomized connected-cluster growth for seeding the lattice.
//!
//! Grows an irregular 26-connected blob from a seed by repeatedly picking a
//! random frontier member and scanning its neighbor offsets in shuffled order.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use super::lattice::{index_of, Coord};
use super::rule::NEIGHBOR_OFFSETS;

/// Smallest cluster a caller may request.
pub const MIN_CLUSTER_SIZE: usize = 4;

/// Largest cluster a caller may request.
pub const MAX_CLUSTER_SIZE: usize = 10;

/// Owns the RNG that drives cluster growth.
pub struct ClusterSeeder {
    rng: ChaCha12Rng,
}

impl ClusterSeeder {
    /// Create a deterministic seeder from an RNG seed.
    pub fn new(rng_seed: u64) -> Self {
        ClusterSeeder {
            rng: ChaCha12Rng::seed_from_u64(rng_seed),
        }
    }

    /// Create a seeder with a seed drawn from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// Grow a cluster of `size` coordinates anchored at `seed`.
    ///
    /// See [`generate_cluster`].
    pub fn generate(&mut self, seed: Coord, size: usize) -> Vec<Coord> {
        generate_cluster(&mut self.rng, seed, size)
    }
}

/// Grow a connected cluster of up to `size` coordinates, always starting with `seed`.
///
/// `size` is clamped to `[MIN_CLUSTER_SIZE, MAX_CLUSTER_SIZE]`. Members are
/// returned in the order they were added. If the frontier runs dry first
/// (only possible when the boundary boxes growth in), the smaller cluster
/// actually grown is returned. An out-of-bounds seed yields an empty cluster.
pub fn generate_cluster<R: Rng>(rng: &mut R, seed: Coord, size: usize) -> Vec<Coord> {
    let Some(seed_idx) = index_of(seed.x, seed.y, seed.z) else {
        return Vec::new();
    };
    let target = size.clamp(MIN_CLUSTER_SIZE, MAX_CLUSTER_SIZE);

    let mut members = vec![seed];
    let mut in_cluster: HashSet<usize> = HashSet::from([seed_idx]);
    let mut frontier = vec![seed];
    let mut offsets = NEIGHBOR_OFFSETS;

    while members.len() < target && !frontier.is_empty() {
        let pick = rng.random_range(0..frontier.len());
        let origin = frontier.swap_remove(pick);

        offsets.shuffle(rng);
        for &offset in &offsets {
            if members.len() >= target {
                break;
            }
            let candidate = origin.offset(offset);
            let Some(idx) = index_of(candidate.x, candidate.y, candidate.z) else {
                continue;
            };
            if in_cluster.insert(idx) {
                members.push(candidate);
                frontier.push(candidate);
            }
        }
    }

    if members.len() < target {
        log::debug!(
            "cluster at {:?} starved: grew {} of {} cells",
            seed,
            members.len(),
            target
        );
    }

    members
}
