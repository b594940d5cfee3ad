//! Keyed selection of the embedding sites.
//!
//! A generator turns a key and the number of available sites into a sequence of
//! distinct site indices. Hiding and unveiling derive the very same sequence on
//! their own, nothing but the key has to be shared.
//!
//! # Note
//!
//! The key controls WHERE bits are hidden, it does not encrypt WHAT is hidden.

use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};

use enum_dispatch::enum_dispatch;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

use crate::key::Key;

/// Separates the seed derivation from any other use of SHA-256 over a key.
const SEED_DOMAIN: &[u8] = b"stegoweb/positions/v1";

/// A sequence of embedding site indices.
pub type Positions = Box<dyn Iterator<Item = u64> + Send>;

/// Derives the order of embedding sites from a key.
///
/// Implementations must be a pure function of the key bytes and `site_count`
/// and must never yield a site twice or a site `>= site_count`.
#[enum_dispatch]
pub trait BitPositionGenerator {
    fn positions(&self, key: &Key, site_count: u64) -> Positions;
}

/// All available generators
#[enum_dispatch(BitPositionGenerator)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionGenerators {
    KeyedShuffle,
    LinearPositions,
}

impl Default for PositionGenerators {
    fn default() -> Self {
        KeyedShuffle.into()
    }
}

/// Pseudo-random, key dependent order of all sites.
///
/// The seed is the SHA-256 of the key and the site count, it drives a ChaCha20
/// stream that performs a Fisher-Yates shuffle lazily, one site per step.
/// Only displaced sites are remembered, so drawing `k` positions costs `O(k)`
/// regardless of the image size.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyedShuffle;

impl BitPositionGenerator for KeyedShuffle {
    fn positions(&self, key: &Key, site_count: u64) -> Positions {
        Box::new(ShuffledSites::new(derive_seed(key, site_count), site_count))
    }
}

/// Sites in their natural order, for diagnostics and tests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinearPositions;

impl BitPositionGenerator for LinearPositions {
    fn positions(&self, _key: &Key, site_count: u64) -> Positions {
        Box::new(0..site_count)
    }
}

fn derive_seed(key: &Key, site_count: u64) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(SEED_DOMAIN);
    hasher.update((key.len() as u64).to_le_bytes());
    hasher.update(key.as_bytes());
    hasher.update(site_count.to_le_bytes());

    hasher.finalize().into()
}

/// Lazily evaluated Fisher-Yates shuffle of `0..site_count`.
pub struct ShuffledSites {
    rng: ChaCha20Rng,
    next: u64,
    site_count: u64,
    /// sites that were swapped away from their natural slot
    displaced: HashMap<u64, u64>,
}

impl ShuffledSites {
    pub fn new(seed: [u8; 32], site_count: u64) -> Self {
        Self {
            rng: ChaCha20Rng::from_seed(seed),
            next: 0,
            site_count,
            displaced: HashMap::new(),
        }
    }
}

impl Iterator for ShuffledSites {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.site_count {
            return None;
        }
        let i = self.next;
        self.next += 1;

        // u64 ranges keep the draws identical on 32 and 64 bit targets
        let j = self.rng.gen_range(i..self.site_count);
        let at_i = self.displaced.remove(&i).unwrap_or(i);
        if j == i {
            return Some(at_i);
        }
        let at_j = self.displaced.insert(j, at_i).unwrap_or(j);

        Some(at_j)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.site_count - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

impl Debug for ShuffledSites {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShuffledSites")
            .field("next", &self.next)
            .field("site_count", &self.site_count)
            .finish()
    }
}
