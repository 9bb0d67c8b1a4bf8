use sha2::{Digest, Sha256};

use crate::random::SplitMix64;

pub const PERMUTATION_SIZE: usize = 256;

/// Hashes a world name (or any text seed) down to a numeric seed.
///
/// The first eight bytes of the SHA-256 digest, read little-endian.
pub fn text_seed(text: &str) -> u64 {
    let digest = Sha256::digest(text.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    // Duplicated so that `index + offset` lookups never need to wrap.
    array: Box<[u8; PERMUTATION_SIZE * 2]>,
}

impl Permutation {
    /// Valid for `index` in `0..512`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> usize {
        self.array[index] as usize
    }

    pub fn from_seed(seed: u64) -> Self {
        let mut rng = SplitMix64::new(seed);
        let mut array: [u8; PERMUTATION_SIZE] = std::array::from_fn(|i| i as u8);
        // Fisher-Yates, top down.
        for i in (1..PERMUTATION_SIZE).rev() {
            let j = rng.next_index(i + 1);
            array.swap(i, j);
        }
        let array: Box<[u8; PERMUTATION_SIZE * 2]> = Box::new(std::array::from_fn(move |i| array[i & 255]));
        Self {
            array
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        self.array.as_slice()
    }
}
