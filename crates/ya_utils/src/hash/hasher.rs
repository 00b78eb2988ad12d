//! Build-hasher states for the shared containers.
//!
//! - [`FixedHashState`]: `foldhash` with a constant seed, for member-name
//!   tables. Hashes do not change between runs.
//! - [`NoOpHashState`]: passes an already uniform `u64` through, for
//!   `TypeId` keys.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHashState

const SEED: FixedState = FixedState::with_seed(0x5A17_C0DE_93E1_4B27);

/// The hasher built by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// `foldhash` seeded with a constant.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use ya_utils::hash::FixedHashState;
///
/// assert_eq!(FixedHashState.hash_one("x"), FixedHashState.hash_one("x"));
/// assert_ne!(FixedHashState.hash_one("x"), FixedHashState.hash_one("y"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        SEED.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHashState

/// Keeps the last `u64` written as the hash.
///
/// Byte writes are folded in, so keys that do not hash as a single `u64`
/// still work, only less well distributed.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher(u64);

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes.iter().rev() {
            self.0 = self.0.rotate_left(8).wrapping_add(u64::from(byte));
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }
}

/// Builds [`NoOpHasher`]s, for keys such as `TypeId` that are hashes already.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use ya_utils::hash::NoOpHashState;
///
/// let mut hasher = NoOpHashState.build_hasher();
/// 0xABCD_u64.hash(&mut hasher);
/// assert_eq!(hasher.finish(), 0xABCD);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher(0)
    }
}
