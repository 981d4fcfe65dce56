/// Minimal pseudo-random source for the background fade
use std::time::{SystemTime, UNIX_EPOCH};

/// Xorshift64 PRNG (Marsaglia 2003).
///
/// Period is 2<sup>64</sup>-1; the state must never be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xorshift64(u64);

impl Xorshift64 {
    pub const DEFAULT_SEED: u64 = 378682147834061;

    /// A zero seed is replaced by [`Self::DEFAULT_SEED`].
    pub fn from_seed(seed: u64) -> Self {
        if seed == 0 {
            Self(Self::DEFAULT_SEED)
        } else {
            Self(seed)
        }
    }

    /// Seed from the system clock.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(Self::DEFAULT_SEED);
        Self::from_seed(nanos)
    }

    pub fn next_bits(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform byte in 0..=255, taken from the high bits.
    pub fn next_u8(&mut self) -> u8 {
        (self.next_bits() >> 56) as u8
    }
}

impl Default for Xorshift64 {
    fn default() -> Self {
        Self(Self::DEFAULT_SEED)
    }
}
