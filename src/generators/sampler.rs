// src/generators/sampler.rs
use rand::rngs::OsRng;
use rand_core::RngCore;

use crate::error::{EngineError, Result};

/// Narrow interface over a cryptographically secure byte source.
///
/// Everything random in the engine flows through [`SecureSampler`], which in
/// turn only ever calls `draw_bytes`. Tests substitute a seeded source; the
/// production source is the OS CSPRNG and nothing weaker.
pub trait EntropySource {
    fn draw_bytes(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Production entropy source backed by the operating system CSPRNG.
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn draw_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| EngineError::EntropyUnavailable(e.to_string()))
    }
}

/// Uniform sampling primitives over an entropy source.
///
/// Indices are drawn by rejection sampling on 32-bit values: draws that fall
/// into the truncated tail of the range are discarded and redrawn, so no
/// residue class of `n` is favored.
pub struct SecureSampler<S: EntropySource> {
    source: S,
}

impl<S: EntropySource> SecureSampler<S> {
    pub fn new(source: S) -> Self {
        SecureSampler { source }
    }

    /// Draw a uniform index in `[0, n)`.
    pub fn uniform_index(&mut self, n: usize) -> Result<usize> {
        if n == 0 {
            return Err(EngineError::InvalidPolicy(
                "cannot sample from an empty range".to_string(),
            ));
        }
        if n == 1 {
            return Ok(0);
        }
        debug_assert!(n <= u32::MAX as usize);

        // Largest multiple of n representable in 32 bits; values at or above
        // it would wrap unevenly under the modulo.
        let n = n as u64;
        let cutoff = (1u64 << 32) - ((1u64 << 32) % n);

        let mut buf = [0u8; 4];
        loop {
            self.source.draw_bytes(&mut buf)?;
            let value = u32::from_be_bytes(buf) as u64;
            if value < cutoff {
                return Ok((value % n) as usize);
            }
        }
    }

    /// Pick a uniform element of a non-empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        let idx = self.uniform_index(items.len())?;
        Ok(&items[idx])
    }

    /// Draw a uniform decimal digit.
    pub fn digit(&mut self) -> Result<char> {
        let idx = self.uniform_index(10)?;
        Ok((b'0' + idx as u8) as char)
    }

    /// Unbiased Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) -> Result<()> {
        for i in (1..items.len()).rev() {
            let j = self.uniform_index(i + 1)?;
            items.swap(i, j);
        }
        Ok(())
    }
}

/// Deterministic entropy source for tests, seeded per test case.
#[cfg(test)]
pub(crate) struct SeededEntropy(rand_chacha::ChaCha20Rng);

#[cfg(test)]
impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        use rand_core::SeedableRng;
        SeededEntropy(rand_chacha::ChaCha20Rng::seed_from_u64(seed))
    }
}

#[cfg(test)]
impl EntropySource for SeededEntropy {
    fn draw_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        self.0.fill_bytes(buf);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed byte script, then fails.
    struct ScriptedEntropy {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl EntropySource for ScriptedEntropy {
        fn draw_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
            if self.pos + buf.len() > self.bytes.len() {
                return Err(EngineError::EntropyUnavailable(
                    "script exhausted".to_string(),
                ));
            }
            buf.copy_from_slice(&self.bytes[self.pos..self.pos + buf.len()]);
            self.pos += buf.len();
            Ok(())
        }
    }

    #[test]
    fn uniform_index_stays_in_range_and_covers_it() {
        let mut sampler = SecureSampler::new(SeededEntropy::new(7));
        let mut seen = [false; 7];
        for _ in 0..1000 {
            let idx = sampler.uniform_index(7).unwrap();
            assert!(idx < 7);
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn uniform_index_rejects_empty_range() {
        let mut sampler = SecureSampler::new(SeededEntropy::new(0));
        assert!(matches!(
            sampler.uniform_index(0),
            Err(EngineError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn uniform_index_single_element_draws_no_entropy() {
        // A script with no bytes would fail on any draw.
        let mut sampler = SecureSampler::new(ScriptedEntropy { bytes: vec![], pos: 0 });
        assert_eq!(sampler.uniform_index(1).unwrap(), 0);
    }

    #[test]
    fn biased_draws_are_rejected_and_redrawn() {
        // For n = 3 the cutoff is 2^32 - 1, so the all-ones draw must be
        // rejected; the next draw (5) maps to 5 % 3 = 2.
        let mut sampler = SecureSampler::new(ScriptedEntropy {
            bytes: vec![0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x05],
            pos: 0,
        });
        assert_eq!(sampler.uniform_index(3).unwrap(), 2);
    }

    #[test]
    fn entropy_failure_propagates() {
        let mut sampler = SecureSampler::new(ScriptedEntropy { bytes: vec![], pos: 0 });
        assert!(matches!(
            sampler.uniform_index(5),
            Err(EngineError::EntropyUnavailable(_))
        ));
    }

    #[test]
    fn shuffle_produces_a_permutation() {
        let mut sampler = SecureSampler::new(SeededEntropy::new(42));
        let mut items: Vec<u32> = (0..64).collect();
        sampler.shuffle(&mut items).unwrap();
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..64).collect::<Vec<u32>>());
        // A 64-element shuffle landing back on the identity would be
        // astronomically unlikely for this seed.
        assert_ne!(items, (0..64).collect::<Vec<u32>>());
    }

    #[test]
    fn digit_is_always_decimal() {
        let mut sampler = SecureSampler::new(SeededEntropy::new(3));
        for _ in 0..100 {
            assert!(sampler.digit().unwrap().is_ascii_digit());
        }
    }
}
