//! Quantum-style range sampling.
//!
//! Models a one-bit measurement per draw: each sample collapses to either
//! end of the configured range. The randomness source is caller-supplied so
//! embedders can wire in hardware entropy and tests can seed a `StdRng`.

use rand::Rng;

use crate::error::{LatticeError, LatticeResult, try_vec};

/// Draw `count` samples, each collapsing to `min` or `max`.
pub fn qrng_range<R: Rng + ?Sized>(
    min: u64,
    max: u64,
    count: usize,
    rng: &mut R,
) -> LatticeResult<Vec<u64>> {
    if min >= max {
        return Err(LatticeError::InvalidRange { min, max });
    }
    if count == 0 {
        return Err(LatticeError::EmptyDraw);
    }

    let mut out = try_vec(count)?;
    for _ in 0..count {
        let bit = rng.gen_range(0..=1u8);
        out.push(if bit == 0 { min } else { max });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn samples_collapse_to_range_ends() {
        let mut rng = StdRng::seed_from_u64(0xA15);
        let samples = qrng_range(3, 9, 64, &mut rng).unwrap();
        assert_eq!(samples.len(), 64);
        assert!(samples.iter().all(|&s| s == 3 || s == 9));
        // A seeded 64-draw run lands on both ends.
        assert!(samples.iter().any(|&s| s == 3));
        assert!(samples.iter().any(|&s| s == 9));
    }

    #[test]
    fn inverted_range_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            qrng_range(9, 3, 4, &mut rng).unwrap_err(),
            LatticeError::InvalidRange { min: 9, max: 3 }
        );
        assert_eq!(
            qrng_range(5, 5, 4, &mut rng).unwrap_err(),
            LatticeError::InvalidRange { min: 5, max: 5 }
        );
    }

    #[test]
    fn zero_draws_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            qrng_range(0, 1, 0, &mut rng).unwrap_err(),
            LatticeError::EmptyDraw
        );
    }
}
