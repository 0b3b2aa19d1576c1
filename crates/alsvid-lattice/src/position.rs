//! Positioned qubits and geometric neighbor graphs.
//!
//! Geometric lattices pair each qubit with an immutable 3-, 4-, or
//! 5-dimensional coordinate. Proximity is always decided on *squared*
//! distances against a precomputed ε² — the fixed-point backend has no
//! square root, and none is needed.

use alsvid_amp::{Amplitude, Real};
use alsvid_gates::Qubit;

use crate::error::{LatticeResult, try_vec};

/// A qubit at an immutable point in `D`-dimensional space.
#[derive(Debug, Clone, PartialEq)]
pub struct Positioned<A: Amplitude, const D: usize> {
    /// The qubit; its amplitude is mutated by lattice application.
    pub qubit: Qubit<A>,
    /// Coordinates, read-only input to distance computation.
    pub coords: [A::Real; D],
}

impl<A: Amplitude, const D: usize> Positioned<A, D> {
    /// Pair a qubit with its coordinates.
    pub fn new(qubit: Qubit<A>, coords: [A::Real; D]) -> Self {
        Self { qubit, coords }
    }
}

/// Squared Euclidean distance: per-axis squared differences, summed.
pub fn distance_squared<R: Real, const D: usize>(a: &[R; D], b: &[R; D]) -> R {
    let mut sum = R::ZERO;
    for axis in 0..D {
        sum = sum.add(a[axis].sub(b[axis]).square());
    }
    sum
}

/// Epsilon-neighbor graph: every `i < j` pair whose squared distance is
/// within `eps_squared`, boundary inclusive, in scan order.
///
/// Two passes: count, then fill a buffer of exactly that size, so the only
/// allocation is fallible and sized up front.
pub fn epsilon_edges<A: Amplitude, const D: usize>(
    sites: &[Positioned<A, D>],
    eps_squared: A::Real,
) -> LatticeResult<Vec<(usize, usize)>> {
    let mut count = 0usize;
    for i in 0..sites.len() {
        for j in (i + 1)..sites.len() {
            if distance_squared(&sites[i].coords, &sites[j].coords) <= eps_squared {
                count += 1;
            }
        }
    }

    let mut edges = try_vec(count)?;
    for i in 0..sites.len() {
        for j in (i + 1)..sites.len() {
            if distance_squared(&sites[i].coords, &sites[j].coords) <= eps_squared {
                edges.push((i, j));
            }
        }
    }
    Ok(edges)
}
