//! Pure amplitude-level gate arithmetic.
//!
//! Each function here is the mathematical core of one or more catalog
//! entries, written once over [`Amplitude`] with no logging and no qubit
//! bookkeeping. The logged entry points in [`crate::apply`] and the topology
//! applicator both build on these.

use alsvid_amp::{Amplitude, Real};

/// Multiply by `e^{iθ}`.
#[inline]
pub fn phase<A: Amplitude>(a: A, theta: A::Real) -> A {
    a.mul(A::from_phase(theta))
}

/// Axis rotation: multiply by `e^{iθ/2}`.
///
/// In this single-amplitude model all three axes reduce to the same phase
/// multiply; there is no second basis amplitude for the X/Y mixing terms to
/// act on.
#[inline]
pub fn rotation<A: Amplitude>(a: A, theta: A::Real) -> A {
    phase(a, theta.half())
}

/// Superposition scale: multiply by `1/√2`.
#[inline]
pub fn hadamard<A: Amplitude>(a: A) -> A {
    a.scale(<A::Real>::SQRT2_INV)
}

/// Multiply by `(1+i)/√2`.
#[inline]
pub fn sqrt_x<A: Amplitude>(a: A) -> A {
    a.mul(A::new(<A::Real>::SQRT2_INV, <A::Real>::SQRT2_INV))
}

/// Exchange two amplitudes.
#[inline]
pub fn swap<A: Amplitude>(a: A, b: A) -> (A, A) {
    (b, a)
}

/// Exchange with a quarter turn on each side.
#[inline]
pub fn imaginary_swap<A: Amplitude>(a: A, b: A) -> (A, A) {
    (b.mul_i(), a.mul_i())
}

/// Half-way swap: `½(a+b ± i(a−b))`.
pub fn sqrt_swap<A: Amplitude>(a: A, b: A) -> (A, A) {
    let sum = a.add(b);
    let idiff = a.add(b.neg()).mul_i();
    let half = <A::Real>::HALF;
    (sum.add(idiff).scale(half), sum.add(idiff.neg()).scale(half))
}

/// Half-way imaginary swap: `(a+ib)/√2, (b+ia)/√2`.
pub fn sqrt_iswap<A: Amplitude>(a: A, b: A) -> (A, A) {
    let k = <A::Real>::SQRT2_INV;
    (a.add(b.mul_i()).scale(k), b.add(a.mul_i()).scale(k))
}

/// Interpolated swap: identity at α = 0, full swap at α = 1.
pub fn swap_pow<A: Amplitude>(a: A, b: A, alpha: A::Real) -> (A, A) {
    let turn = A::from_phase(alpha.mul(<A::Real>::FRAC_PI_2));
    let (c, s) = (turn.re(), turn.im());
    (a.scale(c).add(b.scale(s)), b.scale(c).add(a.scale(s)))
}

/// Real plane rotation mixing the two amplitudes.
pub fn givens<A: Amplitude>(a: A, b: A, theta: A::Real) -> (A, A) {
    let turn = A::from_phase(theta);
    let (c, s) = (turn.re(), turn.im());
    (
        a.scale(c).add(b.scale(s).neg()),
        a.scale(s).add(b.scale(c)),
    )
}

/// Symmetric two-body coupling: `e^{iθ}` to both sides (XX, ZZ).
pub fn symmetric_coupling<A: Amplitude>(a: A, b: A, theta: A::Real) -> (A, A) {
    let p = A::from_phase(theta);
    (a.mul(p), b.mul(p))
}

/// Skew two-body coupling: `e^{iθ}` to the first side, its conjugate to the
/// second (YY, XYZ).
pub fn skew_coupling<A: Amplitude>(a: A, b: A, theta: A::Real) -> (A, A) {
    let p = A::from_phase(theta);
    (a.mul(p), b.mul(p.conj()))
}

/// Echoed coupling: phase then conjugate phase on each side, in sequence.
///
/// Algebraically a refocusing identity; in the fixed backend the two rounding
/// passes are kept, as the sequence — not the closed form — is the contract.
pub fn echoed_coupling<A: Amplitude>(a: A, b: A, theta: A::Real) -> (A, A) {
    let p = A::from_phase(theta);
    (a.mul(p).mul(p.conj()), b.mul(p.conj()).mul(p))
}

/// Fermionic exchange: swap, then negate the first side.
#[inline]
pub fn fermion_swap<A: Amplitude>(a: A, b: A) -> (A, A) {
    (b.neg(), a)
}
