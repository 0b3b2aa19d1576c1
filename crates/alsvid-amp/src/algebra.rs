//! The dual amplitude algebra: one operation set, two arithmetic backends.
//!
//! Gate code is written once against [`Amplitude`] and never branches on the
//! backend. The float backend is [`num_complex::Complex64`] for contexts with
//! native transcendental support; the fixed backend is
//! [`FixedComplex`](crate::FixedComplex) for integer-only contexts.

use num_complex::Complex64;
use std::fmt;

use crate::complex::FixedComplex;
use crate::fixed::Fixed;

/// Scalar abstraction shared by both backends.
///
/// `square` goes through the widened multiply in the fixed implementation, so
/// distance and magnitude computations never overflow before their corrective
/// shift.
pub trait Real: Copy + PartialOrd + fmt::Debug {
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// 0.5
    const HALF: Self;
    /// 1/√2
    const SQRT2_INV: Self;
    /// π/2
    const FRAC_PI_2: Self;
    /// Control cutoff as magnitude-squared: 0.25, i.e. |amplitude| = 0.5.
    ///
    /// Compared against magnitude-squared in both backends so the fixed
    /// backend never needs a square root.
    const CONTROL_THRESHOLD_SQ: Self;

    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    fn neg(self) -> Self;
    /// `self * self`.
    fn square(self) -> Self;
    /// `self / 2`.
    fn half(self) -> Self;
    /// Lossy conversion from a native float (used for configured constants).
    fn from_f64(v: f64) -> Self;
    /// Lossy conversion to a native float (used at the boundary and in logs).
    fn to_f64(self) -> f64;
}

impl Real for f64 {
    const ZERO: f64 = 0.0;
    const ONE: f64 = 1.0;
    const HALF: f64 = 0.5;
    const SQRT2_INV: f64 = std::f64::consts::FRAC_1_SQRT_2;
    const FRAC_PI_2: f64 = std::f64::consts::FRAC_PI_2;
    const CONTROL_THRESHOLD_SQ: f64 = 0.25;

    fn add(self, rhs: f64) -> f64 {
        self + rhs
    }
    fn sub(self, rhs: f64) -> f64 {
        self - rhs
    }
    fn mul(self, rhs: f64) -> f64 {
        self * rhs
    }
    fn neg(self) -> f64 {
        -self
    }
    fn square(self) -> f64 {
        self * self
    }
    fn half(self) -> f64 {
        self * 0.5
    }
    fn from_f64(v: f64) -> f64 {
        v
    }
    fn to_f64(self) -> f64 {
        self
    }
}

impl Real for Fixed {
    const ZERO: Fixed = Fixed::ZERO;
    const ONE: Fixed = Fixed::ONE;
    const HALF: Fixed = Fixed::HALF;
    const SQRT2_INV: Fixed = Fixed::SQRT2_INV;
    const FRAC_PI_2: Fixed = Fixed::FRAC_PI_2;
    const CONTROL_THRESHOLD_SQ: Fixed = Fixed(1 << 30);

    fn add(self, rhs: Fixed) -> Fixed {
        self + rhs
    }
    fn sub(self, rhs: Fixed) -> Fixed {
        self - rhs
    }
    fn mul(self, rhs: Fixed) -> Fixed {
        Fixed::mul(self, rhs)
    }
    fn neg(self) -> Fixed {
        -self
    }
    fn square(self) -> Fixed {
        Fixed::square(self)
    }
    fn half(self) -> Fixed {
        // Arithmetic shift, matching the kernel convention for θ/2.
        Fixed(self.0 >> 1)
    }
    fn from_f64(v: f64) -> Fixed {
        Fixed::from_f64(v)
    }
    fn to_f64(self) -> f64 {
        Fixed::to_f64(self)
    }
}

/// Complex amplitude abstraction over both backends.
///
/// No operation here assumes normalization; gate sequences may drift the
/// magnitude freely.
pub trait Amplitude: Copy + PartialEq + fmt::Debug {
    /// Scalar type of this backend.
    type Real: Real;

    /// 0 + 0i
    const ZERO: Self;
    /// 1 + 0i
    const ONE: Self;

    fn new(re: Self::Real, im: Self::Real) -> Self;
    fn re(self) -> Self::Real;
    fn im(self) -> Self::Real;

    fn conj(self) -> Self;
    fn add(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    /// Scale both parts by a real factor.
    fn scale(self, k: Self::Real) -> Self;
    /// Negate both parts.
    fn neg(self) -> Self;
    /// Multiply by the imaginary unit, as a direct component swap in both
    /// backends rather than a general complex multiply.
    fn mul_i(self) -> Self;
    /// `re² + im²` — never the square-rooted magnitude.
    fn magnitude_squared(self) -> Self::Real;
    /// `e^{iθ} = cos θ + i sin θ`.
    fn from_phase(theta: Self::Real) -> Self;

    /// Threshold test used by every controlled gate: does this amplitude
    /// count as a logical "1"? Strictly above the shared cutoff; exactly at
    /// threshold is inactive.
    fn control_active(self) -> bool {
        self.magnitude_squared() > Self::Real::CONTROL_THRESHOLD_SQ
    }
}

impl Amplitude for Complex64 {
    type Real = f64;

    const ZERO: Complex64 = Complex64 { re: 0.0, im: 0.0 };
    const ONE: Complex64 = Complex64 { re: 1.0, im: 0.0 };

    fn new(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }
    fn re(self) -> f64 {
        self.re
    }
    fn im(self) -> f64 {
        self.im
    }
    fn conj(self) -> Complex64 {
        Complex64::conj(&self)
    }
    fn add(self, rhs: Complex64) -> Complex64 {
        self + rhs
    }
    fn mul(self, rhs: Complex64) -> Complex64 {
        self * rhs
    }
    fn scale(self, k: f64) -> Complex64 {
        self * k
    }
    fn neg(self) -> Complex64 {
        -self
    }
    fn mul_i(self) -> Complex64 {
        Complex64::new(-self.im, self.re)
    }
    fn magnitude_squared(self) -> f64 {
        self.norm_sqr()
    }
    fn from_phase(theta: f64) -> Complex64 {
        Complex64::new(theta.cos(), theta.sin())
    }
}

impl Amplitude for FixedComplex {
    type Real = Fixed;

    const ZERO: FixedComplex = FixedComplex::ZERO;
    const ONE: FixedComplex = FixedComplex::ONE;

    fn new(re: Fixed, im: Fixed) -> FixedComplex {
        FixedComplex::new(re, im)
    }
    fn re(self) -> Fixed {
        self.re
    }
    fn im(self) -> Fixed {
        self.im
    }
    fn conj(self) -> FixedComplex {
        FixedComplex::conj(self)
    }
    fn add(self, rhs: FixedComplex) -> FixedComplex {
        FixedComplex::add(self, rhs)
    }
    fn mul(self, rhs: FixedComplex) -> FixedComplex {
        FixedComplex::mul(self, rhs)
    }
    fn scale(self, k: Fixed) -> FixedComplex {
        FixedComplex::scale(self, k)
    }
    fn neg(self) -> FixedComplex {
        FixedComplex::neg(self)
    }
    fn mul_i(self) -> FixedComplex {
        FixedComplex::mul_i(self)
    }
    fn magnitude_squared(self) -> Fixed {
        FixedComplex::magnitude_squared(self)
    }
    fn from_phase(theta: Fixed) -> FixedComplex {
        FixedComplex::from_phase(theta)
    }
}
