//! Float ⇄ fixed conversions for the trust boundary.
//!
//! Qubit records cross the boundary in whichever representation the peer
//! context uses; these conversions are the only place the two backends meet.
//! Both directions are lossy in the last fractional bits, which is acceptable
//! at the boundary — the engine itself never converts mid-computation.

use num_complex::Complex64;

use crate::complex::FixedComplex;
use crate::fixed::Fixed;

impl From<FixedComplex> for Complex64 {
    fn from(c: FixedComplex) -> Complex64 {
        Complex64::new(c.re.to_f64(), c.im.to_f64())
    }
}

impl From<Complex64> for FixedComplex {
    fn from(c: Complex64) -> FixedComplex {
        FixedComplex::new(Fixed::from_f64(c.re), Fixed::from_f64(c.im))
    }
}

impl From<Fixed> for f64 {
    fn from(v: Fixed) -> f64 {
        v.to_f64()
    }
}

impl From<f64> for Fixed {
    fn from(v: f64) -> Fixed {
        Fixed::from_f64(v)
    }
}
