//! Packed fixed-point complex numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::fixed::Fixed;

/// A complex number with Q32.32 real and imaginary parts.
///
/// The product of two `FixedComplex` values forms each cross product in a
/// 128-bit intermediate before shifting back to Q32.32, mirroring the scalar
/// multiply discipline of [`Fixed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedComplex {
    /// Real part.
    pub re: Fixed,
    /// Imaginary part.
    pub im: Fixed,
}

impl FixedComplex {
    /// 0 + 0i
    pub const ZERO: FixedComplex = FixedComplex {
        re: Fixed::ZERO,
        im: Fixed::ZERO,
    };
    /// 1 + 0i
    pub const ONE: FixedComplex = FixedComplex {
        re: Fixed::ONE,
        im: Fixed::ZERO,
    };
    /// 0 + 1i
    pub const I: FixedComplex = FixedComplex {
        re: Fixed::ZERO,
        im: Fixed::ONE,
    };

    /// Build from real and imaginary parts.
    pub const fn new(re: Fixed, im: Fixed) -> FixedComplex {
        FixedComplex { re, im }
    }

    /// Complex multiply: `(a+bi)(c+di) = (ac−bd) + (ad+bc)i`.
    #[inline]
    pub fn mul(self, rhs: FixedComplex) -> FixedComplex {
        let re = (self.re.0 as i128 * rhs.re.0 as i128 - self.im.0 as i128 * rhs.im.0 as i128)
            >> Fixed::FRAC_BITS;
        let im = (self.re.0 as i128 * rhs.im.0 as i128 + self.im.0 as i128 * rhs.re.0 as i128)
            >> Fixed::FRAC_BITS;
        FixedComplex::new(Fixed(re as i64), Fixed(im as i64))
    }

    /// Componentwise sum.
    #[inline]
    pub fn add(self, rhs: FixedComplex) -> FixedComplex {
        FixedComplex::new(self.re + rhs.re, self.im + rhs.im)
    }

    /// Complex conjugate.
    #[inline]
    pub fn conj(self) -> FixedComplex {
        FixedComplex::new(self.re, -self.im)
    }

    /// Negate both parts.
    #[inline]
    pub fn neg(self) -> FixedComplex {
        FixedComplex::new(-self.re, -self.im)
    }

    /// Multiply by the imaginary unit: `(a+bi)·i = -b + ai`.
    ///
    /// Done on the parts directly; the general multiply would round twice
    /// for what is just a component swap.
    #[inline]
    pub fn mul_i(self) -> FixedComplex {
        FixedComplex::new(-self.im, self.re)
    }

    /// Scale both parts by a real factor.
    #[inline]
    pub fn scale(self, k: Fixed) -> FixedComplex {
        FixedComplex::new(self.re.mul(k), self.im.mul(k))
    }

    /// `re² + im²`, computed without a square root.
    #[inline]
    pub fn magnitude_squared(self) -> Fixed {
        self.re.square() + self.im.square()
    }

    /// `e^{iθ} = cos θ + i sin θ` via the fixed-point trig kernel.
    pub fn from_phase(theta: Fixed) -> FixedComplex {
        FixedComplex::new(theta.cos(), theta.sin())
    }
}

impl fmt::Display for FixedComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.0 < 0 {
            write!(f, "{}-{}i", self.re, Fixed(-self.im.0))
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fc(re: f64, im: f64) -> FixedComplex {
        FixedComplex::new(Fixed::from_f64(re), Fixed::from_f64(im))
    }

    #[test]
    fn mul_matches_float_reference() {
        let a = fc(1.0, 2.0);
        let b = fc(3.0, -1.0);
        // (1+2i)(3-i) = 5 + 5i
        let p = a.mul(b);
        assert!((p.re.to_f64() - 5.0).abs() < 1e-6);
        assert!((p.im.to_f64() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn mul_i_is_quarter_turn() {
        let a = fc(0.5, -0.25);
        let turned = a.mul_i();
        assert_eq!(turned, a.mul(FixedComplex::I));
        // Four quarter turns restore the input exactly.
        assert_eq!(a.mul_i().mul_i().mul_i().mul_i(), a);
    }

    #[test]
    fn conj_negates_imaginary() {
        let a = fc(0.75, 0.5);
        assert_eq!(a.conj().im, -a.im);
        assert_eq!(a.conj().re, a.re);
    }

    #[test]
    fn magnitude_squared_of_unit_phase() {
        let p = FixedComplex::from_phase(Fixed::from_f64(0.7));
        assert!((p.magnitude_squared().to_f64() - 1.0).abs() < 3e-3);
    }
}
