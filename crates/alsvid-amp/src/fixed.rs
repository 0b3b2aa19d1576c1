//! Q32.32 fixed-point scalar arithmetic.
//!
//! [`Fixed`] is a signed 64-bit value with 32 integer and 32 fractional bits
//! (1.0 = 2^32). It is the scalar type of the integer-native amplitude
//! backend, for execution contexts without floating-point or transcendental
//! support.
//!
//! Every multiplication goes through [`Fixed::mul`], which widens to 128 bits
//! before the corrective shift. Multiplying two raw Q32.32 words in native
//! width overflows for any operand pair above ~1.0, so no other code path may
//! multiply the inner representation directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A Q32.32 fixed-point number.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fixed(pub i64);

impl Fixed {
    /// Number of fractional bits.
    pub const FRAC_BITS: u32 = 32;

    /// 0.0
    pub const ZERO: Fixed = Fixed(0);
    /// 1.0
    pub const ONE: Fixed = Fixed(1 << 32);
    /// 0.5
    pub const HALF: Fixed = Fixed(1 << 31);
    /// π
    pub const PI: Fixed = Fixed(13_493_037_704);
    /// 2π, kept as `PI << 1` so angle reduction lands where the constants say.
    pub const TAU: Fixed = Fixed(13_493_037_704 << 1);
    /// π/2
    pub const FRAC_PI_2: Fixed = Fixed(6_746_518_852);
    /// 1/√2
    pub const SQRT2_INV: Fixed = Fixed(3_037_000_499);

    /// Convert from a native float, truncating toward zero.
    pub fn from_f64(v: f64) -> Fixed {
        Fixed((v * (1u64 << 32) as f64) as i64)
    }

    /// Convert to a native float.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u64 << 32) as f64
    }

    /// Fixed-point multiply with a widened 128-bit intermediate.
    ///
    /// This is the single multiplication primitive; all higher layers build
    /// on it.
    #[inline]
    pub fn mul(self, rhs: Fixed) -> Fixed {
        Fixed(((self.0 as i128 * rhs.0 as i128) >> Self::FRAC_BITS) as i64)
    }

    /// `self * self` through the widened multiply.
    #[inline]
    pub fn square(self) -> Fixed {
        self.mul(self)
    }

    /// Reduce an angle into `[-π, π]`.
    ///
    /// Modulo arithmetic rather than repeated add/subtract, so reduction
    /// terminates in constant time for any finite input.
    pub fn wrap_angle(self) -> Fixed {
        let tau = Self::TAU.0 as i128;
        let shifted = (self.0 as i128 + Self::PI.0 as i128).rem_euclid(tau);
        Fixed((shifted - Self::PI.0 as i128) as i64)
    }

    /// Cosine via truncated Taylor series.
    ///
    /// The angle is reduced to `[-π, π]`, folded into `[-π/2, π/2]` with
    /// `cos(x) = -cos(π - x)`, then evaluated through the x⁶/720 term. The
    /// folded series stays within 1e-3 of reference cosine; callers must
    /// treat the result as an approximation, not exact trigonometry.
    pub fn cos(self) -> Fixed {
        let (x, negate) = fold_half_pi(self.wrap_angle());

        let x2 = x.square();
        let x4 = x2.square();
        let x6 = x4.mul(x2);

        let series = Fixed(Self::ONE.0 - x2.0 / 2 + x4.0 / 24 - x6.0 / 720);
        if negate { -series } else { series }
    }

    /// Sine via truncated Taylor series through the x⁷/5040 term.
    ///
    /// Same reduction and folding as [`Fixed::cos`]; `sin(x) = sin(π - x)`,
    /// so no sign flip is needed on the folded half.
    pub fn sin(self) -> Fixed {
        let (x, _) = fold_half_pi(self.wrap_angle());

        let x2 = x.square();
        let x3 = x2.mul(x);
        let x5 = x3.mul(x2);
        let x7 = x5.mul(x2);

        Fixed(x.0 - x3.0 / 6 + x5.0 / 120 - x7.0 / 5040)
    }
}

/// Fold a `[-π, π]` angle into `[-π/2, π/2]`.
///
/// Returns the folded angle and whether cosine changes sign on this fold.
fn fold_half_pi(x: Fixed) -> (Fixed, bool) {
    if x.0 > Fixed::FRAC_PI_2.0 {
        (Fixed(Fixed::PI.0 - x.0), true)
    } else if x.0 < -Fixed::FRAC_PI_2.0 {
        (Fixed(-Fixed::PI.0 - x.0), true)
    } else {
        (x, false)
    }
}

impl Add for Fixed {
    type Output = Fixed;
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 + rhs.0)
    }
}

impl Sub for Fixed {
    type Output = Fixed;
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 - rhs.0)
    }
}

impl Neg for Fixed {
    type Output = Fixed;
    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.9}", self.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_round_trip() {
        assert!((Fixed::ONE.to_f64() - 1.0).abs() < 1e-9);
        assert!((Fixed::PI.to_f64() - std::f64::consts::PI).abs() < 1e-9);
        assert!((Fixed::SQRT2_INV.to_f64() - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn mul_matches_float_reference() {
        let a = Fixed::from_f64(1.25);
        let b = Fixed::from_f64(-0.5);
        assert!((a.mul(b).to_f64() - (-0.625)).abs() < 1e-9);
    }

    #[test]
    fn square_is_self_multiply() {
        let a = Fixed::from_f64(3.0);
        assert_eq!(a.square(), a.mul(a));
    }

    #[test]
    fn wrap_angle_reduces_large_inputs() {
        let three_pi = Fixed(Fixed::PI.0 * 3);
        let wrapped = three_pi.wrap_angle();
        assert!(wrapped.0 >= -Fixed::PI.0 && wrapped.0 <= Fixed::PI.0);
        assert!((wrapped.to_f64().abs() - std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn wrap_angle_terminates_on_extremes() {
        // Would spin for minutes under repeated subtraction.
        let wrapped = Fixed(i64::MAX).wrap_angle();
        assert!(wrapped.0 >= -Fixed::PI.0 && wrapped.0 <= Fixed::PI.0);
        let wrapped = Fixed(i64::MIN).wrap_angle();
        assert!(wrapped.0 >= -Fixed::PI.0 && wrapped.0 <= Fixed::PI.0);
    }

    #[test]
    fn trig_error_bounded_over_full_period() {
        // 1e-3 contract from the approximation design; sampled densely.
        let mut theta = -std::f64::consts::PI;
        while theta <= std::f64::consts::PI {
            let fp = Fixed::from_f64(theta);
            assert!(
                (fp.cos().to_f64() - theta.cos()).abs() <= 1e-3,
                "cos({theta}) out of tolerance"
            );
            assert!(
                (fp.sin().to_f64() - theta.sin()).abs() <= 1e-3,
                "sin({theta}) out of tolerance"
            );
            theta += 0.01;
        }
    }

    #[test]
    fn cos_of_zero_is_one() {
        assert_eq!(Fixed::ZERO.cos(), Fixed::ONE);
        assert_eq!(Fixed::ZERO.sin(), Fixed::ZERO);
    }
}
