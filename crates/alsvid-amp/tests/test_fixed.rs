//! Property-based tests for the Q32.32 kernel.

use alsvid_amp::Fixed;
use proptest::prelude::*;

/// Amplitude-scale operands: truncation errors all point the same way, so
/// the two association orders stay within one last-place unit.
fn arb_unit_operand() -> impl Strategy<Value = Fixed> {
    (0.0_f64..1.0).prop_map(Fixed::from_f64)
}

proptest! {
    /// Chained multiplication is associative within one unit in the last
    /// place for amplitude-scale operands.
    #[test]
    fn mul_associative_within_one_ulp(
        a in arb_unit_operand(),
        b in arb_unit_operand(),
        c in arb_unit_operand(),
    ) {
        let left = a.mul(b).mul(c);
        let right = a.mul(b.mul(c));
        prop_assert!((left.0 - right.0).abs() <= 1, "left={left:?} right={right:?}");
    }

    /// Four chained multiplies against the float reference: per-step
    /// truncation of ≤ 2^-32, amplified by the remaining factors.
    #[test]
    fn chained_mul_tracks_reference(
        a in -4.0_f64..4.0,
        b in -4.0_f64..4.0,
        c in -4.0_f64..4.0,
        d in -4.0_f64..4.0,
    ) {
        let chained = Fixed::from_f64(a)
            .mul(Fixed::from_f64(b))
            .mul(Fixed::from_f64(c))
            .mul(Fixed::from_f64(d));
        let reference = a * b * c * d;
        let tolerance = 1e-7 + 1e-8 * reference.abs();
        prop_assert!((chained.to_f64() - reference).abs() <= tolerance);
    }

    /// Float → fixed → float round trip loses at most one fractional bit.
    #[test]
    fn conversion_round_trip(v in -1.0e6_f64..1.0e6) {
        let back = Fixed::from_f64(v).to_f64();
        prop_assert!((back - v).abs() <= 1.0 / (1u64 << 31) as f64 * (1.0 + v.abs()));
    }

    /// Reduction into [-π, π] never leaves the interval, for any finite input.
    #[test]
    fn wrap_angle_stays_in_range(raw in any::<i64>()) {
        let wrapped = Fixed(raw).wrap_angle();
        prop_assert!(wrapped.0 >= -Fixed::PI.0 && wrapped.0 <= Fixed::PI.0);
    }

    /// Trig error bound over the reduced interval.
    #[test]
    fn trig_within_tolerance(theta in -std::f64::consts::PI..std::f64::consts::PI) {
        let fp = Fixed::from_f64(theta);
        prop_assert!((fp.cos().to_f64() - theta.cos()).abs() <= 1e-3);
        prop_assert!((fp.sin().to_f64() - theta.sin()).abs() <= 1e-3);
    }
}

#[test]
fn square_of_negative_is_positive() {
    let v = Fixed::from_f64(-1.01);
    assert!(v.square().0 > 0);
    assert!((v.square().to_f64() - 1.0201).abs() < 1e-6);
}

#[test]
fn trig_on_unreduced_angles() {
    // 7π/2 reduces to -π/2.
    let theta = Fixed::from_f64(7.0 * std::f64::consts::FRAC_PI_2);
    assert!((theta.sin().to_f64() + 1.0).abs() <= 2e-3);
    assert!(theta.cos().to_f64().abs() <= 2e-3);
}
