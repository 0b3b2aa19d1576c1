//! `alsvid-amp` — dual-backend complex amplitude algebra.
//!
//! The numeric foundation of Alsvid: a complex-amplitude operation set that
//! runs identically in two execution contexts with different arithmetic
//! capability.
//!
//! - **Float backend** — [`num_complex::Complex64`], for contexts with native
//!   floating-point and transcendental support.
//! - **Fixed backend** — [`FixedComplex`] over the Q32.32 [`Fixed`] kernel,
//!   for integer-native contexts with no trig and no square root.
//!
//! Upper layers (the gate catalog, the topology engine) are generic over
//! [`Amplitude`] and compile once against both backends.
//!
//! # Quick start
//!
//! ```rust
//! use alsvid_amp::{Amplitude, Fixed, FixedComplex};
//! use num_complex::Complex64;
//!
//! // Same phase rotation, both backends.
//! let f = Complex64::ONE.mul(Complex64::from_phase(0.25));
//! let q = FixedComplex::ONE.mul(FixedComplex::from_phase(Fixed::from_f64(0.25)));
//!
//! assert!((f.re - q.re.to_f64()).abs() < 1e-3);
//! ```

pub mod algebra;
pub mod complex;
pub mod convert;
pub mod fixed;

pub use algebra::{Amplitude, Real};
pub use complex::FixedComplex;
pub use fixed::Fixed;
