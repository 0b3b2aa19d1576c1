//! `alsvid-gates` — symbolic qubit model and gate catalog.
//!
//! A qubit here is an identity, a label, and exactly one complex amplitude.
//! The catalog applies unitary-style transformations to one, two, or three
//! such amplitudes, written once over the dual amplitude algebra of
//! [`alsvid_amp`] so the same code runs on the float and fixed backends.
//!
//! Controlled gates decide whether their control counts as a logical "1" by
//! comparing the control's magnitude-squared against a shared 0.25 cutoff —
//! never the square-rooted magnitude, which the fixed backend cannot take.
//!
//! # Quick start
//!
//! ```rust
//! use alsvid_gates::{MemorySink, Qubit, apply};
//! use num_complex::Complex64;
//!
//! let sink = MemorySink::new();
//! let mut q = Qubit::new(1u64, "spin", Complex64::new(1.0, 0.0));
//!
//! apply::hadamard(&mut q, &sink);
//! apply::hadamard(&mut q, &sink);
//!
//! // Two 1/√2 scales are one 0.5 scale; there is no second basis
//! // amplitude, so H is not an involution in this model.
//! assert!((q.amplitude.re - 0.5).abs() < 1e-12);
//! assert_eq!(sink.len(), 2);
//! ```

pub mod apply;
pub mod error;
pub mod event;
pub mod gate;
pub mod ops;
pub mod qubit;

pub use error::{GateError, GateResult};
pub use event::{EventRecord, EventSink, MemorySink, NullSink, TracingSink};
pub use gate::{Axis, Gate};
pub use qubit::{Qubit, QubitId, TAG_MAX_LEN, Tag};
