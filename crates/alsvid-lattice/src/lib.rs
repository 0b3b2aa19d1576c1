//! `alsvid-lattice` — topology generation and bulk entanglement.
//!
//! Wires many single-amplitude qubits into geometric interaction graphs and
//! walks them with entangling gate sequences:
//!
//! - **Combinational patterns** ([`Pattern`]) — tessellated triangles,
//!   hexagon rings, hex-rhombi fans, E8 full pairwise, flower-of-life and
//!   Metatron's-cube spokes — generated from a qubit count alone.
//! - **Geometric lattices** ([`GeoPattern`]) — FCC, HCP, projected E8, D4,
//!   B5, projected E5 — generated from 3/4/5-dimensional positions by
//!   epsilon-neighbor proximity on squared distances (no square root, so the
//!   fixed-point backend runs the same code).
//! - **The applicator** ([`engine`]) — walks units in generation order,
//!   emits one symbolic record per unit, and exposes the single generic
//!   copy-in → apply → copy-out dispatch path over a boundary transport.
//!
//! # Quick start
//!
//! ```rust
//! use alsvid_lattice::{Pattern, engine};
//! use alsvid_gates::{MemorySink, Qubit};
//! use num_complex::Complex64;
//!
//! let sink = MemorySink::new();
//! let mut qubits: Vec<Qubit<Complex64>> = (0..19)
//!     .map(|i| Qubit::new(i as u64, format!("petal{i}"), Complex64::new(1.0, 0.0)))
//!     .collect();
//!
//! engine::apply_pattern(&mut qubits, Pattern::FlowerOfLife, &sink).unwrap();
//!
//! // One record for the whole 19-qubit unit.
//! assert_eq!(sink.len(), 1);
//! assert_eq!(sink.last().unwrap().gate, "FLOWER");
//! ```

pub mod engine;
pub mod error;
pub mod lattice;
pub mod marshal;
pub mod position;
pub mod qrng;
pub mod topology;

pub use engine::{Request, apply_pattern, apply_topology, apply_unit, dispatch, dispatch_lattice};
pub use error::{LatticeError, LatticeResult};
pub use lattice::{GeoPattern, b5, d4, e5_projected, e8_projected, fcc, hcp};
pub use marshal::{BoundaryError, BoundaryTransport, Loopback};
pub use position::{Positioned, distance_squared, epsilon_edges};
pub use qrng::qrng_range;
pub use topology::{Pattern, Topology, Unit, full_pairwise, ring, star};
