//! Named geometric lattices.
//!
//! Each lattice is an epsilon-neighbor entanglement over positioned qubits:
//! superposition on every site, then a controlled sign-flip along every pair
//! within the lattice's interaction radius. The radius constants and minimum
//! site counts are part of each lattice's contract.

use alsvid_amp::{Amplitude, Real};
use alsvid_gates::{EventSink, ops};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{LatticeError, LatticeResult};
use crate::position::{Positioned, epsilon_edges};

/// Geometric lattice selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeoPattern {
    /// Face-centered cubic packing, 3D.
    Fcc,
    /// Hexagonal close packing, 3D.
    Hcp,
    /// E8 root system projected to 3D.
    E8Projected,
    /// D4 root lattice, 4D.
    D4,
    /// B5 lattice, 5D.
    B5,
    /// E5 root system projected within 5D.
    E5Projected,
}

impl GeoPattern {
    /// Event-record tag for this lattice.
    pub fn name(&self) -> &'static str {
        match self {
            GeoPattern::Fcc => "FCC_3D",
            GeoPattern::Hcp => "HCP_3D",
            GeoPattern::E8Projected => "E8_PROJECTED",
            GeoPattern::D4 => "D4_LATTICE",
            GeoPattern::B5 => "B5_LATTICE",
            GeoPattern::E5Projected => "E5_PROJECTED",
        }
    }

    /// Selector string accepted by [`GeoPattern::from_str`].
    pub fn selector(&self) -> &'static str {
        match self {
            GeoPattern::Fcc => "fcc",
            GeoPattern::Hcp => "hcp",
            GeoPattern::E8Projected => "e8_projected",
            GeoPattern::D4 => "d4",
            GeoPattern::B5 => "b5",
            GeoPattern::E5Projected => "e5_projected",
        }
    }

    /// Record message for a completed lattice call.
    pub fn message(&self) -> &'static str {
        match self {
            GeoPattern::Fcc => "FCC lattice entangled",
            GeoPattern::Hcp => "HCP lattice entangled",
            GeoPattern::E8Projected => "Projected E8 lattice entanglement",
            GeoPattern::D4 => "D4 lattice entangled in 4D",
            GeoPattern::B5 => "5D B5 lattice entangled",
            GeoPattern::E5Projected => "Projected E5 root lattice entanglement",
        }
    }

    /// Spatial dimension this lattice is defined in.
    pub fn dim(&self) -> usize {
        match self {
            GeoPattern::Fcc | GeoPattern::Hcp | GeoPattern::E8Projected => 3,
            GeoPattern::D4 => 4,
            GeoPattern::B5 | GeoPattern::E5Projected => 5,
        }
    }

    /// Minimum site count for one lattice cell.
    pub fn min_qubits(&self) -> usize {
        match self {
            GeoPattern::Fcc => 14,
            GeoPattern::Hcp => 17,
            GeoPattern::E8Projected => 30,
            GeoPattern::D4 => 24,
            GeoPattern::B5 => 32,
            GeoPattern::E5Projected => 40,
        }
    }

    /// Interaction radius ε; pairs within ε² squared distance couple.
    pub fn epsilon(&self) -> f64 {
        match self {
            GeoPattern::Fcc | GeoPattern::Hcp | GeoPattern::D4 => 1.01,
            GeoPattern::E8Projected | GeoPattern::B5 => 1.00,
            GeoPattern::E5Projected => 1.05,
        }
    }

    /// Apply this lattice to positioned qubits.
    ///
    /// The const dimension of the positions must match [`GeoPattern::dim`];
    /// a mismatch is rejected before any site is touched.
    pub fn apply<A, S, const D: usize>(
        &self,
        sites: &mut [Positioned<A, D>],
        sink: &S,
    ) -> LatticeResult<()>
    where
        A: Amplitude,
        S: EventSink,
    {
        if D != self.dim() {
            return Err(LatticeError::DimensionMismatch {
                pattern: self.selector(),
                expected: self.dim(),
                got: D,
            });
        }
        if sites.len() < self.min_qubits() {
            return Err(LatticeError::InsufficientQubits {
                pattern: self.selector(),
                needed: self.min_qubits(),
                got: sites.len(),
            });
        }

        let eps_squared = <A::Real>::from_f64(self.epsilon()).square();
        let edges = epsilon_edges(sites, eps_squared)?;
        tracing::debug!(
            lattice = self.selector(),
            sites = sites.len(),
            edges = edges.len(),
            "applying geometric lattice"
        );

        for site in sites.iter_mut() {
            site.qubit.amplitude = ops::hadamard(site.qubit.amplitude);
        }
        for (i, j) in edges {
            let active = sites[i].qubit.control_active();
            if active {
                let target = &mut sites[j].qubit;
                target.amplitude = target.amplitude.neg();
            }
        }

        let root = &sites[0].qubit;
        sink.record_event(self.name(), root.id, root.tag.as_str(), self.message());
        Ok(())
    }
}

impl FromStr for GeoPattern {
    type Err = LatticeError;

    fn from_str(s: &str) -> LatticeResult<GeoPattern> {
        match s {
            "fcc" => Ok(GeoPattern::Fcc),
            "hcp" => Ok(GeoPattern::Hcp),
            "e8_projected" => Ok(GeoPattern::E8Projected),
            "d4" => Ok(GeoPattern::D4),
            "b5" => Ok(GeoPattern::B5),
            "e5_projected" => Ok(GeoPattern::E5Projected),
            other => Err(LatticeError::UnknownPattern(other.to_owned())),
        }
    }
}

/// Face-centered cubic lattice over 3D positions.
pub fn fcc<A: Amplitude, S: EventSink>(
    sites: &mut [Positioned<A, 3>],
    sink: &S,
) -> LatticeResult<()> {
    GeoPattern::Fcc.apply(sites, sink)
}

/// Hexagonal close-packed lattice over 3D positions.
pub fn hcp<A: Amplitude, S: EventSink>(
    sites: &mut [Positioned<A, 3>],
    sink: &S,
) -> LatticeResult<()> {
    GeoPattern::Hcp.apply(sites, sink)
}

/// E8-projected lattice over 3D positions.
pub fn e8_projected<A: Amplitude, S: EventSink>(
    sites: &mut [Positioned<A, 3>],
    sink: &S,
) -> LatticeResult<()> {
    GeoPattern::E8Projected.apply(sites, sink)
}

/// D4 lattice over 4D positions.
pub fn d4<A: Amplitude, S: EventSink>(
    sites: &mut [Positioned<A, 4>],
    sink: &S,
) -> LatticeResult<()> {
    GeoPattern::D4.apply(sites, sink)
}

/// B5 lattice over 5D positions.
pub fn b5<A: Amplitude, S: EventSink>(
    sites: &mut [Positioned<A, 5>],
    sink: &S,
) -> LatticeResult<()> {
    GeoPattern::B5.apply(sites, sink)
}

/// E5-projected lattice over 5D positions.
pub fn e5_projected<A: Amplitude, S: EventSink>(
    sites: &mut [Positioned<A, 5>],
    sink: &S,
) -> LatticeResult<()> {
    GeoPattern::E5Projected.apply(sites, sink)
}
