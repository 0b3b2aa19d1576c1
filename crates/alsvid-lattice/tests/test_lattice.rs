//! Geometric lattice behavior across both backends.

use alsvid_amp::{Fixed, FixedComplex};
use alsvid_gates::{MemorySink, NullSink, Qubit};
use alsvid_lattice::{
    GeoPattern, LatticeError, Loopback, Positioned, dispatch_lattice, epsilon_edges, fcc,
};
use num_complex::Complex64;
use proptest::prelude::*;

fn line_sites(n: usize, spacing: f64) -> Vec<Positioned<Complex64, 3>> {
    (0..n)
        .map(|i| {
            Positioned::new(
                Qubit::new(i as u64, format!("s{i}"), Complex64::new(1.0, 0.0)),
                [i as f64 * spacing, 0.0, 0.0],
            )
        })
        .collect()
}

fn fixed_line_sites(n: usize, spacing: f64) -> Vec<Positioned<FixedComplex, 3>> {
    (0..n)
        .map(|i| {
            Positioned::new(
                Qubit::new(i as u64, "s", FixedComplex::new(Fixed::ONE, Fixed::ZERO)),
                [
                    Fixed::from_f64(i as f64 * spacing),
                    Fixed::ZERO,
                    Fixed::ZERO,
                ],
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Minimums and selectors
// ---------------------------------------------------------------------------

#[test]
fn fcc_rejects_below_minimum() {
    let sink = NullSink;
    let mut sites = line_sites(13, 1.0);
    let err = fcc(&mut sites, &sink).unwrap_err();
    assert_eq!(
        err,
        LatticeError::InsufficientQubits {
            pattern: "fcc",
            needed: 14,
            got: 13,
        }
    );
}

#[test]
fn every_lattice_declares_its_contract() {
    let cases = [
        (GeoPattern::Fcc, 3, 14, 1.01),
        (GeoPattern::Hcp, 3, 17, 1.01),
        (GeoPattern::E8Projected, 3, 30, 1.00),
        (GeoPattern::D4, 4, 24, 1.01),
        (GeoPattern::B5, 5, 32, 1.00),
        (GeoPattern::E5Projected, 5, 40, 1.05),
    ];
    for (lattice, dim, min, eps) in cases {
        assert_eq!(lattice.dim(), dim);
        assert_eq!(lattice.min_qubits(), min);
        assert!((lattice.epsilon() - eps).abs() < 1e-12);
        assert_eq!(lattice.selector().parse::<GeoPattern>().unwrap(), lattice);
    }
}

#[test]
fn dimension_mismatch_rejected() {
    let sink = NullSink;
    let mut sites: Vec<Positioned<Complex64, 4>> = (0..24)
        .map(|i| {
            Positioned::new(
                Qubit::new(i as u64, "d", Complex64::new(1.0, 0.0)),
                [i as f64, 0.0, 0.0, 0.0],
            )
        })
        .collect();

    // D4 accepts 4D sites; FCC must refuse them.
    GeoPattern::D4.apply(&mut sites, &sink).unwrap();
    let err = GeoPattern::Fcc.apply(&mut sites, &sink).unwrap_err();
    assert_eq!(
        err,
        LatticeError::DimensionMismatch {
            pattern: "fcc",
            expected: 3,
            got: 4,
        }
    );
}

// ---------------------------------------------------------------------------
// Entanglement walk
// ---------------------------------------------------------------------------

#[test]
fn fcc_line_couples_adjacent_sites_only() {
    let sink = MemorySink::new();
    let mut sites = line_sites(14, 1.0);
    fcc(&mut sites, &sink).unwrap();

    let k = std::f64::consts::FRAC_1_SQRT_2;
    // Unit spacing is inside ε = 1.01: every site seeded, every non-root
    // site flipped once by its left neighbor.
    assert!((sites[0].qubit.amplitude.re - k).abs() < 1e-12);
    for site in &sites[1..] {
        assert!((site.qubit.amplitude.re + k).abs() < 1e-12);
    }
    // One record for the whole lattice call.
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.last().unwrap().gate, "FCC_3D");
}

#[test]
fn sparse_sites_do_not_couple() {
    let sink = NullSink;
    let mut sites = line_sites(14, 2.0);
    fcc(&mut sites, &sink).unwrap();

    let k = std::f64::consts::FRAC_1_SQRT_2;
    // No pair within ε: superposition layer only.
    for site in &sites {
        assert!((site.qubit.amplitude.re - k).abs() < 1e-12);
    }
}

#[test]
fn fixed_backend_matches_float_edges() {
    let float_sites = line_sites(17, 1.0);
    let fixed_sites = fixed_line_sites(17, 1.0);

    let eps_f = 1.01_f64 * 1.01;
    let eps_q = Fixed::from_f64(1.01).square();

    let float_edges = epsilon_edges(&float_sites, eps_f).unwrap();
    let fixed_edges = epsilon_edges(&fixed_sites, eps_q).unwrap();
    assert_eq!(float_edges, fixed_edges);
}

#[test]
fn hcp_runs_on_fixed_backend() {
    let sink = MemorySink::new();
    let mut sites = fixed_line_sites(17, 1.0);
    GeoPattern::Hcp.apply(&mut sites, &sink).unwrap();

    assert_eq!(sink.last().unwrap().gate, "HCP_3D");
    assert_eq!(sink.last().unwrap().message, "HCP lattice entangled");
}

// ---------------------------------------------------------------------------
// Dispatch over positions
// ---------------------------------------------------------------------------

#[test]
fn dispatch_lattice_round_trips() {
    let sink = NullSink;
    let mut transport = Loopback::new(line_sites(14, 1.0));

    dispatch_lattice(&mut transport, GeoPattern::Fcc, &sink).unwrap();

    let k = std::f64::consts::FRAC_1_SQRT_2;
    assert!((transport.items()[0].qubit.amplitude.re - k).abs() < 1e-12);
    assert!((transport.items()[1].qubit.amplitude.re + k).abs() < 1e-12);
}

#[test]
fn dispatch_lattice_rejects_short_buffer_without_writeback() {
    let sink = NullSink;
    let mut transport = Loopback::new(line_sites(10, 1.0));

    let err = dispatch_lattice(&mut transport, GeoPattern::Fcc, &sink).unwrap_err();
    assert!(matches!(err, LatticeError::InsufficientQubits { .. }));
    // Peer buffer untouched.
    assert_eq!(
        transport.items()[3].qubit.amplitude,
        Complex64::new(1.0, 0.0)
    );
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// The epsilon graph never connects a pair strictly outside ε², and
    /// always connects pairs strictly inside, regardless of layout.
    #[test]
    fn epsilon_graph_respects_radius(
        xs in prop::collection::vec(-10.0_f64..10.0, 2..20),
    ) {
        let sites: Vec<Positioned<Complex64, 3>> = xs
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                Positioned::new(
                    Qubit::new(i as u64, "p", Complex64::new(1.0, 0.0)),
                    [x, 0.0, 0.0],
                )
            })
            .collect();

        let eps_sq = 2.25_f64;
        let edges = epsilon_edges(&sites, eps_sq).unwrap();
        for i in 0..sites.len() {
            for j in (i + 1)..sites.len() {
                let d = (xs[i] - xs[j]) * (xs[i] - xs[j]);
                let connected = edges.contains(&(i, j));
                if d <= eps_sq {
                    prop_assert!(connected);
                } else {
                    prop_assert!(!connected);
                }
            }
        }
    }
}
