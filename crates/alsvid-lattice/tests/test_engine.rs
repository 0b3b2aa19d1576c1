//! Applicator walk order, record granularity, and the dispatch path.

use alsvid_amp::{Fixed, FixedComplex};
use alsvid_gates::{Gate, MemorySink, NullSink, Qubit};
use alsvid_lattice::{
    BoundaryError, BoundaryTransport, LatticeError, Loopback, Pattern, Request, dispatch,
    engine,
};
use num_complex::Complex64;

fn buffer(n: usize) -> Vec<Qubit<Complex64>> {
    (0..n)
        .map(|i| Qubit::new(i as u64, format!("q{i}"), Complex64::new(1.0, 0.0)))
        .collect()
}

// ---------------------------------------------------------------------------
// Applicator
// ---------------------------------------------------------------------------

#[test]
fn triangle_walk_order_and_values() {
    let sink = NullSink;
    let mut qubits = buffer(3);
    engine::apply_pattern(&mut qubits, Pattern::Triangles, &sink).unwrap();

    let k = std::f64::consts::FRAC_1_SQRT_2;
    // Seed on the first corner, then 0→1, 1→2, 2→0 sign flips; every
    // control stays above threshold throughout.
    assert!((qubits[0].amplitude.re + k).abs() < 1e-12);
    assert!((qubits[1].amplitude.re + 1.0).abs() < 1e-12);
    assert!((qubits[2].amplitude.re + 1.0).abs() < 1e-12);
}

#[test]
fn one_record_per_unit_not_per_gate() {
    let sink = MemorySink::new();
    let mut qubits = buffer(9);
    engine::apply_pattern(&mut qubits, Pattern::Triangles, &sink).unwrap();

    // Three triangle groups → exactly three records, anchored per group.
    let records = sink.records();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.gate == "TRI_TESS"));
    assert_eq!(records[0].qubit.0, 0);
    assert_eq!(records[1].qubit.0, 3);
    assert_eq!(records[2].qubit.0, 6);
}

#[test]
fn flower_emits_single_record() {
    let sink = MemorySink::new();
    let mut qubits = buffer(19);
    engine::apply_pattern(&mut qubits, Pattern::FlowerOfLife, &sink).unwrap();

    assert_eq!(sink.len(), 1);
    let record = sink.last().unwrap();
    assert_eq!(record.gate, "FLOWER");
    assert_eq!(record.message, "Flower of Life pattern entangled");
}

#[test]
fn pattern_below_minimum_mutates_nothing() {
    let sink = MemorySink::new();
    let mut qubits = buffer(18);
    let before = qubits.clone();

    let err = engine::apply_pattern(&mut qubits, Pattern::FlowerOfLife, &sink).unwrap_err();
    assert!(matches!(err, LatticeError::InsufficientQubits { .. }));
    assert_eq!(qubits, before);
    assert!(sink.is_empty());
}

#[test]
fn applicator_works_on_fixed_backend() {
    let sink = NullSink;
    let mut qubits: Vec<Qubit<FixedComplex>> = (0..6)
        .map(|i| Qubit::new(i as u64, "hex", FixedComplex::new(Fixed::ONE, Fixed::ZERO)))
        .collect();

    engine::apply_pattern(&mut qubits, Pattern::Hexagons, &sink).unwrap();

    // Every site seeded to 1/√2; the ring walk then flips each target once.
    for q in &qubits {
        assert!((q.amplitude.re.to_f64() + std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[test]
fn dispatch_gate_request_round_trips() {
    let sink = MemorySink::new();
    let mut transport = Loopback::new(buffer(3));

    let request = Request::Gate {
        gate: Gate::PauliZ,
        operands: vec![1],
    };
    dispatch(&mut transport, &request, &sink).unwrap();

    let items = transport.items();
    assert_eq!(items[0].amplitude, Complex64::new(1.0, 0.0));
    assert_eq!(items[1].amplitude, Complex64::new(-1.0, 0.0));
    assert_eq!(sink.last().unwrap().gate, "PAULI_Z");
}

#[test]
fn dispatch_pattern_request() {
    let sink = NullSink;
    let mut transport = Loopback::new(buffer(8));

    dispatch(&mut transport, &Request::<f64>::Pattern(Pattern::E8Group), &sink).unwrap();

    // All eight seeded; the both-direction pair walk flips amplitudes in
    // place, so magnitudes stay at 1/√2.
    for q in transport.items() {
        assert!((q.amplitude.norm() - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }
}

#[test]
fn failed_request_leaves_peer_buffer_untouched() {
    let sink = NullSink;
    let mut transport = Loopback::new(buffer(2));

    let request = Request::<f64>::Gate {
        gate: Gate::Swap,
        operands: vec![0, 9],
    };
    let err = dispatch(&mut transport, &request, &sink).unwrap_err();
    assert_eq!(err, LatticeError::MissingOperand { index: 9 });
    assert_eq!(transport.items(), &buffer(2)[..]);
}

#[test]
fn duplicate_operands_rejected_before_apply() {
    let sink = NullSink;
    let mut qubits = buffer(3);
    let request = Request::<f64>::Gate {
        gate: Gate::Swap,
        operands: vec![2, 2],
    };
    let err = engine::apply_request(&mut qubits, &request, &sink).unwrap_err();
    assert_eq!(err, LatticeError::DuplicateOperand { index: 2 });
}

#[test]
fn boundary_failure_propagates_unmodified() {
    struct Broken;
    impl BoundaryTransport<Qubit<Complex64>> for Broken {
        fn copy_in(&mut self) -> Result<Vec<Qubit<Complex64>>, BoundaryError> {
            Err(BoundaryError::SourceUnreadable)
        }
        fn copy_out(&mut self, _: &[Qubit<Complex64>]) -> Result<(), BoundaryError> {
            Err(BoundaryError::DestinationUnwritable)
        }
    }

    let err = dispatch(
        &mut Broken,
        &Request::<f64>::Pattern(Pattern::Triangles),
        &NullSink,
    )
    .unwrap_err();
    assert_eq!(err, LatticeError::Boundary(BoundaryError::SourceUnreadable));
}

#[test]
fn request_serde_round_trip() {
    let request = Request::Gate {
        gate: Gate::CPhase(0.75_f64),
        operands: vec![0, 2],
    };
    let json = serde_json::to_string(&request).unwrap();
    let back: Request<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(request, back);
}
