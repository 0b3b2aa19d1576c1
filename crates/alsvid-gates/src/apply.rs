//! Logged gate entry points.
//!
//! One function per catalog entry, mirroring the catalog's arity: one, two,
//! or three qubits, mutated in place. Every call emits exactly one symbolic
//! record through the injected sink; controlled gates distinguish "applied"
//! from "no action" in the record they emit.
//!
//! The single-amplitude semantics are deliberate and preserved from the
//! engine this catalog models: a qubit carries one scalar amplitude, not a
//! two-level state vector, so Pauli-X conjugates, Hadamard is a pure scale,
//! and rotate-Y is the same phase multiply as rotate-X. Do not "correct"
//! these to textbook two-basis matrices.

use alsvid_amp::{Amplitude, Real};

use crate::error::{GateError, GateResult};
use crate::event::EventSink;
use crate::gate::{Axis, Gate};
use crate::ops;
use crate::qubit::Qubit;

/// Identity: records the moment, alters nothing.
pub fn identity<A: Amplitude>(q: &Qubit<A>, sink: &impl EventSink) {
    sink.record_event("ID_GATE", q.id, q.tag.as_str(), "State preserved");
}

/// Global phase: amplitude × `e^{iθ}`.
pub fn global_phase<A: Amplitude>(q: &mut Qubit<A>, theta: A::Real, sink: &impl EventSink) {
    q.amplitude = ops::phase(q.amplitude, theta);
    let msg = format!("Applied phase shift θ={:.3} rad", theta.to_f64());
    sink.record_event("GPHASE", q.id, q.tag.as_str(), &msg);
}

/// Pauli-X: flip the sign of the imaginary part.
pub fn pauli_x<A: Amplitude>(q: &mut Qubit<A>, sink: &impl EventSink) {
    q.amplitude = q.amplitude.conj();
    sink.record_event("PAULI_X", q.id, q.tag.as_str(), "Polarity flipped");
}

/// Pauli-Y: multiply by the imaginary unit.
pub fn pauli_y<A: Amplitude>(q: &mut Qubit<A>, sink: &impl EventSink) {
    q.amplitude = q.amplitude.mul_i();
    sink.record_event("PAULI_Y", q.id, q.tag.as_str(), "Dream vector rotated");
}

/// Pauli-Z: negate both parts.
pub fn pauli_z<A: Amplitude>(q: &mut Qubit<A>, sink: &impl EventSink) {
    q.amplitude = q.amplitude.neg();
    sink.record_event("PAULI_Z", q.id, q.tag.as_str(), "Inverted inner state");
}

/// S gate: multiply by i (π/2 phase).
pub fn phase_s<A: Amplitude>(q: &mut Qubit<A>, sink: &impl EventSink) {
    q.amplitude = q.amplitude.mul_i();
    sink.record_event("PHASE_S", q.id, q.tag.as_str(), "Applied S gate (π/2 phase)");
}

/// √X gate: multiply by `(1+i)/√2`.
pub fn sqrt_x<A: Amplitude>(q: &mut Qubit<A>, sink: &impl EventSink) {
    q.amplitude = ops::sqrt_x(q.amplitude);
    sink.record_event("SQRT_X", q.id, q.tag.as_str(), "Applied √X gate (liminal rotation)");
}

/// Hadamard: scale by `1/√2`.
pub fn hadamard<A: Amplitude>(q: &mut Qubit<A>, sink: &impl EventSink) {
    q.amplitude = ops::hadamard(q.amplitude);
    sink.record_event("HADAMARD", q.id, q.tag.as_str(), "Applied H gate (superposition)");
}

/// Variable phase shift: amplitude × `e^{iθ}`.
pub fn phase_shift<A: Amplitude>(q: &mut Qubit<A>, theta: A::Real, sink: &impl EventSink) {
    q.amplitude = ops::phase(q.amplitude, theta);
    sink.record_event("PHASE_SHIFT", q.id, q.tag.as_str(), "Applied variable phase shift");
}

/// Phase gate: amplitude × `e^{iφ}`.
pub fn phase_gate<A: Amplitude>(q: &mut Qubit<A>, phi: A::Real, sink: &impl EventSink) {
    q.amplitude = ops::phase(q.amplitude, phi);
    sink.record_event("PHASE_GATE", q.id, q.tag.as_str(), "Applied symbolic phase gate");
}

/// X-axis rotation: amplitude × `e^{iθ/2}`.
pub fn rotate_x<A: Amplitude>(q: &mut Qubit<A>, theta: A::Real, sink: &impl EventSink) {
    q.amplitude = ops::rotation(q.amplitude, theta);
    sink.record_event("ROT_X", q.id, q.tag.as_str(), "Applied X-axis rotation");
}

/// Y-axis rotation: same phase multiply as X in this model.
pub fn rotate_y<A: Amplitude>(q: &mut Qubit<A>, theta: A::Real, sink: &impl EventSink) {
    q.amplitude = ops::rotation(q.amplitude, theta);
    sink.record_event("ROT_Y", q.id, q.tag.as_str(), "Applied Y-axis rotation");
}

/// Z-axis rotation: amplitude × `e^{iθ/2}`.
pub fn rotate_z<A: Amplitude>(q: &mut Qubit<A>, theta: A::Real, sink: &impl EventSink) {
    q.amplitude = ops::rotation(q.amplitude, theta);
    sink.record_event("ROT_Z", q.id, q.tag.as_str(), "Applied Z-axis rotation");
}

/// Axis-selected rotation.
pub fn rotate<A: Amplitude>(q: &mut Qubit<A>, axis: Axis, theta: A::Real, sink: &impl EventSink) {
    match axis {
        Axis::X => rotate_x(q, theta, sink),
        Axis::Y => rotate_y(q, theta, sink),
        Axis::Z => rotate_z(q, theta, sink),
    }
    sink.record_event("ROTATE", q.id, q.tag.as_str(), "Axis rotation applied");
}

// ---------------------------------------------------------------------------
// Controlled gates
// ---------------------------------------------------------------------------

/// Controlled-NOT: sign-flip the target when the control is active.
pub fn cnot<A: Amplitude>(ctrl: &Qubit<A>, target: &mut Qubit<A>, sink: &impl EventSink) {
    if ctrl.control_active() {
        target.amplitude = target.amplitude.neg();
        sink.record_event("CNOT", target.id, target.tag.as_str(), "NOT applied via control");
    } else {
        sink.record_event("CNOT", target.id, target.tag.as_str(), "No action (control = 0)");
    }
}

/// Anti-controlled-NOT: fires when the control is *below* threshold.
pub fn anticontrol_not<A: Amplitude>(ctrl: &Qubit<A>, target: &mut Qubit<A>, sink: &impl EventSink) {
    if !ctrl.control_active() {
        target.amplitude = target.amplitude.neg();
        sink.record_event("ACNOT", target.id, target.tag.as_str(), "Phase flipped due to control");
    } else {
        sink.record_event("ACNOT", target.id, target.tag.as_str(), "No action (control = 1)");
    }
}

/// Controlled-Z: sign-flip the target when the control is active.
pub fn cz<A: Amplitude>(ctrl: &Qubit<A>, target: &mut Qubit<A>, sink: &impl EventSink) {
    if ctrl.control_active() {
        target.amplitude = target.amplitude.neg();
        sink.record_event("CZ", target.id, target.tag.as_str(), "Z applied via control");
    } else {
        sink.record_event("CZ", target.id, target.tag.as_str(), "No phase shift (control = 0)");
    }
}

/// Controlled phase: `e^{iθ}` on the target when the control is active.
pub fn cphase<A: Amplitude>(
    ctrl: &Qubit<A>,
    target: &mut Qubit<A>,
    theta: A::Real,
    sink: &impl EventSink,
) {
    if ctrl.control_active() {
        target.amplitude = ops::phase(target.amplitude, theta);
        sink.record_event("C-PHASE", target.id, target.tag.as_str(), "Controlled phase applied");
    } else {
        sink.record_event("C-PHASE", target.id, target.tag.as_str(), "No action (control = 0)");
    }
}

/// Controlled S: ×i on the target when the control is active.
pub fn cphase_s<A: Amplitude>(ctrl: &Qubit<A>, target: &mut Qubit<A>, sink: &impl EventSink) {
    if ctrl.control_active() {
        target.amplitude = target.amplitude.mul_i();
        sink.record_event("C-PHASE-S", target.id, target.tag.as_str(), "Conditional S phase applied");
    } else {
        sink.record_event("C-PHASE-S", target.id, target.tag.as_str(), "No action (control = 0)");
    }
}

/// Controlled-V: √X on the target when the control is active.
pub fn c_v<A: Amplitude>(ctrl: &Qubit<A>, target: &mut Qubit<A>, sink: &impl EventSink) {
    if ctrl.control_active() {
        target.amplitude = ops::sqrt_x(target.amplitude);
        sink.record_event("C_V", target.id, target.tag.as_str(), "Controlled-V applied");
    } else {
        sink.record_event("C_V", target.id, target.tag.as_str(), "Control=0, no action");
    }
}

// ---------------------------------------------------------------------------
// Two-qubit gates
// ---------------------------------------------------------------------------

/// Exchange the two amplitudes.
pub fn swap<A: Amplitude>(q1: &mut Qubit<A>, q2: &mut Qubit<A>, sink: &impl EventSink) {
    (q1.amplitude, q2.amplitude) = ops::swap(q1.amplitude, q2.amplitude);
    sink.record_event("SWAP", q1.id, q1.tag.as_str(), "Swapped with pair");
}

/// Exchange with a quarter turn on each amplitude.
pub fn imaginary_swap<A: Amplitude>(q1: &mut Qubit<A>, q2: &mut Qubit<A>, sink: &impl EventSink) {
    (q1.amplitude, q2.amplitude) = ops::imaginary_swap(q1.amplitude, q2.amplitude);
    sink.record_event("IMSWAP", q1.id, q1.tag.as_str(), "Imaginary mirror swap");
}

/// Half-way swap.
pub fn sqrt_swap<A: Amplitude>(q1: &mut Qubit<A>, q2: &mut Qubit<A>, sink: &impl EventSink) {
    (q1.amplitude, q2.amplitude) = ops::sqrt_swap(q1.amplitude, q2.amplitude);
    sink.record_event("SQRT_SWAP", q1.id, q1.tag.as_str(), "√SWAP applied");
}

/// Half-way imaginary swap.
pub fn sqrt_iswap<A: Amplitude>(q1: &mut Qubit<A>, q2: &mut Qubit<A>, sink: &impl EventSink) {
    (q1.amplitude, q2.amplitude) = ops::sqrt_iswap(q1.amplitude, q2.amplitude);
    sink.record_event("√iSWAP", q2.id, q2.tag.as_str(), "√iSWAP applied");
}

/// Interpolated swap, identity at α = 0 and full swap at α = 1.
pub fn swap_pow<A: Amplitude>(
    q1: &mut Qubit<A>,
    q2: &mut Qubit<A>,
    alpha: A::Real,
    sink: &impl EventSink,
) {
    (q1.amplitude, q2.amplitude) = ops::swap_pow(q1.amplitude, q2.amplitude, alpha);
    sink.record_event("SWAP^α", q1.id, q1.tag.as_str(), "Interpolated SWAP applied");
}

/// XX interaction: `e^{iθ}` on both amplitudes.
pub fn xx<A: Amplitude>(q1: &mut Qubit<A>, q2: &mut Qubit<A>, theta: A::Real, sink: &impl EventSink) {
    (q1.amplitude, q2.amplitude) = ops::symmetric_coupling(q1.amplitude, q2.amplitude, theta);
    sink.record_event("XX", q1.id, q1.tag.as_str(), "Applied XX interaction with partner");
}

/// YY interaction: `e^{iθ}` on the first amplitude, conjugate on the second.
pub fn yy<A: Amplitude>(q1: &mut Qubit<A>, q2: &mut Qubit<A>, theta: A::Real, sink: &impl EventSink) {
    (q1.amplitude, q2.amplitude) = ops::skew_coupling(q1.amplitude, q2.amplitude, theta);
    sink.record_event("YY", q2.id, q2.tag.as_str(), "Applied YY interaction");
}

/// ZZ interaction: `e^{iθ}` on both amplitudes.
pub fn zz<A: Amplitude>(q1: &mut Qubit<A>, q2: &mut Qubit<A>, theta: A::Real, sink: &impl EventSink) {
    (q1.amplitude, q2.amplitude) = ops::symmetric_coupling(q1.amplitude, q2.amplitude, theta);
    sink.record_event("ZZ", q2.id, q2.tag.as_str(), "Applied ZZ phase coupling");
}

/// Combined XX+YY+ZZ entangling phase.
pub fn xyz_entangle<A: Amplitude>(
    q1: &mut Qubit<A>,
    q2: &mut Qubit<A>,
    theta: A::Real,
    sink: &impl EventSink,
) {
    (q1.amplitude, q2.amplitude) = ops::skew_coupling(q1.amplitude, q2.amplitude, theta);
    sink.record_event("XYZ", q1.id, q1.tag.as_str(), "Full XX+YY+ZZ entanglement");
}

/// Echoed cross-resonance: phase and conjugate phase on each side.
pub fn echo_cr<A: Amplitude>(
    q1: &mut Qubit<A>,
    q2: &mut Qubit<A>,
    theta: A::Real,
    sink: &impl EventSink,
) {
    (q1.amplitude, q2.amplitude) = ops::echoed_coupling(q1.amplitude, q2.amplitude, theta);
    sink.record_event("ECHO_CR", q1.id, q1.tag.as_str(), "ECR interaction applied");
}

/// Givens rotation mixing the two amplitudes.
pub fn givens<A: Amplitude>(
    q1: &mut Qubit<A>,
    q2: &mut Qubit<A>,
    theta: A::Real,
    sink: &impl EventSink,
) {
    (q1.amplitude, q2.amplitude) = ops::givens(q1.amplitude, q2.amplitude, theta);
    sink.record_event("GIVENS", q1.id, q1.tag.as_str(), "Givens rotation applied");
}

/// Fermionic exchange: swap with a sign flip on the first amplitude.
pub fn fermion_sim<A: Amplitude>(q1: &mut Qubit<A>, q2: &mut Qubit<A>, sink: &impl EventSink) {
    (q1.amplitude, q2.amplitude) = ops::fermion_swap(q1.amplitude, q2.amplitude);
    sink.record_event("FERMION_SIM", q1.id, q1.tag.as_str(), "Fermionic exchange");
}

// ---------------------------------------------------------------------------
// Fixed composites
// ---------------------------------------------------------------------------

/// Magic basis entangler: H, S, CNOT, H.
pub fn magic<A: Amplitude>(q1: &mut Qubit<A>, q2: &mut Qubit<A>, sink: &impl EventSink) {
    hadamard(q1, sink);
    phase_s(q1, sink);
    cnot(q1, q2, sink);
    hadamard(q1, sink);
    sink.record_event("MAGIC", q1.id, q1.tag.as_str(), "Magic gate applied");
}

/// Sycamore entangler: √iSWAP then controlled phase of π/6.
pub fn sycamore<A: Amplitude>(q1: &mut Qubit<A>, q2: &mut Qubit<A>, sink: &impl EventSink) {
    sqrt_iswap(q1, q2, sink);
    let sixth = <A::Real>::from_f64(std::f64::consts::FRAC_PI_6);
    cphase(q1, q2, sixth, sink);
    sink.record_event("SYCAMORE", q1.id, q1.tag.as_str(), "Sycamore gate applied");
}

/// Berkeley entangler: CNOT, phase, CNOT.
pub fn berkeley<A: Amplitude>(
    q1: &mut Qubit<A>,
    q2: &mut Qubit<A>,
    theta: A::Real,
    sink: &impl EventSink,
) {
    cnot(q1, q2, sink);
    phase_gate(q2, theta, sink);
    cnot(q1, q2, sink);
    sink.record_event("BERKELEY", q1.id, q1.tag.as_str(), "Berkeley entangler applied");
}

/// Bell-style preparation: Hadamard then CNOT.
pub fn core_entangle<A: Amplitude>(q1: &mut Qubit<A>, q2: &mut Qubit<A>, sink: &impl EventSink) {
    hadamard(q1, sink);
    cnot(q1, q2, sink);
    sink.record_event("CORE_EN", q1.id, q1.tag.as_str(), "Core entanglement applied");
}

/// Controlled-Z followed by swap.
pub fn cz_swap<A: Amplitude>(q1: &mut Qubit<A>, q2: &mut Qubit<A>, sink: &impl EventSink) {
    cz(q1, q2, sink);
    swap(q1, q2, sink);
    sink.record_event("CZ_SWAP", q1.id, q1.tag.as_str(), "CZ+SWAP applied");
}

// ---------------------------------------------------------------------------
// Three-qubit gates
// ---------------------------------------------------------------------------

/// Toffoli-style double-controlled NOT: both controls active → sign-flip.
pub fn dcnot<A: Amplitude>(
    c1: &Qubit<A>,
    c2: &Qubit<A>,
    target: &mut Qubit<A>,
    sink: &impl EventSink,
) {
    if c1.control_active() && c2.control_active() {
        target.amplitude = target.amplitude.neg();
        sink.record_event("DCNOT", target.id, target.tag.as_str(), "Double control triggered NOT");
    } else {
        sink.record_event("DCNOT", target.id, target.tag.as_str(), "Conditions not met");
    }
}

/// Fredkin: swap the two targets when the control is active.
pub fn fredkin<A: Amplitude>(
    ctrl: &Qubit<A>,
    q1: &mut Qubit<A>,
    q2: &mut Qubit<A>,
    sink: &impl EventSink,
) {
    if ctrl.control_active() {
        (q1.amplitude, q2.amplitude) = ops::swap(q1.amplitude, q2.amplitude);
        sink.record_event("FREDKIN", q1.id, q1.tag.as_str(), "Control triggered SWAP");
    } else {
        sink.record_event("FREDKIN", q1.id, q1.tag.as_str(), "Control = 0, no action");
    }
}

/// Controlled fermionic swap.
pub fn cf_swap<A: Amplitude>(
    ctrl: &Qubit<A>,
    q1: &mut Qubit<A>,
    q2: &mut Qubit<A>,
    sink: &impl EventSink,
) {
    if ctrl.control_active() {
        fermion_sim(q1, q2, sink);
        sink.record_event("CF_SWAP", q1.id, q1.tag.as_str(), "Controlled Fermionic SWAP");
    } else {
        sink.record_event("CF_SWAP", q1.id, q1.tag.as_str(), "Control=0, no action");
    }
}

/// Dagwood: first qubit controls a swap of the other two.
pub fn dagwood<A: Amplitude>(
    q1: &Qubit<A>,
    q2: &mut Qubit<A>,
    q3: &mut Qubit<A>,
    sink: &impl EventSink,
) {
    if q1.control_active() {
        swap(q2, q3, sink);
        sink.record_event("DAGWOOD", q1.id, q1.tag.as_str(), "Dagwood swap applied");
    } else {
        sink.record_event("DAGWOOD", q1.id, q1.tag.as_str(), "Control=0, no swap");
    }
}

/// Margolis: double-controlled sign flip.
pub fn margolis<A: Amplitude>(
    c1: &Qubit<A>,
    c2: &Qubit<A>,
    target: &mut Qubit<A>,
    sink: &impl EventSink,
) {
    if c1.control_active() && c2.control_active() {
        target.amplitude = target.amplitude.neg();
        sink.record_event("MARGOLIS", target.id, target.tag.as_str(), "Margolis gate triggered");
    } else {
        sink.record_event("MARGOLIS", target.id, target.tag.as_str(), "Conditions not met");
    }
}

/// Peres: CNOT then Margolis.
pub fn peres<A: Amplitude>(
    q1: &Qubit<A>,
    q2: &Qubit<A>,
    q3: &mut Qubit<A>,
    sink: &impl EventSink,
) {
    cnot(q1, q3, sink);
    margolis(q1, q2, q3, sink);
    sink.record_event("PERES", q1.id, q1.tag.as_str(), "Peres gate applied");
}

/// Barenco composite: H, CNOT, S, CNOT, H on the target.
pub fn barenco<A: Amplitude>(
    q1: &Qubit<A>,
    q2: &Qubit<A>,
    q3: &mut Qubit<A>,
    sink: &impl EventSink,
) {
    hadamard(q3, sink);
    cnot(q2, q3, sink);
    phase_s(q3, sink);
    cnot(q1, q3, sink);
    hadamard(q3, sink);
    sink.record_event("BARENCO", q1.id, q1.tag.as_str(), "Barenco composite applied");
}

/// Deutsch: Hadamard, a caller-selected single-qubit oracle, Hadamard.
pub fn deutsch<A: Amplitude>(
    q1: &mut Qubit<A>,
    q2: &mut Qubit<A>,
    oracle: &Gate<A::Real>,
    sink: &impl EventSink,
) -> GateResult<()> {
    if oracle.num_qubits() != 1 {
        return Err(GateError::InvalidOracle(oracle.name()));
    }
    hadamard(q1, sink);
    oracle.apply(&mut [q2], sink)?;
    hadamard(q1, sink);
    sink.record_event("DEUTSCH", q1.id, q1.tag.as_str(), "Deutsch gate applied");
    Ok(())
}
