//! Gate descriptors.
//!
//! [`Gate`] names every catalog entry, carrying its parameters, so callers
//! and the topology dispatcher can select a transformation as data. The
//! variant's `name()` is the tag used in symbolic event records.

use alsvid_amp::{Amplitude, Real};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::apply;
use crate::error::{GateError, GateResult};
use crate::event::EventSink;
use crate::qubit::Qubit;

/// Rotation axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl TryFrom<char> for Axis {
    type Error = GateError;

    fn try_from(c: char) -> GateResult<Axis> {
        match c {
            'x' | 'X' => Ok(Axis::X),
            'y' | 'Y' => Ok(Axis::Y),
            'z' | 'Z' => Ok(Axis::Z),
            other => Err(GateError::UnknownAxis(other)),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
            Axis::Z => f.write_str("Z"),
        }
    }
}

/// A catalog gate with its parameters.
///
/// `R` is the scalar type of the amplitude backend the gate will be applied
/// to; angle parameters are radians in that representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate<R> {
    // Single-qubit
    /// No-op; records the moment.
    Identity,
    /// Amplitude × e^{iθ}.
    GlobalPhase(R),
    /// Flip the sign of the imaginary part.
    PauliX,
    /// Multiply by i.
    PauliY,
    /// Negate both parts.
    PauliZ,
    /// Multiply by i (π/2 phase).
    PhaseS,
    /// Multiply by (1+i)/√2.
    SqrtX,
    /// Scale by 1/√2.
    Hadamard,
    /// Amplitude × e^{iθ}.
    PhaseShift(R),
    /// Amplitude × e^{iφ}.
    PhaseGate(R),
    /// X rotation: × e^{iθ/2}.
    RotateX(R),
    /// Y rotation: × e^{iθ/2}.
    RotateY(R),
    /// Z rotation: × e^{iθ/2}.
    RotateZ(R),
    /// Axis-selected rotation.
    Rotate(Axis, R),

    // Two-qubit, controlled
    /// Controlled NOT (sign flip on the target).
    Cnot,
    /// NOT fired when the control is below threshold.
    AnticontrolNot,
    /// Controlled Z.
    Cz,
    /// Controlled phase.
    CPhase(R),
    /// Controlled S.
    CPhaseS,
    /// Controlled √X.
    CV,

    // Two-qubit
    /// Exchange amplitudes.
    Swap,
    /// Exchange with a quarter turn each.
    ImaginarySwap,
    /// Half-way swap.
    SqrtSwap,
    /// Half-way imaginary swap.
    SqrtISwap,
    /// Interpolated swap.
    SwapPow(R),
    /// XX coupling.
    Xx(R),
    /// YY coupling.
    Yy(R),
    /// ZZ coupling.
    Zz(R),
    /// Combined XX+YY+ZZ coupling.
    XyzEntangle(R),
    /// Echoed cross-resonance.
    EchoCr(R),
    /// Givens rotation.
    Givens(R),
    /// Fermionic exchange.
    FermionSim,
    /// Magic basis entangler.
    Magic,
    /// Sycamore entangler.
    Sycamore,
    /// Berkeley entangler.
    Berkeley(R),
    /// Hadamard + CNOT preparation.
    CoreEntangle,
    /// CZ followed by swap.
    CzSwap,
    /// Hadamard, single-qubit oracle, Hadamard.
    Deutsch(Box<Gate<R>>),

    // Three-qubit
    /// Double-controlled NOT.
    Dcnot,
    /// Controlled swap.
    Fredkin,
    /// Controlled fermionic swap.
    CfSwap,
    /// First qubit controls a swap of the other two.
    Dagwood,
    /// Double-controlled sign flip.
    Margolis,
    /// CNOT then Margolis.
    Peres,
    /// H-CNOT-S-CNOT-H composite.
    Barenco,
}

impl<R> Gate<R> {
    /// Event-record tag for this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Identity => "ID_GATE",
            Gate::GlobalPhase(_) => "GPHASE",
            Gate::PauliX => "PAULI_X",
            Gate::PauliY => "PAULI_Y",
            Gate::PauliZ => "PAULI_Z",
            Gate::PhaseS => "PHASE_S",
            Gate::SqrtX => "SQRT_X",
            Gate::Hadamard => "HADAMARD",
            Gate::PhaseShift(_) => "PHASE_SHIFT",
            Gate::PhaseGate(_) => "PHASE_GATE",
            Gate::RotateX(_) => "ROT_X",
            Gate::RotateY(_) => "ROT_Y",
            Gate::RotateZ(_) => "ROT_Z",
            Gate::Rotate(_, _) => "ROTATE",
            Gate::Cnot => "CNOT",
            Gate::AnticontrolNot => "ACNOT",
            Gate::Cz => "CZ",
            Gate::CPhase(_) => "C-PHASE",
            Gate::CPhaseS => "C-PHASE-S",
            Gate::CV => "C_V",
            Gate::Swap => "SWAP",
            Gate::ImaginarySwap => "IMSWAP",
            Gate::SqrtSwap => "SQRT_SWAP",
            Gate::SqrtISwap => "√iSWAP",
            Gate::SwapPow(_) => "SWAP^α",
            Gate::Xx(_) => "XX",
            Gate::Yy(_) => "YY",
            Gate::Zz(_) => "ZZ",
            Gate::XyzEntangle(_) => "XYZ",
            Gate::EchoCr(_) => "ECHO_CR",
            Gate::Givens(_) => "GIVENS",
            Gate::FermionSim => "FERMION_SIM",
            Gate::Magic => "MAGIC",
            Gate::Sycamore => "SYCAMORE",
            Gate::Berkeley(_) => "BERKELEY",
            Gate::CoreEntangle => "CORE_EN",
            Gate::CzSwap => "CZ_SWAP",
            Gate::Deutsch(_) => "DEUTSCH",
            Gate::Dcnot => "DCNOT",
            Gate::Fredkin => "FREDKIN",
            Gate::CfSwap => "CF_SWAP",
            Gate::Dagwood => "DAGWOOD",
            Gate::Margolis => "MARGOLIS",
            Gate::Peres => "PERES",
            Gate::Barenco => "BARENCO",
        }
    }

    /// Number of qubit operands this gate takes.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::Identity
            | Gate::GlobalPhase(_)
            | Gate::PauliX
            | Gate::PauliY
            | Gate::PauliZ
            | Gate::PhaseS
            | Gate::SqrtX
            | Gate::Hadamard
            | Gate::PhaseShift(_)
            | Gate::PhaseGate(_)
            | Gate::RotateX(_)
            | Gate::RotateY(_)
            | Gate::RotateZ(_)
            | Gate::Rotate(_, _) => 1,

            Gate::Cnot
            | Gate::AnticontrolNot
            | Gate::Cz
            | Gate::CPhase(_)
            | Gate::CPhaseS
            | Gate::CV
            | Gate::Swap
            | Gate::ImaginarySwap
            | Gate::SqrtSwap
            | Gate::SqrtISwap
            | Gate::SwapPow(_)
            | Gate::Xx(_)
            | Gate::Yy(_)
            | Gate::Zz(_)
            | Gate::XyzEntangle(_)
            | Gate::EchoCr(_)
            | Gate::Givens(_)
            | Gate::FermionSim
            | Gate::Magic
            | Gate::Sycamore
            | Gate::Berkeley(_)
            | Gate::CoreEntangle
            | Gate::CzSwap
            | Gate::Deutsch(_) => 2,

            Gate::Dcnot
            | Gate::Fredkin
            | Gate::CfSwap
            | Gate::Dagwood
            | Gate::Margolis
            | Gate::Peres
            | Gate::Barenco => 3,
        }
    }
}

impl<R: Real> Gate<R> {
    /// Apply this gate to its operands, in order.
    ///
    /// The operand slice length must equal [`Gate::num_qubits`]; anything
    /// else aborts with [`GateError::OperandCount`] before any amplitude is
    /// touched.
    pub fn apply<A, S>(&self, operands: &mut [&mut Qubit<A>], sink: &S) -> GateResult<()>
    where
        A: Amplitude<Real = R>,
        S: EventSink,
    {
        match (self, &mut *operands) {
            (Gate::Identity, [q]) => apply::identity(q, sink),
            (Gate::GlobalPhase(theta), [q]) => apply::global_phase(q, *theta, sink),
            (Gate::PauliX, [q]) => apply::pauli_x(q, sink),
            (Gate::PauliY, [q]) => apply::pauli_y(q, sink),
            (Gate::PauliZ, [q]) => apply::pauli_z(q, sink),
            (Gate::PhaseS, [q]) => apply::phase_s(q, sink),
            (Gate::SqrtX, [q]) => apply::sqrt_x(q, sink),
            (Gate::Hadamard, [q]) => apply::hadamard(q, sink),
            (Gate::PhaseShift(theta), [q]) => apply::phase_shift(q, *theta, sink),
            (Gate::PhaseGate(phi), [q]) => apply::phase_gate(q, *phi, sink),
            (Gate::RotateX(theta), [q]) => apply::rotate_x(q, *theta, sink),
            (Gate::RotateY(theta), [q]) => apply::rotate_y(q, *theta, sink),
            (Gate::RotateZ(theta), [q]) => apply::rotate_z(q, *theta, sink),
            (Gate::Rotate(axis, theta), [q]) => apply::rotate(q, *axis, *theta, sink),

            (Gate::Cnot, [c, t]) => apply::cnot(c, t, sink),
            (Gate::AnticontrolNot, [c, t]) => apply::anticontrol_not(c, t, sink),
            (Gate::Cz, [c, t]) => apply::cz(c, t, sink),
            (Gate::CPhase(theta), [c, t]) => apply::cphase(c, t, *theta, sink),
            (Gate::CPhaseS, [c, t]) => apply::cphase_s(c, t, sink),
            (Gate::CV, [c, t]) => apply::c_v(c, t, sink),

            (Gate::Swap, [a, b]) => apply::swap(a, b, sink),
            (Gate::ImaginarySwap, [a, b]) => apply::imaginary_swap(a, b, sink),
            (Gate::SqrtSwap, [a, b]) => apply::sqrt_swap(a, b, sink),
            (Gate::SqrtISwap, [a, b]) => apply::sqrt_iswap(a, b, sink),
            (Gate::SwapPow(alpha), [a, b]) => apply::swap_pow(a, b, *alpha, sink),
            (Gate::Xx(theta), [a, b]) => apply::xx(a, b, *theta, sink),
            (Gate::Yy(theta), [a, b]) => apply::yy(a, b, *theta, sink),
            (Gate::Zz(theta), [a, b]) => apply::zz(a, b, *theta, sink),
            (Gate::XyzEntangle(theta), [a, b]) => apply::xyz_entangle(a, b, *theta, sink),
            (Gate::EchoCr(theta), [a, b]) => apply::echo_cr(a, b, *theta, sink),
            (Gate::Givens(theta), [a, b]) => apply::givens(a, b, *theta, sink),
            (Gate::FermionSim, [a, b]) => apply::fermion_sim(a, b, sink),
            (Gate::Magic, [a, b]) => apply::magic(a, b, sink),
            (Gate::Sycamore, [a, b]) => apply::sycamore(a, b, sink),
            (Gate::Berkeley(theta), [a, b]) => apply::berkeley(a, b, *theta, sink),
            (Gate::CoreEntangle, [a, b]) => apply::core_entangle(a, b, sink),
            (Gate::CzSwap, [a, b]) => apply::cz_swap(a, b, sink),
            (Gate::Deutsch(oracle), [a, b]) => return apply::deutsch(a, b, oracle, sink),

            (Gate::Dcnot, [c1, c2, t]) => apply::dcnot(c1, c2, t, sink),
            (Gate::Fredkin, [c, a, b]) => apply::fredkin(c, a, b, sink),
            (Gate::CfSwap, [c, a, b]) => apply::cf_swap(c, a, b, sink),
            (Gate::Dagwood, [c, a, b]) => apply::dagwood(c, a, b, sink),
            (Gate::Margolis, [c1, c2, t]) => apply::margolis(c1, c2, t, sink),
            (Gate::Peres, [a, b, c]) => apply::peres(a, b, c, sink),
            (Gate::Barenco, [a, b, c]) => apply::barenco(a, b, c, sink),

            (gate, operands) => {
                return Err(GateError::OperandCount {
                    gate: gate.name(),
                    expected: gate.num_qubits(),
                    got: operands.len() as u32,
                });
            }
        }
        Ok(())
    }
}
