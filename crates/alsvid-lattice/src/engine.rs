//! The applicator: walks topologies and dispatches bulk requests.
//!
//! One generic copy-in → apply → copy-out path serves every gate and pattern
//! rather than one marshaling block per gate. Application is synchronous and
//! runs to completion; the first error aborts the walk, and whatever was
//! already applied stays applied — a failed bulk call leaves its working
//! buffer indeterminate, which is the documented contract.

use alsvid_amp::Amplitude;
use alsvid_gates::{EventSink, Gate, Qubit, ops};
use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, LatticeResult, try_vec};
use crate::lattice::GeoPattern;
use crate::marshal::BoundaryTransport;
use crate::position::Positioned;
use crate::topology::{Pattern, Topology, Unit};

/// One bulk operation: a single gate over named operands, or a whole
/// combinational pattern over the buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Request<R> {
    /// Apply one catalog gate to the qubits at `operands`, in order.
    Gate {
        /// The gate descriptor.
        gate: Gate<R>,
        /// Buffer indices of the operands.
        operands: Vec<usize>,
    },
    /// Apply a combinational topology pattern across the whole buffer.
    Pattern(Pattern),
}

/// Walk one topology unit: Hadamard layer in order, then the edge walk.
///
/// Emits exactly one symbolic record for the unit — not one per elementary
/// gate. Any index outside the buffer aborts immediately with
/// [`LatticeError::MissingOperand`]; earlier applications in the unit are
/// not rolled back.
pub fn apply_unit<A: Amplitude, S: EventSink>(
    qubits: &mut [Qubit<A>],
    unit: &Unit,
    tag: &str,
    message: &str,
    sink: &S,
) -> LatticeResult<()> {
    for &i in &unit.hadamards {
        let q = qubits
            .get_mut(i)
            .ok_or(LatticeError::MissingOperand { index: i })?;
        q.amplitude = ops::hadamard(q.amplitude);
    }

    for &(c, t) in &unit.edges {
        let active = qubits
            .get(c)
            .ok_or(LatticeError::MissingOperand { index: c })?
            .control_active();
        let target = qubits
            .get_mut(t)
            .ok_or(LatticeError::MissingOperand { index: t })?;
        if active {
            target.amplitude = target.amplitude.neg();
        }
    }

    let root = qubits
        .get(unit.anchor)
        .ok_or(LatticeError::MissingOperand { index: unit.anchor })?;
    sink.record_event(tag, root.id, root.tag.as_str(), message);
    Ok(())
}

/// Walk every unit of a topology in generation order.
pub fn apply_topology<A: Amplitude, S: EventSink>(
    qubits: &mut [Qubit<A>],
    topology: &Topology,
    tag: &str,
    message: &str,
    sink: &S,
) -> LatticeResult<()> {
    for unit in &topology.units {
        apply_unit(qubits, unit, tag, message, sink)?;
    }
    Ok(())
}

/// Generate and apply a named pattern across the qubit buffer.
pub fn apply_pattern<A: Amplitude, S: EventSink>(
    qubits: &mut [Qubit<A>],
    pattern: Pattern,
    sink: &S,
) -> LatticeResult<()> {
    let topology = pattern.topology(qubits.len())?;
    tracing::debug!(
        pattern = pattern.selector(),
        units = topology.num_units(),
        edges = topology.num_edges(),
        "applying pattern"
    );
    apply_topology(qubits, &topology, pattern.name(), pattern.unit_message(), sink)
}

/// Apply one bulk request to a working buffer.
pub fn apply_request<A, S>(
    qubits: &mut [Qubit<A>],
    request: &Request<A::Real>,
    sink: &S,
) -> LatticeResult<()>
where
    A: Amplitude,
    S: EventSink,
{
    match request {
        Request::Gate { gate, operands } => {
            let mut refs = collect_disjoint(qubits, operands)?;
            gate.apply(&mut refs, sink)?;
            Ok(())
        }
        Request::Pattern(pattern) => apply_pattern(qubits, *pattern, sink),
    }
}

/// The generic marshal-apply-marshal path for qubit buffers.
///
/// On any application error the peer's buffer is left as it was — the
/// working copy is simply dropped. Boundary failures propagate unmodified.
pub fn dispatch<A, T, S>(
    transport: &mut T,
    request: &Request<A::Real>,
    sink: &S,
) -> LatticeResult<()>
where
    A: Amplitude,
    T: BoundaryTransport<Qubit<A>>,
    S: EventSink,
{
    let mut buffer = transport.copy_in()?;
    apply_request(&mut buffer, request, sink)?;
    transport.copy_out(&buffer)?;
    Ok(())
}

/// The marshal-apply-marshal path for positioned buffers.
pub fn dispatch_lattice<A, T, S, const D: usize>(
    transport: &mut T,
    lattice: GeoPattern,
    sink: &S,
) -> LatticeResult<()>
where
    A: Amplitude,
    T: BoundaryTransport<Positioned<A, D>>,
    S: EventSink,
{
    let mut buffer = transport.copy_in()?;
    lattice.apply(&mut buffer, sink)?;
    transport.copy_out(&buffer)?;
    Ok(())
}

/// Borrow the qubits at `indices`, mutably and disjointly, in order.
///
/// Bounds and duplicates are rejected before any borrow is handed out, so a
/// failed request mutates nothing.
fn collect_disjoint<'a, A: Amplitude>(
    qubits: &'a mut [Qubit<A>],
    indices: &[usize],
) -> LatticeResult<Vec<&'a mut Qubit<A>>> {
    for (k, &i) in indices.iter().enumerate() {
        if i >= qubits.len() {
            return Err(LatticeError::MissingOperand { index: i });
        }
        if indices[..k].contains(&i) {
            return Err(LatticeError::DuplicateOperand { index: i });
        }
    }

    let mut slots: Vec<Option<&'a mut Qubit<A>>> = try_vec(indices.len())?;
    slots.resize_with(indices.len(), || None);
    for (pos, q) in qubits.iter_mut().enumerate() {
        if let Some(k) = indices.iter().position(|&i| i == pos) {
            slots[k] = Some(q);
        }
    }
    Ok(slots
        .into_iter()
        .map(|s| s.expect("index validated against buffer length"))
        .collect())
}
