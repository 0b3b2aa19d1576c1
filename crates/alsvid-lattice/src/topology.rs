//! Topology generation: interaction graphs over qubit indices.
//!
//! A [`Topology`] is ephemeral — a generation-ordered list of [`Unit`]s that
//! exists only for the call that consumes it and is never persisted. Each
//! unit names the indices that receive the superposition layer and the
//! directed edges the entangling sequence follows, in the order the
//! applicator must walk them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{LatticeError, LatticeResult, try_vec};

/// One topology unit: a superposition layer plus an ordered edge walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Index the unit's symbolic record is attributed to.
    pub anchor: usize,
    /// Indices receiving a Hadamard before the edge walk, in order.
    pub hadamards: Vec<usize>,
    /// Directed (control, target) edges, in application order.
    pub edges: Vec<(usize, usize)>,
}

/// A generation-ordered list of units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    /// Units in application order.
    pub units: Vec<Unit>,
}

impl Topology {
    /// Total number of units.
    pub fn num_units(&self) -> usize {
        self.units.len()
    }

    /// Total number of edges across all units.
    pub fn num_edges(&self) -> usize {
        self.units.iter().map(|u| u.edges.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Edge-list building blocks
// ---------------------------------------------------------------------------

/// Star: `base` paired with each of the following `k - 1` indices.
pub fn star(base: usize, k: usize) -> LatticeResult<Vec<(usize, usize)>> {
    let mut edges = try_vec(k.saturating_sub(1))?;
    for i in 1..k {
        edges.push((base, base + i));
    }
    Ok(edges)
}

/// Cyclic ring over `[base, base + k)`, consecutive with wraparound.
pub fn ring(base: usize, k: usize) -> LatticeResult<Vec<(usize, usize)>> {
    let mut edges = try_vec(k)?;
    for i in 0..k {
        edges.push((base + i, base + (i + 1) % k));
    }
    Ok(edges)
}

/// Every ordered pair over `[base, base + k)`, both directions per pair.
pub fn full_pairwise(base: usize, k: usize) -> LatticeResult<Vec<(usize, usize)>> {
    let mut edges = try_vec(k * k.saturating_sub(1))?;
    for i in 0..k {
        for j in (i + 1)..k {
            edges.push((base + i, base + j));
            edges.push((base + j, base + i));
        }
    }
    Ok(edges)
}

// ---------------------------------------------------------------------------
// Named patterns
// ---------------------------------------------------------------------------

/// Combinational topology pattern selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    /// Tessellated 3-cycles; the first corner of each seeds superposition.
    Triangles,
    /// Tessellated 6-rings, fully seeded.
    Hexagons,
    /// Tessellated center-plus-six units: fan from the center, then the rim
    /// folded back onto it.
    HexRhombi,
    /// Eight nodes, every pair entangled in both directions.
    E8Group,
    /// Nineteen nodes: center spokes, inner 6-ring, outer 12-ring.
    FlowerOfLife,
    /// Thirteen nodes: center spokes plus six cross edges.
    MetatronCube,
}

impl Pattern {
    /// Event-record tag for units of this pattern.
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Triangles => "TRI_TESS",
            Pattern::Hexagons => "HEX_TESS",
            Pattern::HexRhombi => "HEX_RHOM_T",
            Pattern::E8Group => "E8_GROUP",
            Pattern::FlowerOfLife => "FLOWER",
            Pattern::MetatronCube => "METATRON",
        }
    }

    /// Selector string accepted by [`Pattern::from_str`].
    pub fn selector(&self) -> &'static str {
        match self {
            Pattern::Triangles => "triangles",
            Pattern::Hexagons => "hexagons",
            Pattern::HexRhombi => "hex_rhombi",
            Pattern::E8Group => "e8_group",
            Pattern::FlowerOfLife => "flower_of_life",
            Pattern::MetatronCube => "metatron_cube",
        }
    }

    /// Record message emitted per completed unit.
    pub fn unit_message(&self) -> &'static str {
        match self {
            Pattern::Triangles => "Triangle entangle",
            Pattern::Hexagons => "Hexagon ring entangle",
            Pattern::HexRhombi => "Hex→3 rhombi tessellate",
            Pattern::E8Group => "E8 8-node full entanglement",
            Pattern::FlowerOfLife => "Flower of Life pattern entangled",
            Pattern::MetatronCube => "Metatron's Cube geometry entangled",
        }
    }

    /// Minimum qubit count this pattern accepts.
    pub fn min_qubits(&self) -> usize {
        match self {
            Pattern::Triangles => 3,
            Pattern::Hexagons => 6,
            Pattern::HexRhombi => 7,
            Pattern::E8Group => 8,
            Pattern::FlowerOfLife => 19,
            Pattern::MetatronCube => 13,
        }
    }

    /// Group size for tessellating patterns; `None` for single-unit ones.
    pub fn group_size(&self) -> Option<usize> {
        match self {
            Pattern::Triangles => Some(3),
            Pattern::Hexagons => Some(6),
            Pattern::HexRhombi => Some(7),
            Pattern::E8Group | Pattern::FlowerOfLife | Pattern::MetatronCube => None,
        }
    }

    /// Generate the topology for `count` qubits.
    ///
    /// Tessellating patterns partition the input into contiguous groups of
    /// [`Pattern::group_size`], dropping the remainder. Single-unit patterns
    /// use the first [`Pattern::min_qubits`] indices and ignore the rest.
    /// Counts below the minimum are rejected before anything is built.
    pub fn topology(&self, count: usize) -> LatticeResult<Topology> {
        let needed = self.min_qubits();
        if count < needed {
            return Err(LatticeError::InsufficientQubits {
                pattern: self.selector(),
                needed,
                got: count,
            });
        }

        match self.group_size() {
            Some(k) => {
                let groups = count / k;
                let mut units = try_vec(groups)?;
                for g in 0..groups {
                    units.push(self.group_unit(g * k)?);
                }
                Ok(Topology { units })
            }
            None => Ok(Topology {
                units: vec![self.single_unit()?],
            }),
        }
    }

    /// One tessellation group rooted at `base`.
    fn group_unit(&self, base: usize) -> LatticeResult<Unit> {
        match self {
            Pattern::Triangles => Ok(Unit {
                anchor: base,
                hadamards: vec![base],
                edges: ring(base, 3)?,
            }),
            Pattern::Hexagons => Ok(Unit {
                anchor: base,
                hadamards: (base..base + 6).collect(),
                edges: ring(base, 6)?,
            }),
            Pattern::HexRhombi => {
                // Fan from the center, then fold each rim pair back onto it.
                let mut edges = try_vec(18)?;
                edges.extend(star(base, 7)?);
                for i in 1..=5 {
                    edges.push((base + i, base + i + 1));
                    edges.push((base + i + 1, base));
                }
                edges.push((base + 6, base + 1));
                edges.push((base + 1, base));
                Ok(Unit {
                    anchor: base,
                    hadamards: (base + 1..base + 7).collect(),
                    edges,
                })
            }
            _ => unreachable!("single-unit pattern has no group size"),
        }
    }

    /// The unit for single-unit patterns, rooted at index 0.
    fn single_unit(&self) -> LatticeResult<Unit> {
        match self {
            Pattern::E8Group => Ok(Unit {
                anchor: 0,
                hadamards: (0..8).collect(),
                edges: full_pairwise(0, 8)?,
            }),
            Pattern::FlowerOfLife => {
                // 18 spokes, 6 inner-ring edges, 12 outer-ring edges.
                let mut edges = try_vec(36)?;
                edges.extend(star(0, 19)?);
                for i in 1..=6 {
                    edges.push((i, (i % 6) + 1));
                }
                for i in 7..18 {
                    edges.push((i, i + 1));
                }
                edges.push((18, 7));
                Ok(Unit {
                    anchor: 0,
                    hadamards: (0..19).collect(),
                    edges,
                })
            }
            Pattern::MetatronCube => {
                let mut edges = try_vec(18)?;
                edges.extend(star(0, 13)?);
                for i in 1..=6 {
                    edges.push((i, i + 6));
                }
                Ok(Unit {
                    anchor: 0,
                    hadamards: (0..13).collect(),
                    edges,
                })
            }
            _ => unreachable!("tessellating pattern has a group size"),
        }
    }
}

impl FromStr for Pattern {
    type Err = LatticeError;

    fn from_str(s: &str) -> LatticeResult<Pattern> {
        match s {
            "triangles" => Ok(Pattern::Triangles),
            "hexagons" => Ok(Pattern::Hexagons),
            "hex_rhombi" => Ok(Pattern::HexRhombi),
            "e8_group" => Ok(Pattern::E8Group),
            "flower_of_life" => Ok(Pattern::FlowerOfLife),
            "metatron_cube" => Ok(Pattern::MetatronCube),
            other => Err(LatticeError::UnknownPattern(other.to_owned())),
        }
    }
}
