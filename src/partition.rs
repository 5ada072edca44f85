use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{MaxCutError, Result};

pub const MAX_VERTICES: usize = 64;

/// Which end of a bitstring key holds vertex 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BitOrder {
    /// Character 0 (leftmost) is vertex 0. The crate-wide convention.
    #[default]
    VertexZeroFirst,
    /// The last character is vertex 0, as printed by samplers that list the
    /// highest register index first.
    VertexZeroLast,
}

impl FromStr for BitOrder {
    type Err = MaxCutError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "vertex_zero_first" | "first" => Ok(BitOrder::VertexZeroFirst),
            "vertex_zero_last" | "last" => Ok(BitOrder::VertexZeroLast),
            other => Err(MaxCutError::invalid(format!("unknown bit order `{other}`"))),
        }
    }
}

/// A two-sided split of the vertices of a graph. Bit `i` of the mask is the
/// side of vertex `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Partition {
    bits: u64,
    len: usize,
}

impl Partition {
    /// Decodes an enumeration index: bit `i` of `index` (LSB first) is vertex `i`.
    /// Bits at or above `len` are discarded, and `len` is clamped to
    /// [`MAX_VERTICES`].
    pub fn from_index(index: u64, len: usize) -> Self {
        let len = len.min(MAX_VERTICES);
        Partition {
            bits: index & mask(len),
            len,
        }
    }

    pub fn from_sides(sides: &[bool]) -> Result<Self> {
        if sides.len() > MAX_VERTICES {
            return Err(MaxCutError::invalid(format!(
                "partition of {} vertices exceeds the limit of {MAX_VERTICES}",
                sides.len()
            )));
        }

        let bits = sides
            .iter()
            .enumerate()
            .filter(|(_, &side)| side)
            .fold(0u64, |bits, (vertex, _)| bits | (1 << vertex));

        Ok(Partition {
            bits,
            len: sides.len(),
        })
    }

    pub fn parse(key: &str, order: BitOrder) -> Result<Self> {
        let len = key.chars().count();
        if len == 0 || len > MAX_VERTICES {
            return Err(MaxCutError::invalid(format!(
                "bitstring `{key}` must have between 1 and {MAX_VERTICES} characters"
            )));
        }

        let mut bits = 0u64;
        for (position, c) in key.chars().enumerate() {
            let vertex = match order {
                BitOrder::VertexZeroFirst => position,
                BitOrder::VertexZeroLast => len - 1 - position,
            };
            match c {
                '0' => {}
                '1' => bits |= 1 << vertex,
                _ => {
                    return Err(MaxCutError::invalid(format!(
                        "bitstring `{key}` contains `{c}`, expected only '0' and '1'"
                    )))
                }
            }
        }

        Ok(Partition { bits, len })
    }

    pub fn key(&self, order: BitOrder) -> String {
        let chars = (0..self.len).map(|vertex| if self.side(vertex) { '1' } else { '0' });
        match order {
            BitOrder::VertexZeroFirst => chars.collect(),
            BitOrder::VertexZeroLast => chars.rev().collect(),
        }
    }

    pub fn side(&self, vertex: usize) -> bool {
        vertex < self.len && self.bits & (1 << vertex) != 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Same cut, sides swapped.
    pub fn complement(&self) -> Self {
        Partition {
            bits: !self.bits & mask(self.len),
            len: self.len,
        }
    }
}

fn mask(len: usize) -> u64 {
    if len >= 64 {
        u64::MAX
    } else {
        (1u64 << len) - 1
    }
}

impl Display for Partition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.key(BitOrder::VertexZeroFirst))
    }
}

impl FromStr for Partition {
    type Err = MaxCutError;

    fn from_str(s: &str) -> Result<Self> {
        Partition::parse(s, BitOrder::VertexZeroFirst)
    }
}
