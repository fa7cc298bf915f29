//! Target ranks, one type per decomposition family
//!
//! Arity is checked against the tensor order when a decomposition is invoked, before
//! any computation starts.

use crate::error::{DecompError, DecompResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of rank-1 components of a CP model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KruskalRank(pub usize);

impl KruskalRank {
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for KruskalRank {
    fn from(rank: usize) -> Self {
        KruskalRank(rank)
    }
}

impl TryFrom<&[usize]> for KruskalRank {
    type Error = DecompError;

    fn try_from(values: &[usize]) -> DecompResult<Self> {
        match values {
            [rank] => Ok(KruskalRank(*rank)),
            _ => Err(DecompError::rank(format!(
                "a Kruskal rank is a single value, got {}",
                values.len()
            ))),
        }
    }
}

/// Per-mode Tucker ranks (R₁, …, R_N)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultilinearRank(pub Vec<usize>);

impl MultilinearRank {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Check arity and 1 ≤ Rₙ ≤ Iₙ for every mode
    pub(crate) fn check(&self, shape: &[usize]) -> DecompResult<()> {
        if self.0.len() != shape.len() {
            return Err(DecompError::rank(format!(
                "multilinear rank has {} values but the tensor has order {}",
                self.0.len(),
                shape.len()
            )));
        }
        for (mode, (&r, &size)) in self.0.iter().zip(shape).enumerate() {
            if r == 0 || r > size {
                return Err(DecompError::rank(format!(
                    "mode-{} rank must lie in 1..={}, got {}",
                    mode, size, r
                )));
            }
        }
        Ok(())
    }
}

impl From<Vec<usize>> for MultilinearRank {
    fn from(ranks: Vec<usize>) -> Self {
        MultilinearRank(ranks)
    }
}

impl From<&[usize]> for MultilinearRank {
    fn from(ranks: &[usize]) -> Self {
        MultilinearRank(ranks.to_vec())
    }
}

/// Bond dimensions (R₁, …, R_{N−1}) of a tensor train
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TtRank(pub Vec<usize>);

impl TtRank {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Check order ≥ 2, arity N − 1, non-empty modes and that every bond is at least 1
    pub(crate) fn check(&self, shape: &[usize]) -> DecompResult<()> {
        if shape.len() < 2 {
            return Err(DecompError::rank(format!(
                "a tensor train needs order at least 2, got {}",
                shape.len()
            )));
        }
        if self.0.len() != shape.len() - 1 {
            return Err(DecompError::rank(format!(
                "TT rank has {} values but an order-{} tensor needs {}",
                self.0.len(),
                shape.len(),
                shape.len() - 1
            )));
        }
        if let Some(mode) = shape.iter().position(|&n| n == 0) {
            return Err(DecompError::rank(format!("mode {} has size zero", mode)));
        }
        if let Some(bond) = self.0.iter().position(|&r| r == 0) {
            return Err(DecompError::rank(format!("bond {} is zero", bond)));
        }
        Ok(())
    }
}

impl From<Vec<usize>> for TtRank {
    fn from(ranks: Vec<usize>) -> Self {
        TtRank(ranks)
    }
}

impl From<&[usize]> for TtRank {
    fn from(ranks: &[usize]) -> Self {
        TtRank(ranks.to_vec())
    }
}
