// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit operation weights and the overall budget.
//!
//! Defaults: insertion 1, deletion 1, substitution 2, transposition 2,
//! budget 2. A single substitution therefore costs as much as an insertion
//! plus a deletion, and the default budget allows one of them.
//!
//! All weights must be strictly positive. A zero weight would let a branch
//! loop forever without spending budget.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four edit operations, named from the query's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// The query has an extra character: skip it.
    Insertion,
    /// The query is missing a character: take one from the automaton.
    Deletion,
    /// The query character was replaced by another.
    Substitution,
    /// Two adjacent query characters are swapped.
    Transposition,
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditOp::Insertion => "insertion",
            EditOp::Deletion => "deletion",
            EditOp::Substitution => "substitution",
            EditOp::Transposition => "transposition",
        };
        f.write_str(name)
    }
}

/// Weights for each edit operation plus the total budget.
///
/// Deserializes from partial JSON: missing fields keep their defaults.
///
/// ```
/// use lexdawg::CostConfig;
///
/// let costs = CostConfig::default().with_budget(3.0).with_substitution(1.5);
/// assert!(costs.validate().is_ok());
/// assert!(CostConfig::default().with_insertion(0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostConfig {
    pub insertion: f32,
    pub deletion: f32,
    pub substitution: f32,
    pub transposition: f32,
    /// Maximum total cost of a reported match.
    pub budget: f32,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            insertion: 1.0,
            deletion: 1.0,
            substitution: 2.0,
            transposition: 2.0,
            budget: 2.0,
        }
    }
}

impl CostConfig {
    /// Every operation costs 1. Reported costs are then plain optimal string
    /// alignment distances.
    pub fn unit(budget: f32) -> Self {
        Self {
            insertion: 1.0,
            deletion: 1.0,
            substitution: 1.0,
            transposition: 1.0,
            budget,
        }
    }

    pub fn with_insertion(mut self, cost: f32) -> Self {
        self.insertion = cost;
        self
    }

    pub fn with_deletion(mut self, cost: f32) -> Self {
        self.deletion = cost;
        self
    }

    pub fn with_substitution(mut self, cost: f32) -> Self {
        self.substitution = cost;
        self
    }

    pub fn with_transposition(mut self, cost: f32) -> Self {
        self.transposition = cost;
        self
    }

    pub fn with_budget(mut self, budget: f32) -> Self {
        self.budget = budget;
        self
    }

    pub fn cost(&self, op: EditOp) -> f32 {
        match op {
            EditOp::Insertion => self.insertion,
            EditOp::Deletion => self.deletion,
            EditOp::Substitution => self.substitution,
            EditOp::Transposition => self.transposition,
        }
    }

    /// Reject non-positive or non-finite weights and a negative budget.
    pub fn validate(&self) -> Result<(), CostError> {
        for op in [
            EditOp::Insertion,
            EditOp::Deletion,
            EditOp::Substitution,
            EditOp::Transposition,
        ] {
            let value = self.cost(op);
            // NaN fails `> 0.0` as well
            if !(value > 0.0 && value.is_finite()) {
                return Err(CostError::NonPositiveCost { op, value });
            }
        }
        if self.budget.is_nan() || self.budget.is_infinite() {
            return Err(CostError::NonFiniteBudget(self.budget));
        }
        if self.budget < 0.0 {
            return Err(CostError::NegativeBudget(self.budget));
        }
        Ok(())
    }
}

/// Error type for invalid cost configurations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostError {
    /// An operation weight is zero, negative, NaN or infinite.
    NonPositiveCost { op: EditOp, value: f32 },
    /// The budget is below zero.
    NegativeBudget(f32),
    /// The budget is NaN or infinite.
    NonFiniteBudget(f32),
}

impl fmt::Display for CostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostError::NonPositiveCost { op, value } => {
                write!(f, "{} cost must be a positive finite number, got {}", op, value)
            }
            CostError::NegativeBudget(budget) => {
                write!(f, "budget must not be negative, got {}", budget)
            }
            CostError::NonFiniteBudget(budget) => {
                write!(f, "budget must be finite, got {}", budget)
            }
        }
    }
}

impl std::error::Error for CostError {}
