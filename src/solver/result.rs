//! Solve outcome types.

use crate::model::PairSpace;
use std::time::Duration;

/// Outcome taxonomy of a solve.
///
/// Deliberately coarse: everything the backend cannot turn into a usable
/// point — infeasible, unbounded, unknown, error — is coalesced into
/// [`SolveStatus::NoSolution`]. The distinction only matters for
/// diagnostics and goes to the log instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveStatus {
    /// Proven optimal solution.
    Optimal,
    /// Feasible incumbent, optimality not proven (time limit reached).
    Feasible,
    /// No usable solution.
    NoSolution,
}

impl SolveStatus {
    /// Human-readable status label.
    pub fn label(&self) -> &'static str {
        match self {
            SolveStatus::Optimal => "Optimal",
            SolveStatus::Feasible => "Feasible",
            SolveStatus::NoSolution => "No Solution",
        }
    }
}

/// A variable assignment over the model's pair space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    space: PairSpace,
    values: Vec<f64>,
}

impl Assignment {
    pub(crate) fn new(space: PairSpace, values: Vec<f64>) -> Self {
        debug_assert_eq!(space.len(), values.len());
        Self { space, values }
    }

    /// The pair space this assignment is indexed by.
    pub fn space(&self) -> PairSpace {
        self.space
    }

    /// The value assigned to the pair `(from, to)`.
    pub fn value(&self, from: usize, to: usize) -> f64 {
        self.values[self.space.flat(from, to)]
    }

    /// All values in flat row-major order, aligned with the model's
    /// variable list.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The nonzero entries as `(from, to, value)` triples, row-major.
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.values.iter().enumerate().filter_map(|(index, &value)| {
            if value != 0.0 {
                let (from, to) = self.space.pair(index);
                Some((from, to, value))
            } else {
                None
            }
        })
    }
}

/// The result of one solve.
///
/// Objective and assignment are present exactly when the status is not
/// [`SolveStatus::NoSolution`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// Solve status.
    pub status: SolveStatus,
    /// Objective value at the returned assignment.
    pub objective: Option<f64>,
    /// The returned variable assignment.
    pub assignment: Option<Assignment>,
    /// Wall-clock time spent in the solve call.
    pub elapsed: Duration,
}

impl SolveResult {
    pub(crate) fn no_solution(elapsed: Duration) -> Self {
        Self {
            status: SolveStatus::NoSolution,
            objective: None,
            assignment: None,
            elapsed,
        }
    }

    /// Whether a feasible solution was found.
    pub fn is_solution_found(&self) -> bool {
        matches!(self.status, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}
