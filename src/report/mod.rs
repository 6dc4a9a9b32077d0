//! Result Reporter.
//!
//! Renders a [`SolveResult`] as plain text: status label, the variable
//! assignment as `x[i j]: v` lines, objective value and elapsed seconds.

use crate::solver::{SolveResult, SolveStatus};
use std::fmt::Write;

/// Rendering options.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Skip zero-valued assignments. On by default.
    pub suppress_zeros: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            suppress_zeros: true,
        }
    }
}

impl ReportConfig {
    pub fn with_suppress_zeros(mut self, suppress: bool) -> Self {
        self.suppress_zeros = suppress;
        self
    }
}

/// Renders the solve outcome as plain text.
///
/// # Examples
///
/// ```
/// use flowmip::instance::InstanceBuilder;
/// use flowmip::model::compile;
/// use flowmip::report::{render, ReportConfig};
/// use flowmip::solver::{GoodLpSolver, MipSolver, SolveConfig};
///
/// let instance = InstanceBuilder::assignment(2, 2)
///     .parse_edges("0 0 1  0 1 4  1 0 2  1 1 3")?
///     .build();
/// let result = GoodLpSolver::new().solve(&compile(&instance), &SolveConfig::default());
/// let text = render(&result, &ReportConfig::default());
/// assert!(text.starts_with("status: Optimal"));
/// # Ok::<(), flowmip::error::BuildError>(())
/// ```
pub fn render(result: &SolveResult, config: &ReportConfig) -> String {
    // Writing into a String cannot fail; results are ignored throughout.
    let mut out = String::new();
    let _ = writeln!(out, "status: {}", result.status.label());

    if result.status == SolveStatus::NoSolution {
        let _ = writeln!(out, "no solution found");
        return out;
    }

    if let Some(assignment) = &result.assignment {
        if config.suppress_zeros {
            for (from, to, value) in assignment.nonzero() {
                let _ = writeln!(out, "x[{from} {to}]: {value}");
            }
        } else {
            let space = assignment.space();
            for from in 0..space.rows() {
                for to in 0..space.cols() {
                    let _ = writeln!(out, "x[{from} {to}]: {}", assignment.value(from, to));
                }
            }
        }
    }

    if let Some(objective) = result.objective {
        let _ = writeln!(out, "objective: {objective}");
    }
    let _ = writeln!(out, "elapsed: {:.6}s", result.elapsed.as_secs_f64());

    out
}
