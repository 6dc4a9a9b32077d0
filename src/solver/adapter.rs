//! The MIP backend adapter.

use super::config::SolveConfig;
use super::result::{Assignment, SolveResult, SolveStatus};
use crate::model::{Comparator, Model, VarDomain};
use good_lp::{default_solver, variable, variables, Expression, Solution, SolverModel};
use std::time::Instant;

/// Contract between the compiled model and an external MIP engine.
///
/// `solve` submits the model with a wall-clock budget, blocks until the
/// search finishes or the budget elapses, and reports the outcome. The
/// model is borrowed immutably and never mutated. The time limit is a
/// soft deadline: a backend that reaches it with a feasible incumbent
/// reports it with [`SolveStatus::Feasible`]; without one it reports
/// [`SolveStatus::NoSolution`]. Any returned incumbent satisfies every
/// constraint of the submitted model.
pub trait MipSolver {
    /// Solves the model and returns the outcome.
    fn solve(&self, model: &Model, config: &SolveConfig) -> SolveResult;
}

/// The bundled [`good_lp`] adapter.
///
/// Builds the backend problem from the model, runs the blocking solve,
/// and maps the outcome onto the coarse status taxonomy: proven optimum
/// → `Optimal`; infeasible, unbounded or any backend error →
/// `NoSolution` (the detail is logged, not surfaced). The wall-clock
/// limit is forwarded to backends with native support (the `coin_cbc`
/// feature); the default pure-Rust backend solves to completion.
pub struct GoodLpSolver;

impl GoodLpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoodLpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MipSolver for GoodLpSolver {
    fn solve(&self, model: &Model, config: &SolveConfig) -> SolveResult {
        if let Err(reason) = config.validate() {
            log::warn!("rejecting solve: {reason}");
            return SolveResult::no_solution(std::time::Duration::ZERO);
        }

        let started = Instant::now();

        let mut vars = variables!();
        let handles: Vec<good_lp::Variable> = model
            .vars()
            .iter()
            .map(|var| {
                let definition = match var.domain {
                    VarDomain::Binary => variable().binary(),
                    VarDomain::BoundedInteger { max } => {
                        variable().integer().min(0.0).max(max as f64)
                    }
                    VarDomain::NonNegativeInteger => variable().integer().min(0.0),
                };
                vars.add(definition)
            })
            .collect();

        let mut objective = Expression::with_capacity(model.var_count());
        for (var, &handle) in model.vars().iter().zip(&handles) {
            if var.cost != 0.0 {
                objective.add_mul(var.cost, handle);
            }
        }

        let mut problem = vars.minimise(objective).using(default_solver);

        #[cfg(feature = "coin_cbc")]
        {
            problem.set_parameter("log", "0");
            problem.set_parameter("sec", &config.time_limit.as_secs().to_string());
        }

        for constraint in model.constraints() {
            let mut expr = Expression::with_capacity(constraint.terms.len());
            for &(index, coeff) in &constraint.terms {
                expr.add_mul(coeff, handles[index]);
            }
            let bounded = match constraint.cmp {
                Comparator::Le => expr.leq(constraint.rhs),
                Comparator::Eq => expr.eq(constraint.rhs),
                Comparator::Ge => expr.geq(constraint.rhs),
            };
            problem = problem.with(bounded);
        }

        log::debug!(
            "submitting model: {} variables, {} constraints, limit {:?}",
            model.var_count(),
            model.constraint_count(),
            config.time_limit
        );

        match problem.solve() {
            Ok(solution) => {
                // Integer program: snap the backend's floating-point
                // values before evaluating the objective against the
                // model's own coefficients.
                let values: Vec<f64> = handles
                    .iter()
                    .map(|&handle| solution.value(handle).round())
                    .collect();
                let objective = model.objective_value(&values);
                SolveResult {
                    status: SolveStatus::Optimal,
                    objective: Some(objective),
                    assignment: Some(Assignment::new(model.space(), values)),
                    elapsed: started.elapsed(),
                }
            }
            Err(err) => {
                log::warn!("solver returned no usable solution: {err}");
                SolveResult::no_solution(started.elapsed())
            }
        }
    }
}
