//! Solver Adapter.
//!
//! The narrow contract to the external MIP engine: submit the compiled
//! model with a wall-clock budget, block until the search returns, and
//! map the backend outcome onto the coarse
//! {Optimal, Feasible, NoSolution} taxonomy. The bundled implementation
//! drives the engine behind [`good_lp`]; the backend session is a scoped
//! value released on every exit path.

mod adapter;
mod config;
mod result;

pub use adapter::{GoodLpSolver, MipSolver};
pub use config::SolveConfig;
pub use result::{Assignment, SolveResult, SolveStatus};
