//! Integer-programming formulations of classical network-optimization
//! problems.
//!
//! Three interchangeable problem variants are supported:
//!
//! - **Assignment**: balanced bipartite perfect matching — each origin
//!   serves exactly one demand and vice versa, binary decisions.
//! - **Transportation**: bipartite flow with per-origin supply ceilings
//!   and per-demand requirement floors, bounded integer decisions.
//! - **Min-cost flow**: general capacitated flow over origin, demand and
//!   transshipment nodes, nonnegative integer decisions with per-edge
//!   capacity rows.
//!
//! # Architecture
//!
//! Data flows one way through four stages, each a pure transform over
//! the previous stage's output:
//!
//! 1. [`instance`] — the Graph/Instance Builder normalizes node sets and
//!    an edge stream into an immutable [`instance::Instance`].
//! 2. [`model`] — the Model Compiler translates the instance into the
//!    [`model::Model`] artifact: decision variables, one minimizing
//!    objective, an ordered constraint list.
//! 3. [`solver`] — the Solver Adapter submits the model to the external
//!    MIP engine under a wall-clock budget and maps the outcome onto the
//!    {Optimal, Feasible, NoSolution} taxonomy.
//! 4. [`report`] — the Result Reporter renders status, nonzero
//!    assignment, objective and timing.
//!
//! The pipeline is synchronous and single-threaded; one instance and one
//! model serve exactly one solve.
//!
//! # Examples
//!
//! ```
//! use flowmip::instance::InstanceBuilder;
//! use flowmip::model::compile;
//! use flowmip::solver::{GoodLpSolver, MipSolver, SolveConfig, SolveStatus};
//!
//! let instance = InstanceBuilder::assignment(2, 2)
//!     .parse_edges("0 0 1  0 1 4  1 0 2  1 1 3")?
//!     .build();
//!
//! let model = compile(&instance);
//! let result = GoodLpSolver::new().solve(&model, &SolveConfig::default());
//!
//! assert_eq!(result.status, SolveStatus::Optimal);
//! assert_eq!(result.objective, Some(4.0));
//! # Ok::<(), flowmip::error::BuildError>(())
//! ```

pub mod error;
pub mod instance;
pub mod model;
pub mod report;
pub mod solver;
