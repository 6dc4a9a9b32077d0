//! Model Compiler.
//!
//! Translates a normalized [`Instance`](crate::instance::Instance) into
//! the compiled [`Model`] artifact: a pair-indexed decision-variable
//! space, one minimizing linear objective, and an ordered list of linear
//! constraints. Compilation is a pure function of the instance; it
//! performs no I/O and never consults a solver.

mod compiler;
mod types;

pub use compiler::compile;
pub use types::{Comparator, DecisionVar, LinearConstraint, Model, PairSpace, VarDomain};
