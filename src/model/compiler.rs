//! Instance-to-model compilation.

use super::types::{Comparator, DecisionVar, LinearConstraint, Model, PairSpace, VarDomain};
use crate::instance::{Instance, NodeRole, ProblemKind};

/// Compiles a normalized instance into a [`Model`].
///
/// Pure and deterministic: the same instance always yields a
/// structurally identical model (same variable count, same constraint
/// order, same coefficients). One decision variable is created per
/// ordered pair of the variant's index space; the objective minimizes
/// Σ cost·x over those pairs; the constraint families follow the
/// variant descriptor:
///
/// - **Assignment**: binary variables; per demand column Σ x = 1, per
///   origin row Σ x = 1. An unbalanced instance compiles fine and is
///   infeasible by construction.
/// - **Transportation**: bounded integers; per demand column
///   Σ x ≥ requirement, per origin row Σ x ≤ supply.
/// - **MinCostFlow**: nonnegative integers over the full node index
///   space; one balance row per declared node (origin:
///   outflow − inflow ≤ supply; demand: inflow − outflow ≥ requirement;
///   transshipment: inflow − outflow = net balance) and one capacity
///   row per ordered pair, `x ≤ capacity`.
///
/// Pairs whose cost is non-finite (undeclared edges of the flow
/// variants) enter the objective with coefficient 0 and are pinned to
/// zero flow: the bipartite variants clamp the variable domain, the
/// min-cost-flow variant already carries the capacity-0 row. This keeps
/// every submitted coefficient finite without changing the feasible
/// optima.
pub fn compile(instance: &Instance) -> Model {
    let space = index_space(instance);
    let vars = build_vars(instance, space);
    let mut constraints = Vec::new();

    match instance.kind() {
        ProblemKind::Assignment => {
            push_column_sums(&mut constraints, space, Comparator::Eq, |_| 1.0);
            push_row_sums(&mut constraints, space, Comparator::Eq, |_| 1.0);
        }
        ProblemKind::Transportation { .. } => {
            let demands = instance.demands();
            let origins = instance.origins();
            push_column_sums(&mut constraints, space, Comparator::Ge, |j| {
                demands[j].quantity as f64
            });
            push_row_sums(&mut constraints, space, Comparator::Le, |i| {
                origins[i].quantity as f64
            });
        }
        ProblemKind::MinCostFlow => {
            for (role, node) in instance.nodes_with_roles() {
                constraints.push(balance_row(space, role, node.id, node.quantity));
            }
            push_capacity_rows(&mut constraints, instance, space);
        }
    }

    Model {
        space,
        vars,
        constraints,
    }
}

fn index_space(instance: &Instance) -> PairSpace {
    match instance.kind() {
        ProblemKind::Assignment | ProblemKind::Transportation { .. } => {
            PairSpace::new(instance.origins().len(), instance.demands().len())
        }
        ProblemKind::MinCostFlow => {
            let total = instance.node_count();
            PairSpace::new(total, total)
        }
    }
}

fn build_vars(instance: &Instance, space: PairSpace) -> Vec<DecisionVar> {
    let base_domain = match instance.kind() {
        ProblemKind::Assignment => VarDomain::Binary,
        ProblemKind::Transportation { flow_bound } => VarDomain::BoundedInteger { max: flow_bound },
        ProblemKind::MinCostFlow => VarDomain::NonNegativeInteger,
    };

    (0..space.len())
        .map(|index| {
            let (from, to) = space.pair(index);
            let edge = instance.edge(from, to);
            if edge.cost.is_finite() {
                DecisionVar {
                    domain: base_domain,
                    cost: edge.cost,
                }
            } else {
                // Undeclared pair: zero objective contribution, zero flow.
                // Min-cost flow pins it through its capacity-0 row instead
                // of the domain, keeping the domain policy uniform there.
                let domain = match instance.kind() {
                    ProblemKind::MinCostFlow => base_domain,
                    _ => VarDomain::BoundedInteger { max: 0 },
                };
                DecisionVar { domain, cost: 0.0 }
            }
        })
        .collect()
}

/// One constraint per demand column: Σ over origin rows of x(i, j).
fn push_column_sums(
    constraints: &mut Vec<LinearConstraint>,
    space: PairSpace,
    cmp: Comparator,
    rhs: impl Fn(usize) -> f64,
) {
    for to in 0..space.cols() {
        let terms = (0..space.rows()).map(|from| (space.flat(from, to), 1.0)).collect();
        constraints.push(LinearConstraint {
            terms,
            cmp,
            rhs: rhs(to),
        });
    }
}

/// One constraint per origin row: Σ over demand columns of x(i, j).
fn push_row_sums(
    constraints: &mut Vec<LinearConstraint>,
    space: PairSpace,
    cmp: Comparator,
    rhs: impl Fn(usize) -> f64,
) {
    for from in 0..space.rows() {
        let terms = (0..space.cols()).map(|to| (space.flat(from, to), 1.0)).collect();
        constraints.push(LinearConstraint {
            terms,
            cmp,
            rhs: rhs(from),
        });
    }
}

/// The flow-balance row of one declared node.
///
/// Coefficients are accumulated per variable, so the self-loop pair
/// (id, id) cancels out of its own row and is not stored.
fn balance_row(space: PairSpace, role: NodeRole, id: usize, quantity: i64) -> LinearConstraint {
    let (outflow_sign, cmp) = match role {
        NodeRole::Origin => (1.0, Comparator::Le),
        NodeRole::Demand => (-1.0, Comparator::Ge),
        NodeRole::Transshipment => (-1.0, Comparator::Eq),
    };

    let mut coeffs = vec![0.0; space.len()];
    for other in 0..space.cols() {
        coeffs[space.flat(id, other)] += outflow_sign;
        coeffs[space.flat(other, id)] -= outflow_sign;
    }

    let terms = coeffs
        .into_iter()
        .enumerate()
        .filter(|&(_, coeff)| coeff != 0.0)
        .collect();

    LinearConstraint {
        terms,
        cmp,
        rhs: quantity as f64,
    }
}

/// One capacity row per ordered pair, row-major: x(i, j) ≤ capacity(i, j).
fn push_capacity_rows(
    constraints: &mut Vec<LinearConstraint>,
    instance: &Instance,
    space: PairSpace,
) {
    for index in 0..space.len() {
        let (from, to) = space.pair(index);
        constraints.push(LinearConstraint {
            terms: vec![(index, 1.0)],
            cmp: Comparator::Le,
            rhs: instance.edge(from, to).capacity as f64,
        });
    }
}
