//! The compiled model artifact.

/// The ordered-pair index space of the decision variables.
///
/// Bipartite variants use origin-count × demand-count; min-cost flow
/// uses the squared total node count. Variables are stored flat in
/// row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairSpace {
    rows: usize,
    cols: usize,
}

impl PairSpace {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of ordered pairs (= decision variables).
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat index of the pair `(from, to)`.
    pub fn flat(&self, from: usize, to: usize) -> usize {
        debug_assert!(from < self.rows && to < self.cols);
        from * self.cols + to
    }

    /// The pair addressed by a flat index.
    pub fn pair(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

/// Domain policy of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarDomain {
    /// `x ∈ {0, 1}`.
    Binary,
    /// `x ∈ [0, max]`, integer.
    BoundedInteger { max: i64 },
    /// `x ≥ 0`, integer, no upper bound in the domain itself.
    NonNegativeInteger,
}

/// One decision variable: its domain and its objective coefficient.
///
/// Coefficients are always finite; pairs whose instance cost is
/// non-finite are compiled to coefficient 0 with their flow pinned to
/// zero elsewhere (domain clamp or capacity row).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionVar {
    pub domain: VarDomain,
    pub cost: f64,
}

/// Relational operator of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Le,
    Eq,
    Ge,
}

impl Comparator {
    /// Whether `lhs (op) rhs` holds within the given tolerance.
    pub fn holds(&self, lhs: f64, rhs: f64, tol: f64) -> bool {
        match self {
            Comparator::Le => lhs <= rhs + tol,
            Comparator::Eq => (lhs - rhs).abs() <= tol,
            Comparator::Ge => lhs >= rhs - tol,
        }
    }
}

/// A linear constraint: `Σ coeff·x (op) rhs`.
///
/// Terms reference variables by flat index and are ordered by index;
/// zero coefficients are not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    pub terms: Vec<(usize, f64)>,
    pub cmp: Comparator,
    pub rhs: f64,
}

impl LinearConstraint {
    /// Evaluates the left-hand side at the given variable values.
    pub fn lhs(&self, values: &[f64]) -> f64 {
        self.terms.iter().map(|&(var, coeff)| coeff * values[var]).sum()
    }
}

/// The compiled artifact: variable index space, one minimizing linear
/// objective, and an ordered constraint list.
///
/// Constructed once per solve by [`compile`](super::compile), immutable
/// thereafter, and borrowed by the solver adapter for the duration of
/// the solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub(crate) space: PairSpace,
    pub(crate) vars: Vec<DecisionVar>,
    pub(crate) constraints: Vec<LinearConstraint>,
}

impl Model {
    pub fn space(&self) -> PairSpace {
        self.space
    }

    pub fn vars(&self) -> &[DecisionVar] {
        &self.vars
    }

    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    /// Returns the number of decision variables.
    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    /// Returns the number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Evaluates the objective at the given variable values.
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.vars
            .iter()
            .zip(values)
            .map(|(var, &value)| var.cost * value)
            .sum()
    }

    /// Indices of the constraints violated by the given variable values,
    /// beyond the tolerance.
    ///
    /// A feasible point returns an empty vector; in particular any
    /// assignment extracted from a solve of this model must.
    pub fn violations(&self, values: &[f64], tol: f64) -> Vec<usize> {
        self.constraints
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.cmp.holds(c.lhs(values), c.rhs, tol))
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_space_roundtrip() {
        let space = PairSpace::new(3, 4);
        assert_eq!(space.len(), 12);

        for from in 0..3 {
            for to in 0..4 {
                let flat = space.flat(from, to);
                assert_eq!(space.pair(flat), (from, to));
            }
        }
    }

    #[test]
    fn test_comparator_holds() {
        assert!(Comparator::Le.holds(1.0, 1.0, 1e-6));
        assert!(Comparator::Le.holds(0.5, 1.0, 1e-6));
        assert!(!Comparator::Le.holds(1.1, 1.0, 1e-6));

        assert!(Comparator::Eq.holds(1.0 + 1e-9, 1.0, 1e-6));
        assert!(!Comparator::Eq.holds(1.1, 1.0, 1e-6));

        assert!(Comparator::Ge.holds(1.0, 1.0, 1e-6));
        assert!(!Comparator::Ge.holds(0.9, 1.0, 1e-6));
    }

    #[test]
    fn test_objective_and_violations() {
        let model = Model {
            space: PairSpace::new(1, 2),
            vars: vec![
                DecisionVar {
                    domain: VarDomain::Binary,
                    cost: 2.0,
                },
                DecisionVar {
                    domain: VarDomain::Binary,
                    cost: 3.0,
                },
            ],
            constraints: vec![LinearConstraint {
                terms: vec![(0, 1.0), (1, 1.0)],
                cmp: Comparator::Eq,
                rhs: 1.0,
            }],
        };

        assert_eq!(model.objective_value(&[1.0, 0.0]), 2.0);
        assert!(model.violations(&[1.0, 0.0], 1e-6).is_empty());
        assert_eq!(model.violations(&[1.0, 1.0], 1e-6), vec![0]);
    }
}
