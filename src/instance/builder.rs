//! Instance construction and edge-stream parsing.

use super::types::{Edge, EdgeTable, Instance, Node, ProblemKind};
use crate::error::BuildError;

/// Builds a normalized [`Instance`] for one problem variant.
///
/// Construction is chainable and fallible: every edge operation consumes
/// the builder and returns it on success, so an error aborts the build
/// and no partially-populated instance can be observed.
///
/// # Examples
///
/// ```
/// use flowmip::instance::InstanceBuilder;
///
/// let instance = InstanceBuilder::assignment(2, 2)
///     .edge(0, 0, 1.0)?
///     .edge(0, 1, 4.0)?
///     .edge(1, 0, 2.0)?
///     .edge(1, 1, 3.0)?
///     .build();
/// assert_eq!(instance.node_count(), 4);
/// # Ok::<(), flowmip::error::BuildError>(())
/// ```
#[derive(Debug, Clone)]
pub struct InstanceBuilder {
    kind: ProblemKind,
    origins: Vec<Node>,
    demands: Vec<Node>,
    transshipments: Vec<Node>,
    edges: EdgeTable,
}

impl InstanceBuilder {
    /// A balanced-or-not bipartite matching instance with the given role
    /// cardinalities. Assignment nodes carry no explicit quantity; their
    /// "capacity" is implicit in the matching constraints.
    pub fn assignment(origin_count: usize, demand_count: usize) -> Self {
        let kind = ProblemKind::Assignment;
        Self {
            kind,
            origins: implicit_nodes(origin_count),
            demands: implicit_nodes(demand_count),
            transshipments: Vec::new(),
            edges: EdgeTable::filled(origin_count, demand_count, kind.default_edge()),
        }
    }

    /// A transportation instance with the default per-variable flow bound.
    ///
    /// Supplies and requirements are listed per node; ids are implicit
    /// positions within each role.
    pub fn transportation(supplies: &[i64], requirements: &[i64]) -> Self {
        Self::transportation_with_bound(supplies, requirements, ProblemKind::DEFAULT_FLOW_BOUND)
    }

    /// A transportation instance with an explicit per-variable flow bound.
    pub fn transportation_with_bound(
        supplies: &[i64],
        requirements: &[i64],
        flow_bound: i64,
    ) -> Self {
        let kind = ProblemKind::Transportation { flow_bound };
        Self {
            kind,
            origins: quantified_nodes(supplies),
            demands: quantified_nodes(requirements),
            transshipments: Vec::new(),
            edges: EdgeTable::filled(supplies.len(), requirements.len(), kind.default_edge()),
        }
    }

    /// A min-cost-flow instance over the full node index space.
    ///
    /// Origins and demands are `(id, quantity)` pairs; transshipment
    /// nodes are bare ids with zero net balance. All ids must lie within
    /// `[0, total)` where `total` is the combined node count; role
    /// overlap is allowed and yields one balance row per declaration.
    pub fn min_cost_flow(
        origins: &[(usize, i64)],
        demands: &[(usize, i64)],
        transshipments: &[usize],
    ) -> Result<Self, BuildError> {
        let total = origins.len() + demands.len() + transshipments.len();
        let check = |id: usize| {
            if id < total {
                Ok(())
            } else {
                Err(BuildError::IndexOutOfRange { id, limit: total })
            }
        };
        for &(id, _) in origins.iter().chain(demands) {
            check(id)?;
        }
        for &id in transshipments {
            check(id)?;
        }

        let kind = ProblemKind::MinCostFlow;
        Ok(Self {
            kind,
            origins: origins.iter().map(|&(id, quantity)| Node { id, quantity }).collect(),
            demands: demands.iter().map(|&(id, quantity)| Node { id, quantity }).collect(),
            transshipments: transshipments
                .iter()
                .map(|&id| Node { id, quantity: 0 })
                .collect(),
            edges: EdgeTable::filled(total, total, kind.default_edge()),
        })
    }

    /// Declares an edge with the variant's default capacity (zero).
    ///
    /// Suited to the bipartite variants, whose formulations carry no
    /// capacity rows. Re-declaring a pair overwrites the whole record;
    /// the last write wins.
    pub fn edge(self, from: usize, to: usize, cost: f64) -> Result<Self, BuildError> {
        let capacity = self.kind.default_edge().capacity;
        self.edge_with_capacity(from, to, cost, capacity)
    }

    /// Declares a capacitated edge. Re-declaring a pair overwrites the
    /// whole record; the last write wins.
    pub fn edge_with_capacity(
        mut self,
        from: usize,
        to: usize,
        cost: f64,
        capacity: i64,
    ) -> Result<Self, BuildError> {
        if from >= self.edges.rows() {
            return Err(BuildError::IndexOutOfRange {
                id: from,
                limit: self.edges.rows(),
            });
        }
        if to >= self.edges.cols() {
            return Err(BuildError::IndexOutOfRange {
                id: to,
                limit: self.edges.cols(),
            });
        }
        self.edges.set(from, to, Edge { cost, capacity });
        Ok(self)
    }

    /// Consumes a whitespace-separated edge-record stream until exhausted.
    ///
    /// Records are `(from, to, cost)` for the bipartite variants and
    /// `(from, to, cost, capacity)` for min-cost flow. A record is
    /// applied only when every one of its tokens was read and parsed; an
    /// incomplete trailing record is discarded with a warning, never
    /// applied. A malformed numeric token or an out-of-range endpoint
    /// aborts the build.
    pub fn parse_edges(mut self, text: &str) -> Result<Self, BuildError> {
        let width = self.kind.record_width();
        let mut tokens = text.split_whitespace();
        let mut record = 0usize;

        loop {
            let mut fields = Vec::with_capacity(width);
            for _ in 0..width {
                match tokens.next() {
                    Some(token) => fields.push(token),
                    None => break,
                }
            }
            if fields.is_empty() {
                break;
            }
            if fields.len() < width {
                log::warn!(
                    "discarding incomplete trailing edge record {record} ({}/{width} tokens)",
                    fields.len()
                );
                break;
            }

            let from = parse_field::<usize>(fields[0], record)?;
            let to = parse_field::<usize>(fields[1], record)?;
            let cost = parse_field::<f64>(fields[2], record)?;
            let capacity = match fields.get(3) {
                Some(token) => parse_field::<i64>(token, record)?,
                None => self.kind.default_edge().capacity,
            };

            self = self.edge_with_capacity(from, to, cost, capacity)?;
            record += 1;
        }

        Ok(self)
    }

    /// Finalizes the normalized instance.
    pub fn build(self) -> Instance {
        Instance {
            kind: self.kind,
            origins: self.origins,
            demands: self.demands,
            transshipments: self.transshipments,
            edges: self.edges,
        }
    }
}

fn parse_field<T: std::str::FromStr>(token: &str, record: usize) -> Result<T, BuildError> {
    token.parse().map_err(|_| BuildError::Parse {
        token: token.to_string(),
        record,
    })
}

fn implicit_nodes(count: usize) -> Vec<Node> {
    (0..count).map(|id| Node { id, quantity: 0 }).collect()
}

fn quantified_nodes(quantities: &[i64]) -> Vec<Node> {
    quantities
        .iter()
        .enumerate()
        .map(|(id, &quantity)| Node { id, quantity })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_defaults_to_free_edges() {
        let instance = InstanceBuilder::assignment(2, 3).build();

        assert_eq!(instance.origins().len(), 2);
        assert_eq!(instance.demands().len(), 3);
        assert_eq!(instance.edge(1, 2).cost, 0.0);
    }

    #[test]
    fn test_flow_variants_default_to_unusable_edges() {
        let instance = InstanceBuilder::transportation(&[10], &[5]).build();
        assert!(instance.edge(0, 0).cost.is_infinite());

        let instance = InstanceBuilder::min_cost_flow(&[(0, 10)], &[(1, 5)], &[])
            .unwrap()
            .build();
        assert!(instance.edge(0, 1).cost.is_infinite());
        assert_eq!(instance.edge(0, 1).capacity, 0);
    }

    #[test]
    fn test_last_write_wins() {
        let instance = InstanceBuilder::min_cost_flow(&[(0, 10)], &[(1, 5)], &[])
            .unwrap()
            .edge_with_capacity(0, 1, 3.0, 7)
            .unwrap()
            .edge_with_capacity(0, 1, 9.0, 2)
            .unwrap()
            .build();

        assert_eq!(instance.edge(0, 1).cost, 9.0);
        assert_eq!(instance.edge(0, 1).capacity, 2);
    }

    #[test]
    fn test_edge_out_of_range() {
        let result = InstanceBuilder::assignment(2, 2).edge(2, 0, 1.0);
        assert!(matches!(
            result,
            Err(BuildError::IndexOutOfRange { id: 2, limit: 2 })
        ));

        let result = InstanceBuilder::assignment(2, 3).edge(0, 3, 1.0);
        assert!(matches!(
            result,
            Err(BuildError::IndexOutOfRange { id: 3, limit: 3 })
        ));
    }

    #[test]
    fn test_declared_node_id_out_of_range() {
        let result = InstanceBuilder::min_cost_flow(&[(5, 10)], &[(1, 5)], &[]);
        assert!(matches!(
            result,
            Err(BuildError::IndexOutOfRange { id: 5, limit: 2 })
        ));
    }

    #[test]
    fn test_parse_edges_bipartite() {
        let instance = InstanceBuilder::assignment(2, 2)
            .parse_edges("0 0 1  0 1 4  1 0 2  1 1 3")
            .unwrap()
            .build();

        assert_eq!(instance.edge(0, 0).cost, 1.0);
        assert_eq!(instance.edge(1, 1).cost, 3.0);
    }

    #[test]
    fn test_parse_edges_capacitated() {
        let instance = InstanceBuilder::min_cost_flow(&[(0, 10)], &[(2, 5)], &[1])
            .unwrap()
            .parse_edges("0 1 1 10\n1 2 1 10\n0 2 5 10\n")
            .unwrap()
            .build();

        assert_eq!(instance.edge(0, 1).cost, 1.0);
        assert_eq!(instance.edge(0, 1).capacity, 10);
        assert_eq!(instance.edge(0, 2).cost, 5.0);
    }

    #[test]
    fn test_parse_edges_discards_incomplete_trailing_record() {
        // A trailing "1 1" is two tokens short of a full record and must
        // not overwrite the previously applied edge.
        let instance = InstanceBuilder::assignment(2, 2)
            .parse_edges("1 1 3  1 1")
            .unwrap()
            .build();

        assert_eq!(instance.edge(1, 1).cost, 3.0);
    }

    #[test]
    fn test_parse_edges_malformed_token() {
        let result = InstanceBuilder::assignment(2, 2).parse_edges("0 0 abc");
        match result {
            Err(BuildError::Parse { token, record }) => {
                assert_eq!(token, "abc");
                assert_eq!(record, 0);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_edges_out_of_range_endpoint() {
        let result = InstanceBuilder::assignment(2, 2).parse_edges("0 0 1  3 0 2");
        assert!(matches!(
            result,
            Err(BuildError::IndexOutOfRange { id: 3, limit: 2 })
        ));
    }

    #[test]
    fn test_parse_edges_empty_stream() {
        let instance = InstanceBuilder::assignment(1, 1).parse_edges("  \n ").unwrap().build();
        assert_eq!(instance.edge(0, 0).cost, 0.0);
    }

    #[test]
    fn test_role_overlap_is_allowed() {
        // One physical node acting as both origin and demand.
        let instance = InstanceBuilder::min_cost_flow(&[(0, 10)], &[(0, 5)], &[]).unwrap().build();
        assert_eq!(instance.origins()[0].id, 0);
        assert_eq!(instance.demands()[0].id, 0);
        assert_eq!(instance.node_count(), 2);
    }
}
