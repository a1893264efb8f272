//! Conversion rule storage and graph construction.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use konvert_core::errors::{ConvertError, ConvertResult};
use konvert_core::unit::Unit;

/// A single directional conversion rule: `1 from = multiplier to`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRule {
    pub from: Unit,
    pub to: Unit,
    pub multiplier: f64,
}

/// The set of registered conversion rules, stored as a directed graph.
///
/// Units are nodes and rules are edges weighted by their multiplier. Every
/// successful insertion stores two edges, the rule itself and its algebraic
/// inverse, so both directions are traversable in one hop. The graph is
/// built incrementally and treated as read-only during resolution.
pub struct ConversionGraph {
    graph: DiGraph<Unit, f64>,
    /// Lookup from unit name to node index.
    index: HashMap<Unit, NodeIndex>,
}

impl ConversionGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Register `1 from = multiplier to`, along with the implied inverse
    /// `1 to = (1 / multiplier) from` as a distinct stored rule.
    ///
    /// The multiplier must be a positive, non-zero finite number; that is a
    /// caller obligation and is not validated here. Fails with
    /// [`ConvertError::DuplicateRule`] when a direct rule for the ordered
    /// pair already exists. Since every insertion also stores the inverse,
    /// re-registering a pair in either direction is rejected.
    pub fn add_conversion(
        &mut self,
        from: impl Into<Unit>,
        multiplier: f64,
        to: impl Into<Unit>,
    ) -> ConvertResult<()> {
        let from = from.into();
        let to = to.into();
        let a = self.intern(&from);
        let b = self.intern(&to);
        if self.graph.edges(a).any(|e| e.target() == b) {
            return Err(ConvertError::DuplicateRule { from, to });
        }
        self.graph.add_edge(a, b, multiplier);
        self.graph.add_edge(b, a, 1.0 / multiplier);
        tracing::debug!("registered conversion {from} -> {to} (x{multiplier})");
        Ok(())
    }

    /// Add or retrieve the node for a unit.
    fn intern(&mut self, unit: &Unit) -> NodeIndex {
        if let Some(&idx) = self.index.get(unit) {
            return idx;
        }
        let idx = self.graph.add_node(unit.clone());
        self.index.insert(unit.clone(), idx);
        idx
    }

    /// Look up the node index for a unit.
    pub(crate) fn find(&self, unit: &Unit) -> Option<NodeIndex> {
        self.index.get(unit).copied()
    }

    /// Get the unit name for an index.
    pub(crate) fn unit_at(&self, idx: NodeIndex) -> &Unit {
        &self.graph[idx]
    }

    /// Multiplier of the direct rule from `from` to `to`, if one exists.
    pub(crate) fn direct(&self, from: NodeIndex, to: NodeIndex) -> Option<f64> {
        self.graph
            .edges(from)
            .find(|e| e.target() == to)
            .map(|e| *e.weight())
    }

    /// Outgoing rules of a node, oldest first.
    ///
    /// petgraph iterates a node's edges newest-first; the resolver's
    /// search-order contract is rule insertion order, so the list is
    /// reversed here.
    pub(crate) fn outgoing(&self, idx: NodeIndex) -> Vec<(NodeIndex, f64)> {
        let mut edges: Vec<(NodeIndex, f64)> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.target(), *e.weight()))
            .collect();
        edges.reverse();
        edges
    }

    /// Whether a unit appears in any registered rule.
    pub fn contains_unit(&self, unit: &Unit) -> bool {
        self.index.contains_key(unit)
    }

    /// Multiplier of the direct rule between two units, if one exists.
    pub fn direct_multiplier(&self, from: &Unit, to: &Unit) -> Option<f64> {
        let a = self.find(from)?;
        let b = self.find(to)?;
        self.direct(a, b)
    }

    /// Outgoing rules of a unit in insertion order. Empty for unknown units.
    pub fn conversions_from(&self, unit: &Unit) -> Vec<ConversionRule> {
        let Some(idx) = self.find(unit) else {
            return Vec::new();
        };
        self.outgoing(idx)
            .into_iter()
            .map(|(target, multiplier)| ConversionRule {
                from: unit.clone(),
                to: self.unit_at(target).clone(),
                multiplier,
            })
            .collect()
    }

    /// All units mentioned by at least one rule.
    pub fn units(&self) -> Vec<&Unit> {
        self.graph
            .node_indices()
            .map(|idx| &self.graph[idx])
            .collect()
    }

    /// Number of distinct units.
    pub fn unit_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of stored rules, counting each inverse separately.
    pub fn rule_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count() == 0
    }
}

impl Default for ConversionGraph {
    fn default() -> Self {
        Self::new()
    }
}
