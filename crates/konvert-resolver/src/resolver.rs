//! Core resolution algorithm: depth-first search over the rule graph,
//! composing multipliers along the discovered chain.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use konvert_core::errors::{ConvertError, ConvertResult};
use konvert_core::quantity::Quantity;
use konvert_core::unit::Unit;

use crate::graph::ConversionGraph;

/// The output of a successful resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// The converted quantity, expressed in the target unit.
    pub quantity: Quantity,
    /// Units traversed, source first and target last. An identity
    /// resolution carries a single element.
    pub path: Vec<Unit>,
}

/// Convert `input` into `target` units using the rules registered in `graph`.
///
/// Resolving a quantity to its own unit returns it unchanged without
/// consulting the graph, even when the unit appears in no rule.
///
/// The search is depth-first and first-found-wins: at every unit a direct
/// rule to the target takes priority; otherwise outgoing rules are tried in
/// insertion order and the first chain reaching the target is taken. No
/// shortest-path or minimal-error selection is attempted, so when several
/// chains exist the composed result can differ in the last floating-point
/// bits depending on the order rules were registered in. Magnitudes are
/// composed by plain `f64` multiplication with no overflow or NaN checks.
///
/// Each call is stateless beyond its own visited set; nothing is memoized
/// across calls.
pub fn resolve(
    graph: &ConversionGraph,
    input: &Quantity,
    target: impl Into<Unit>,
) -> ConvertResult<Resolution> {
    let target = target.into();

    if input.unit == target {
        return Ok(Resolution {
            quantity: input.clone(),
            path: vec![target],
        });
    }

    let search = match (graph.find(&input.unit), graph.find(&target)) {
        (Some(start), Some(goal)) => {
            let mut visited = HashSet::new();
            let mut trail = Vec::new();
            dfs(graph, start, goal, input.magnitude, &mut visited, &mut trail)
                .map(|magnitude| (magnitude, trail))
        }
        // A unit no rule mentions cannot be on any chain.
        _ => None,
    };

    match search {
        Some((magnitude, trail)) => {
            let path: Vec<Unit> = trail
                .into_iter()
                .map(|idx| graph.unit_at(idx).clone())
                .collect();
            let quantity = Quantity {
                magnitude,
                unit: target,
            };
            tracing::debug!("resolved {input} to {quantity} in {} hops", path.len() - 1);
            Ok(Resolution { quantity, path })
        }
        None => Err(ConvertError::NoPath {
            from: input.unit.clone(),
            to: target,
        }),
    }
}

/// Depth-first search from `current` toward `goal`.
///
/// `visited` holds the units on the current path only: entries are removed
/// on backtrack, so a unit ruled out on one branch may still appear on a
/// sibling branch. A failed branch means "try the next candidate edge";
/// `None` is returned only once every candidate at this node is exhausted.
/// On success `trail` holds the chain of nodes from start to goal.
fn dfs(
    graph: &ConversionGraph,
    current: NodeIndex,
    goal: NodeIndex,
    magnitude: f64,
    visited: &mut HashSet<NodeIndex>,
    trail: &mut Vec<NodeIndex>,
) -> Option<f64> {
    trail.push(current);
    visited.insert(current);

    // A direct rule to the goal short-circuits any deeper search.
    if let Some(multiplier) = graph.direct(current, goal) {
        trail.push(goal);
        return Some(magnitude * multiplier);
    }

    for (next, multiplier) in graph.outgoing(current) {
        if visited.contains(&next) {
            continue;
        }
        if let Some(found) = dfs(graph, next, goal, magnitude * multiplier, visited, trail) {
            return Some(found);
        }
    }

    trail.pop();
    visited.remove(&current);
    None
}
