//! A* search for the shortest route by segment length

mod state;

use std::collections::BinaryHeap;

use log::debug;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use super::{Heuristic, PathOutcome, PathSegment, RoutePath, SearchScratch};
use crate::{Error, NodeId, RoadGraph};
use state::FrontierEntry;

/// Find a route between two intersections given by their map data IDs.
///
/// Uses a fresh scratch table and the default [`Heuristic`].
///
/// # Errors
///
/// Returns an error if either ID is unknown or the graph turns out to be
/// inconsistent while the route is rebuilt.
pub fn find_path(graph: &RoadGraph, start: NodeId, goal: NodeId) -> Result<PathOutcome, Error> {
    let start = graph.node_index(start)?;
    let goal = graph.node_index(goal)?;
    let mut scratch = SearchScratch::for_graph(graph);
    find_path_with(graph, &mut scratch, start, goal, Heuristic::default())
}

/// A* search from `start` to `goal` using `scratch` as working state.
///
/// The scratch table is reset first. Pops the frontier entry with the lowest
/// estimated total cost; an entry is accepted only when it improves the
/// best known cost of its node. The best known goal cost bounds which
/// candidates are pushed at all. The search runs until the frontier is empty.
pub fn find_path_with(
    graph: &RoadGraph,
    scratch: &mut SearchScratch,
    start: NodeIndex,
    goal: NodeIndex,
    heuristic: Heuristic,
) -> Result<PathOutcome, Error> {
    scratch.reset(graph.node_count());

    let start_point = graph.intersection(start)?.geometry;
    let goal_point = graph.intersection(goal)?.geometry;

    if start == goal {
        scratch.settle(start, None, 0.0);
        return Ok(PathOutcome::Found(RoutePath::empty(graph.node_id(start)?)));
    }

    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        node: start,
        parent: None,
        cost: 0.0,
        estimate: heuristic.estimate(start_point, goal_point),
    });

    let mut best_goal_cost = f64::INFINITY;
    let mut accepted = 0usize;
    let mut pushed = 1usize;

    while let Some(FrontierEntry {
        node, parent, cost, ..
    }) = frontier.pop()
    {
        // Skip if we've already found a better path
        if cost >= scratch.cost(node) {
            continue;
        }
        scratch.settle(node, parent, cost);
        accepted += 1;

        if node == goal {
            best_goal_cost = best_goal_cost.min(cost);
            continue;
        }

        for edge in graph.outgoing(node) {
            let next = edge.target();
            let cost_to_next = cost + edge.weight().length;
            if cost_to_next >= scratch.cost(next) {
                continue;
            }

            let estimate =
                cost_to_next + heuristic.estimate(graph.graph[next].geometry, goal_point);
            if estimate < best_goal_cost {
                frontier.push(FrontierEntry {
                    node: next,
                    parent: Some(node),
                    cost: cost_to_next,
                    estimate,
                });
                pushed += 1;
            }
            if next == goal {
                best_goal_cost = best_goal_cost.min(cost_to_next);
            }
        }
    }

    debug!(
        "A* from {:?} to {:?}: {pushed} candidates pushed, {accepted} accepted",
        start, goal
    );

    if scratch.cost(goal).is_infinite() {
        return Ok(PathOutcome::Unreachable);
    }

    reconstruct_path(graph, scratch, start, goal).map(PathOutcome::Found)
}

/// Walk predecessor links from `goal` back to `start`, collecting the
/// connecting segment of every step
fn reconstruct_path(
    graph: &RoadGraph,
    scratch: &SearchScratch,
    start: NodeIndex,
    goal: NodeIndex,
) -> Result<RoutePath, Error> {
    let start_id = graph.node_id(start)?;
    let goal_id = graph.node_id(goal)?;

    let mut segments = Vec::new();
    let mut current = goal;
    while current != start {
        let current_id = graph.node_id(current)?;
        // A predecessor chain longer than the graph has nodes must be a cycle
        if segments.len() >= graph.node_count() {
            return Err(Error::GraphInconsistency {
                from: start_id,
                to: current_id,
            });
        }

        let parent = scratch.parent(current).ok_or(Error::GraphInconsistency {
            from: start_id,
            to: current_id,
        })?;
        let parent_id = graph.node_id(parent)?;
        let inconsistency = || Error::GraphInconsistency {
            from: parent_id,
            to: current_id,
        };

        let edge = graph
            .edge_between(parent, current)
            .ok_or_else(inconsistency)?;
        let segment = graph.segment(edge).ok_or_else(inconsistency)?;

        segments.push(PathSegment {
            edge,
            from: parent_id,
            to: current_id,
            road_name: graph.road_name(segment).to_string(),
            length: segment.length,
        });
        current = parent;
    }
    segments.reverse();

    Ok(RoutePath {
        start: start_id,
        goal: goal_id,
        total_cost: segments.iter().map(|s| s.length).sum(),
        segments,
    })
}
