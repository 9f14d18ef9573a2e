//! Cut vertices of the road network.
//!
//! Depth-first traversal with discovery depths and low-links, run on an
//! explicit stack of frames so that long roads cannot exhaust the call stack.
//! Segment directions are ignored: two intersections are adjacent when a
//! segment joins them either way.

use std::collections::VecDeque;

use hashbrown::HashSet;
use log::debug;
use petgraph::graph::NodeIndex;

use crate::{Error, NodeId, RoadGraph, SearchScratch};

/// One node on the traversal stack
#[derive(Debug)]
struct Frame {
    node: NodeIndex,
    depth: usize,
    /// Position of the parent frame in the stack, `None` for the root
    parent: Option<usize>,
    low_link: usize,
    /// Children still to look at, `None` until the node is first inspected
    pending: Option<VecDeque<NodeIndex>>,
    tree_children: usize,
}

impl Frame {
    fn new(node: NodeIndex, depth: usize, parent: Option<usize>) -> Self {
        Self {
            node,
            depth,
            parent,
            low_link: depth,
            pending: None,
            tree_children: 0,
        }
    }
}

/// Articulation points of the component containing the intersection `root`
///
/// # Errors
///
/// Returns an error if `root` is not a known intersection id.
pub fn find_articulation_points(graph: &RoadGraph, root: NodeId) -> Result<HashSet<NodeId>, Error> {
    let root = graph.node_index(root)?;
    let mut scratch = SearchScratch::for_graph(graph);
    let points = find_articulation_points_with(graph, &mut scratch, root)?;
    to_node_ids(graph, &points)
}

/// Articulation points of every component of the graph
pub fn find_all_articulation_points(graph: &RoadGraph) -> Result<HashSet<NodeId>, Error> {
    let mut scratch = SearchScratch::for_graph(graph);
    let mut points = HashSet::new();
    let mut components = 0usize;

    for (node, _) in graph.intersections() {
        if !scratch.is_visited(node) {
            traverse_component(graph, &mut scratch, node, &mut points);
            components += 1;
        }
    }
    debug!(
        "Found {} articulation points in {components} components",
        points.len()
    );

    to_node_ids(graph, &points)
}

/// Articulation points of the component containing `root`, using `scratch`
/// as working state. The scratch table is reset first.
pub fn find_articulation_points_with(
    graph: &RoadGraph,
    scratch: &mut SearchScratch,
    root: NodeIndex,
) -> Result<HashSet<NodeIndex>, Error> {
    graph.intersection(root)?;
    scratch.reset(graph.node_count());

    let mut points = HashSet::new();
    traverse_component(graph, scratch, root, &mut points);
    debug!(
        "Articulation search from {:?} visited {} nodes, found {} points",
        root,
        scratch.visited_count(),
        points.len()
    );
    Ok(points)
}

fn traverse_component(
    graph: &RoadGraph,
    scratch: &mut SearchScratch,
    root: NodeIndex,
    points: &mut HashSet<NodeIndex>,
) {
    let mut stack = vec![Frame::new(root, 0, None)];

    while let Some(top) = stack.len().checked_sub(1) {
        let parent_node = stack[top].parent.map(|p| stack[p].node);
        let frame = &mut stack[top];

        let Some(pending) = frame.pending.as_mut() else {
            // First visit: record depth and queue every neighbour but the parent
            scratch.discover(frame.node, parent_node, frame.depth);
            frame.pending = Some(
                graph
                    .undirected_neighbors(frame.node)
                    .into_iter()
                    .filter(|&n| Some(n) != parent_node)
                    .collect(),
            );
            continue;
        };

        if let Some(child) = pending.pop_front() {
            if scratch.is_visited(child) {
                // Back edge
                if let Some(child_depth) = scratch.depth(child) {
                    frame.low_link = frame.low_link.min(child_depth);
                }
            } else {
                frame.tree_children += 1;
                let depth = frame.depth + 1;
                stack.push(Frame::new(child, depth, Some(top)));
            }
            continue;
        }

        // Subtree done
        let Some(finished) = stack.pop() else {
            break;
        };
        scratch.set_low_link(finished.node, finished.low_link);

        match finished.parent {
            Some(parent_idx) => {
                let parent = &mut stack[parent_idx];
                // The root is judged by its number of subtrees instead
                if parent.parent.is_some() && finished.low_link >= parent.depth {
                    points.insert(parent.node);
                }
                parent.low_link = parent.low_link.min(finished.low_link);
            }
            None => {
                if finished.tree_children > 1 {
                    points.insert(finished.node);
                }
            }
        }
    }
}

fn to_node_ids(graph: &RoadGraph, points: &HashSet<NodeIndex>) -> Result<HashSet<NodeId>, Error> {
    points.iter().map(|&node| graph.node_id(node)).collect()
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use super::*;
    use crate::model::{Road, RoadGraphBuilder};

    fn build(nodes: &[NodeId], edges: &[(NodeId, NodeId)]) -> RoadGraph {
        let mut builder = RoadGraphBuilder::new();
        for (i, &id) in nodes.iter().enumerate() {
            builder
                .add_intersection(id, Point::new(i as f64, 0.0))
                .unwrap();
        }
        let road = builder.add_road(Road::new(1, "Test Road")).unwrap();
        for &(a, b) in edges {
            builder.add_two_way_segment(road, a, b, 1.0, None).unwrap();
        }
        builder.build()
    }

    fn ids(list: &[NodeId]) -> HashSet<NodeId> {
        list.iter().copied().collect()
    }

    #[test]
    fn line_has_middle_points() {
        // 1 - 2 - 3 - 4
        let graph = build(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4)]);
        for root in [1, 2, 4] {
            assert_eq!(
                find_articulation_points(&graph, root).unwrap(),
                ids(&[2, 3])
            );
        }
    }

    #[test]
    fn cycle_has_none() {
        let graph = build(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4), (4, 1)]);
        assert!(find_articulation_points(&graph, 3).unwrap().is_empty());
    }

    #[test]
    fn triangles_joined_by_bridge() {
        // {1,2,3} and {4,5,6} joined only by 3 - 4
        let graph = build(
            &[1, 2, 3, 4, 5, 6],
            &[(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 6), (6, 4)],
        );
        for root in 1..=6 {
            assert_eq!(
                find_articulation_points(&graph, root).unwrap(),
                ids(&[3, 4]),
                "rooted at {root}"
            );
        }
    }

    #[test]
    fn shared_vertex_of_two_cycles() {
        // Bow tie: triangles {1,2,3} and {3,4,5} share vertex 3
        let graph = build(
            &[1, 2, 3, 4, 5],
            &[(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 3)],
        );
        for root in 1..=5 {
            assert_eq!(find_articulation_points(&graph, root).unwrap(), ids(&[3]));
        }
    }

    #[test]
    fn star_centre_is_a_cut_vertex() {
        let graph = build(&[1, 2, 3, 4], &[(1, 2), (1, 3), (1, 4)]);
        assert_eq!(find_articulation_points(&graph, 1).unwrap(), ids(&[1]));
        assert_eq!(find_articulation_points(&graph, 4).unwrap(), ids(&[1]));
    }

    #[test]
    fn one_way_segments_still_connect() {
        let mut builder = RoadGraphBuilder::new();
        for id in 1..=3 {
            builder
                .add_intersection(id, Point::new(id as f64, 0.0))
                .unwrap();
        }
        let road = builder.add_road(Road::new(1, "One Way")).unwrap();
        builder.add_segment(road, 1, 2, 1.0, None).unwrap();
        builder.add_segment(road, 2, 3, 1.0, None).unwrap();
        let graph = builder.build();

        assert_eq!(find_articulation_points(&graph, 3).unwrap(), ids(&[2]));
    }

    #[test]
    fn only_the_root_component_is_searched() {
        // 1 - 2 - 3 and separate 4 - 5 - 6
        let graph = build(&[1, 2, 3, 4, 5, 6], &[(1, 2), (2, 3), (4, 5), (5, 6)]);
        assert_eq!(find_articulation_points(&graph, 1).unwrap(), ids(&[2]));
        assert_eq!(find_all_articulation_points(&graph).unwrap(), ids(&[2, 5]));
    }

    #[test]
    fn isolated_root_and_unknown_root() {
        let graph = build(&[1], &[]);
        assert!(find_articulation_points(&graph, 1).unwrap().is_empty());
        assert!(matches!(
            find_articulation_points(&graph, 2),
            Err(Error::InvalidNodeId(2))
        ));
    }

    #[test]
    fn scratch_records_depth_and_low_link() {
        let graph = build(&[1, 2, 3], &[(1, 2), (2, 3)]);
        let root = graph.node_index(1).unwrap();
        let leaf = graph.node_index(3).unwrap();
        let mut scratch = SearchScratch::for_graph(&graph);

        let points = find_articulation_points_with(&graph, &mut scratch, root).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(scratch.depth(root), Some(0));
        assert_eq!(scratch.depth(leaf), Some(2));
        assert_eq!(scratch.low_link(leaf), Some(2));
        assert_eq!(scratch.visited_count(), 3);

        // Reuse after an unrelated run
        let again = find_articulation_points_with(&graph, &mut scratch, leaf).unwrap();
        assert_eq!(again, points);
        assert_eq!(scratch.depth(leaf), Some(0));
    }

    #[test]
    fn long_road_does_not_overflow() {
        let ids: Vec<NodeId> = (0..200_000).collect();
        let edges: Vec<(NodeId, NodeId)> = ids.windows(2).map(|w| (w[0], w[1])).collect();
        let graph = build(&ids, &edges);

        let points = find_articulation_points(&graph, 0).unwrap();
        assert_eq!(points.len(), 200_000 - 2);
    }
}
