//! Hit-testing: which node or edge lies under a pointer.
//!
//! Nodes are tested in world space against a fixed world radius, so their
//! apparent hit size shrinks as the view zooms out. Edges are tested in
//! screen space against a fixed pixel threshold.

use super::{Point, Viewport};
use crate::model::{EdgeId, Graph, NodeId};

/// Result of a combined pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Node(NodeId),
    Edge(EdgeId),
}

/// First node (in iteration order) within `radius` world units of `world`.
pub fn node_at(graph: &Graph, world: Point, radius: f64) -> Option<NodeId> {
    graph
        .nodes()
        .find(|(_, node)| node.position.distance(world) <= radius)
        .map(|(id, _)| id)
}

/// First edge whose screen segment passes within `threshold` pixels of `screen`.
pub fn edge_at(
    graph: &Graph,
    viewport: &Viewport,
    screen: Point,
    threshold: f64,
) -> Option<EdgeId> {
    let limit = threshold * threshold;
    graph.edges().find_map(|(id, a, b)| {
        let a = viewport.world_to_screen(graph.node(a)?.position);
        let b = viewport.world_to_screen(graph.node(b)?.position);
        let d = segment_distance_sq(screen, a, b)?;
        (d <= limit).then_some(id)
    })
}

/// Nodes win over edges; edges are only considered when no node matched.
pub fn pick(
    graph: &Graph,
    viewport: &Viewport,
    screen: Point,
    node_radius: f64,
    edge_threshold: f64,
) -> Option<Hit> {
    let world = viewport.screen_to_world(screen);
    if let Some(node) = node_at(graph, world, node_radius) {
        return Some(Hit::Node(node));
    }
    edge_at(graph, viewport, screen, edge_threshold).map(Hit::Edge)
}

/// Squared distance from `p` to the segment `a`–`b`, with the projection
/// parameter clamped to [0, 1]. `None` for a zero-length segment.
pub fn segment_distance_sq(p: Point, a: Point, b: Point) -> Option<f64> {
    let d = b - a;
    let len_sq = d.x * d.x + d.y * d.y;
    if len_sq == 0.0 {
        return None;
    }
    let rel = p - a;
    let t = ((rel.x * d.x + rel.y * d.y) / len_sq).clamp(0.0, 1.0);
    let closest = Point::new(a.x + t * d.x, a.y + t * d.y);
    Some(p.distance_sq(closest))
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
