//! # Face Ring Tests
//!
//! Closure, validity and transform behaviour of ring extraction on
//! well-formed and deliberately broken loops.

use super::*;
use approx::assert_relative_eq;
use brep_model::{
    BodyBuilder, CoedgeId, Curve, CurveKind, EdgeId, Face, LoopId, Surface, SurfaceKind,
};

fn quad() -> Vec<DVec3> {
    vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(2.0, 0.0, 0.0),
        DVec3::new(2.0, 1.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
    ]
}

/// Builds one quad face and returns it with its coedges in ring order.
fn quad_graph() -> (EntityGraph, FaceId, Vec<CoedgeId>) {
    let mut graph = EntityGraph::new();
    let mut builder = BodyBuilder::new(&mut graph);
    let lump = builder.add_lump();
    let face = builder.add_planar_face(lump, &quad()).unwrap();
    builder.finish();

    let boundary = graph.face(face).unwrap().boundary.unwrap();
    let first = graph.boundary_loop(boundary).unwrap().coedge.unwrap();
    let mut coedges = vec![first];
    let mut next = graph.coedge(first).unwrap().next_coedge.unwrap();
    while next != first {
        coedges.push(next);
        next = graph.coedge(next).unwrap().next_coedge.unwrap();
    }
    (graph, face, coedges)
}

fn edge_of(graph: &EntityGraph, coedge: CoedgeId) -> EdgeId {
    graph.coedge(coedge).unwrap().edge.unwrap()
}

// =============================================================================
// CLOSED RINGS
// =============================================================================

#[test]
fn test_closed_quad_yields_four_points_in_order() {
    let (graph, face, _) = quad_graph();
    let ring = extract_ring(&graph, face, None).unwrap();
    assert_eq!(ring, quad());
}

#[test]
fn test_ring_starts_at_first_coedge() {
    let (mut graph, face, coedges) = quad_graph();
    let boundary = graph.face(face).unwrap().boundary.unwrap();
    graph.boundary_loop_mut(boundary).unwrap().coedge = Some(coedges[2]);

    let ring = extract_ring(&graph, face, None).unwrap();
    let mut expected = quad();
    expected.rotate_left(2);
    assert_eq!(ring, expected);
}

#[test]
fn test_single_coedge_self_loop_closes() {
    let (mut graph, face, coedges) = quad_graph();
    graph.coedge_mut(coedges[0]).unwrap().next_coedge = Some(coedges[0]);
    let ring = extract_ring(&graph, face, None).unwrap();
    assert_eq!(ring, vec![quad()[0]]);
}

// =============================================================================
// TRANSFORM
// =============================================================================

#[test]
fn test_transform_applied_to_every_point() {
    let (graph, face, _) = quad_graph();
    let matrix = DMat4::from_translation(DVec3::new(10.0, 0.0, -1.0))
        * DMat4::from_rotation_z(std::f64::consts::FRAC_PI_2);

    let ring = extract_ring(&graph, face, Some(&matrix)).unwrap();
    for (actual, raw) in ring.iter().zip(quad()) {
        let expected = matrix.transform_point3(raw);
        assert_relative_eq!(actual.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(actual.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(actual.z, expected.z, epsilon = 1e-12);
    }
    assert_relative_eq!(ring[1].x, 10.0, epsilon = 1e-12);
    assert_relative_eq!(ring[1].y, 2.0, epsilon = 1e-12);
}

#[test]
fn test_identity_when_no_transform() {
    let (graph, face, _) = quad_graph();
    assert_eq!(face_ring(&graph, face, None), Some(quad()));
}

#[test]
fn test_transform_ring_in_place() {
    let mut ring = quad();
    transform_ring(&mut ring, &DMat4::from_scale(DVec3::splat(3.0)));
    assert_eq!(ring[2], DVec3::new(6.0, 3.0, 0.0));
}

// =============================================================================
// FACE LEVEL SKIPS
// =============================================================================

#[test]
fn test_missing_face() {
    let graph = EntityGraph::new();
    assert_eq!(
        extract_ring(&graph, FaceId(0), None),
        Err(SkipReason::MissingFace)
    );
}

#[test]
fn test_non_planar_surface_skipped() {
    for kind in [
        SurfaceKind::Cone,
        SurfaceKind::Sphere,
        SurfaceKind::Torus,
        SurfaceKind::Spline,
        SurfaceKind::Other("plane".to_string()),
    ] {
        let (mut graph, face, _) = quad_graph();
        let surface = graph.face(face).unwrap().surface.unwrap();
        graph.surface_mut(surface).unwrap().kind = kind;
        assert_eq!(extract_ring(&graph, face, None), Err(SkipReason::NotPlanar));
    }
}

#[test]
fn test_absent_surface_skipped() {
    let (mut graph, face, _) = quad_graph();
    graph.face_mut(face).unwrap().surface = None;
    assert_eq!(extract_ring(&graph, face, None), Err(SkipReason::NotPlanar));
}

#[test]
fn test_absent_loop_skipped() {
    let (mut graph, face, _) = quad_graph();
    graph.face_mut(face).unwrap().boundary = None;
    assert_eq!(extract_ring(&graph, face, None), Err(SkipReason::NoLoop));
}

#[test]
fn test_dangling_loop_skipped() {
    let (mut graph, face, _) = quad_graph();
    graph.face_mut(face).unwrap().boundary = Some(LoopId(77));
    assert_eq!(extract_ring(&graph, face, None), Err(SkipReason::NoLoop));
}

#[test]
fn test_absent_first_coedge_skipped() {
    let (mut graph, face, _) = quad_graph();
    let boundary = graph.face(face).unwrap().boundary.unwrap();
    graph.boundary_loop_mut(boundary).unwrap().coedge = None;
    assert_eq!(extract_ring(&graph, face, None), Err(SkipReason::NoCoedge));
}

// =============================================================================
// COEDGE LEVEL SKIPS
// =============================================================================

#[test]
fn test_absent_edge_discards_ring() {
    let (mut graph, face, coedges) = quad_graph();
    graph.coedge_mut(coedges[2]).unwrap().edge = None;
    assert_eq!(extract_ring(&graph, face, None), Err(SkipReason::MissingEdge));
}

#[test]
fn test_curved_edge_discards_ring() {
    let (mut graph, face, coedges) = quad_graph();
    let edge = edge_of(&graph, coedges[1]);
    let arc = graph.add_curve(Curve {
        kind: CurveKind::Ellipse,
    });
    graph.edge_mut(edge).unwrap().curve = Some(arc);
    assert_eq!(extract_ring(&graph, face, None), Err(SkipReason::CurvedEdge));
}

#[test]
fn test_absent_curve_discards_ring() {
    let (mut graph, face, coedges) = quad_graph();
    let edge = edge_of(&graph, coedges[3]);
    graph.edge_mut(edge).unwrap().curve = None;
    assert_eq!(extract_ring(&graph, face, None), Err(SkipReason::CurvedEdge));
}

#[test]
fn test_absent_start_vertex_discards_ring() {
    let (mut graph, face, coedges) = quad_graph();
    let edge = edge_of(&graph, coedges[0]);
    graph.edge_mut(edge).unwrap().start_vertex = None;
    assert_eq!(
        extract_ring(&graph, face, None),
        Err(SkipReason::MissingVertex)
    );
}

#[test]
fn test_absent_point_discards_ring() {
    let (mut graph, face, coedges) = quad_graph();
    let edge = edge_of(&graph, coedges[1]);
    let vertex = graph.edge(edge).unwrap().start_vertex.unwrap();
    graph.vertex_mut(vertex).unwrap().point = None;
    assert_eq!(
        extract_ring(&graph, face, None),
        Err(SkipReason::MissingVertex)
    );
}

#[test]
fn test_open_ring_discarded() {
    let (mut graph, face, coedges) = quad_graph();
    graph.coedge_mut(coedges[3]).unwrap().next_coedge = None;
    assert_eq!(extract_ring(&graph, face, None), Err(SkipReason::OpenRing));
}

#[test]
fn test_dangling_next_coedge_discarded() {
    let (mut graph, face, coedges) = quad_graph();
    graph.coedge_mut(coedges[1]).unwrap().next_coedge = Some(CoedgeId(500));
    assert_eq!(extract_ring(&graph, face, None), Err(SkipReason::OpenRing));
}

#[test]
fn test_closure_requires_identical_first_coedge() {
    // The last coedge links to a copy of the first one: same edge, same
    // geometry, different entity.
    let (mut graph, face, coedges) = quad_graph();
    let first = graph.coedge(coedges[0]).unwrap().clone();
    let twin = graph.add_coedge(first);
    graph.coedge_mut(coedges[3]).unwrap().next_coedge = Some(twin);

    // The twin continues into coedges[1], a cycle that skips the first.
    assert_eq!(extract_ring(&graph, face, None), Err(SkipReason::Cycle));
}

#[test]
fn test_cycle_among_later_coedges_terminates() {
    let (mut graph, face, coedges) = quad_graph();
    graph.coedge_mut(coedges[3]).unwrap().next_coedge = Some(coedges[2]);
    assert_eq!(extract_ring(&graph, face, None), Err(SkipReason::Cycle));
}

#[test]
fn test_face_ring_swallows_skip() {
    let mut graph = EntityGraph::new();
    let surface = graph.add_surface(Surface {
        kind: SurfaceKind::Plane,
    });
    let face = graph.add_face(Face {
        next_face: None,
        surface: Some(surface),
        boundary: None,
    });
    assert_eq!(face_ring(&graph, face, None), None);
}

#[test]
fn test_skip_reason_display() {
    assert_eq!(SkipReason::OpenRing.to_string(), "coedge ring is not closed");
    assert_eq!(SkipReason::NotPlanar.to_string(), "surface is not planar");
}
