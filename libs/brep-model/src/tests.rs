//! # Entity Graph Tests
//!
//! Tests for arena storage, dynamic handles and the body builder.

use super::*;
use glam::{DMat4, DVec3};

fn square() -> [DVec3; 4] {
    [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
    ]
}

// =============================================================================
// GRAPH TESTS
// =============================================================================

#[test]
fn test_graph_new_is_empty() {
    let graph = EntityGraph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.len(), 0);
}

#[test]
fn test_handles_are_sequential_per_kind() {
    let mut graph = EntityGraph::new();
    let a = graph.add_lump(Lump::default());
    let b = graph.add_lump(Lump::default());
    let s = graph.add_shell(Shell::default());
    assert_eq!(a, LumpId(0));
    assert_eq!(b, LumpId(1));
    assert_eq!(s, ShellId(0));
    assert_eq!(graph.len(), 3);
}

#[test]
fn test_dangling_handle_reads_as_absent() {
    let mut graph = EntityGraph::new();
    graph.add_face(Face::default());
    assert!(graph.face(FaceId(0)).is_some());
    assert!(graph.face(FaceId(1)).is_none());
    assert!(!graph.contains(FaceId(1).into()));
    assert!(graph.contains(FaceId(0).into()));
}

#[test]
fn test_contains_checks_kind() {
    let mut graph = EntityGraph::new();
    graph.add_lump(Lump::default());
    assert!(graph.contains(EntityRef::Lump(LumpId(0))));
    assert!(!graph.contains(EntityRef::Body(BodyId(0))));
}

#[test]
fn test_vertex_location() {
    let mut graph = EntityGraph::new();
    let point = graph.add_point(Point {
        location: DVec3::new(1.0, 2.0, 3.0),
    });
    let vertex = graph.add_vertex(Vertex { point: Some(point) });
    let bare = graph.add_vertex(Vertex::default());
    assert_eq!(graph.vertex_location(vertex), Some(DVec3::new(1.0, 2.0, 3.0)));
    assert_eq!(graph.vertex_location(bare), None);
    assert_eq!(graph.vertex_location(VertexId(99)), None);
}

// =============================================================================
// HANDLE TESTS
// =============================================================================

#[test]
fn test_entity_ref_kind_and_display() {
    let handle = EntityRef::from(CoedgeId(7));
    assert_eq!(handle.kind(), EntityKind::Coedge);
    assert_eq!(handle.index(), 7);
    assert_eq!(handle.to_string(), "coedge #7");
}

#[test]
fn test_entity_ref_downcasts() {
    let body: EntityRef = BodyId(1).into();
    assert_eq!(body.as_body(), Some(BodyId(1)));
    assert_eq!(body.as_lump(), None);
    let lump: EntityRef = LumpId(2).into();
    assert_eq!(lump.as_lump(), Some(LumpId(2)));
    assert_eq!(lump.as_body(), None);
}

// =============================================================================
// BUILDER TESTS
// =============================================================================

#[test]
fn test_builder_empty_body_has_no_lumps() {
    let mut graph = EntityGraph::new();
    let body = BodyBuilder::new(&mut graph).finish();
    let body = graph.body(body).unwrap();
    assert_eq!(body.lump, None);
    assert_eq!(body.transform, None);
}

#[test]
fn test_builder_links_lumps_in_order() {
    let mut graph = EntityGraph::new();
    let mut builder = BodyBuilder::new(&mut graph);
    let first = builder.add_lump();
    let second = builder.add_lump();
    let body = builder.finish();

    assert_eq!(graph.body(body).unwrap().lump, Some(first));
    assert_eq!(graph.lump(first).unwrap().next_lump, Some(second));
    assert_eq!(graph.lump(second).unwrap().next_lump, None);
    assert!(graph.lump(second).unwrap().shell.is_some());
}

#[test]
fn test_builder_face_coedges_are_circular() {
    let mut graph = EntityGraph::new();
    let mut builder = BodyBuilder::new(&mut graph);
    let lump = builder.add_lump();
    let face = builder.add_planar_face(lump, &square()).unwrap();
    builder.finish();

    let boundary = graph.face(face).unwrap().boundary.unwrap();
    let first = graph.boundary_loop(boundary).unwrap().coedge.unwrap();

    let mut coedge = first;
    let mut starts = Vec::new();
    loop {
        let c = graph.coedge(coedge).unwrap();
        let edge = graph.edge(c.edge.unwrap()).unwrap();
        starts.push(graph.vertex_location(edge.start_vertex.unwrap()).unwrap());
        coedge = c.next_coedge.unwrap();
        if coedge == first {
            break;
        }
    }
    assert_eq!(starts, square().to_vec());
}

#[test]
fn test_builder_edges_close_the_polygon() {
    let mut graph = EntityGraph::new();
    let mut builder = BodyBuilder::new(&mut graph);
    let lump = builder.add_lump();
    builder.add_planar_face(lump, &square()).unwrap();
    builder.finish();

    let last = graph.edge(EdgeId(3)).unwrap();
    assert_eq!(
        graph.vertex_location(last.end_vertex.unwrap()),
        Some(square()[0])
    );
}

#[test]
fn test_builder_links_faces_in_order() {
    let mut graph = EntityGraph::new();
    let mut builder = BodyBuilder::new(&mut graph);
    let lump = builder.add_lump();
    let a = builder.add_planar_face(lump, &square()).unwrap();
    let b = builder.add_planar_face(lump, &square()).unwrap();
    builder.finish();

    let shell = graph.lump(lump).unwrap().shell.unwrap();
    assert_eq!(graph.shell(shell).unwrap().face, Some(a));
    assert_eq!(graph.face(a).unwrap().next_face, Some(b));
    assert_eq!(graph.face(b).unwrap().next_face, None);
}

#[test]
fn test_builder_custom_kinds() {
    let mut graph = EntityGraph::new();
    let mut builder = BodyBuilder::new(&mut graph);
    let lump = builder.add_lump();
    let face = builder
        .add_face(lump, &square(), SurfaceKind::Cone, CurveKind::Ellipse)
        .unwrap();
    builder.finish();

    let surface = graph.face(face).unwrap().surface.unwrap();
    assert_eq!(graph.surface(surface).unwrap().kind, SurfaceKind::Cone);
    assert_eq!(graph.curve(CurveId(0)).unwrap().kind, CurveKind::Ellipse);
}

#[test]
fn test_builder_rejects_degenerate_face() {
    let mut graph = EntityGraph::new();
    let mut builder = BodyBuilder::new(&mut graph);
    let lump = builder.add_lump();
    let err = builder
        .add_planar_face(lump, &[DVec3::ZERO, DVec3::X])
        .unwrap_err();
    assert_eq!(err, ModelError::DegenerateFace { count: 2, min: 3 });
}

#[test]
fn test_builder_rejects_foreign_lump() {
    let mut graph = EntityGraph::new();
    let mut builder = BodyBuilder::new(&mut graph);
    let err = builder.add_planar_face(LumpId(42), &square()).unwrap_err();
    assert_eq!(err, ModelError::UnknownEntity(EntityRef::Lump(LumpId(42))));
    assert_eq!(err.to_string(), "Unknown entity: lump #42");
}

#[test]
fn test_builder_sets_transform() {
    let mut graph = EntityGraph::new();
    let mut builder = BodyBuilder::new(&mut graph);
    let matrix = DMat4::from_translation(DVec3::new(1.0, 2.0, 3.0));
    builder.set_transform(matrix);
    let body = builder.finish();

    let transform = graph.body(body).unwrap().transform.unwrap();
    assert_eq!(graph.transform(transform).unwrap().matrix, matrix);
}
