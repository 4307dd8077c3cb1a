use super::*;
use crate::types::Node;
use nalgebra::{vector, Vector2};

fn node(id: &str, x: f64, y: f64) -> Node {
    Node {
        id: id.to_string(),
        group: Default::default(),
        x,
        y,
    }
}

fn fixture() -> Vec<Node> {
    vec![
        node("node1", 10.0, 10.0),
        node("node2", 15.0, 15.0),
        node("node3", 28.0, 16.0),
        node("node4", 35.0, 28.0),
        node("node5", 5.0, 64.0),
        node("node6", 18.0, 15.0),
    ]
}

fn coords(nodes: &[&Node]) -> Vec<(f64, f64)> {
    nodes.iter().map(|n| (n.x, n.y)).collect()
}

#[test]
fn distance_known_value() {
    let d = distance(vector![10.0, 20.0], vector![15.0, 15.0]);
    assert!((d - 7.0710678).abs() < 1e-6);
    assert_eq!(d, distance(vector![15.0, 15.0], vector![10.0, 20.0]));
}

#[test]
fn degrees_known_values() {
    assert!((degrees(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
    assert!((degrees(std::f64::consts::PI) - 180.0).abs() < 1e-12);
}

#[test]
fn vector_basics() {
    let v = translate(vector![3.0, 7.0], vector![1.0, 2.0]);
    assert_eq!(v, vector![2.0, 5.0]);
    assert_eq!(dot(vector![1.0, 2.0], vector![3.0, 4.0]), 11.0);
    assert_eq!(magnitude(vector![3.0, 4.0]), 5.0);
    assert_eq!(cross(vector![1.0, 0.0], vector![0.0, 1.0]), 1.0);
}

#[test]
fn angle_at_known_value() {
    let a = angle_at(vector![15.0, 12.0], vector![10.0, 10.0], vector![12.0, 20.0]).unwrap();
    assert!((degrees(a) - 56.89).abs() < 0.01);
}

#[test]
fn angle_at_straight_and_right() {
    let o = Vector2::zeros();
    let right = angle_at(vector![1.0, 0.0], o, vector![0.0, 3.0]).unwrap();
    assert!((degrees(right) - 90.0).abs() < 1e-9);
    let straight = angle_at(vector![2.0, 0.0], o, vector![-5.0, 0.0]).unwrap();
    assert!((degrees(straight) - 180.0).abs() < 1e-9);
    let same = angle_at(vector![1.0, 1.0], o, vector![3.0, 3.0]).unwrap();
    assert!(same.abs() < 1e-6);
}

#[test]
fn angle_at_rejects_coincident_points() {
    let p = vector![4.0, 4.0];
    assert_eq!(
        angle_at(p, p, vector![1.0, 0.0]),
        Err(crate::GraphError::DegenerateAngle)
    );
    assert_eq!(
        angle_at(vector![1.0, 0.0], p, p),
        Err(crate::GraphError::DegenerateAngle)
    );
}

#[test]
fn nearest_and_furthest_ordering() {
    let nodes = fixture();
    let origin = node("node7", 5.0, 5.0);
    let near = find_nearest(&nodes, &origin, 10);
    assert_eq!(
        coords(&near),
        vec![
            (10.0, 10.0),
            (15.0, 15.0),
            (18.0, 15.0),
            (28.0, 16.0),
            (35.0, 28.0),
            (5.0, 64.0)
        ]
    );
    let far = find_furthest(&nodes, &origin, 10);
    let mut reversed = near.clone();
    reversed.reverse();
    assert_eq!(coords(&far), coords(&reversed));
    assert_eq!(far[0].id, "node5");
}

#[test]
fn nearest_truncates_and_skips_origin() {
    let nodes = fixture();
    let near = find_nearest(&nodes, &nodes[0], 2);
    assert_eq!(near.len(), 2);
    assert!(near.iter().all(|n| n.id != "node1"));
    assert_eq!(near[0].id, "node2");
    assert_eq!(nearest(&nodes, &nodes[0]).map(|n| n.id.as_str()), Some("node2"));
    assert!(nearest(&nodes[..1], &nodes[0]).is_none());
}

#[test]
fn crossing_segments_intersect() {
    let (a, b) = (vector![0.0, 0.0], vector![10.0, 10.0]);
    let (c, d) = (vector![0.0, 10.0], vector![10.0, 0.0]);
    assert!(intersects(a, b, c, d));
    assert!(intersects(c, d, a, b));
    assert!(intersects(b, a, d, c));
}

#[test]
fn disjoint_segments_do_not_intersect() {
    let (a, b) = (vector![0.0, 0.0], vector![10.0, 0.0]);
    let (c, d) = (vector![0.0, 5.0], vector![10.0, 5.0]);
    assert!(!intersects(a, b, c, d));
    // T-configuration that stops short of the other segment.
    assert!(!intersects(a, b, vector![5.0, 1.0], vector![5.0, 8.0]));
}

#[test]
fn shared_start_point_is_not_a_crossing() {
    let a = vector![0.0, 0.0];
    for (b, d) in [
        (vector![10.0, 0.0], vector![0.0, 10.0]),
        (vector![10.0, 3.0], vector![-4.0, -9.0]),
        (vector![-1.0, 7.0], vector![6.0, -2.0]),
    ] {
        assert!(!intersects(a, b, a, d));
        assert!(!intersects(a, d, a, b));
    }
}

#[test]
fn chained_endpoint_depends_on_direction() {
    // a→b followed by b→d with a left turn trips the strict test; the mirrored
    // segment b→a does not.
    let (a, b, d) = (vector![0.0, 0.0], vector![10.0, 0.0], vector![10.0, 10.0]);
    assert!(intersects(a, b, b, d));
    assert!(!intersects(b, a, b, d));
    // A right turn never trips it.
    assert!(!intersects(a, b, b, vector![10.0, -10.0]));
}

#[test]
fn collinear_overlap_is_not_a_crossing() {
    let (a, b) = (vector![0.0, 0.0], vector![10.0, 0.0]);
    let (c, d) = (vector![5.0, 0.0], vector![15.0, 0.0]);
    assert!(!intersects(a, b, c, d));
    assert!(!intersects(a, b, vector![20.0, 0.0], vector![30.0, 0.0]));
}

#[test]
fn ccw_is_strict() {
    let (p, q) = (vector![0.0, 0.0], vector![1.0, 0.0]);
    assert!(ccw(p, q, vector![0.5, 1.0]));
    assert!(!ccw(p, q, vector![0.5, -1.0]));
    assert!(!ccw(p, q, vector![2.0, 0.0]));
}
