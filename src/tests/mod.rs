use test_strategy::proptest;

use crate::algorithms::predicates::{in_circle, orientation, CirclePosition, Orientation};
use crate::data::VertexId;
use crate::testing::distinct_points;
use crate::triangulate;

/// Property 3: no triangle's circumcircle strictly contains any other
/// input point.
#[proptest]
fn delaunay_property_holds(#[strategy(distinct_points(30, 50))] points: Vec<crate::Point<i32>>) {
  let topo = triangulate(points).unwrap();
  let n = topo.len();
  for (a, b) in topo.directed_edges() {
    let c = topo.succ(a, b).unwrap();
    if orientation(topo.point(a), topo.point(b), topo.point(c)) != Orientation::CounterClockWise {
      continue;
    }
    for d in (0..n).map(VertexId) {
      if d == a || d == b || d == c {
        continue;
      }
      assert_ne!(
        in_circle(topo.point(a), topo.point(b), topo.point(c), topo.point(d)),
        CirclePosition::Inside
      );
    }
  }
}

/// Property 4: a planar triangulation has at most `3n - 6` undirected
/// edges once there are at least three points.
#[proptest]
fn edge_count_is_bounded(#[strategy(distinct_points(40, 50))] points: Vec<crate::Point<i32>>) {
  let n = points.len();
  let topo = triangulate(points).unwrap();
  let edges = topo.edges().count();
  if n >= 3 {
    assert!(edges <= 3 * n - 6);
  }
}

/// Property 6: triangulating any permutation of the same point set
/// yields the same undirected edge set.
#[proptest]
fn permutation_invariant(#[strategy(distinct_points(20, 30))] points: Vec<crate::Point<i32>>) {
  use std::collections::BTreeSet;

  let baseline: BTreeSet<(usize, usize)> = triangulate(points.clone())
    .unwrap()
    .edges()
    .map(|(a, b)| (a.0, b.0))
    .collect();

  // `triangulate` sorts internally, so feeding it a shuffled copy of the
  // same points (here, simply reversed) must reproduce the same result.
  let mut reversed = points;
  reversed.reverse();
  let reordered: BTreeSet<(usize, usize)> = triangulate(reversed)
    .unwrap()
    .edges()
    .map(|(a, b)| (a.0, b.0))
    .collect();

  assert_eq!(baseline, reordered);
}
