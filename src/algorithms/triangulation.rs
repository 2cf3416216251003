use claims::debug_assert_ok;

use crate::algorithms::median::pseudo_median;
use crate::algorithms::merge::{merge, Event};
use crate::algorithms::predicates::{orientation, Orientation};
use crate::algorithms::tangent::common_tangent;
use crate::data::{Coordinate, Point, Topology, VertexId, YxOrder};
use crate::error::Error;

/// Recorded [`Event`] sequence of a triangulation, produced by
/// [`crate::triangulate_events`].
///
/// Replaying the deletions and insertions in order against an initially
/// empty [`Topology`] reproduces the final result exactly.
#[derive(Debug, Clone)]
pub struct EventLog<T> {
  events: Vec<Event>,
  _coordinate: std::marker::PhantomData<T>,
}

impl<T> EventLog<T> {
  pub fn iter(&self) -> impl Iterator<Item = &Event> {
    self.events.iter()
  }

  pub fn len(&self) -> usize {
    self.events.len()
  }

  pub fn is_empty(&self) -> bool {
    self.events.is_empty()
  }
}

/// Triangulate a set of at least two distinct points. Returns an error
/// if fewer than two points are given or if two points compare equal.
///
/// ```
/// use planar_delaunay::{triangulate, Point};
///
/// let topo = triangulate(vec![
///   Point::new(0, 0),
///   Point::new(2, 0),
///   Point::new(1, 2),
/// ])?;
/// assert_eq!(topo.edges().count(), 3);
/// # Ok::<(), planar_delaunay::Error<i32>>(())
/// ```
pub fn triangulate<T: Coordinate>(
  points: impl IntoIterator<Item = Point<T>>,
) -> Result<Topology<T>, Error<T>> {
  let sorted = prepare(points)?;
  let n = sorted.len();
  let mut topo = Topology::new(sorted);
  let all: Vec<VertexId> = (0..n).map(VertexId).collect();
  compute(&mut topo, &all, &mut None);
  #[cfg(debug_assertions)]
  debug_assert_ok!(topo.check_invariant());
  Ok(topo)
}

/// Triangulate and additionally record every `Delete`/`Insert`/`Circle`
/// step the merge procedure performs, in the order applied.
pub fn triangulate_events<T: Coordinate>(
  points: impl IntoIterator<Item = Point<T>>,
) -> Result<(Topology<T>, EventLog<T>), Error<T>> {
  let sorted = prepare(points)?;
  let n = sorted.len();
  let mut topo = Topology::new(sorted);
  let all: Vec<VertexId> = (0..n).map(VertexId).collect();
  let mut events = Vec::new();
  compute(&mut topo, &all, &mut Some(&mut events));
  #[cfg(debug_assertions)]
  debug_assert_ok!(topo.check_invariant());
  Ok((
    topo,
    EventLog {
      events,
      _coordinate: std::marker::PhantomData,
    },
  ))
}

/// Sort the input lexicographically and reject fewer-than-two-point or
/// duplicate input before any topology mutation begins.
fn prepare<T: Coordinate>(
  points: impl IntoIterator<Item = Point<T>>,
) -> Result<Vec<Point<T>>, Error<T>> {
  let mut sorted: Vec<Point<T>> = points.into_iter().collect();
  if sorted.len() < 2 {
    return Err(Error::InsufficientInput);
  }
  sorted.sort();
  for w in sorted.windows(2) {
    if w[0] == w[1] {
      return Err(Error::DuplicatePoint(w[0]));
    }
  }
  Ok(sorted)
}

/// Partition `points` (already sorted lexicographically) around their
/// pseudo-median under `key`, returning the low half, the high half, and
/// the extreme vertex on either side of the split (the low half's
/// largest key, the high half's smallest).
///
/// Filtering a lexicographically sorted slice preserves that order in
/// both halves, so `lo` and `hi` stay pre-sorted for their own recursive
/// calls without needing to re-sort by the split axis.
fn split_on_median<K: Ord + Clone>(
  points: &[VertexId],
  key: impl Fn(&VertexId) -> K,
) -> (Vec<VertexId>, Vec<VertexId>, VertexId, VertexId) {
  let med = pseudo_median(points, &key);
  let lo: Vec<VertexId> = points.iter().copied().filter(|v| key(v) < med).collect();
  let hi: Vec<VertexId> = points.iter().copied().filter(|v| key(v) >= med).collect();
  let x0 = *lo.iter().max_by_key(|v| key(v)).unwrap();
  let y0 = *hi.iter().min_by_key(|v| key(v)).unwrap();
  (lo, hi, x0, y0)
}

fn variance<T: Coordinate>(points: &[VertexId], topo: &Topology<T>, axis_x: bool) -> f64 {
  let values: Vec<f64> = points
    .iter()
    .map(|&v| {
      let p = topo.point(v);
      let coord: i128 = if axis_x { p.x.into() } else { p.y.into() };
      coord as f64
    })
    .collect();
  let mean = values.iter().sum::<f64>() / values.len() as f64;
  values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / values.len() as f64
}

/// Recursively triangulate `points` (already sorted lexicographically,
/// listed by [`VertexId`]) into `topo`, splitting on the axis of larger
/// variance and merging the two halves along their common tangent.
fn compute<T: Coordinate>(
  topo: &mut Topology<T>,
  points: &[VertexId],
  events: &mut Option<&mut Vec<Event>>,
) {
  match points {
    [a, b] => {
      topo.insert_first_edge(*a, *b);
      topo.set_first(*a, *b);
      topo.set_first(*b, *a);
    }
    [a, b, c] => compute_base_triangle(topo, *a, *b, *c),
    _ => {
      let axis_x = variance(points, topo, true) >= variance(points, topo, false);

      // The key must be the full (primary, secondary) point, not a bare
      // coordinate: splitting on one raw axis value lets `med` collapse
      // to that axis's minimum whenever enough points share it, which
      // starves `lo` and breaks the pseudo-median's partition-ratio
      // guarantee the recursion's depth depends on. `Point`'s own
      // lexicographic order covers the x-axis split; `YxOrder` mirrors
      // it with y as the primary coordinate for the y-axis split.
      let (lo, hi, x0, y0) = if axis_x {
        split_on_median(points, |v: &VertexId| *topo.point(*v))
      } else {
        split_on_median(points, |v: &VertexId| YxOrder(*topo.point(*v)))
      };

      compute(topo, &lo, events);
      compute(topo, &hi, events);

      let (x, y) = common_tangent(topo, x0, y0);
      merge(topo, x, y, events.as_deref_mut());
    }
  }
}

/// Build the degree-2 base case for three points: either a triangle (if
/// not collinear) or a two-edge path (if collinear). `succ` and `pred`
/// coincide for every vertex here since no vertex has more than two
/// neighbors; only `first`, which records hull-walk direction, depends
/// on the orientation.
fn compute_base_triangle<T: Coordinate>(
  topo: &mut Topology<T>,
  a: VertexId,
  b: VertexId,
  c: VertexId,
) {
  match orientation(topo.point(a), topo.point(b), topo.point(c)) {
    Orientation::CounterClockWise => {
      topo.link_pair(a, b, c);
      topo.link_pair(b, a, c);
      topo.link_pair(c, a, b);
      topo.set_first(a, b);
      topo.set_first(b, c);
      topo.set_first(c, a);
    }
    Orientation::ClockWise => {
      topo.link_pair(a, b, c);
      topo.link_pair(b, a, c);
      topo.link_pair(c, a, b);
      topo.set_first(a, c);
      topo.set_first(c, b);
      topo.set_first(b, a);
    }
    Orientation::CoLinear => {
      // Points are already sorted lexicographically, so a, b, c fall in
      // order along the line; build the path a-b-c rather than closing
      // a degenerate triangle.
      topo.link_isolated(a, b);
      topo.link_isolated(c, b);
      topo.link_pair(b, a, c);
      topo.set_first(a, b);
      topo.set_first(c, b);
    }
  }
}
