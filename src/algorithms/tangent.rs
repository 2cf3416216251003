use crate::algorithms::predicates::{orientation, Orientation};
use crate::data::{Coordinate, Topology, VertexId};

/// Walk the ascending common tangent between two hulls, starting from
/// `x0` (rightmost vertex of the left hull) and `y0` (leftmost vertex of
/// the right hull). Returns the pair `(x, y)` such that every vertex of
/// both hulls lies weakly to the left of the directed segment `x -> y`.
///
/// `CoLinear` is treated as "not clockwise", so collinear hull vertices
/// never trigger an extra advance; this keeps the returned tangent
/// minimal.
pub fn common_tangent<T: Coordinate>(
  topo: &Topology<T>,
  x0: VertexId,
  y0: VertexId,
) -> (VertexId, VertexId) {
  let mut x = x0;
  let mut y = y0;
  let mut z0 = topo.first(y).expect("y0 must be a hull vertex");
  let z1 = topo.first(x).expect("x0 must be a hull vertex");
  let mut z2 = topo.pred(x, z1).expect("z1 must be a neighbor of x");

  loop {
    let xp = topo.point(x);
    let yp = topo.point(y);
    if orientation(xp, yp, topo.point(z0)) == Orientation::ClockWise {
      let new_y = z0;
      z0 = topo.succ(z0, y).expect("z0 must be a neighbor of y");
      y = new_y;
    } else if orientation(xp, yp, topo.point(z2)) == Orientation::ClockWise {
      let new_x = z2;
      z2 = topo.pred(z2, x).expect("z2 must be a neighbor of x");
      x = new_x;
    } else {
      return (x, y);
    }
  }
}
