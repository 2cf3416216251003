use crate::algorithms::predicates::{in_circle, orientation, CirclePosition, Orientation};
use crate::data::{Coordinate, Topology, VertexId};

/// One step of a triangulation, for consumers that want to watch the
/// merge unfold (see [`crate::triangulate_events`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
  Insert(VertexId, VertexId),
  Delete(VertexId, VertexId),
  Circle(VertexId, VertexId, VertexId),
}

/// Stitch two Delaunay sub-triangulations together across the tangent
/// `(x, y)`, flipping edges with the in-circle predicate until the
/// merge front reaches the upper common tangent.
///
/// `events`, when given, receives every `Delete`/`Insert`/`Circle` step
/// in the exact order they are applied to `topo`.
pub fn merge<T: Coordinate>(
  topo: &mut Topology<T>,
  mut x: VertexId,
  mut y: VertexId,
  mut events: Option<&mut Vec<Event>>,
) {
  let first_x = topo.first(x).expect("x must be a hull vertex");
  let first_y = topo.first(y).expect("y must be a hull vertex");
  insert_edge(topo, &mut events, x, y, first_x, topo.pred(y, first_y).unwrap());
  topo.set_first(x, y);

  loop {
    let y1_candidate = scan_lower(topo, &mut events, x, y, Side::Y);
    let x1_candidate = scan_lower(topo, &mut events, x, y, Side::X);

    match (y1_candidate, x1_candidate) {
      (None, None) => break,
      (Some(y1), None) => {
        insert_edge(topo, &mut events, y1, x, y, y);
        y = y1;
      }
      (None, Some(x1)) => {
        insert_edge(topo, &mut events, y, x1, x, x);
        x = x1;
      }
      (Some(y1), Some(x1)) => {
        if let Some(ev) = events.as_deref_mut() {
          ev.push(Event::Circle(x, y, y1));
        }
        if in_circle(topo.point(x), topo.point(y), topo.point(y1), topo.point(x1))
          == CirclePosition::Inside
        {
          insert_edge(topo, &mut events, y, x1, x, x);
          x = x1;
        } else {
          insert_edge(topo, &mut events, y1, x, y, y);
          y = y1;
        }
      }
    }
  }

  topo.set_first(y, x);
}

#[derive(Clone, Copy)]
enum Side {
  X,
  Y,
}

/// Delete lower-triangulation edges on one side of the growing merge
/// front that have become non-Delaunay, returning the first candidate
/// vertex the next cross edge should connect to (or `None` if this side
/// has nothing left to offer).
fn scan_lower<T: Coordinate>(
  topo: &mut Topology<T>,
  events: &mut Option<&mut Vec<Event>>,
  x: VertexId,
  y: VertexId,
  side: Side,
) -> Option<VertexId> {
  let anchor = match side {
    Side::Y => y,
    Side::X => x,
  };
  let first = match side {
    Side::Y => topo.pred(y, x),
    Side::X => topo.succ(x, y),
  }?;
  if orientation(topo.point(x), topo.point(y), topo.point(first)) != Orientation::CounterClockWise
  {
    return None;
  }

  let mut c1 = first;
  let mut c2 = match side {
    Side::Y => topo.pred(anchor, c1),
    Side::X => topo.succ(anchor, c1),
  };
  loop {
    let c2v = match c2 {
      Some(c2v) => c2v,
      None => break,
    };
    if let Some(ev) = events.as_deref_mut() {
      ev.push(Event::Circle(x, y, c1));
    }
    let inside = in_circle(topo.point(x), topo.point(y), topo.point(c1), topo.point(c2v));
    if inside != CirclePosition::Inside {
      break;
    }
    delete_edge(topo, events, anchor, c1);
    c1 = c2v;
    c2 = match side {
      Side::Y => topo.pred(anchor, c1),
      Side::X => topo.succ(anchor, c1),
    };
  }
  Some(c1)
}

fn insert_edge<T: Coordinate>(
  topo: &mut Topology<T>,
  events: &mut Option<&mut Vec<Event>>,
  a: VertexId,
  b: VertexId,
  sa: VertexId,
  pb: VertexId,
) {
  topo.insert_edge(a, b, sa, pb);
  if let Some(ev) = events.as_deref_mut() {
    ev.push(Event::Insert(a, b));
  }
}

fn delete_edge<T: Coordinate>(
  topo: &mut Topology<T>,
  events: &mut Option<&mut Vec<Event>>,
  a: VertexId,
  b: VertexId,
) {
  topo.delete_edge(a, b);
  if let Some(ev) = events.as_deref_mut() {
    ev.push(Event::Delete(a, b));
  }
}
