use num_bigint::BigInt;

use crate::data::{Coordinate, Point};

/// Sign of the signed area of triangle `(a, b, c)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
  CounterClockWise,
  CoLinear,
  ClockWise,
}

/// Sign of the in-circle determinant for `d` against the circumcircle of
/// a counter-clockwise triangle `(a, b, c)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CirclePosition {
  Inside,
  On,
  Outside,
}

fn big<T: Coordinate>(p: &Point<T>) -> (BigInt, BigInt) {
  (BigInt::from(p.x.into()), BigInt::from(p.y.into()))
}

/// `orientation(a, b, c)`: the sign of
/// `(bx-ax)(cy-ay) - (by-ay)(cx-ax)`, computed exactly.
pub fn orientation<T: Coordinate>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> Orientation {
  let (ax, ay) = big(a);
  let (bx, by) = big(b);
  let (cx, cy) = big(c);
  let det = (&bx - &ax) * (&cy - &ay) - (&by - &ay) * (&cx - &ax);
  match det.sign() {
    num_bigint::Sign::Plus => Orientation::CounterClockWise,
    num_bigint::Sign::NoSign => Orientation::CoLinear,
    num_bigint::Sign::Minus => Orientation::ClockWise,
  }
}

/// `in_circle(a, b, c, d)`: only meaningful when `(a, b, c)` is
/// counter-clockwise. Returns the sign of the 3x3 determinant whose row
/// `i` is `(px-dx, py-dy, (px-dx)^2+(py-dy)^2)` for `p` in `{a, b, c}`.
pub fn in_circle<T: Coordinate>(
  a: &Point<T>,
  b: &Point<T>,
  c: &Point<T>,
  d: &Point<T>,
) -> CirclePosition {
  let (dx, dy) = big(d);
  let row = |p: &Point<T>| -> (BigInt, BigInt, BigInt) {
    let (px, py) = big(p);
    let ux = px - &dx;
    let uy = py - &dy;
    let uz = &ux * &ux + &uy * &uy;
    (ux, uy, uz)
  };
  let (ax, ay, az) = row(a);
  let (bx, by, bz) = row(b);
  let (cx, cy, cz) = row(c);

  let det = ax.clone() * (&by * &cz - &bz * &cy)
    - ay.clone() * (&bx * &cz - &bz * &cx)
    + az.clone() * (&bx * &cy - &by * &cx);

  match det.sign() {
    num_bigint::Sign::Plus => CirclePosition::Inside,
    num_bigint::Sign::NoSign => CirclePosition::On,
    num_bigint::Sign::Minus => CirclePosition::Outside,
  }
}
