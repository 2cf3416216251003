use std::fmt;

use crate::data::Point;

/// Errors produced by [`crate::triangulate`] and [`crate::triangulate_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error<T> {
  /// Fewer than two points were supplied.
  InsufficientInput,
  /// Two input points compared equal.
  DuplicatePoint(Point<T>),
  /// A predicate determinant did not fit the chosen integer width.
  ///
  /// Unreachable for the `BigInt`-backed predicates this crate ships; kept
  /// as an extension point for a fixed-width `Coordinate` impl.
  ArithmeticOverflow,
  /// An internal consistency check failed. Indicates a bug in this crate,
  /// not bad input.
  InternalInvariantViolated(&'static str),
}

impl<T: fmt::Debug> fmt::Display for Error<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::InsufficientInput => write!(f, "at least two points are required"),
      Error::DuplicatePoint(p) => write!(f, "duplicate input point: {:?}", p),
      Error::ArithmeticOverflow => write!(f, "predicate arithmetic overflowed"),
      Error::InternalInvariantViolated(what) => write!(f, "internal invariant violated: {}", what),
    }
  }
}

impl<T: fmt::Debug> std::error::Error for Error<T> {}
