//! Strategies for generating random point sets used by the property
//! tests in [`crate::tests`].
use proptest::collection::hash_set;
use proptest::prelude::*;

use crate::data::Point;

/// A strategy producing between 2 and `max_len` distinct points with
/// coordinates in `-bound..=bound`.
pub fn distinct_points(max_len: usize, bound: i32) -> impl Strategy<Value = Vec<Point<i32>>> {
  hash_set((-bound..=bound, -bound..=bound), 2..=max_len).prop_map(|set| {
    set
      .into_iter()
      .map(|(x, y)| Point::new(x, y))
      .collect::<Vec<_>>()
  })
}
