/// Number of blocks the pseudo-median recurses into.
pub const PSEUDO_MEDIAN_BLOCKS: usize = 7;

/// Below this length, the pseudo-median falls back to an exact median.
pub const PSEUDO_MEDIAN_THRESHOLD: usize = 100;

/// Returns a key whose rank in `items` (ordered by `key`) lies near the
/// midpoint, in linear time.
///
/// Slices of length at most [`PSEUDO_MEDIAN_THRESHOLD`] are sorted
/// directly and the middle element returned. Larger slices are split
/// into [`PSEUDO_MEDIAN_BLOCKS`] contiguous blocks, each pseudo-medianed
/// recursively, and the median of those medians is returned. This gives
/// a partition ratio bounded away from 0 and 1 without the cost of an
/// exact linear-time median.
pub fn pseudo_median<T, K, F>(items: &[T], key: &F) -> K
where
  T: Clone,
  K: Ord + Clone,
  F: Fn(&T) -> K,
{
  assert!(!items.is_empty());
  if items.len() <= PSEUDO_MEDIAN_THRESHOLD {
    let mut sorted: Vec<T> = items.to_vec();
    sorted.sort_by(|a, b| key(a).cmp(&key(b)));
    return key(&sorted[sorted.len() / 2]);
  }

  let chunk_len = items.len().div_ceil(PSEUDO_MEDIAN_BLOCKS);
  let mut medians: Vec<K> = items
    .chunks(chunk_len)
    .map(|block| pseudo_median(block, key))
    .collect();
  medians.sort();
  let mid = medians.len() / 2;
  medians[mid].clone()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn small_slice_returns_exact_middle() {
    let v = vec![5, 1, 3, 2, 4];
    let m = pseudo_median(&v, &|x: &i32| *x);
    assert_eq!(m, 3);
  }

  #[test]
  fn large_slice_returns_a_central_value() {
    let v: Vec<i32> = (0..10_000).collect();
    let m = pseudo_median(&v, &|x: &i32| *x);
    // Not necessarily the exact median, but must fall well inside the range.
    assert!((2_000..8_000).contains(&m));
  }
}
