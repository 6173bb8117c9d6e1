use crate::common::*;

/// Indices of `values` excluded by a keep/drop suffix, in ascending index order.
///
/// Values are ranked ascending, ties broken by original position. `n` larger than the
/// number of dice saturates: keeping too many drops nothing, dropping too many drops all.
pub(crate) fn dropped_indices(values: &[Int], keep_drop: Option<&KeepDrop>) -> Vec<usize> {
    let kd = match keep_drop {
        Some(kd) => kd,
        None => return Vec::new(),
    };

    let mut ranked: Vec<usize> = (0..values.len()).collect();
    ranked.sort_by_key(|&i| values[i]);

    let len = ranked.len();
    let n = kd.n.get() as usize;
    let mut dropped: Vec<usize> = match (kd.mode, kd.direction) {
        (KeepDropMode::Keep, Direction::High) => ranked[..len.saturating_sub(n)].to_vec(),
        (KeepDropMode::Keep, Direction::Low) => ranked[len.min(n)..].to_vec(),
        (KeepDropMode::Drop, Direction::High) => ranked[len - len.min(n)..].to_vec(),
        (KeepDropMode::Drop, Direction::Low) => ranked[..len.min(n)].to_vec(),
    };
    dropped.sort_unstable();
    dropped
}

/// Sum of the values not listed in `dropped`.
pub(crate) fn kept_total(values: &[Int], dropped: &[usize]) -> Int {
    let mut kept = vec![true; values.len()];
    for &i in dropped {
        kept[i] = false;
    }
    values
        .iter()
        .zip(kept)
        .filter_map(|(v, keep)| keep.then_some(v))
        .sum()
}
