//! The six keep rules and their batch filters
//!
//! Every batch filter is a pure function returning the order-preserving
//! subsequence of combinations that satisfy its keep rule. Empty input yields
//! empty output, and an inverted range yields an empty result rather than an
//! error. Because each rule looks at one combination in isolation, the set
//! surviving all six filters does not depend on the order they are applied in.

use crate::draw::combination::{Combination, CombinationSet};
use crate::filters::params::{BalanceMode, Bounds, PairMode};

fn retain_where(
    combinations: &[Combination],
    keep: impl Fn(&Combination) -> bool,
) -> CombinationSet {
    combinations.iter().filter(|&c| keep(c)).copied().collect()
}

/// Sum of all five numbers lies within `bounds`
pub fn keeps_sum(combination: &Combination, bounds: Bounds) -> bool {
    bounds.contains(combination.sum())
}

/// Even-number count passes `mode`
pub fn keeps_even_odd(combination: &Combination, mode: BalanceMode) -> bool {
    mode.accepts(combination.even_count())
}

/// Count of numbers at or below `split` passes `mode`
pub fn keeps_magnitude(combination: &Combination, mode: BalanceMode, split: u8) -> bool {
    mode.accepts(combination.small_count(split))
}

/// Adjacent pairs differing by one pass `mode`
pub fn keeps_consecutive(combination: &Combination, mode: PairMode) -> bool {
    mode.accepts(combination.consecutive_pairs())
}

/// Distinct zones touched lie within `bounds`
pub fn keeps_zones(combination: &Combination, bounds: Bounds) -> bool {
    bounds.contains(combination.zones_touched() as u32)
}

/// Shared last digits pass `mode`
///
/// Three or more numbers with the same last digit always reject. Otherwise
/// `mode` bounds the number of digits shared by exactly two numbers, so
/// `AllowOnePair` means at most one such pair.
pub fn keeps_tail(combination: &Combination, mode: PairMode) -> bool {
    let counts = combination.tail_counts();
    if counts.iter().any(|&count| count > 2) {
        return false;
    }
    let pairs = counts.iter().filter(|&&count| count == 2).count();
    mode.accepts(pairs)
}

/// Keep combinations whose sum lies within `bounds`
pub fn filter_by_sum(combinations: &[Combination], bounds: Bounds) -> CombinationSet {
    retain_where(combinations, |c| keeps_sum(c, bounds))
}

/// Keep combinations whose even/odd split passes `mode`
pub fn filter_by_even_odd(combinations: &[Combination], mode: BalanceMode) -> CombinationSet {
    retain_where(combinations, |c| keeps_even_odd(c, mode))
}

/// Keep combinations whose small/big split passes `mode`
pub fn filter_by_magnitude(
    combinations: &[Combination],
    mode: BalanceMode,
    split: u8,
) -> CombinationSet {
    retain_where(combinations, |c| keeps_magnitude(c, mode, split))
}

/// Keep combinations whose consecutive pairs pass `mode`
pub fn filter_by_consecutive(combinations: &[Combination], mode: PairMode) -> CombinationSet {
    retain_where(combinations, |c| keeps_consecutive(c, mode))
}

/// Keep combinations touching a number of zones within `bounds`
pub fn filter_by_zones(combinations: &[Combination], bounds: Bounds) -> CombinationSet {
    retain_where(combinations, |c| keeps_zones(c, bounds))
}

/// Keep combinations whose shared last digits pass `mode`
pub fn filter_by_tail(combinations: &[Combination], mode: PairMode) -> CombinationSet {
    retain_where(combinations, |c| keeps_tail(c, mode))
}
