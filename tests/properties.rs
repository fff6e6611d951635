//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Property-based tests comparing the splitter against a per-position oracle.

use proptest::prelude::*;
use rangesplit::{Interval, OrderedSet, RangeSplit};

/// A registered range: `(low, high, id, payload)`.
type Input = (i64, i64, u64, Vec<u64>);

/// `(low, high, ids, data)` for comparing against the oracle.
type Row = (i64, i64, Vec<u64>, Vec<u64>);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn arbitrary_range(ids: std::ops::Range<u64>) -> impl Strategy<Value = Input> {
    (
        -20i64..40,
        0i64..12,
        ids,
        prop::collection::vec(0u64..16, 0..4),
    )
        .prop_map(|(low, span, id, payload)| (low, low + span, id, payload))
}

/// Ranges with unique ids (their index), so the id set alone identifies each interval.
fn unique_ranges() -> impl Strategy<Value = Vec<Input>> {
    prop::collection::vec(arbitrary_range(0..1), 0..24).prop_map(|ranges| {
        ranges
            .into_iter()
            .enumerate()
            .map(|(idx, (low, high, _, payload))| (low, high, idx as u64, payload))
            .collect()
    })
}

fn split(ranges: &[Input]) -> Vec<Interval<u64, u64>> {
    let mut split: RangeSplit = RangeSplit::new();
    for (low, high, id, payload) in ranges {
        split
            .add_range(*low, *high, *id, payload.iter().copied())
            .unwrap();
    }
    split.build();
    split.into_intervals()
}

fn rows(intervals: &[Interval<u64, u64>]) -> Vec<Row> {
    intervals
        .iter()
        .map(|itv| {
            (
                itv.low,
                itv.high,
                itv.ids.as_slice().to_vec(),
                itv.data.as_slice().to_vec(),
            )
        })
        .collect()
}

/// Walks every position, collecting the ids and payloads covering it, and groups maximal runs
/// of identical non-empty coverage.
fn oracle(ranges: &[Input]) -> Vec<Row> {
    let Some(min) = ranges.iter().map(|r| r.0).min() else {
        return Vec::new();
    };
    let max = ranges.iter().map(|r| r.1).max().unwrap_or(min);

    let mut out: Vec<Row> = Vec::new();
    for pos in min..=max {
        let covering: Vec<&Input> = ranges
            .iter()
            .filter(|(low, high, _, _)| *low <= pos && pos <= *high)
            .collect();
        if covering.is_empty() {
            continue;
        }

        let ids: OrderedSet<u64> = covering.iter().map(|r| r.2).collect();
        let data: OrderedSet<u64> = covering.iter().flat_map(|r| r.3.iter().copied()).collect();
        let (ids, data) = (ids.into_vec(), data.into_vec());

        match out.last_mut() {
            Some(last) if last.1 + 1 == pos && last.2 == ids && last.3 == data => last.1 = pos,
            _ => out.push((pos, pos, ids, data)),
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Output matches the per-position oracle exactly: coverage, disjointness, maximality and
    /// payload union all follow from this.
    #[test]
    fn matches_position_oracle(ranges in unique_ranges()) {
        init_logging();
        prop_assert_eq!(rows(&split(&ranges)), oracle(&ranges));
    }

    /// Repeated ids behave as independent registrations.
    #[test]
    fn matches_oracle_with_repeated_ids(
        ranges in prop::collection::vec(arbitrary_range(0..4), 0..16),
    ) {
        init_logging();
        prop_assert_eq!(rows(&split(&ranges)), oracle(&ranges));
    }

    /// Registration order does not affect the result.
    #[test]
    fn order_independent(
        (ranges, shuffled) in unique_ranges()
            .prop_flat_map(|ranges| (Just(ranges.clone()), Just(ranges).prop_shuffle())),
    ) {
        prop_assert_eq!(split(&ranges), split(&shuffled));
    }

    /// Intervals are sorted, disjoint and never empty of ids.
    #[test]
    fn intervals_sorted_and_disjoint(ranges in unique_ranges()) {
        let intervals = split(&ranges);
        for itv in &intervals {
            prop_assert!(itv.low <= itv.high);
            prop_assert!(!itv.ids.is_empty());
        }
        for pair in intervals.windows(2) {
            prop_assert!(pair[0].high < pair[1].low);
            if pair[0].high + 1 == pair[1].low {
                prop_assert_ne!(&pair[0].ids, &pair[1].ids);
            }
        }
    }

    /// Every interval's data is the union of the payloads of exactly the ranges it names.
    #[test]
    fn payload_is_union_of_named_ranges(ranges in unique_ranges()) {
        for itv in split(&ranges) {
            let expected: OrderedSet<u64> = ranges
                .iter()
                .filter(|r| itv.ids.contains(&r.2))
                .flat_map(|r| r.3.iter().copied())
                .collect();
            prop_assert_eq!(&itv.data, &expected);
        }
    }
}

#[test]
fn test_empty_build_is_not_an_error() {
    init_logging();
    assert!(split(&[]).is_empty());
}
