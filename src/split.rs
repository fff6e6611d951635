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

//! Implementation of the range splitter: registration, sweep and interval emission.

use crate::ipv4::{self, Ipv4Cidr};
use crate::result::{RangeSplitError, RangeSplitResult};
use crate::set::OrderedSet;
use crate::spot::{Bucket, BucketKind, Buckets, Spot};
use std::fmt;
use std::mem;
use std::ops::{Bound, RangeBounds};

/// A maximal closed interval over which the set of overlapping ranges is constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interval<I, D> {
    /// First covered position.
    pub low: i64,
    /// Last covered position, inclusive.
    pub high: i64,
    /// Identifiers of every range covering `[low, high]`.
    pub ids: OrderedSet<I>,
    /// Union of the payloads of every range covering `[low, high]`.
    pub data: OrderedSet<D>,
}

impl<I, D> Interval<I, D> {
    /// Number of positions covered by this interval.
    pub fn len(&self) -> u64 {
        self.high.abs_diff(self.low).saturating_add(1)
    }

    /// Always `false`; intervals cover at least one position.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `pos` lies within `[low, high]`.
    pub fn contains(&self, pos: i64) -> bool {
        self.low <= pos && pos <= self.high
    }

    /// Folds this interval, read as a range of IPv4 addresses, into CIDR blocks.
    pub fn cidr_blocks(&self) -> RangeSplitResult<Vec<Ipv4Cidr>> {
        let out_of_range = || RangeSplitError::AddressOutOfRange {
            low: self.low,
            high: self.high,
        };
        let low = u32::try_from(self.low).map_err(|_| out_of_range())?;
        let high = u32::try_from(self.high).map_err(|_| out_of_range())?;
        Ok(ipv4::range_to_cidr_blocks(low, high))
    }
}

impl<I: fmt::Display, D: fmt::Display> fmt::Display for Interval<I, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}: ids={} data={}",
            self.low, self.high, self.ids, self.data
        )
    }
}

/// One registered range.
#[derive(Clone, Debug)]
struct Registration<I, D> {
    id: I,
    payload: OrderedSet<D>,
}

/// Splits overlapping, tagged integer ranges into disjoint intervals.
///
/// Ranges are registered with [`add_range`](Self::add_range) and then split in a single
/// [`build`](Self::build) pass. Each resulting [`Interval`] carries the identifiers of every range
/// covering it and the union of their payloads; touching intervals always differ in their
/// identifiers or payload, and positions covered by no range produce no interval.
///
/// The same identifier may be registered more than once. Each registration is an independent
/// contribution that opens and closes on its own bounds.
///
/// # Examples
///
/// ```rust
/// use rangesplit::RangeSplit;
///
/// let mut split = RangeSplit::new();
/// split.add_range(10, 10, 1, [1]).unwrap();
/// split.add_range(16, 16, 2, [2]).unwrap();
/// split.add_range(13, 19, 3, [3]).unwrap();
///
/// let bounds: Vec<_> = split
///     .build()
///     .iter()
///     .map(|itv| (itv.low, itv.high, itv.ids.as_slice().to_vec()))
///     .collect();
///
/// assert_eq!(
///     bounds,
///     vec![
///         (10, 10, vec![1]),
///         (13, 15, vec![3]),
///         (16, 16, vec![2, 3]),
///         (17, 19, vec![3]),
///     ]
/// );
/// ```
///
/// # Rebuilding
///
/// Calling `build` again without registering anything new yields the same intervals. Once
/// built, further registrations are rejected with [`RangeSplitError::AlreadyBuilt`] until
/// [`reset`](Self::reset) is called.
#[derive(Clone, Debug)]
pub struct RangeSplit<I = u64, D = u64> {
    ranges: Vec<Registration<I, D>>,
    spots: Vec<Spot>,
    intervals: Vec<Interval<I, D>>,
    built: bool,
}

impl<I, D> Default for RangeSplit<I, D> {
    fn default() -> Self {
        Self {
            ranges: Vec::new(),
            spots: Vec::new(),
            intervals: Vec::new(),
            built: false,
        }
    }
}

impl<I: Ord + Clone, D: Ord + Clone> RangeSplit<I, D> {
    /// Creates an empty `RangeSplit`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangesplit::RangeSplit;
    ///
    /// let split: RangeSplit = RangeSplit::new();
    /// assert!(split.is_empty());
    /// assert!(split.intervals().is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards every registration and result, returning the splitter to its initial state.
    pub fn reset(&mut self) {
        self.ranges.clear();
        self.spots.clear();
        self.intervals.clear();
        self.built = false;
    }

    /// Registers the inclusive range `[low, high]` under `id` with the given payload.
    ///
    /// # Errors
    ///
    /// * [`RangeSplitError::InvalidRange`] if `low > high`.
    /// * [`RangeSplitError::AlreadyBuilt`] if [`build`](Self::build) has already run.
    pub fn add_range<P>(&mut self, low: i64, high: i64, id: I, payload: P) -> RangeSplitResult<()>
    where
        P: IntoIterator<Item = D>,
    {
        if self.built {
            log::debug!("rejecting range {low}-{high}: splitter already built");
            return Err(RangeSplitError::AlreadyBuilt);
        }
        if low > high {
            log::debug!("rejecting inverted range {low}-{high}");
            return Err(RangeSplitError::InvalidRange { low, high });
        }

        let owner = self.ranges.len();
        let (start, end) = Spot::pair(low, high, owner);
        self.spots.push(start);
        self.spots.push(end);
        self.ranges.push(Registration {
            id,
            payload: payload.into_iter().collect(),
        });
        Ok(())
    }

    /// Registers a range given in Rust range syntax.
    ///
    /// Unbounded ends extend to `i64::MIN` and `i64::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangesplit::RangeSplit;
    ///
    /// let mut split = RangeSplit::new();
    /// split.add_bounds(3..=9, 1, [10]).unwrap();
    /// split.add_bounds(5..7, 2, [20]).unwrap();
    /// assert!(split.add_bounds(4..4, 3, [30]).is_err());
    ///
    /// let bounds: Vec<_> = split.build().iter().map(|itv| (itv.low, itv.high)).collect();
    /// assert_eq!(bounds, vec![(3, 4), (5, 6), (7, 9)]);
    /// ```
    pub fn add_bounds<R, P>(&mut self, range_bounds: R, id: I, payload: P) -> RangeSplitResult<()>
    where
        R: RangeBounds<i64>,
        P: IntoIterator<Item = D>,
    {
        // Convert RangeBounds to inclusive bounds; an empty exclusive range inverts them.
        let low = match range_bounds.start_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&n) => n.checked_add(1),
            Bound::Unbounded => Some(i64::MIN),
        };
        let high = match range_bounds.end_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&n) => n.checked_sub(1),
            Bound::Unbounded => Some(i64::MAX),
        };

        match (low, high) {
            (Some(low), Some(high)) => self.add_range(low, high, id, payload),
            (low, high) => Err(RangeSplitError::InvalidRange {
                low: low.unwrap_or(i64::MAX),
                high: high.unwrap_or(i64::MIN),
            }),
        }
    }

    /// Registers a range of IPv4 addresses given in dotted-decimal form.
    ///
    /// # Errors
    ///
    /// * [`RangeSplitError::MalformedAddress`] if either address fails to parse.
    /// * Any error of [`add_range`](Self::add_range).
    pub fn add_address_range<P>(
        &mut self,
        low: &str,
        high: &str,
        id: I,
        payload: P,
    ) -> RangeSplitResult<()>
    where
        P: IntoIterator<Item = D>,
    {
        let low = ipv4::address_to_integer(low)?;
        let high = ipv4::address_to_integer(high)?;
        self.add_range(i64::from(low), i64::from(high), id, payload)
    }

    /// Splits every registered range into disjoint intervals and returns them in ascending order.
    ///
    /// Running `build` on a splitter with no registrations yields no intervals.
    pub fn build(&mut self) -> &[Interval<I, D>] {
        let mut spots = mem::take(&mut self.spots);
        let mut sweep = Sweep::new(&self.ranges);
        let mut buckets = 0usize;

        for bucket in Buckets::sorted(&mut spots) {
            log::trace!(
                "bucket at {} ({:?}, {} spots)",
                bucket.pos,
                bucket.kind,
                bucket.len()
            );
            sweep.visit(bucket);
            buckets += 1;
        }

        self.intervals = sweep.finish();
        self.spots = spots;
        self.built = true;

        log::debug!(
            "split {} ranges across {} positions into {} intervals",
            self.ranges.len(),
            buckets,
            self.intervals.len()
        );
        &self.intervals
    }

    /// Returns the intervals produced by the last [`build`](Self::build), or an empty slice.
    pub fn intervals(&self) -> &[Interval<I, D>] {
        &self.intervals
    }

    /// Consumes the splitter, returning the intervals produced by the last build.
    pub fn into_intervals(self) -> Vec<Interval<I, D>> {
        self.intervals
    }

    /// Returns the number of registered ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if no range has been registered.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns `true` once [`build`](Self::build) has run since the last reset.
    pub fn is_built(&self) -> bool {
        self.built
    }
}

/// Working state of one sweep over the buckets.
struct Sweep<'r, I, D> {
    ranges: &'r [Registration<I, D>],
    /// Registrations currently open, by index.
    active: OrderedSet<usize>,
    /// Low bound of the interval being accumulated.
    start_pos: i64,
    /// Position of the last visited bucket.
    current_pos: i64,
    intervals: Vec<Interval<I, D>>,
}

impl<'r, I: Ord + Clone, D: Ord + Clone> Sweep<'r, I, D> {
    fn new(ranges: &'r [Registration<I, D>]) -> Self {
        Self {
            ranges,
            active: OrderedSet::new(),
            start_pos: i64::MIN,
            current_pos: i64::MIN,
            intervals: Vec::new(),
        }
    }

    fn visit(&mut self, bucket: Bucket<'_>) {
        let pos = bucket.pos;
        self.current_pos = pos;

        match bucket.kind {
            BucketKind::Start => {
                self.close_before(pos);
                self.active.extend(bucket.starts());
            }
            BucketKind::End => {
                self.emit(self.start_pos, pos);
                self.release(bucket);
                self.start_pos = pos.saturating_add(1);
            }
            BucketKind::Mixed => {
                self.close_before(pos);
                self.active.extend(bucket.starts());
                self.emit(pos, pos);
                self.release(bucket);
                self.start_pos = pos.saturating_add(1);
            }
        }
    }

    /// Closes the pending interval just before `pos` and starts a new one at `pos`.
    fn close_before(&mut self, pos: i64) {
        if !self.active.is_empty() && self.start_pos < pos {
            self.emit(self.start_pos, pos - 1);
        }
        self.start_pos = pos;
    }

    fn release(&mut self, bucket: Bucket<'_>) {
        for owner in bucket.ends() {
            self.active.remove(&owner);
        }
    }

    /// Appends `[low, high]` tagged with the active set, unless nothing is active.
    fn emit(&mut self, low: i64, high: i64) {
        if self.active.is_empty() {
            return;
        }

        let mut ids = OrderedSet::new();
        let mut data = OrderedSet::new();
        for &owner in &self.active {
            let range = &self.ranges[owner];
            ids.insert(range.id.clone());
            data.union_with(&range.payload);
        }

        // Repeated ids can close one registration and open another with an identical
        // contribution; those pieces are indistinguishable and belong to one interval.
        if let Some(last) = self.intervals.last_mut() {
            if last.high.checked_add(1) == Some(low) && last.ids == ids && last.data == data {
                last.high = high;
                return;
            }
        }

        log::trace!("interval {low}-{high}: {} ranges", self.active.len());
        self.intervals.push(Interval {
            low,
            high,
            ids,
            data,
        });
    }

    fn finish(mut self) -> Vec<Interval<I, D>> {
        // Every start has a matching end, so this only fires on a broken spot list.
        if !self.active.is_empty() {
            log::warn!("{} ranges still open after the sweep", self.active.len());
            self.emit(self.start_pos, self.current_pos);
        }
        self.intervals
    }
}
