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

//! Boundary events ("spots") and their grouping into same-position buckets.

/// Which boundary of a range a spot marks.
///
/// The declaration order is significant: `Start` sorts before `End`, so a range that
/// begins where another one ends is visible at that shared coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum SpotKind {
    Start,
    End,
}

/// One boundary of a registered range.
///
/// Spots carry the index of the registration that produced them rather than its payload;
/// the splitter looks the payload up through `owner` when the range becomes active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Spot {
    pub(crate) pos: i64,
    pub(crate) kind: SpotKind,
    pub(crate) owner: usize,
}

impl Spot {
    /// Creates the start and end spots for the inclusive range `[low, high]`.
    pub(crate) fn pair(low: i64, high: i64, owner: usize) -> (Spot, Spot) {
        (
            Spot {
                pos: low,
                kind: SpotKind::Start,
                owner,
            },
            Spot {
                pos: high,
                kind: SpotKind::End,
                owner,
            },
        )
    }
}

/// Classification of the spots sharing one position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BucketKind {
    /// Only ranges beginning here.
    Start,
    /// Only ranges finishing here.
    End,
    /// Ranges both begin and finish here.
    Mixed,
}

/// All spots located at a single position.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Bucket<'a> {
    pub(crate) pos: i64,
    pub(crate) kind: BucketKind,
    spots: &'a [Spot],
}

impl<'a> Bucket<'a> {
    /// Owners of the ranges starting at this position.
    pub(crate) fn starts(self) -> impl Iterator<Item = usize> + 'a {
        self.owners(SpotKind::Start)
    }

    /// Owners of the ranges ending at this position.
    pub(crate) fn ends(self) -> impl Iterator<Item = usize> + 'a {
        self.owners(SpotKind::End)
    }

    pub(crate) fn len(&self) -> usize {
        self.spots.len()
    }

    fn owners(self, kind: SpotKind) -> impl Iterator<Item = usize> + 'a {
        self.spots
            .iter()
            .filter(move |spot| spot.kind == kind)
            .map(|spot| spot.owner)
    }
}

/// Iterator over the buckets of a slice of spots sorted by `(pos, kind)`.
pub(crate) struct Buckets<'a> {
    spots: &'a [Spot],
}

impl<'a> Buckets<'a> {
    /// Sorts `spots` into sweep order and returns an iterator over their buckets.
    pub(crate) fn sorted(spots: &'a mut [Spot]) -> Self {
        spots.sort_unstable();
        Self { spots }
    }
}

impl<'a> Iterator for Buckets<'a> {
    type Item = Bucket<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.spots.first()?.pos;
        let len = self
            .spots
            .iter()
            .position(|spot| spot.pos != pos)
            .unwrap_or(self.spots.len());
        let (spots, rest) = self.spots.split_at(len);
        self.spots = rest;

        // Sorted by kind within a position, so the first and last spots bound the mix.
        let kind = match (spots[0].kind, spots[len - 1].kind) {
            (SpotKind::Start, SpotKind::Start) => BucketKind::Start,
            (SpotKind::End, SpotKind::End) => BucketKind::End,
            _ => BucketKind::Mixed,
        };

        Some(Bucket { pos, kind, spots })
    }
}
