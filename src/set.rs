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

//! Sorted, deduplicated set used for range identifiers and payloads.

use std::cmp::Ordering;
use std::fmt;

/// An `OrderedSet` stores unique elements in ascending order in a contiguous vector.
///
/// Set algebra (`union`, `intersection`, `difference`) is implemented as a linear merge of
/// the two sorted backing vectors, so results are always canonical: two sets holding the same
/// elements compare equal and iterate identically regardless of insertion order.
///
/// # Examples
///
/// ```rust
/// use rangesplit::OrderedSet;
///
/// let a: OrderedSet<u64> = [3, 1, 2, 3].into_iter().collect();
/// let b: OrderedSet<u64> = [2, 4].into_iter().collect();
///
/// assert_eq!(a.as_slice(), &[1, 2, 3]);
/// assert_eq!(a.union(&b).as_slice(), &[1, 2, 3, 4]);
/// assert_eq!(a.intersection(&b).as_slice(), &[2]);
/// assert_eq!(a.difference(&b).as_slice(), &[1, 3]);
/// assert!(a.contains(&2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderedSet<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Ord> OrderedSet<T> {
    /// Creates an empty `OrderedSet`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning `true` if it was not already present.
    pub fn insert(&mut self, value: T) -> bool {
        match self.items.binary_search(&value) {
            Ok(_) => false,
            Err(idx) => {
                self.items.insert(idx, value);
                true
            }
        }
    }

    /// Removes a value, returning `true` if it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.items.binary_search(value) {
            Ok(idx) => {
                self.items.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Returns `true` if the set contains `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.items.binary_search(value).is_ok()
    }

    /// Returns `true` if every element of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.items.iter().all(|item| other.contains(item))
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the elements in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrows the elements as an ascending slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the set, returning the ascending backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Ord + Clone> OrderedSet<T> {
    /// Returns every element present in `self` or `other`.
    pub fn union(&self, other: &Self) -> Self {
        self.merge(other, true, true, true)
    }

    /// Returns the elements present in both `self` and `other`.
    pub fn intersection(&self, other: &Self) -> Self {
        self.merge(other, false, true, false)
    }

    /// Returns the elements of `self` that are not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        self.merge(other, true, false, false)
    }

    /// Adds every element of `other` to `self` in place.
    pub fn union_with(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        *self = self.union(other);
    }

    /// Two-pointer walk over both sorted vectors. The flags select which of the three
    /// disjoint parts (only in `self`, in both, only in `other`) end up in the result.
    fn merge(&self, other: &Self, left_only: bool, both: bool, right_only: bool) -> Self {
        let mut items = Vec::with_capacity(self.len().max(other.len()));
        let mut left = self.items.iter().peekable();
        let mut right = other.items.iter().peekable();

        loop {
            match (left.peek(), right.peek()) {
                (Some(l), Some(r)) => match l.cmp(r) {
                    Ordering::Less => {
                        if left_only {
                            items.push((*l).clone());
                        }
                        left.next();
                    }
                    Ordering::Greater => {
                        if right_only {
                            items.push((*r).clone());
                        }
                        right.next();
                    }
                    Ordering::Equal => {
                        if both {
                            items.push((*l).clone());
                        }
                        left.next();
                        right.next();
                    }
                },
                (Some(_), None) => {
                    if left_only {
                        items.extend(left.cloned());
                    }
                    break;
                }
                (None, Some(_)) => {
                    if right_only {
                        items.extend(right.cloned());
                    }
                    break;
                }
                (None, None) => break,
            }
        }

        Self { items }
    }
}

impl<T: Ord> FromIterator<T> for OrderedSet<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }
}

impl<T: Ord> Extend<T> for OrderedSet<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        self.items.extend(iter);
        self.items.sort_unstable();
        self.items.dedup();
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
