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

//! # Rangesplit
//!
//! A Rust library that overlays a collection of possibly-overlapping integer ranges and splits
//! them into the unique sequence of disjoint closed intervals over which the set of covering
//! ranges is constant. Every range carries an identifier and a payload; each output interval
//! reports the identifiers of the ranges covering it and the union of their payloads.
//!
//! ## Key Features
//!
//! - **Single Sweep**: Ranges are turned into boundary events, sorted once and swept in order
//! - **Exact Tie Handling**: Ranges that touch, nest, or collapse to a single point all split cleanly
//! - **Payload Union**: Payload values travel with their range into every interval it covers
//! - **Deterministic Output**: Identifiers and payloads are kept in ordered sets, so repeated runs match
//! - **IPv4 Helpers**: Register ranges as dotted-decimal addresses and fold intervals into CIDR blocks
//!
//! ## Usage Examples
//!
//! ### Splitting Ranges
//!
//! ```rust
//! use rangesplit::RangeSplit;
//!
//! let mut split = RangeSplit::new();
//! split.add_range(0, 29, 7, [70]).unwrap();
//! split.add_range(3, 9, 1, [10]).unwrap();
//! split.add_range(9, 25, 2, [20]).unwrap();
//!
//! for interval in split.build() {
//!     println!("{interval}");
//! }
//!
//! let intervals = split.intervals();
//! assert_eq!(intervals.len(), 5);
//! assert_eq!((intervals[2].low, intervals[2].high), (9, 9));
//! assert_eq!(intervals[2].ids.as_slice(), &[1, 2, 7]);
//! assert_eq!(intervals[2].data.as_slice(), &[10, 20, 70]);
//! ```
//!
//! ### IPv4 Ranges
//!
//! ```rust
//! use rangesplit::RangeSplit;
//!
//! let mut split = RangeSplit::new();
//! split.add_address_range("10.0.0.0", "10.0.0.255", "office", ["allow"]).unwrap();
//! split.add_address_range("10.0.0.100", "10.0.0.100", "printer", ["deny"]).unwrap();
//!
//! let blocks: Vec<String> = split.build()[0]
//!     .cidr_blocks()
//!     .unwrap()
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(blocks, ["10.0.0.0/26", "10.0.0.64/27", "10.0.0.96/30"]);
//! ```
//!
//! ## Tie Breaking
//!
//! Boundaries are grouped by position. Within a position, ranges that begin are made active
//! before ranges that end are released, so a range ending exactly where another begins overlaps
//! it at that one coordinate. Such a position is emitted as its own single-point interval.
//!
//! ## Error Handling
//!
//! Operations return `RangeSplitResult<T>` which can contain the following errors:
//!
//! - `RangeSplitError::InvalidRange`: The low bound is greater than the high bound
//! - `RangeSplitError::AlreadyBuilt`: A range was added after building without a reset
//! - `RangeSplitError::MalformedAddress`: An address is not valid dotted-decimal IPv4
//! - `RangeSplitError::AddressOutOfRange`: An interval does not fit in the IPv4 address space
//!
//! ## Logging
//!
//! Diagnostics are emitted through the [`log`](https://docs.rs/log) facade: a summary per build
//! at `debug` and every bucket and interval at `trace`. No logger is installed by the library.
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod ipv4;
mod result;
mod set;
mod split;
mod spot;

pub use self::ipv4::{
    Ipv4Cidr, address_range_to_cidr_blocks, address_to_integer, integer_to_address,
    range_to_cidr_blocks,
};
pub use self::result::{RangeSplitError, RangeSplitResult};
pub use self::set::OrderedSet;
pub use self::split::{Interval, RangeSplit};
