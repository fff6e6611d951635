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

//! Error types and results for the RangeSplit library.

/// A specialized Result type for RangeSplit operations.
pub type RangeSplitResult<T> = Result<T, RangeSplitError>;

/// Errors that can occur during RangeSplit operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeSplitError {
    /// The low bound of a range is greater than its high bound.
    #[error("Invalid range: low bound {low} is greater than high bound {high}")]
    InvalidRange {
        /// Requested low bound.
        low: i64,
        /// Requested high bound.
        high: i64,
    },
    /// A range was registered after `build()` without resetting the splitter.
    #[error("Splitter has already been built, reset it before adding ranges")]
    AlreadyBuilt,
    /// The text could not be parsed as a dotted-decimal IPv4 address.
    #[error("Malformed IPv4 address: {0:?}")]
    MalformedAddress(String),
    /// The interval does not fit in the 32-bit IPv4 address space.
    #[error("Interval {low}-{high} lies outside the IPv4 address space")]
    AddressOutOfRange {
        /// Interval low bound.
        low: i64,
        /// Interval high bound.
        high: i64,
    },
}
