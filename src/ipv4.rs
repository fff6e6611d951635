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

//! IPv4 address helpers: dotted-decimal conversion and CIDR folding of address ranges.

use crate::result::{RangeSplitError, RangeSplitResult};
use std::fmt;
use std::net::Ipv4Addr;

/// A power-of-two aligned block of IPv4 addresses, written `network/prefix`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ipv4Cidr {
    /// First address of the block.
    pub network: Ipv4Addr,
    /// Number of leading fixed bits, `0..=32`.
    pub prefix: u8,
}

impl Ipv4Cidr {
    /// Returns the first address of the block as an integer.
    pub fn first(&self) -> u32 {
        u32::from(self.network)
    }

    /// Returns the last address of the block as an integer.
    pub fn last(&self) -> u32 {
        let host_bits = 32 - u32::from(self.prefix);
        let span = if host_bits >= 32 {
            u32::MAX
        } else {
            (1u32 << host_bits) - 1
        };
        self.first() | span
    }
}

impl fmt::Display for Ipv4Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}

/// Parses a dotted-decimal IPv4 address into its big-endian integer value.
///
/// # Examples
///
/// ```rust
/// use rangesplit::address_to_integer;
///
/// assert_eq!(address_to_integer("1.1.1.10").unwrap(), 0x0101_010A);
/// assert!(address_to_integer("1.1.1").is_err());
/// ```
pub fn address_to_integer(text: &str) -> RangeSplitResult<u32> {
    text.trim()
        .parse::<Ipv4Addr>()
        .map(u32::from)
        .map_err(|_| RangeSplitError::MalformedAddress(text.to_string()))
}

/// Converts an integer back into an IPv4 address.
pub fn integer_to_address(value: u32) -> Ipv4Addr {
    Ipv4Addr::from(value)
}

/// Covers the inclusive address range `[start, end]` with the minimal list of CIDR blocks.
///
/// Blocks are emitted in address order. At each step the largest block that is aligned on the
/// current address and does not run past `end` is taken. An empty list is returned when
/// `start > end`.
///
/// # Examples
///
/// ```rust
/// use rangesplit::range_to_cidr_blocks;
///
/// let blocks: Vec<String> = range_to_cidr_blocks(0x0A00_0001, 0x0A00_0006)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(blocks, ["10.0.0.1/32", "10.0.0.2/31", "10.0.0.4/31", "10.0.0.6/32"]);
/// ```
pub fn range_to_cidr_blocks(start: u32, end: u32) -> Vec<Ipv4Cidr> {
    let mut blocks = Vec::new();
    let end = u64::from(end);
    let mut current = u64::from(start);

    while current <= end {
        let remaining = end - current + 1;
        let align_bits = if current == 0 {
            32
        } else {
            current.trailing_zeros().min(32)
        };
        let span_bits = 63 - remaining.leading_zeros();
        let host_bits = align_bits.min(span_bits);

        // `current` never exceeds `end`, which came from a u32.
        let network = u32::try_from(current).unwrap_or(u32::MAX);
        blocks.push(Ipv4Cidr {
            network: integer_to_address(network),
            prefix: (32 - host_bits) as u8,
        });
        current += 1u64 << host_bits;
    }

    blocks
}

/// Dotted-decimal form of [`range_to_cidr_blocks`].
pub fn address_range_to_cidr_blocks(start: &str, end: &str) -> RangeSplitResult<Vec<Ipv4Cidr>> {
    let start = address_to_integer(start)?;
    let end = address_to_integer(end)?;
    Ok(range_to_cidr_blocks(start, end))
}
