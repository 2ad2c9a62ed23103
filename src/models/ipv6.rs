//! IPv6 hextet expansion, validation and u128 conversion.
//!
//! Only `::` expansion is performed. Individual hextets keep the text they
//! were written with (`db8` stays `db8`), nothing is re-compressed.

use super::AddressFamily;
use crate::error::{Result, SplitError};
use lazy_static::lazy_static;
use regex::Regex;

/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH: u8 = 128;

/// Number of hextets in a full IPv6 address.
pub const HEXTETS: usize = 8;

lazy_static! {
    static ref HEXTET: Regex = Regex::new(r"^[0-9a-fA-F]{1,4}$").expect("Invalid Regex?");
}

/// Syntactic IPv6 check.
///
/// `::` is always valid. Otherwise 3 to 8 colon-separated parts, each empty
/// (an elided zero run) or 1-4 hex digits.
pub fn is_valid_ipv6(text: &str) -> bool {
    if text == "::" {
        return true;
    }
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() < 3 || parts.len() > HEXTETS {
        return false;
    }
    parts
        .iter()
        .all(|part| part.is_empty() || HEXTET.is_match(part))
}

/// Expand an IPv6 address to exactly 8 hextet strings.
///
/// With `::` the missing run is filled with `"0"` between the left and right
/// groups. Without it the text is split on `:` and right-padded with `"0"`.
pub fn expand_ipv6(text: &str) -> Vec<String> {
    let mut hextets: Vec<String> = if text.contains("::") {
        let mut halves = text.split("::");
        let left = split_group(halves.next().unwrap_or(""));
        let right = split_group(halves.next().unwrap_or(""));
        let missing = HEXTETS.saturating_sub(left.len() + right.len());

        left.into_iter()
            .chain(std::iter::repeat("0").take(missing))
            .chain(right)
            .map(str::to_string)
            .collect()
    } else {
        text.split(':').map(str::to_string).collect()
    };

    hextets.resize(HEXTETS, "0".to_string());
    hextets
}

fn split_group(group: &str) -> Vec<&str> {
    if group.is_empty() {
        vec![]
    } else {
        group.split(':').collect()
    }
}

/// Numeric value of an expanded address. Empty hextets count as zero.
pub fn hextets_to_u128(hextets: &[String]) -> Result<u128> {
    let invalid = || SplitError::InvalidAddress {
        family: AddressFamily::Ipv6,
        input: hextets.join(":"),
    };
    if hextets.len() != HEXTETS {
        return Err(invalid());
    }
    hextets.iter().try_fold(0u128, |acc, hextet| {
        let value = if hextet.is_empty() {
            0
        } else {
            u16::from_str_radix(hextet, 16).map_err(|_| invalid())?
        };
        Ok((acc << 16) | value as u128)
    })
}

/// Parse IPv6 text into its 128-bit value.
pub fn parse_ipv6(text: &str) -> Result<u128> {
    if !is_valid_ipv6(text) {
        return Err(SplitError::InvalidAddress {
            family: AddressFamily::Ipv6,
            input: text.to_string(),
        });
    }
    hextets_to_u128(&expand_ipv6(text))
}

/// Render a 128-bit value as 8 uncompressed lowercase hextets.
pub fn format_ipv6(value: u128) -> String {
    (0..HEXTETS)
        .rev()
        .map(|i| format!("{:x}", (value >> (i * 16)) as u16))
        .collect::<Vec<String>>()
        .join(":")
}

/// Convert a prefix length to a 128-bit network mask.
pub fn get_cidr_mask_v6(len: u8) -> Result<u128> {
    if len > MAX_LENGTH {
        return Err(SplitError::PrefixOverflow {
            family: AddressFamily::Ipv6,
            requested: len as i64,
            max: MAX_LENGTH,
        });
    }
    Ok(u128::MAX.checked_shl((MAX_LENGTH - len) as u32).unwrap_or(0))
}
