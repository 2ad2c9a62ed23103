//! IPv4 text/integer conversion and mask helpers.
//!
//! Parsing is deliberately permissive: four dot-separated decimal parts in
//! `0..=255`, leading zeros allowed.

use super::AddressFamily;
use crate::error::{Result, SplitError};

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse dotted-quad text into its 32-bit value.
///
/// # Examples
/// ```
/// use subnet_splitter::models::parse_ipv4;
/// assert_eq!(parse_ipv4("10.0.0.1").unwrap(), 0x0A000001);
/// ```
pub fn parse_ipv4(text: &str) -> Result<u32> {
    let invalid = || SplitError::InvalidAddress {
        family: AddressFamily::Ipv4,
        input: text.to_string(),
    };

    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return Err(invalid());
    }
    let mut value: u32 = 0;
    for part in parts {
        let octet: u8 = part.trim().parse().map_err(|_| invalid())?;
        value = (value << 8) | octet as u32;
    }
    Ok(value)
}

/// Format a 32-bit value as dotted-quad text, most significant octet first.
pub fn format_ipv4(value: u32) -> String {
    let [a, b, c, d] = value.to_be_bytes();
    format!("{a}.{b}.{c}.{d}")
}

/// Syntactic IPv4 check, no semantic exclusions (loopback, multicast, ...).
pub fn is_valid_ipv4(text: &str) -> bool {
    parse_ipv4(text).is_ok()
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_splitter::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(SplitError::PrefixOverflow {
            family: AddressFamily::Ipv4,
            requested: len as i64,
            max: MAX_LENGTH,
        })
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address (host bits cleared) for a value and prefix length.
pub fn cut_addr(value: u32, len: u8) -> Result<u32> {
    Ok(value & get_cidr_mask(len)?)
}

/// Number of addresses in a block of the given prefix length.
pub fn block_size(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_cut_addr() {
        let ip = parse_ipv4("192.168.1.42").unwrap();
        assert_eq!(format_ipv4(cut_addr(ip, 24).unwrap()), "192.168.1.0");
        assert_eq!(format_ipv4(cut_addr(ip, 16).unwrap()), "192.168.0.0");
        assert_eq!(format_ipv4(cut_addr(ip, 8).unwrap()), "192.0.0.0");
        assert_eq!(format_ipv4(cut_addr(ip, 32).unwrap()), "192.168.1.42");
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_parse_ipv4() {
        assert_eq!(parse_ipv4("0.0.0.0").unwrap(), 0);
        assert_eq!(parse_ipv4("255.255.255.255").unwrap(), u32::MAX);
        assert_eq!(parse_ipv4("192.168.1.1").unwrap(), 0xC0A80101);
        // leading zeros are tolerated
        assert_eq!(parse_ipv4("010.001.000.001").unwrap(), 0x0A010001);
        assert!(matches!(
            parse_ipv4("1.2.3"),
            Err(SplitError::InvalidAddress { .. })
        ));
        assert!(parse_ipv4("1.2.3.4.5").is_err());
        assert!(parse_ipv4("1.2..4").is_err());
        assert!(parse_ipv4("a.b.c.d").is_err());
        assert!(parse_ipv4("1.2.3.-4").is_err());
    }

    #[test]
    fn test_format_round_trip() {
        for text in ["0.0.0.0", "10.0.0.64", "172.16.254.1", "255.255.255.255"] {
            assert_eq!(format_ipv4(parse_ipv4(text).unwrap()), text);
        }
    }

    #[test]
    fn test_is_valid_ipv4() {
        assert!(is_valid_ipv4("1.2.3.4"));
        assert!(!is_valid_ipv4("256.1.1.1"));
        assert!(!is_valid_ipv4("1.2.3"));
        assert!(!is_valid_ipv4(""));
    }

    #[test]
    fn test_block_size() {
        assert_eq!(block_size(32), 1);
        assert_eq!(block_size(24), 256);
        assert_eq!(block_size(0), 4294967296);
    }
}
