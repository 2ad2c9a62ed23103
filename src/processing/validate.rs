//! CIDR text validation.

use crate::error::{Result, SplitError};
use crate::models::{is_valid_ipv4, is_valid_ipv6, AddressFamily, Cidr};

/// Validate `address/prefix` text for the given family.
///
/// The prefix must lie in `1..=32` (IPv4) or `1..=128` (IPv6) and the
/// address must pass the family's syntax check.
///
/// # Examples
/// ```
/// use subnet_splitter::models::AddressFamily;
/// use subnet_splitter::processing::validate_cidr;
/// let cidr = validate_cidr("10.0.0.0/24", AddressFamily::Ipv4).unwrap();
/// assert_eq!(cidr.prefix_len(), 24);
/// ```
pub fn validate_cidr(text: &str, family: AddressFamily) -> Result<Cidr> {
    let invalid = |reason: String| SplitError::InvalidCidr {
        family,
        input: text.to_string(),
        reason,
    };

    let (address, prefix) = text
        .split_once('/')
        .ok_or_else(|| invalid("missing `/` separator".to_string()))?;

    let prefix: i64 = prefix
        .trim()
        .parse()
        .map_err(|_| invalid(format!("prefix length `{prefix}` is not a number")))?;

    let max = family.max_prefix_len();
    if prefix < 1 || prefix > max as i64 {
        return Err(invalid(format!(
            "prefix length /{prefix} is outside /1 to /{max}"
        )));
    }

    let address = address.trim();
    let valid = match family {
        AddressFamily::Ipv4 => is_valid_ipv4(address),
        AddressFamily::Ipv6 => is_valid_ipv6(address),
    };
    if !valid {
        return Err(invalid(format!("`{address}` is not a valid {family} address")));
    }

    log::trace!("validated {family} CIDR {address}/{prefix}");
    Ok(Cidr::from_validated(family, address, prefix as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(text: &str, family: AddressFamily) -> String {
        match validate_cidr(text, family) {
            Err(SplitError::InvalidCidr { reason, .. }) => reason,
            other => panic!("expected InvalidCidr for {text}, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_cidrs() {
        let cidr = validate_cidr("192.168.1.0/24", AddressFamily::Ipv4).unwrap();
        assert_eq!(cidr.address(), "192.168.1.0");
        assert_eq!(cidr.prefix_len(), 24);

        assert!(validate_cidr("1.2.3.4/32", AddressFamily::Ipv4).is_ok());
        assert!(validate_cidr("0.0.0.0/1", AddressFamily::Ipv4).is_ok());
        assert!(validate_cidr("::/1", AddressFamily::Ipv6).is_ok());
        assert!(validate_cidr("2001:db8::/128", AddressFamily::Ipv6).is_ok());
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            reason("10.0.0.0", AddressFamily::Ipv4),
            "missing `/` separator"
        );
    }

    #[test]
    fn test_prefix_bounds() {
        assert_eq!(
            reason("10.0.0.0/0", AddressFamily::Ipv4),
            "prefix length /0 is outside /1 to /32"
        );
        assert_eq!(
            reason("10.0.0.0/33", AddressFamily::Ipv4),
            "prefix length /33 is outside /1 to /32"
        );
        assert_eq!(
            reason("2001:db8::/129", AddressFamily::Ipv6),
            "prefix length /129 is outside /1 to /128"
        );
        assert!(validate_cidr("2001:db8::/33", AddressFamily::Ipv6).is_ok());
        assert!(reason("10.0.0.0/x", AddressFamily::Ipv4).contains("not a number"));
    }

    #[test]
    fn test_address_checked_per_family() {
        assert!(reason("256.1.1.1/24", AddressFamily::Ipv4).contains("not a valid IPv4"));
        assert!(reason("2001:db8::/32", AddressFamily::Ipv4).contains("not a valid IPv4"));
        assert!(reason("10.0.0.0/8", AddressFamily::Ipv6).contains("not a valid IPv6"));
        assert!(reason("2001:db8:zzzz::1/64", AddressFamily::Ipv6).contains("not a valid IPv6"));
    }
}
