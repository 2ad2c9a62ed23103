//! Validated CIDR block (`address/prefix`).

use super::{expand_ipv6, hextets_to_u128, parse_ipv4, AddressFamily};
use crate::error::Result;
use serde::{Serialize, Serializer};
use std::str::FromStr;

/// A CIDR block whose address text and prefix length passed validation.
///
/// The address is kept as written so IPv6 hextets are not re-formatted.
/// Build one with [`Cidr::new`], [`crate::processing::validate_cidr`] or
/// `str::parse`; the fields stay private so the prefix is always in range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cidr {
    family: AddressFamily,
    address: String,
    prefix_len: u8,
}

impl Cidr {
    /// Validate an address and prefix length for `family`.
    pub fn new(family: AddressFamily, address: &str, prefix_len: u8) -> Result<Cidr> {
        crate::processing::validate_cidr(&format!("{address}/{prefix_len}"), family)
    }

    /// Only for text that already passed validation.
    pub(crate) fn from_validated(family: AddressFamily, address: &str, prefix_len: u8) -> Cidr {
        Cidr {
            family,
            address: address.to_string(),
            prefix_len,
        }
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// 32-bit value of an IPv4 address.
    pub fn ipv4_value(&self) -> Result<u32> {
        parse_ipv4(&self.address)
    }

    /// The address expanded to 8 hextets.
    pub fn ipv6_hextets(&self) -> Vec<String> {
        expand_ipv6(&self.address)
    }

    /// 128-bit value of an IPv6 address.
    pub fn ipv6_value(&self) -> Result<u128> {
        hextets_to_u128(&self.ipv6_hextets())
    }

    pub fn max_prefix_len(&self) -> u8 {
        self.family.max_prefix_len()
    }
}

impl FromStr for Cidr {
    type Err = crate::error::SplitError;

    /// Parse with the family guessed from the address text.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        crate::processing::validate_cidr(s, AddressFamily::detect(s))
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detects_family() {
        let v4: Cidr = "10.0.0.0/8".parse().unwrap();
        assert_eq!(v4.family(), AddressFamily::Ipv4);
        assert_eq!(v4.prefix_len(), 8);
        assert_eq!(v4.ipv4_value().unwrap(), 0x0A000000);

        let v6: Cidr = " 2001:db8::/32 ".parse().unwrap();
        assert_eq!(v6.family(), AddressFamily::Ipv6);
        assert_eq!(v6.address(), "2001:db8::");
        assert_eq!(v6.ipv6_hextets()[1], "db8");
    }

    #[test]
    fn test_new_checks_prefix_bounds() {
        let cidr = Cidr::new(AddressFamily::Ipv6, "2001:db8::", 32).unwrap();
        assert_eq!(cidr.to_string(), "2001:db8::/32");

        assert!(matches!(
            Cidr::new(AddressFamily::Ipv6, "::", 0),
            Err(crate::error::SplitError::InvalidCidr { .. })
        ));
        assert!(Cidr::new(AddressFamily::Ipv4, "10.0.0.0", 33).is_err());
        assert!(Cidr::new(AddressFamily::Ipv4, "10.0.0.0/8", 8).is_err());
    }

    #[test]
    fn test_display_and_serialize() {
        let cidr: Cidr = "192.168.1.0/24".parse().unwrap();
        assert_eq!(cidr.to_string(), "192.168.1.0/24");
        assert_eq!(
            serde_json::to_string(&cidr).unwrap(),
            "\"192.168.1.0/24\""
        );
    }
}
