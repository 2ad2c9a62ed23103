//! Address family (IPv4 / IPv6) and its prefix-length bounds.

use crate::error::SplitError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// IP address family of a CIDR block.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    /// Longest allowed prefix length, also the address width in bits.
    pub fn max_prefix_len(self) -> u8 {
        match self {
            AddressFamily::Ipv4 => 32,
            AddressFamily::Ipv6 => 128,
        }
    }

    /// Address width in bits.
    pub fn bits(self) -> u32 {
        self.max_prefix_len() as u32
    }

    /// Guess the family from address text: anything with a `:` is IPv6.
    pub fn detect(text: &str) -> AddressFamily {
        if text.contains(':') {
            AddressFamily::Ipv6
        } else {
            AddressFamily::Ipv4
        }
    }
}

impl FromStr for AddressFamily {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ipv4" | "4" => Ok(AddressFamily::Ipv4),
            "ipv6" | "6" => Ok(AddressFamily::Ipv6),
            _ => Err(SplitError::UnknownIpType(s.to_string())),
        }
    }
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AddressFamily::Ipv4 => write!(f, "IPv4"),
            AddressFamily::Ipv6 => write!(f, "IPv6"),
        }
    }
}
