//! One computed subnet of a split.

use serde::{Serialize, Serializer};

/// Number of addresses in a subnet.
///
/// IPv6 sizes quickly leave any integer range, so they stay symbolic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddressCount {
    Exact(u64),
    PowerOfTwo(u32),
}

impl AddressCount {
    /// The exact count when it fits in a u64.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            AddressCount::Exact(n) => Some(n),
            AddressCount::PowerOfTwo(exp) => 1u64.checked_shl(exp),
        }
    }
}

impl std::fmt::Display for AddressCount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AddressCount::Exact(n) => write!(f, "{n}"),
            AddressCount::PowerOfTwo(exp) => write!(f, "2^{exp}"),
        }
    }
}

impl Serialize for AddressCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AddressCount::Exact(n) => serializer.serialize_u64(*n),
            AddressCount::PowerOfTwo(_) => serializer.serialize_str(&self.to_string()),
        }
    }
}

/// A subnet produced by the planner, in display form.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetRecord {
    /// `address/prefix` of the subnet.
    pub network: String,
    pub start_ip: String,
    pub end_ip: String,
    pub address_count: AddressCount,
}
