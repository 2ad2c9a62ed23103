//! Summary statistics for a finished split.

use crate::models::{AddressCount, AddressFamily, Cidr, SubnetRecord};
use serde::Serialize;

/// Totals shown above the subnet table.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub base_cidr: String,
    pub subnet_count: usize,
    /// Exact for IPv4, `2^N` for IPv6.
    pub total_addresses: AddressCount,
}

impl Summary {
    pub fn new(base: &Cidr, subnets: &[SubnetRecord]) -> Summary {
        let total_addresses = match base.family() {
            AddressFamily::Ipv4 => AddressCount::Exact(
                subnets
                    .iter()
                    .filter_map(|s| s.address_count.as_u64())
                    .sum(),
            ),
            // the subnets tile the whole parent block
            AddressFamily::Ipv6 => AddressCount::PowerOfTwo(128 - base.prefix_len() as u32),
        };
        Summary {
            base_cidr: base.to_string(),
            subnet_count: subnets.len(),
            total_addresses,
        }
    }
}
