//! Subnet enumeration.
//!
//! Works out the new prefix length for a split and lists every resulting
//! subnet in ascending order. Either the full list is returned or an error,
//! never a partial result.

use crate::error::{Result, SplitError};
use crate::models::ipv4::block_size;
use crate::models::{
    cut_addr, format_ipv4, format_ipv6, get_cidr_mask_v6, AddressCount, AddressFamily, Cidr,
    SplitMode, SplitRequest, SubnetRecord,
};
use std::str::FromStr;

/// How IPv6 subnet addresses are produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Ipv6Mode {
    /// Overwrite the hextet at `new_prefix / 16` with the subnet index and
    /// end every range at `...:ffff`. Matches the classic web calculator
    /// output, but is only bit-accurate for prefixes on a 16-bit boundary.
    #[default]
    Compat,
    /// Insert the index at the real prefix boundary and report the real
    /// last address of each subnet.
    Exact,
}

impl FromStr for Ipv6Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compat" => Ok(Ipv6Mode::Compat),
            "exact" => Ok(Ipv6Mode::Exact),
            other => Err(format!("unknown IPv6 mode `{other}`, expected `compat` or `exact`")),
        }
    }
}

/// Computes the new prefix length for a split mode.
///
/// `ByCount(n)` borrows `ceil(log2(n))` bits from the host part.
pub fn new_prefix_len(base: &Cidr, mode: SplitMode) -> Result<u8> {
    let max = base.max_prefix_len();
    match mode {
        SplitMode::ByCount(n) => {
            if n < 2 {
                return Err(SplitError::InvalidSubnetCount(n as i64));
            }
            let bits_needed = n
                .checked_next_power_of_two()
                .map(|p| p.trailing_zeros())
                .unwrap_or(u64::BITS);
            let requested = base.prefix_len() as u32 + bits_needed;
            if requested > max as u32 {
                return Err(SplitError::PrefixOverflow {
                    family: base.family(),
                    requested: requested as i64,
                    max,
                });
            }
            new_prefix_len(base, SplitMode::BySize(requested))
        }
        SplitMode::BySize(requested) => {
            if requested <= base.prefix_len() as u32 {
                return Err(SplitError::InvalidPrefixLength {
                    base: base.prefix_len(),
                    new: requested as i64,
                });
            }
            if requested > max as u32 {
                return Err(SplitError::PrefixOverflow {
                    family: base.family(),
                    requested: requested as i64,
                    max,
                });
            }
            Ok(requested as u8)
        }
    }
}

/// Subnet planner with its IPv6 mode and an optional size guard.
#[derive(Debug, Copy, Clone, Default)]
pub struct SubnetPlanner {
    pub ipv6_mode: Ipv6Mode,
    /// Refuse splits producing more subnets than this. `None` disables it.
    pub max_subnets: Option<u64>,
}

impl SubnetPlanner {
    pub fn new(ipv6_mode: Ipv6Mode, max_subnets: Option<u64>) -> SubnetPlanner {
        SubnetPlanner {
            ipv6_mode,
            max_subnets,
        }
    }

    /// Plan a validated request, returning the new prefix length with the
    /// subnets.
    pub fn plan_request(&self, request: &SplitRequest) -> Result<(u8, Vec<SubnetRecord>)> {
        self.plan_with_prefix(&request.base, request.mode)
    }

    /// Enumerate every subnet of `base` for the given mode.
    pub fn plan(&self, base: &Cidr, mode: SplitMode) -> Result<Vec<SubnetRecord>> {
        self.plan_with_prefix(base, mode).map(|(_, subnets)| subnets)
    }

    fn plan_with_prefix(&self, base: &Cidr, mode: SplitMode) -> Result<(u8, Vec<SubnetRecord>)> {
        let new_prefix = new_prefix_len(base, mode)?;
        let bits = (new_prefix - base.prefix_len()) as u32;

        if let Some(limit) = self.max_subnets {
            let too_many = 1u64.checked_shl(bits).map_or(true, |count| count > limit);
            if too_many {
                return Err(SplitError::TooManySubnets { bits, limit });
            }
        }

        log::debug!(
            "split {base} into 2^{bits} subnets of /{new_prefix} ({:?})",
            self.ipv6_mode
        );

        let subnets = match (base.family(), self.ipv6_mode) {
            (AddressFamily::Ipv4, _) => plan_ipv4(base, new_prefix)?,
            (AddressFamily::Ipv6, Ipv6Mode::Compat) => plan_ipv6_compat(base, new_prefix),
            (AddressFamily::Ipv6, Ipv6Mode::Exact) => plan_ipv6_exact(base, new_prefix)?,
        };
        Ok((new_prefix, subnets))
    }
}

/// Enumerate with the default planner: compat IPv6 mode, no size guard.
pub fn plan(base: &Cidr, mode: SplitMode) -> Result<Vec<SubnetRecord>> {
    SubnetPlanner::default().plan(base, mode)
}

fn plan_ipv4(base: &Cidr, new_prefix: u8) -> Result<Vec<SubnetRecord>> {
    // IPv4 always starts from the network address. Compat IPv6 keeps the
    // base address as written and only overwrites one hextet.
    let value = base.ipv4_value()?;
    let network = cut_addr(value, base.prefix_len())?;
    if network != value {
        log::warn!(
            "{base} has host bits set, splitting from network {}/{}",
            format_ipv4(network),
            base.prefix_len()
        );
    }

    // u64 keeps `start + increment` clear of the 2^32 boundary.
    let count = 1u64 << (new_prefix - base.prefix_len());
    let increment = block_size(new_prefix);
    let subnets = (0..count)
        .map(|i| {
            let start = network as u64 + i * increment;
            let end = start + increment - 1;
            let start_ip = format_ipv4(start as u32);
            SubnetRecord {
                network: format!("{start_ip}/{new_prefix}"),
                start_ip,
                end_ip: format_ipv4(end as u32),
                address_count: AddressCount::Exact(increment),
            }
        })
        .collect();
    Ok(subnets)
}

fn plan_ipv6_compat(base: &Cidr, new_prefix: u8) -> Vec<SubnetRecord> {
    let hextets = base.ipv6_hextets();
    let index = new_prefix as usize / 16;
    let count = 1u128 << (new_prefix - base.prefix_len());

    (0..count)
        .map(|i| {
            let mut parts = hextets.clone();
            if index < parts.len() {
                parts[index] = format!("{i:04x}");
            }
            let start_ip = parts.join(":");
            parts[7] = "ffff".to_string();
            SubnetRecord {
                network: format!("{start_ip}/{new_prefix}"),
                start_ip,
                end_ip: parts.join(":"),
                address_count: AddressCount::PowerOfTwo(128 - new_prefix as u32),
            }
        })
        .collect()
}

fn plan_ipv6_exact(base: &Cidr, new_prefix: u8) -> Result<Vec<SubnetRecord>> {
    let value = base.ipv6_value()?;
    let network = value & get_cidr_mask_v6(base.prefix_len())?;
    if network != value {
        log::warn!(
            "{base} has host bits set, splitting from network {}/{}",
            format_ipv6(network),
            base.prefix_len()
        );
    }

    let host_bits = 128 - new_prefix as u32;
    let host_mask = !get_cidr_mask_v6(new_prefix)?;
    let count = 1u128 << (new_prefix - base.prefix_len());
    let subnets = (0..count)
        .map(|i| {
            let start = network | (i << host_bits);
            let start_ip = format_ipv6(start);
            SubnetRecord {
                network: format!("{start_ip}/{new_prefix}"),
                start_ip,
                end_ip: format_ipv6(start | host_mask),
                address_count: AddressCount::PowerOfTwo(host_bits),
            }
        })
        .collect();
    Ok(subnets)
}
