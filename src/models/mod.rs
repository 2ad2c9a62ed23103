//! Domain models for subnet splitting.
//!
//! This module contains the core data structures and address codecs:
//! - [`AddressFamily`] - IPv4 / IPv6 and their prefix bounds
//! - [`ipv4`] / [`ipv6`] - text <-> integer conversion and syntax checks
//! - [`Cidr`] - validated `address/prefix` block
//! - [`SubnetRecord`] - one computed subnet
//! - [`SplitForm`] and [`SplitRequest`] - caller input

mod cidr;
mod family;
pub mod ipv4;
pub mod ipv6;
mod request;
mod subnet;

// Re-export public types
pub use cidr::Cidr;
pub use family::AddressFamily;
pub use ipv4::{cut_addr, format_ipv4, get_cidr_mask, is_valid_ipv4, parse_ipv4};
pub use ipv6::{
    expand_ipv6, format_ipv6, get_cidr_mask_v6, hextets_to_u128, is_valid_ipv6, parse_ipv6,
};
pub use request::{SplitForm, SplitMode, SplitRequest};
pub use subnet::{AddressCount, SubnetRecord};
