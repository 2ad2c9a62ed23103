//! Subnet split logic.
//!
//! - [`validate`] - CIDR text validation
//! - [`planner`] - new prefix computation and subnet enumeration
//! - [`summary`] - totals for a finished split

mod planner;
mod summary;
mod validate;

// Re-export public functions
pub use planner::{new_prefix_len, plan, Ipv6Mode, SubnetPlanner};
pub use summary::Summary;
pub use validate::validate_cidr;
