//! Error type shared by the codec, the planner and the output adapters.

use crate::models::AddressFamily;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("invalid {family} address `{input}`")]
    InvalidAddress {
        family: AddressFamily,
        input: String,
    },

    #[error("invalid {family} CIDR `{input}`: {reason}")]
    InvalidCidr {
        family: AddressFamily,
        input: String,
        reason: String,
    },

    #[error("subnet count must be at least 2, got {0}")]
    InvalidSubnetCount(i64),

    #[error("new prefix length /{new} must be greater than the base prefix length /{base}")]
    InvalidPrefixLength { base: u8, new: i64 },

    #[error("prefix length /{requested} exceeds the {family} maximum of /{max}")]
    PrefixOverflow {
        family: AddressFamily,
        requested: i64,
        max: u8,
    },

    #[error("splitting into 2^{bits} subnets exceeds the configured limit of {limit}")]
    TooManySubnets { bits: u32, limit: u64 },

    #[error("unknown IP type `{0}`, expected `ipv4` or `ipv6`")]
    UnknownIpType(String),

    #[error("unknown split type `{0}`, expected `count` or `size`")]
    UnknownSplitType(String),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SplitError>;
