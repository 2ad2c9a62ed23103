//! Split requests: the raw form a caller submits and its validated form.

use super::{AddressFamily, Cidr};
use crate::error::{Result, SplitError};
use crate::processing::validate_cidr;
use serde::{Deserialize, Serialize};

/// How the base block is divided.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SplitMode {
    /// At least this many subnets, rounded up to a power of two.
    ByCount(u64),
    /// Every subnet gets this prefix length.
    BySize(u32),
}

/// A validated base CIDR and split mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRequest {
    pub base: Cidr,
    pub mode: SplitMode,
}

/// Form input as submitted by a caller:
/// `{ipType, baseCidr, splitType, subnetCount?, subnetSize?}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SplitForm {
    pub ip_type: String,
    pub base_cidr: String,
    pub split_type: String,
    #[serde(default)]
    pub subnet_count: Option<i64>,
    #[serde(default)]
    pub subnet_size: Option<i64>,
}

impl SplitForm {
    /// Parse the family and split type and validate the base CIDR.
    pub fn into_request(self) -> Result<SplitRequest> {
        let family: AddressFamily = self.ip_type.parse()?;
        let base = validate_cidr(self.base_cidr.trim(), family)?;

        let mode = match self.split_type.trim().to_ascii_lowercase().as_str() {
            "count" => {
                let count = self
                    .subnet_count
                    .ok_or(SplitError::MissingField("subnetCount"))?;
                let count = u64::try_from(count).map_err(|_| SplitError::InvalidSubnetCount(count))?;
                SplitMode::ByCount(count)
            }
            "size" => {
                let size = self
                    .subnet_size
                    .ok_or(SplitError::MissingField("subnetSize"))?;
                if size < 0 {
                    return Err(SplitError::InvalidPrefixLength {
                        base: base.prefix_len(),
                        new: size,
                    });
                }
                let size = u32::try_from(size).map_err(|_| SplitError::PrefixOverflow {
                    family,
                    requested: size,
                    max: family.max_prefix_len(),
                })?;
                SplitMode::BySize(size)
            }
            _ => return Err(SplitError::UnknownSplitType(self.split_type)),
        };

        Ok(SplitRequest { base, mode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(json: &str) -> SplitForm {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_count_form() {
        let request = form(
            r#"{"ipType":"ipv4","baseCidr":" 10.0.0.0/24 ","splitType":"count","subnetCount":4}"#,
        )
        .into_request()
        .unwrap();
        assert_eq!(request.base.to_string(), "10.0.0.0/24");
        assert_eq!(request.mode, SplitMode::ByCount(4));
    }

    #[test]
    fn test_size_form() {
        let request = form(
            r#"{"ipType":"ipv6","baseCidr":"2001:db8::/32","splitType":"size","subnetSize":48}"#,
        )
        .into_request()
        .unwrap();
        assert_eq!(request.base.family(), AddressFamily::Ipv6);
        assert_eq!(request.mode, SplitMode::BySize(48));
    }

    #[test]
    fn test_form_errors() {
        let err = form(r#"{"ipType":"ipv4","baseCidr":"10.0.0.0/24","splitType":"count"}"#)
            .into_request()
            .unwrap_err();
        assert!(matches!(err, SplitError::MissingField("subnetCount")));

        let err = form(
            r#"{"ipType":"ipv4","baseCidr":"10.0.0.0/24","splitType":"count","subnetCount":-3}"#,
        )
        .into_request()
        .unwrap_err();
        assert!(matches!(err, SplitError::InvalidSubnetCount(-3)));

        let err = form(
            r#"{"ipType":"ipv4","baseCidr":"10.0.0.0/24","splitType":"size","subnetSize":-1}"#,
        )
        .into_request()
        .unwrap_err();
        assert!(matches!(err, SplitError::InvalidPrefixLength { .. }));

        let err = form(r#"{"ipType":"ipv4","baseCidr":"10.0.0.0/24","splitType":"half"}"#)
            .into_request()
            .unwrap_err();
        assert!(matches!(err, SplitError::UnknownSplitType(_)));

        let err = form(r#"{"ipType":"ipv4","baseCidr":"10.0.0.0","splitType":"size"}"#)
            .into_request()
            .unwrap_err();
        assert!(matches!(err, SplitError::InvalidCidr { .. }));
    }

    #[test]
    fn test_oversized_prefix_reports_input() {
        let err = form(
            r#"{"ipType":"ipv4","baseCidr":"10.0.0.0/24","splitType":"size","subnetSize":5000000000}"#,
        )
        .into_request()
        .unwrap_err();
        assert!(matches!(
            err,
            SplitError::PrefixOverflow {
                requested: 5_000_000_000,
                max: 32,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "prefix length /5000000000 exceeds the IPv4 maximum of /32"
        );
    }
}
