// cargo watch -x 'fmt' -x 'test'

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use config::Config;
use error::Result;
use models::{AddressFamily, Cidr, SplitForm, SplitRequest, SubnetRecord};
use processing::Summary;
use serde::Serialize;

pub use error::SplitError;

/// A finished split: the validated base block and its subnets in order.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SplitResult {
    pub base: Cidr,
    pub new_prefix_len: u8,
    pub subnets: Vec<SubnetRecord>,
}

impl SplitResult {
    pub fn family(&self) -> AddressFamily {
        self.base.family()
    }

    pub fn summary(&self) -> Summary {
        Summary::new(&self.base, &self.subnets)
    }
}

/// Validate a submitted form and split it with the configured planner.
pub fn calculate(form: SplitForm, config: &Config) -> Result<SplitResult> {
    let request = form.into_request()?;
    calculate_request(&request, config)
}

pub fn calculate_request(request: &SplitRequest, config: &Config) -> Result<SplitResult> {
    log::info!("Splitting {} ({:?})", request.base, request.mode);
    let (new_prefix_len, subnets) = config.planner().plan_request(request)?;
    log::info!(
        "Got {} subnets of /{new_prefix_len} from {}",
        subnets.len(),
        request.base
    );
    Ok(SplitResult {
        base: request.base.clone(),
        new_prefix_len,
        subnets,
    })
}
