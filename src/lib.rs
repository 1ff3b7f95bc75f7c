pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{deployment::ConfigDeploymentFilter, http::ApiClient};
pub use config::harness_config::HarnessConfig;
pub use crate::core::{aggregator::ReportAggregator, context::TestRunContext, fetcher::InfoFetcher};
pub use utils::error::{HarnessError, Result};
