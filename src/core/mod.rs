pub mod aggregator;
pub mod context;
pub mod fetcher;
pub mod registry;

pub use crate::domain::model::{BuildInfo, InfoOutcome, ServiceEntry};
pub use crate::domain::ports::{ConfigProvider, DeploymentFilter};
pub use crate::utils::error::Result;
