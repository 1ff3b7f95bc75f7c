use crate::domain::ports::{ConfigProvider, DeploymentFilter};
use std::collections::HashSet;

/// 依 `deployment.services_not_deployed` 排除服務，需完全相符
#[derive(Debug, Clone, Default)]
pub struct ConfigDeploymentFilter {
    not_deployed: HashSet<String>,
}

impl ConfigDeploymentFilter {
    pub fn new<I, S>(services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            not_deployed: services
                .into_iter()
                .map(Into::into)
                .map(|s: String| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.services_not_deployed().iter().cloned())
    }
}

impl DeploymentFilter for ConfigDeploymentFilter {
    fn is_excluded(&self, service: &str) -> bool {
        self.not_deployed.contains(service.trim())
    }
}
