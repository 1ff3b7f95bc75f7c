use std::path::PathBuf;

/// 判斷服務是否不在目前的部署拓撲內
pub trait DeploymentFilter: Send + Sync {
    fn is_excluded(&self, service: &str) -> bool;
}

impl<F: Fn(&str) -> bool + Send + Sync> DeploymentFilter for F {
    fn is_excluded(&self, service: &str) -> bool {
        self(service)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn health_check_file(&self) -> PathBuf;
    fn services_not_deployed(&self) -> &[String];
}
