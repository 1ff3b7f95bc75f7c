use crate::core::fetcher::{info_url, InfoFetcher};
use crate::core::registry::load_registry;
use crate::domain::ports::{ConfigProvider, DeploymentFilter};
use crate::utils::error::HarnessError;
use std::path::PathBuf;
use tokio::sync::OnceCell;

/// 彙整所有服務的 build info 成一份報告
///
/// 報告只計算一次。結果是否為空不影響快取，之後的呼叫都直接回傳同一份內容，
/// 不會再讀設定檔或呼叫任何服務。
pub struct ReportAggregator<F: DeploymentFilter> {
    base_url: String,
    health_check_file: PathBuf,
    filter: F,
    fetcher: InfoFetcher,
    report: OnceCell<String>,
}

impl<F: DeploymentFilter> ReportAggregator<F> {
    pub fn new(
        base_url: impl Into<String>,
        health_check_file: impl Into<PathBuf>,
        filter: F,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            health_check_file: health_check_file.into(),
            filter,
            fetcher: InfoFetcher::new(),
            report: OnceCell::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C, filter: F) -> Self {
        Self::new(config.base_url(), config.health_check_file(), filter)
    }

    pub fn with_fetcher(mut self, fetcher: InfoFetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub async fn server_components_details(&self) -> String {
        self.report
            .get_or_init(|| self.build_report())
            .await
            .clone()
    }

    pub fn is_cached(&self) -> bool {
        self.report.initialized()
    }

    async fn build_report(&self) -> String {
        let entries = load_registry(&self.health_check_file, &self.filter);
        tracing::info!(
            "Collecting build info for {} services from {}",
            entries.len(),
            self.health_check_file.display()
        );

        let mut report = String::new();
        for entry in &entries {
            let url = info_url(&self.base_url, &entry.info_path);
            let line = self.report_line(&url).await;
            tracing::debug!("{}: {}", entry.name, line);
            report.push('\n');
            report.push_str(&line);
        }

        report
    }

    /// 單一服務的錯誤只影響它自己那一行
    async fn report_line(&self, url: &str) -> String {
        match self.fetcher.fetch(url).await {
            Ok(outcome) => outcome.to_string(),
            Err(HarnessError::MalformedBuildInfo { url, reason }) => {
                tracing::warn!("Malformed build info from {}: {}", url, reason);
                format!("{}- Invalid Build Info: {}", url, reason)
            }
            Err(e) => {
                tracing::warn!("Build info request to {} failed: {}", url, e);
                format!("{}- No Response", url)
            }
        }
    }
}
