use crate::adapters::deployment::ConfigDeploymentFilter;
use crate::adapters::http::ApiClient;
use crate::config::harness_config::HarnessConfig;
use crate::core::aggregator::ReportAggregator;
use crate::core::ConfigProvider;
use crate::utils::dates::DateFixtures;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// 一次測試執行共用的狀態，啟動時建立一次
pub struct TestRunContext {
    config: HarnessConfig,
    dates: DateFixtures,
    api: ApiClient,
    report: ReportAggregator<ConfigDeploymentFilter>,
}

impl TestRunContext {
    pub fn new(config: HarnessConfig) -> Result<Self> {
        config.validate()?;
        let dates = DateFixtures::for_today(config.expiry_weeks())?;
        Ok(Self::assemble(config, dates))
    }

    pub fn with_dates(config: HarnessConfig, dates: DateFixtures) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, dates))
    }

    fn assemble(config: HarnessConfig, dates: DateFixtures) -> Self {
        let filter = ConfigDeploymentFilter::from_config(&config);
        let report = ReportAggregator::from_config(&config, filter);
        let api = ApiClient::new(config.base_url());

        tracing::info!("Test run context ready for {}", config.base_url());
        Self {
            config,
            dates,
            api,
            report,
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn dates(&self) -> &DateFixtures {
        &self.dates
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub async fn server_components_details(&self) -> String {
        self.report.server_components_details().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    fn config_for(base_url: &str, root: &str) -> HarnessConfig {
        HarnessConfig::from_toml_str(&format!(
            r#"
[target]
base_url = "{}"

[resources]
root = "{}"

[deployment]
services_not_deployed = ["/resident/v1/actuator/health"]
"#,
            base_url, root
        ))
        .unwrap()
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = config_for("not-a-url", "./resources");
        assert!(TestRunContext::new(config).is_err());
    }

    #[test]
    fn test_huge_expiry_weeks_is_a_config_error() {
        let mut config = config_for("http://localhost:8080", "./resources");
        config.fixtures = Some(crate::config::harness_config::FixturesConfig {
            expiry_weeks: Some(100_000_000),
        });

        assert!(matches!(
            TestRunContext::new(config),
            Err(crate::utils::error::HarnessError::InvalidConfigValueError { field, .. })
                if field == "fixtures.expiry_weeks"
        ));
    }

    #[test]
    fn test_context_exposes_fixtures() {
        let config = config_for("http://localhost:8080", "./resources");
        let dates = DateFixtures::for_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), 2).unwrap();
        let context = TestRunContext::with_dates(config, dates).unwrap();

        assert_eq!(context.dates().today, "01/15/2024");
        assert_eq!(context.api().url("/v1/x"), "http://localhost:8080/v1/x");
        assert_eq!(context.config().resources.root, "./resources");
    }

    #[tokio::test]
    async fn test_report_honours_not_deployed_list() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_str().unwrap().replace('\\', "/");
        std::fs::create_dir_all(temp_dir.path().join("config")).unwrap();
        std::fs::write(
            temp_dir.path().join("config/healthCheckEndpoint.properties"),
            "resident-health=/resident/v1/actuator/health\nidrepo-health=/idrepo/actuator/health\n",
        )
        .unwrap();

        let server = MockServer::start();
        let resident = server.mock(|when, then| {
            when.method(GET).path("/resident/v1/actuator/info");
            then.status(200);
        });
        let idrepo = server.mock(|when, then| {
            when.method(GET).path("/idrepo/actuator/info");
            then.status(404);
        });

        let context = TestRunContext::new(config_for(&server.base_url(), &root)).unwrap();
        let report = context.server_components_details().await;

        resident.assert_hits(0);
        idrepo.assert_hits(1);
        assert_eq!(
            report,
            format!("\n{}- No Response", server.url("/idrepo/actuator/info"))
        );
    }
}
