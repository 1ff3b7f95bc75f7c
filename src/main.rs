use anyhow::Context;
use clap::Parser;
use testrig_report::utils::logger;
use testrig_report::{CliConfig, HarnessConfig, TestRunContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting testrig-report");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = HarnessConfig::from_file(&cli.config)
        .with_context(|| format!("loading harness config {}", cli.config))?;
    let context = TestRunContext::new(config).context("building test run context")?;

    let report = context.server_components_details().await;
    if report.is_empty() {
        tracing::warn!("No service build info collected");
    }

    println!("Server components:{}", report);
    Ok(())
}
