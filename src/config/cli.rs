use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "testrig-report")]
#[command(about = "Collect build info from every deployed service into one report")]
pub struct CliConfig {
    #[arg(long, default_value = "harness.toml")]
    pub config: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
