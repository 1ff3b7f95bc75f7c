use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    let default_directive = if verbose {
        "testrig_report=debug,info"
    } else {
        "testrig_report=info"
    };

    tracing_subscriber::registry()
        .with(env_filter(default_directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// 給 CI 收集用的 JSON 格式日誌
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter("testrig_report=info"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .json()
                .with_current_span(false)
                .flatten_event(true),
        )
        .init();
}

/// RUST_LOG 優先，沒設定時用預設值
fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_directive() {
        std::env::remove_var("RUST_LOG");
        assert_eq!(env_filter("testrig_report=info").to_string(), "testrig_report=info");
    }
}
