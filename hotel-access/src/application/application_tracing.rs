use super::ApplicationEnv;
use tracing::Level;
use tracing_subscriber::{
    filter::{EnvFilter, Targets},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer,
};

const DEFAULT_CONSOLE_DIRECTIVES: &str = "hotel_access=debug,tower_http=debug,mongodb=info,warn";

///
/// Logs are written to console and to a file rotated every hour.
///
/// Console is filtered with RUST_LOG, falling back to debug logs of this service
/// and its HTTP layer. File keeps info logs of this service and its HTTP layer.
///
pub fn setup_tracing(env: &ApplicationEnv) -> anyhow::Result<()> {
    let console_directives = console_directives(std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let console_filter = EnvFilter::try_new(console_directives)?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(console_filter);

    let file_filter = Targets::new()
        .with_target("hotel_access", Level::INFO)
        .with_target("tower_http", Level::INFO);

    let file_appender = tracing_appender::rolling::hourly(&env.log_directory, &env.log_filename);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    Ok(())
}

fn console_directives(rust_log: Option<String>) -> String {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CONSOLE_DIRECTIVES.to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn console_directives_default() {
        let directives = console_directives(None);

        assert_eq!(directives, DEFAULT_CONSOLE_DIRECTIVES);
        assert!(EnvFilter::try_new(directives).is_ok());
    }

    #[test]
    fn console_directives_blank_rust_log() {
        let directives = console_directives(Some("  ".to_string()));

        assert_eq!(directives, DEFAULT_CONSOLE_DIRECTIVES);
    }

    #[test]
    fn console_directives_from_rust_log() {
        let directives = console_directives(Some("hotel_access=trace".to_string()));

        assert_eq!(directives, "hotel_access=trace");
    }
}
