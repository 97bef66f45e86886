use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,duel_backend=info,actix_web=info,actix_server=warn";

/// Installs the process-wide subscriber.
///
/// JSON lines by default; `DUEL_LOG_FORMAT=pretty` switches to human-readable
/// output for local runs. `RUST_LOG` overrides the filter.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let pretty = std::env::var("DUEL_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("pretty"));

    let registry = tracing_subscriber::registry().with(env_filter);
    if pretty {
        registry
            .with(fmt::layer().with_target(true).compact())
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_target(false)
                    .with_current_span(false)
                    .flatten_event(true),
            )
            .init();
    }
}
