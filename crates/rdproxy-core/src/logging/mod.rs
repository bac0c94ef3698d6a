use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging.
///
/// When `verbose` is false, only error-level events are emitted.
/// When `verbose` is true, info-level and above events are emitted.
/// `RUST_LOG` takes precedence over both when set.
pub fn init_logging(verbose: bool) {
    let directive = if verbose {
        "rdproxy=info,rdproxy_core=info"
    } else {
        "rdproxy=error,rdproxy_core=error"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
