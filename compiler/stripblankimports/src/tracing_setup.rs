use std::io::IsTerminal;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize logging to stderr.
///
/// `RUST_LOG` wins when set. Otherwise `verbose` selects `info`, and the
/// default is `error`. Safe to call multiple times.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let fallback = if verbose { "info" } else { "error" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    });
}
