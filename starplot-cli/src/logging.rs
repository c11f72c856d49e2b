//! Logging setup
//!
//! Logs always go to stderr. When no `--output` file is given, stdout
//! carries the JSON report and must stay parseable.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer};

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(layer(std::io::stderr))
        .init();
}

/// Compact fmt layer writing to `writer`
fn layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer().compact().with_target(false).with_writer(writer)
}
