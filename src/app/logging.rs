use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize stderr logging.
///
/// `RUST_LOG` takes precedence; otherwise `verbosity` selects warn, info or debug.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ezcat={level}")));

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    // A second initialization (e.g. from an embedding binary) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(filter).with(console_layer).try_init();
}
