use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Logs go to stderr since stdout carries the feedback JSON. `RUST_LOG`
/// wins over the configured level.
pub fn init(default_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("Failed to install tracing subscriber: {e}");
    }
}
