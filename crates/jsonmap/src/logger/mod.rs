use tracing_subscriber::{fmt, EnvFilter};

/// Install the tracing subscriber that receives mapper boundary warnings.
/// If `debug` is true, the base level is DEBUG; otherwise INFO. A `RUST_LOG`
/// environment filter takes precedence over the base level.
///
/// Installation is best-effort so a host application that already set up its
/// own subscriber keeps it.
pub fn init(debug: bool) {
    let fallback = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::SystemTime)
        .with_level(true)
        .with_target(true)
        .try_init()
        .ok();
}
