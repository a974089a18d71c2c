use tracing_subscriber::{EnvFilter, fmt};

// `RUST_LOG` wins when no `-v` flag is given; each `-v` raises the level.
pub fn directive_for(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

pub fn init_logging(verbosity: u8) {
    let filter = match directive_for(verbosity) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // a subscriber may already be installed (tests)
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}
