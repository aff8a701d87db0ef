//! Tracing setup shared by the desktop shell and tests.

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a default filter directive.
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a global fmt subscriber. `RUST_LOG` takes precedence over the
/// verbosity. Calling this twice is harmless.
pub fn init_tracing(verbosity: u8) {
    let filter = verbosity_filter(verbosity);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(verbosity_filter(0), "warn");
        assert_eq!(verbosity_filter(1), "info");
        assert_eq!(verbosity_filter(2), "debug");
        assert_eq!(verbosity_filter(9), "trace");
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing(0);
        init_tracing(3);
    }
}
