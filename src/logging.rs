//! Logging setup for binaries embedding `geoticks`.
//!
//! The library itself only emits records through the `log` facade. Hosts
//! either call [`init_logging`] or install their own logger.

/// Installs `env_logger` when the `debug` feature is enabled, honouring
/// `RUST_LOG` and defaulting to `info`.
///
/// Returns `false` when the feature is disabled or a logger is already set.
#[must_use]
pub fn init_logging() -> bool {
    #[cfg(feature = "debug")]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .format_target(false)
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "debug"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_refused() {
        let _ = init_logging();
        assert!(!init_logging());
    }
}
