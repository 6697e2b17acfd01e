//! Logging setup: `log` facade with an `env_logger` backend.

use log::LevelFilter;

/// Map `-v` occurrences to a level. `RUST_LOG` still refines per module.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn configure_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level_for(verbosity));
    // A second init (tests) is harmless
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
