//! Logging setup for the binary
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

/// Initialize the logger.
///
/// `level` (e.g. "info", "debug") takes precedence over `RUST_LOG`,
/// both fall back to `info`. Calling it twice is a no-op.
pub fn init_logging(level: Option<&str>) {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Info).parse_default_env();
    if let Some(level) = level.and_then(|l| l.parse::<LevelFilter>().ok()) {
        builder.filter_level(level);
    }
    let result = builder
        .target(Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{:5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
    if result.is_ok() {
        log::debug!("Logger initialized (max level: {})", log::max_level());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging(Some("debug"));
        assert_eq!(log::max_level(), LevelFilter::Debug);
        init_logging(Some("not a level"));
        assert_eq!(log::max_level(), LevelFilter::Debug);
        log::info!("still logging");
    }
}
