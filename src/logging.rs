#![cfg(feature = "std")]

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

const LOG_ENV: &str = "BATTLESHIP_LOG";

/// Writes records to stderr, leaving stdout to the program's own output.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "{:<5} [{}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

fn level_from_env() -> LevelFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger.
///
/// The level comes from `BATTLESHIP_LOG` (`off`, `error`, `warn`, `info`,
/// `debug`, `trace`) and defaults to `info`. Returns `false` when another
/// logger was installed first; the call is then a no-op.
pub fn init_logging() -> bool {
    match log::set_logger(&LOGGER) {
        Ok(()) => {
            log::set_max_level(level_from_env());
            true
        }
        Err(_) => false,
    }
}
