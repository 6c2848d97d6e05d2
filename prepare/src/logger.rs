use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// пишет записи лога в stderr
pub struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger
{
    fn enabled(&self, metadata: &Metadata) -> bool
    {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record)
    {
        if !self.enabled(record.metadata()) {
            return;
        }

        let _ = writeln!(
            std::io::stderr().lock(),
            "[{:<5} {}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self)
    {
        let _ = std::io::stderr().flush();
    }
}

/// установить логгер; повторная установка только меняет уровень
pub fn init(level: LevelFilter)
{
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("logger is already installed");
    }

    log::set_max_level(level);
}
