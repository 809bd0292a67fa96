//! Logging of solver statistics as `PREFIX name=value` lines on standard output.

use std::fmt::Display;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug)]
struct StatisticOptions {
    log_statistics: bool,
    prefix: &'static str,
}

static STATISTIC_OPTIONS: OnceLock<StatisticOptions> = OnceLock::new();

/// Configure whether statistics are logged and with which prefix. Only the first call has an
/// effect; statistics are not logged until this is called.
pub fn configure(log_statistics: bool, prefix: &'static str) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| StatisticOptions {
        log_statistics,
        prefix,
    });
}

pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS
        .get()
        .is_some_and(|options| options.log_statistics)
}

/// Log the statistic `name` with `value` in the format `PREFIX name=value`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    if let Some(options) = STATISTIC_OPTIONS.get() {
        if options.log_statistics {
            println!("{} {name}={value}", options.prefix);
        }
    }
}
