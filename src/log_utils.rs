use std::fmt;

use clap::{builder::PossibleValue, ValueEnum};

const LEVEL_STR: [&str; 6] = ["error", "warn", "info", "debug", "trace", "none"];

/// LogLevel
///
/// Minimum level of messages written to stderr. `None` switches logging off
/// so that only the header report on stdout remains.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error = 0,
    Warn,
    Info,
    Debug,
    Trace,
    None,
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
            Self::None,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(LEVEL_STR[self.idx()]))
    }
}

impl LogLevel {
    fn idx(&self) -> usize {
        *self as usize
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Verbosity as understood by stderrlog (0 = errors only)
    pub fn verbosity(&self) -> usize {
        if self.is_none() {
            0
        } else {
            self.idx()
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", LEVEL_STR[self.idx()])
    }
}

/// Initialize logging at the requested level
pub fn init_log(level: LogLevel) -> anyhow::Result<()> {
    stderrlog::new()
        .quiet(level.is_none())
        .verbosity(level.verbosity())
        .init()
        .map_err(|e| anyhow!("Could not initialize logging: {}", e))
}
