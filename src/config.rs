use std::path::PathBuf;

use clap::ValueEnum;
use tracing_subscriber::filter::LevelFilter;

use crate::args::Args;
use crate::source::LogSource;

/// Log levels accepted on the command line. `NOTSET` turns logging off.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    #[default]
    #[value(name = "NOTSET")]
    NotSet,
    #[value(name = "DEBUG")]
    Debug,
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    Error,
    #[value(name = "CRITICAL")]
    Critical,
}

impl LogLevel {
    pub fn is_enabled(self) -> bool {
        self != LogLevel::NotSet
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::NotSet => LevelFilter::OFF,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            // tracing has nothing above ERROR
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    /// Also append log events to this file.
    pub file: Option<PathBuf>,
}

/// Everything one run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub sources: Vec<LogSource>,
    pub target_date: String,
    pub logging: LogConfig,
}

impl From<&Args> for RunConfig {
    fn from(args: &Args) -> Self {
        let sources = match (&args.file_list, &args.file) {
            (Some(list), _) => list.clone(),
            (None, Some(path)) => vec![LogSource::LocalFile(path.clone())],
            (None, None) => Vec::new(),
        };

        Self {
            sources,
            target_date: args.date.clone(),
            logging: LogConfig {
                level: args.log_level,
                file: args.log_file.clone(),
            },
        }
    }
}
