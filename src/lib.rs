pub mod activity;
pub mod analysis;
pub mod args;
pub mod config;
pub mod error;
pub mod loader;
pub mod source;
pub mod stats;
pub mod utils;

pub use activity::find_most_active;
pub use analysis::{analyze_cookie_log, print_most_active};
pub use args::Args;
pub use config::{LogConfig, LogLevel, RunConfig};
pub use error::{Error, FormatError};
pub use loader::{load, load_all, parse_log, LogEntry};
pub use source::{LogSource, TextSource};
pub use stats::FrequencyTable;
