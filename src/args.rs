use chrono::NaiveDate;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::config::LogLevel;
use crate::source::LogSource;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "most-active-cookie",
    about = "Find the most active cookie in a log file for a specific day",
    version,
    long_about = None
)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "file_list"])))]
pub struct Args {
    /// Path to the cookie log file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Comma-separated list of cookie log files or http(s) URLs
    #[arg(long = "file_list", value_delimiter = ',')]
    pub file_list: Option<Vec<LogSource>>,

    /// Date (YYYY-MM-DD) to find the most active cookie
    #[arg(short, long, value_parser = parse_date)]
    pub date: String,

    /// Logging level. By default, logging is disabled
    #[arg(long, value_enum, default_value = "NOTSET")]
    pub log_level: LogLevel,

    /// Optional file to append log output to
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_date(s: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|_| s.to_string())
        .map_err(|e| format!("'{s}' is not a YYYY-MM-DD date: {e}"))
}
