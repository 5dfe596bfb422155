use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use tracing::info;
use url::Url;

use crate::error::{Error, FormatError, Result};

/// Anything a cookie log can be read from.
pub trait TextSource {
    /// Reads the whole source into memory.
    fn open_as_text(&self) -> Result<String>;

    /// Name used in log events and error messages.
    fn name(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    LocalFile(PathBuf),
    RemoteUrl(Url),
}

impl FromStr for LogSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty log source".to_string());
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            Url::parse(s)
                .map(LogSource::RemoteUrl)
                .map_err(|e| format!("invalid URL '{s}': {e}"))
        } else {
            Ok(LogSource::LocalFile(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSource::LocalFile(path) => write!(f, "{}", path.display()),
            LogSource::RemoteUrl(url) => write!(f, "{url}"),
        }
    }
}

impl TextSource for LogSource {
    fn open_as_text(&self) -> Result<String> {
        let start_time = Instant::now();
        let text = match self {
            LogSource::LocalFile(path) => {
                info!(action = "read", component = "local_source", file_path = ?path, "Reading log file");
                fs::read_to_string(path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?
            }
            LogSource::RemoteUrl(url) => fetch_remote(url)?,
        };

        info!(
            action = "complete",
            component = "log_source",
            source = %self,
            bytes = text.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Log source read"
        );
        Ok(text)
    }

    fn name(&self) -> String {
        self.to_string()
    }
}

fn fetch_remote(url: &Url) -> Result<String> {
    info!(action = "fetch", component = "remote_source", url = %url, "Fetching remote log file");

    let network_error = |source| Error::Network {
        url: url.to_string(),
        source,
    };

    let response = reqwest::blocking::get(url.as_str()).map_err(network_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FormatError::Fetch {
            url: url.to_string(),
            status: status.as_u16(),
        }
        .into());
    }

    response.text().map_err(network_error)
}
