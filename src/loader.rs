use std::time::Instant;

use tracing::{debug, info};

use crate::error::{FormatError, Result};
use crate::source::TextSource;

const HEADERS: [&str; 2] = ["cookie", "timestamp"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub cookie: String,
    pub timestamp: String,
}

impl LogEntry {
    pub fn new(cookie: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            cookie: cookie.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Parses the text of one cookie log. `source_name` only labels errors.
pub fn parse_log(text: &str, source_name: &str) -> Result<Vec<LogEntry>, FormatError> {
    let mut lines = text.lines().map(str::trim).enumerate();

    let header = match lines.next() {
        Some((_, header)) if !header.is_empty() => header,
        _ => {
            return Err(FormatError::MissingHeader {
                source_name: source_name.to_string(),
            })
        }
    };
    validate_header(header, source_name)?;

    let mut entries = Vec::new();
    for (index, line) in lines {
        if line.is_empty() {
            continue;
        }
        match line.split(',').collect::<Vec<_>>().as_slice() {
            [cookie, timestamp] if !cookie.is_empty() && !timestamp.is_empty() => {
                entries.push(LogEntry::new(*cookie, *timestamp));
            }
            _ => {
                return Err(FormatError::MalformedRow {
                    source_name: source_name.to_string(),
                    line: index + 1,
                    row: line.to_string(),
                })
            }
        }
    }

    if entries.is_empty() {
        return Err(FormatError::NoEntries {
            source_name: source_name.to_string(),
        });
    }

    debug!(action = "parsed", component = "log_loader", source = source_name, entry_count = entries.len(), "Parsed cookie log");
    Ok(entries)
}

fn validate_header(header: &str, source_name: &str) -> Result<(), FormatError> {
    let columns: Vec<&str> = header.split(',').collect();
    if columns.len() != HEADERS.len() {
        return Err(FormatError::HeaderColumnCount {
            source_name: source_name.to_string(),
            found: columns.len(),
        });
    }

    for (expected, found) in HEADERS.iter().zip(&columns) {
        if expected != found {
            return Err(FormatError::HeaderColumn {
                source_name: source_name.to_string(),
                column: *expected,
            });
        }
    }
    Ok(())
}

/// Reads and parses a single source.
pub fn load<S: TextSource + ?Sized>(source: &S) -> Result<Vec<LogEntry>> {
    let text = source.open_as_text()?;
    Ok(parse_log(&text, &source.name())?)
}

/// Loads every source in order and concatenates their entries.
/// An empty `sources` is a format error, like a source with no rows.
pub fn load_all<S: TextSource>(sources: &[S]) -> Result<Vec<LogEntry>> {
    if sources.is_empty() {
        return Err(FormatError::NoSources.into());
    }

    let start_time = Instant::now();
    info!(
        action = "start",
        component = "log_loader",
        source_count = sources.len(),
        "Loading cookie logs"
    );

    let mut entries = Vec::new();
    for source in sources {
        let loaded = load(source)?;
        info!(action = "loaded", component = "log_loader", source = %source.name(), entry_count = loaded.len(), "Read cookies from source");
        entries.extend(loaded);
    }

    info!(
        action = "complete",
        component = "log_loader",
        entry_count = entries.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Cookie logs loaded"
    );
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct InMemory(&'static str);

    impl TextSource for InMemory {
        fn open_as_text(&self) -> Result<String> {
            Ok(self.0.to_string())
        }

        fn name(&self) -> String {
            "memory".to_string()
        }
    }

    #[test]
    fn reads_rows_in_file_order() {
        let text = "cookie,timestamp\n\
                    AtY0laUfhglK3lC7,2018-12-09T14:19:00+00:00\n\
                    SAZuXPGUrfbcn5UA,2018-12-09T10:13:00+00:00\n";
        let entries = parse_log(text, "test").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[1],
            LogEntry::new("SAZuXPGUrfbcn5UA", "2018-12-09T10:13:00+00:00")
        );
    }

    #[test]
    fn skips_blank_lines_and_carriage_returns() {
        let text = "cookie,timestamp\r\n\r\nAtY0laUfhglK3lC7,2018-12-09T14:19:00+00:00\r\n   \n";
        let entries = parse_log(text, "test").unwrap();
        assert_eq!(
            entries,
            vec![LogEntry::new("AtY0laUfhglK3lC7", "2018-12-09T14:19:00+00:00")]
        );
    }

    #[test]
    fn rejects_wrong_header_column_count() {
        let err = parse_log("cookie\nabc,2018-12-09", "test").unwrap_err();
        assert!(matches!(err, FormatError::HeaderColumnCount { found: 1, .. }));
        assert!(err.to_string().contains("cookie,timestamp"));

        let err = parse_log("cookie,timestamp,extra\nabc,2018-12-09", "test").unwrap_err();
        assert!(matches!(err, FormatError::HeaderColumnCount { found: 3, .. }));
    }

    #[test]
    fn rejects_misnamed_header_column() {
        let err = parse_log("cookie,time\nabc,2018-12-09", "test").unwrap_err();
        assert!(matches!(
            err,
            FormatError::HeaderColumn {
                column: "timestamp",
                ..
            }
        ));

        let err = parse_log("Cookie,timestamp\nabc,2018-12-09", "test").unwrap_err();
        assert!(matches!(err, FormatError::HeaderColumn { column: "cookie", .. }));
    }

    #[test]
    fn rejects_header_only_and_empty_sources() {
        let err = parse_log("cookie,timestamp\n\n", "test").unwrap_err();
        assert!(matches!(err, FormatError::NoEntries { .. }));
        assert!(err.to_string().contains("no entries found"));

        let err = parse_log("", "test").unwrap_err();
        assert!(matches!(err, FormatError::MissingHeader { .. }));
    }

    #[test]
    fn rejects_malformed_rows_with_line_number() {
        let text = "cookie,timestamp\nAtY0laUfhglK3lC7,2018-12-09T14:19:00+00:00\nbroken-row\n";
        let err = parse_log(text, "test").unwrap_err();
        assert!(matches!(err, FormatError::MalformedRow { line: 3, .. }));

        let text = "cookie,timestamp\na,b,c\n";
        assert!(matches!(
            parse_log(text, "test").unwrap_err(),
            FormatError::MalformedRow { line: 2, .. }
        ));

        let text = "cookie,timestamp\n,2018-12-09T14:19:00+00:00\n";
        assert!(matches!(
            parse_log(text, "test").unwrap_err(),
            FormatError::MalformedRow { line: 2, .. }
        ));
    }

    #[test]
    fn load_all_concatenates_in_order() {
        let sources = [
            InMemory("cookie,timestamp\nfirst,2018-12-09T01:00:00+00:00\n"),
            InMemory("cookie,timestamp\nsecond,2018-12-09T02:00:00+00:00\n"),
        ];
        let entries = load_all(&sources).unwrap();
        let cookies: Vec<_> = entries.iter().map(|e| e.cookie.as_str()).collect();
        assert_eq!(cookies, ["first", "second"]);
    }

    #[test]
    fn load_all_rejects_empty_source_list() {
        let sources: [InMemory; 0] = [];
        let err = load_all(&sources).unwrap_err();
        assert!(matches!(err, Error::Format(FormatError::NoSources)));
    }

    #[test]
    fn load_all_fails_on_any_bad_source() {
        let sources = [
            InMemory("cookie,timestamp\nfirst,2018-12-09T01:00:00+00:00\n"),
            InMemory("id,timestamp\nsecond,2018-12-09T02:00:00+00:00\n"),
        ];
        let err = load_all(&sources).unwrap_err();
        assert!(err.is_format());
        assert!(matches!(err, Error::Format(FormatError::HeaderColumn { .. })));
    }
}
