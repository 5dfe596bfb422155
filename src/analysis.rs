use std::io::{self, Write};
use std::time::Instant;

use tracing::info;

use crate::error::Result;
use crate::{activity, loader, RunConfig};

pub fn analyze_cookie_log(config: &RunConfig) -> Result<Vec<String>> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "analysis",
        source_count = config.sources.len(),
        target_date = %config.target_date,
        "Starting cookie log analysis"
    );

    let entries = loader::load_all(&config.sources)?;
    let most_active = activity::find_most_active(&entries, &config.target_date);

    info!(
        action = "complete",
        component = "analysis",
        result_count = most_active.len(),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );
    Ok(most_active)
}

/// Writes one cookie per line.
pub fn print_most_active<W: Write>(out: &mut W, cookies: &[String]) -> io::Result<()> {
    for cookie in cookies {
        writeln!(out, "{cookie}")?;
    }
    out.flush()
}
