mod job;
mod log_setup;
mod manifest;

use std::fs::read_to_string;

use anyhow::{Context, Result};
use strpack_chrono::ChronoFormatter;
use strpack_proto::config::PackJob;

const DEFAULT_JOB_FILE: &str = "strpack.json";

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_JOB_FILE.to_string());

    // Read job file.
    let job: PackJob = serde_json::from_str(
        &read_to_string(&path).with_context(|| format!("Failed to read {}", path))?,
    )
    .with_context(|| format!("Failed to parse {}", path))?;

    log_setup::configure_logging(&job.log_level)?;
    log::debug!("Loaded job from {}: {} strings", path, job.strings.len());

    let formatter = ChronoFormatter::new(job.date_buffer);
    job::run(&job, &formatter)?;

    Ok(())
}
