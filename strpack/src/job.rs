use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use strpack_proto::config::PackJob;
use strpack_proto::data_types::PackedStrings;
use strpack_proto::operations::pack_strings;
use strpack_proto::time::formatter::DateFormatter;

use crate::manifest::Manifest;

/// Pack the job's strings, refusing to continue on any error.
pub fn pack(job: &PackJob) -> Result<PackedStrings> {
    let packed = pack_strings(&job.strings, job.padding.0)
        .with_context(|| format!("Failed to pack strings for {}", job.output.display()))?;
    log::info!(
        "Packed {} strings, slot width {}, {} bytes",
        packed.len(),
        packed.slot_width(),
        packed.as_bytes().len()
    );
    Ok(packed)
}

pub fn write_payload(packed: &PackedStrings, out: &mut impl Write) -> Result<()> {
    out.write_all(packed.as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn write_manifest(
    packed: &PackedStrings,
    created: String,
    out: &mut impl Write,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &Manifest::new(packed, created))?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Execute a job end to end: pack, then write the payload and the optional manifest.
///
/// Nothing is written when packing or date formatting fails. When writing fails, the
/// files this run created are removed again.
pub fn run(job: &PackJob, formatter: &impl DateFormatter) -> Result<()> {
    let packed = pack(job)?;

    let created = match job.manifest {
        Some(_) => Some(
            formatter
                .format_now(&job.date_format)
                .with_context(|| format!("Failed to format date with {:?}", job.date_format))?,
        ),
        None => None,
    };

    let mut created_files = Vec::new();
    if let Err(err) = write_outputs(job, &packed, created, &mut created_files) {
        for path in &created_files {
            if let Err(e) = fs::remove_file(path) {
                log::warn!("Failed to remove {}: {}", path.display(), e);
            }
        }
        return Err(err);
    }

    Ok(())
}

/// Create every output file before writing any of them.
fn write_outputs(
    job: &PackJob,
    packed: &PackedStrings,
    created: Option<String>,
    created_files: &mut Vec<PathBuf>,
) -> Result<()> {
    let payload = File::create(&job.output)
        .with_context(|| format!("Failed to create {}", job.output.display()))?;
    created_files.push(job.output.clone());

    let manifest = match (&job.manifest, created) {
        (Some(path), Some(created)) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            created_files.push(path.clone());
            Some((path, file, created))
        }
        _ => None,
    };

    write_payload(packed, &mut BufWriter::new(payload))?;
    log::info!("Wrote payload to {}", job.output.display());

    if let Some((path, file, created)) = manifest {
        write_manifest(packed, created, &mut BufWriter::new(file))?;
        log::info!("Wrote manifest to {}", path.display());
    }

    Ok(())
}
