//! Splits one input file into fixed-size numbered parts.
//!
//! Parts are named `<input file name>.<index>` and written one at a time, in
//! index order, into the output directory. Each part holds exactly the chunk
//! size except the last, which holds whatever remains.
//!
//! Re-running into the same directory overwrites parts with the same name
//! but leaves higher-numbered parts from an earlier, larger run in place.

mod chunker;
mod file_operations;
mod storage_manager;

use crate::chunk_size::{parse_chunk_size, ByteCount};
use crate::error::{Result, SplitError};
use crate::progress::{LogPolicy, ProgressEvent, ProgressSink};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

pub use chunker::{part_count, plan_parts, PartSpan};
pub use storage_manager::part_file_name;

use storage_manager::PartWriter;

/// A validated request to split one file.
#[derive(Debug, Clone)]
pub struct SplitJob {
    input_path: PathBuf,
    output_dir: PathBuf,
    base_name: OsString,
    chunk_size: ByteCount,
    policy: LogPolicy,
}

impl SplitJob {
    /// Validate a split request without touching the filesystem beyond
    /// inspecting the output path.
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        chunk_spec: &str,
        quiet: bool,
        verbose: bool,
    ) -> Result<Self> {
        let input_path = input_path.into();
        let output_dir = output_dir.into();

        if output_dir.exists() && !output_dir.is_dir() {
            return Err(SplitError::InvalidOutputPath(output_dir));
        }

        let chunk_size = parse_chunk_size(chunk_spec)?;
        let policy = LogPolicy::new(quiet, verbose)?;

        let base_name = input_path
            .file_name()
            .map(|name| name.to_os_string())
            .ok_or_else(|| SplitError::InvalidInputPath(input_path.clone()))?;

        Ok(Self {
            input_path,
            output_dir,
            base_name,
            chunk_size,
            policy,
        })
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn chunk_size(&self) -> ByteCount {
        self.chunk_size
    }

    pub fn policy(&self) -> LogPolicy {
        self.policy
    }
}

/// One part written by [`split`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartMetadata {
    pub index: u64,
    pub path: PathBuf,
    pub size: u64,
}

/// Outcome of a completed split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    pub parts: Vec<PartMetadata>,
}

impl SplitReport {
    pub fn total_bytes(&self) -> u64 {
        self.parts.iter().map(|p| p.size).sum()
    }
}

/// Run a split job, reporting each step to `sink`.
///
/// An I/O failure stops the run immediately; parts already written are
/// left in place.
pub fn split(job: &SplitJob, sink: &mut dyn ProgressSink) -> Result<SplitReport> {
    let (mut input, file_size) = file_operations::open_input(&job.input_path)?;

    sink.emit(&ProgressEvent::CreatingOutputDir {
        path: job.output_dir.clone(),
    });
    fs::create_dir_all(&job.output_dir).map_err(|e| {
        SplitError::io(
            format!("failed to create directory {}", job.output_dir.display()),
            e,
        )
    })?;
    sink.emit(&ProgressEvent::OutputDirCreated);
    sink.emit(&ProgressEvent::ResolvingChunkSize);
    sink.emit(&ProgressEvent::ChunkSizeResolved {
        bytes: job.chunk_size.get(),
    });

    sink.emit(&ProgressEvent::CountingParts);
    let count = part_count(file_size, job.chunk_size);
    sink.emit(&ProgressEvent::PartsCounted { count });

    sink.emit(&ProgressEvent::GeneratingParts);
    let mut report = SplitReport::default();
    for span in plan_parts(file_size, job.chunk_size) {
        let mut data = file_operations::span_reader(&mut input, &span)?;
        sink.emit(&ProgressEvent::Seeked {
            index: span.index,
            offset: span.offset,
        });

        let file_name = part_file_name(&job.base_name, span.index);
        let part = PartWriter::create(&job.output_dir, &file_name)?;
        sink.emit(&ProgressEvent::OpenedPart {
            index: span.index,
            file_name: file_name.to_string_lossy().into_owned(),
        });

        let (path, size) = part.write_all_from(&mut data)?;
        sink.emit(&ProgressEvent::WrotePart {
            index: span.index,
            bytes: size,
        });

        report.parts.push(PartMetadata {
            index: span.index,
            path,
            size,
        });
    }
    sink.emit(&ProgressEvent::Finished { parts: count });

    Ok(report)
}
