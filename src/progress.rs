//! Progress reporting for a split run.
//!
//! The splitter never prints. It hands every step to a [`ProgressSink`], and
//! the sink decides what, if anything, reaches the console.

use crate::error::{Result, SplitError};
use std::fmt;
use std::path::PathBuf;

/// Which progress messages a run should show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogPolicy {
    quiet: bool,
    verbose: bool,
}

impl LogPolicy {
    pub fn new(quiet: bool, verbose: bool) -> Result<Self> {
        if quiet && verbose {
            return Err(SplitError::ConflictingFlags);
        }
        Ok(Self { quiet, verbose })
    }

    /// Top-level step messages.
    pub fn shows_progress(&self) -> bool {
        !self.quiet
    }

    /// Fine-grained per-step messages.
    pub fn shows_detail(&self) -> bool {
        self.verbose
    }

    /// Filter directive used when `RUST_LOG` is not set.
    pub fn default_directive(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    pub fn allows(&self, event: &ProgressEvent) -> bool {
        if event.is_detail() {
            self.shows_detail()
        } else {
            self.shows_progress()
        }
    }
}

/// One step of a split run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    CreatingOutputDir { path: PathBuf },
    OutputDirCreated,
    ResolvingChunkSize,
    ChunkSizeResolved { bytes: u64 },
    CountingParts,
    PartsCounted { count: u64 },
    GeneratingParts,
    Seeked { index: u64, offset: u64 },
    OpenedPart { index: u64, file_name: String },
    WrotePart { index: u64, bytes: u64 },
    Finished { parts: u64 },
}

impl ProgressEvent {
    pub fn is_detail(&self) -> bool {
        !matches!(
            self,
            ProgressEvent::CreatingOutputDir { .. }
                | ProgressEvent::ResolvingChunkSize
                | ProgressEvent::CountingParts
                | ProgressEvent::GeneratingParts
        )
    }
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::CreatingOutputDir { path } => {
                write!(f, "Creating output directory {}...", path.display())
            }
            ProgressEvent::OutputDirCreated => write!(f, "Output directory ready."),
            ProgressEvent::ResolvingChunkSize => write!(f, "Calculating chunk size..."),
            ProgressEvent::ChunkSizeResolved { bytes } => {
                write!(f, "Chunk size: {bytes} byte(s).")
            }
            ProgressEvent::CountingParts => write!(f, "Calculating number of output files..."),
            ProgressEvent::PartsCounted { count } => write!(f, "Number of output files: {count}."),
            ProgressEvent::GeneratingParts => write!(f, "Generating output files..."),
            ProgressEvent::Seeked { index, offset } => {
                write!(f, "Part {index}: seeked to {offset} byte(s).")
            }
            ProgressEvent::OpenedPart { index, file_name } => {
                write!(f, "Part {index}: opened {file_name}.")
            }
            ProgressEvent::WrotePart { index, bytes } => {
                write!(f, "Part {index}: wrote {bytes} byte(s).")
            }
            ProgressEvent::Finished { parts } => {
                write!(f, "Generating output files finished ({parts} part(s)).")
            }
        }
    }
}

/// Receives progress events from the splitter.
pub trait ProgressSink {
    fn emit(&mut self, event: &ProgressEvent);
}

/// Collects every event, regardless of policy.
impl ProgressSink for Vec<ProgressEvent> {
    fn emit(&mut self, event: &ProgressEvent) {
        self.push(event.clone());
    }
}

/// Logs events through `tracing`, gated by a [`LogPolicy`].
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    policy: LogPolicy,
}

impl ConsoleSink {
    pub fn new(policy: LogPolicy) -> Self {
        Self { policy }
    }
}

impl ProgressSink for ConsoleSink {
    fn emit(&mut self, event: &ProgressEvent) {
        if !self.policy.allows(event) {
            return;
        }
        if event.is_detail() {
            tracing::debug!("{event}");
        } else {
            tracing::info!("{event}");
        }
    }
}
