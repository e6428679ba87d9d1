use super::chunker::PartSpan;
use crate::error::{Result, SplitError};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Take};
use std::path::Path;

/// Open the file to be split and report its size in bytes.
pub fn open_input(path: &Path) -> Result<(File, u64)> {
    let file = File::open(path)
        .map_err(|e| SplitError::io(format!("failed to open {}", path.display()), e))?;
    let metadata = file
        .metadata()
        .map_err(|e| SplitError::io(format!("failed to stat {}", path.display()), e))?;

    if metadata.is_dir() {
        return Err(SplitError::InputIsDirectory(path.to_path_buf()));
    }

    Ok((file, metadata.len()))
}

/// Position the input at the start of `span` and return a reader that yields
/// at most `span.size` bytes from there.
pub fn span_reader<'a>(input: &'a mut File, span: &PartSpan) -> Result<Take<&'a mut File>> {
    input
        .seek(SeekFrom::Start(span.offset))
        .map_err(|e| SplitError::io(format!("failed to seek to byte {}", span.offset), e))?;
    Ok(input.take(span.size))
}
