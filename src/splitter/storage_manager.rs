use crate::error::{Result, SplitError};
use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// `<base>.<index>`, zero-based and unpadded.
pub fn part_file_name(base: &OsStr, index: u64) -> OsString {
    let mut name = base.to_os_string();
    name.push(format!(".{index}"));
    name
}

/// An open output part. Dropping it closes the file.
pub struct PartWriter {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl PartWriter {
    /// Create (or truncate) the part file `file_name` inside `output_dir`.
    pub fn create(output_dir: &Path, file_name: &OsStr) -> Result<Self> {
        let path = output_dir.join(file_name);
        let file = File::create(&path)
            .map_err(|e| SplitError::io(format!("failed to create {}", path.display()), e))?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Copy everything `data` yields into the part, flush, and close it.
    pub fn write_all_from<R: Read>(mut self, data: &mut R) -> Result<(PathBuf, u64)> {
        let written = io::copy(data, &mut self.writer)
            .map_err(|e| SplitError::io(format!("failed to write {}", self.path.display()), e))?;
        self.writer
            .flush()
            .map_err(|e| SplitError::io(format!("failed to flush {}", self.path.display()), e))?;
        Ok((self.path, written))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_part_file_name() {
        assert_eq!(part_file_name(OsStr::new("data.bin"), 0), "data.bin.0");
        assert_eq!(part_file_name(OsStr::new("video"), 12), "video.12");
    }

    #[test]
    fn test_write_part() {
        let dir = tempfile::tempdir().unwrap();
        let part = PartWriter::create(dir.path(), OsStr::new("a.0")).unwrap();

        let (path, written) = part.write_all_from(&mut &b"chunk data"[..]).unwrap();
        assert_eq!(path, dir.path().join("a.0"));
        assert_eq!(written, 10);
        assert_eq!(fs::read(path).unwrap(), b"chunk data");
    }

    #[test]
    fn test_write_part_truncates_existing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.0"), b"a much longer previous part").unwrap();

        let part = PartWriter::create(dir.path(), OsStr::new("a.0")).unwrap();
        part.write_all_from(&mut &b"new"[..]).unwrap();
        assert_eq!(fs::read(dir.path().join("a.0")).unwrap(), b"new");
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = PartWriter::create(&dir.path().join("nope"), OsStr::new("a.0"));
        assert!(matches!(result, Err(SplitError::Io { .. })));
    }
}
