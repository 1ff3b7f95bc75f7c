use crate::utils::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// 組合資源檔路徑: `{root}/{folder}/{file}`
pub fn resource_file_path<P: AsRef<Path>>(root: P, folder: &str, file_name: &str) -> PathBuf {
    root.as_ref().join(folder).join(file_name)
}

/// Read handle that is released on every exit path when dropped.
///
/// Release is best-effort: a failure while closing the underlying file is
/// ignored and never reaches the caller.
pub struct ScopedReader {
    inner: BufReader<File>,
    path: PathBuf,
}

impl ScopedReader {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Read for ScopedReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for ScopedReader {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

impl Drop for ScopedReader {
    fn drop(&mut self) {
        // File 的 close 錯誤由 std 吞掉
        tracing::trace!("Releasing reader for {}", self.path.display());
    }
}

pub fn open_scoped<P: AsRef<Path>>(path: P) -> Result<ScopedReader> {
    let path = path.as_ref().to_path_buf();
    let file = File::open(&path)?;
    Ok(ScopedReader {
        inner: BufReader::new(file),
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resource_file_path() {
        let path = resource_file_path("/opt/resources", "config", "healthCheckEndpoint.properties");
        assert_eq!(
            path,
            PathBuf::from("/opt/resources/config/healthCheckEndpoint.properties")
        );
    }

    #[test]
    fn test_open_scoped_reads_lines() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "first").unwrap();
        writeln!(temp_file, "second").unwrap();

        let reader = open_scoped(temp_file.path()).unwrap();
        assert_eq!(reader.path(), temp_file.path());
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_open_scoped_missing_file() {
        let result = open_scoped("/definitely/not/here/healthCheckEndpoint.properties");
        assert!(matches!(
            result,
            Err(crate::utils::error::HarnessError::IoError(_))
        ));
    }
}
