//! Read access to unit prefix header files.

use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use std::collections::BTreeMap;
use std::io;

/// Read-only access to raw prefix header files.
///
/// Files are read whole and as raw bytes; no encoding is assumed.
/// Implementations decide how relative paths are resolved.
pub trait SourceReader {
    fn read(&self, path: &Utf8Path) -> io::Result<Vec<u8>>;
}

impl<T: SourceReader + ?Sized> SourceReader for &T {
    fn read(&self, path: &Utf8Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }
}

/// File-system backed `SourceReader`.
#[derive(Debug, Clone)]
pub struct FsSourceReader {
    root: Utf8PathBuf,
}

impl FsSourceReader {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn abs(&self, path: &Utf8Path) -> Utf8PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Default for FsSourceReader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl SourceReader for FsSourceReader {
    fn read(&self, path: &Utf8Path) -> io::Result<Vec<u8>> {
        fs::read(self.abs(path))
    }
}

/// In-memory `SourceReader` for embedding and testing.
#[derive(Debug, Clone, Default)]
pub struct InMemorySourceReader {
    files: BTreeMap<Utf8PathBuf, Vec<u8>>,
}

impl InMemorySourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(
        mut self,
        path: impl Into<Utf8PathBuf>,
        contents: impl Into<Vec<u8>>,
    ) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&mut self, path: impl Into<Utf8PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl SourceReader for InMemorySourceReader {
    fn read(&self, path: &Utf8Path) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {}", path))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fs_reader_resolves_relative_paths_against_root() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        fs::write(root.join("extra.h"), "int x;\n").unwrap();

        let reader = FsSourceReader::new(root.clone());
        assert_eq!(reader.read(Utf8Path::new("extra.h")).unwrap(), b"int x;\n");
        assert_eq!(reader.read(&root.join("extra.h")).unwrap(), b"int x;\n");
    }

    #[test]
    fn fs_reader_error_mentions_path() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let reader = FsSourceReader::new(root);

        let err = reader.read(Utf8Path::new("missing.h")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("missing.h"));
    }

    #[test]
    fn fs_reader_returns_non_utf8_bytes_unchanged() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let latin1 = b"// \xa9 Acme\nint x;\n";
        fs::write(root.join("latin1.h"), latin1).unwrap();

        let reader = FsSourceReader::new(root);
        assert_eq!(reader.read(Utf8Path::new("latin1.h")).unwrap(), latin1);
    }

    #[test]
    fn in_memory_reader_misses_are_not_found() {
        let reader = InMemorySourceReader::new().with_file("a.h", "a");
        assert_eq!(reader.read(Utf8Path::new("a.h")).unwrap(), b"a");
        let err = reader.read(Utf8Path::new("b.h")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
