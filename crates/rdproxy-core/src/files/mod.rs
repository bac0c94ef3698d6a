//! Filesystem checks used while validating certificate and key paths.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Answers whether a path names an existing file.
pub trait FileProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// [`FileProbe`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl FileProbe for HostFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// [`FileProbe`] over a fixed set of paths, for loading without touching disk.
#[derive(Debug, Clone, Default)]
pub struct KnownFiles {
    paths: HashSet<PathBuf>,
}

impl KnownFiles {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl FileProbe for KnownFiles {
    fn exists(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_fs_exists() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(HostFs.exists(file.path()));
        assert!(!HostFs.exists(&file.path().with_extension("missing")));
    }

    #[test]
    fn test_known_files() {
        let probe = KnownFiles::new(["/etc/rdproxy/server.crt"]);
        assert!(probe.exists(Path::new("/etc/rdproxy/server.crt")));
        assert!(!probe.exists(Path::new("/etc/rdproxy/server.key")));
    }
}
