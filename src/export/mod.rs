//! Export
//!
//! Hands a composed document to its destination. The composer only produces
//! a string; writing it anywhere is the exporter's job.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

/// File name offered for the generated document
pub const EXPORT_FILE_NAME: &str = "README.md";

/// Content type of the generated document
pub const EXPORT_CONTENT_TYPE: &str = "text/plain";

/// A document ready for export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub content_type: String,
    pub body: String,
}

impl Artifact {
    /// A `README.md` artifact
    pub fn readme(body: impl Into<String>) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME.to_string(),
            content_type: EXPORT_CONTENT_TYPE.to_string(),
            body: body.into(),
        }
    }
}

/// Destination for exported artifacts
pub trait Exporter {
    fn export(&self, artifact: &Artifact) -> Result<()>;
}

/// Writes the artifact to disk
#[derive(Debug, Clone)]
pub enum FileExporter {
    /// Write `<dir>/<artifact file name>`
    Directory(PathBuf),
    /// Write to exactly this path
    Path(PathBuf),
}

impl FileExporter {
    pub fn into_dir<P: AsRef<Path>>(dir: P) -> Self {
        FileExporter::Directory(dir.as_ref().to_path_buf())
    }

    pub fn to_path<P: AsRef<Path>>(path: P) -> Self {
        FileExporter::Path(path.as_ref().to_path_buf())
    }

    /// Final path for an artifact
    pub fn target(&self, artifact: &Artifact) -> PathBuf {
        match self {
            FileExporter::Directory(dir) => dir.join(&artifact.file_name),
            FileExporter::Path(path) => path.clone(),
        }
    }
}

impl Exporter for FileExporter {
    fn export(&self, artifact: &Artifact) -> Result<()> {
        let target = self.target(artifact);
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&target, artifact.body.as_bytes())?;
        info!(
            "exported {} ({}, {} bytes) to {:?}",
            artifact.file_name,
            artifact.content_type,
            artifact.body.len(),
            target
        );
        Ok(())
    }
}

/// Prints the artifact body to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutExporter;

impl Exporter for StdoutExporter {
    fn export(&self, artifact: &Artifact) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(artifact.body.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readme_artifact() {
        let artifact = Artifact::readme("# Hi");
        assert_eq!(artifact.file_name, "README.md");
        assert_eq!(artifact.content_type, "text/plain");
    }

    #[test]
    fn test_directory_export() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FileExporter::into_dir(dir.path());
        exporter.export(&Artifact::readme("# Hi")).unwrap();
        let written = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert_eq!(written, "# Hi");
    }

    #[test]
    fn test_path_export_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs").join("PROFILE.md");
        FileExporter::to_path(&path)
            .export(&Artifact::readme("body"))
            .unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "body");
    }
}
