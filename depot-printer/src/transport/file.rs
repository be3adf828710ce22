//! Filesystem transport
//!
//! Writes the document to a timestamped `.zpl` file instead of a device.
//! Used for dry runs and for sites that feed a folder watched by a print
//! relay. Second-granularity timestamps can collide under rapid fire; that
//! is an accepted limitation of the naming scheme.

use std::path::PathBuf;

use chrono::Local;
use tracing::{info, instrument};

use crate::error::PrintResult;

#[derive(Debug, Clone)]
pub struct FileTransport {
    output_dir: PathBuf,
}

impl FileTransport {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }
}

impl super::Transport for FileTransport {
    #[instrument(skip(document), fields(dir = %self.output_dir.display(), data_len = document.len()))]
    fn send(&self, document: &[u8]) -> PrintResult<()> {
        std::fs::create_dir_all(&self.output_dir)?;

        let filename = format!("label_{}.zpl", Local::now().format("%Y%m%d_%H%M%S"));
        let path = self.output_dir.join(filename);
        std::fs::write(&path, document)?;

        info!(path = %path.display(), "document written");
        Ok(())
    }

    fn check(&self) -> PrintResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Transport;

    #[test]
    fn test_writes_timestamped_document() {
        let dir = tempfile::tempdir().expect("temp dir");
        let nested = dir.path().join("out");
        let t = FileTransport::new(&nested);

        t.send(b"^XA^FDX^FS^XZ").expect("send");

        let entries: Vec<_> = std::fs::read_dir(&nested)
            .expect("read dir")
            .map(|e| e.expect("entry").path())
            .collect();
        assert_eq!(entries.len(), 1);

        let name = entries[0].file_name().expect("name").to_string_lossy().into_owned();
        assert!(name.starts_with("label_"));
        assert!(name.ends_with(".zpl"));

        let content = std::fs::read(&entries[0]).expect("read back");
        assert_eq!(content, b"^XA^FDX^FS^XZ");
    }
}
