//! Local image copier
//!
//! Copies classified images into their orientation folder on the local
//! filesystem, never replacing an existing file.

use crate::domain::entities::{ClassifiedImage, Orientation};
use crate::domain::repositories::{ClassifiedImageWriter, WriteOutcome};
use crate::error::Result;
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Writes into `<output_root>/Horizontal-Background-Images` and
/// `<output_root>/Vertical-Background-Images`.
#[derive(Debug, Clone)]
pub struct LocalImageCopier {
    output_root: PathBuf,
}

impl LocalImageCopier {
    pub fn new(output_root: &Path) -> Self {
        Self {
            output_root: output_root.to_path_buf(),
        }
    }
}

impl ClassifiedImageWriter for LocalImageCopier {
    fn prepare(&self) -> Result<()> {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let dir = self.folder(orientation);
            if !dir.is_dir() {
                tracing::debug!("Creating {}", dir.display());
                fs::create_dir_all(&dir)?;
            }
        }
        Ok(())
    }

    fn folder(&self, orientation: Orientation) -> PathBuf {
        self.output_root.join(orientation.folder_name())
    }

    fn destination(&self, image: &ClassifiedImage) -> PathBuf {
        self.folder(image.orientation())
            .join(image.candidate().output_filename())
    }

    fn write(&self, image: &ClassifiedImage) -> Result<WriteOutcome> {
        let path = self.destination(image);

        if path.exists() {
            return Ok(WriteOutcome::AlreadyPresent { path });
        }

        // create_new also covers a file showing up after the check above
        let mut output = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Ok(WriteOutcome::AlreadyPresent { path });
            }
            Err(e) => return Err(e.into()),
        };

        let copied = File::open(image.candidate().path()).and_then(|mut source| {
            let bytes = io::copy(&mut source, &mut output)?;
            output.sync_all()?;
            Ok(bytes)
        });

        match copied {
            Ok(bytes) => Ok(WriteOutcome::Copied { path, bytes }),
            Err(e) => {
                // a truncated copy would be skipped as present on the next run
                drop(output);
                let _ = fs::remove_file(&path);
                Err(e.into())
            }
        }
    }
}
