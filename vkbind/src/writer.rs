// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Change-detecting output writer.
//!
//! A file whose content would not change is left untouched, modification time
//! included.

use std::{io::ErrorKind, path::Path};

use crate::{Error, Result};

/// What [`write_if_changed`] did with its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was missing or stale and has been replaced.
    Written,
    /// The file already held exactly this content.
    Unchanged,
}

impl WriteOutcome {
    pub fn was_written(self) -> bool {
        self == WriteOutcome::Written
    }
}

/// Writes `content` to `path` unless the file already holds identical bytes.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns [`Error::Io`] if the existing file cannot be read (other than not
/// existing) or the new content cannot be written.
pub fn write_if_changed(path: impl AsRef<Path>, content: &str) -> Result<WriteOutcome> {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(existing) if existing == content.as_bytes() => {
            tracing::debug!("{} is up to date", path.display());
            return Ok(WriteOutcome::Unchanged);
        }
        Ok(_) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(Error::Io { path: path.to_path_buf(), source: err }),
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(Error::io(parent))?;
    }
    std::fs::write(path, content).map_err(Error::io(path))?;
    tracing::info!("Wrote {}", path.display());
    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempDir(std::path::PathBuf);

    impl TempDir {
        fn new(test: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "vkbind_writer_{}_{}",
                test,
                uuid::Uuid::new_v4()
            ));
            std::fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            std::fs::remove_dir_all(&self.0).unwrap_or_else(|_| {
                panic!("Failed to remove test directory \"{}\".", self.0.display())
            });
        }
    }

    #[test]
    fn writes_missing_file_and_parents() {
        let dir = TempDir::new("missing");
        let target = dir.0.join("src").join("vk-wrappers.h");
        assert_eq!(
            write_if_changed(&target, "PFN_vkFoo vkFoo;\n").unwrap(),
            WriteOutcome::Written
        );
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "PFN_vkFoo vkFoo;\n");
    }

    #[test]
    fn identical_content_is_skipped() {
        let dir = TempDir::new("identical");
        let target = dir.0.join("out.inc");
        std::fs::write(&target, "same\n").unwrap();
        assert_eq!(
            write_if_changed(&target, "same\n").unwrap(),
            WriteOutcome::Unchanged
        );
    }

    #[test]
    fn stale_content_is_replaced() {
        let dir = TempDir::new("stale");
        let target = dir.0.join("out.inc");
        std::fs::write(&target, "old content that is longer\n").unwrap();
        assert!(write_if_changed(&target, "new\n").unwrap().was_written());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new\n");
    }

    #[test]
    fn directory_target_is_an_io_error() {
        let dir = TempDir::new("dir_target");
        let err = write_if_changed(&dir.0, "x").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
