//! Tape image writer.
//!
//! Image = BLOCKS consecutive blocks, no header or footer:
//!   block[i] = 128 data words + 1 control word, each u16 LE
//!
//! Blocks go to a temp file next to the destination; `finalize` checks the
//! block count, syncs, and persists atomically. A failed write never replaces
//! an existing image. An existing destination is resolved first, so writing
//! through a symlink replaces the file it points to. The image gets the same
//! mode a plain `File::create` would give it.

use crate::block::Block;
use crate::consts::{BLOCKS, BLOCK_BYTES};
use crate::errors::{Result, TapeError};
use crate::labels::LabelTable;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Follow an existing destination (symlinks included) to the file it names.
fn resolve_target(path: &Path) -> std::io::Result<PathBuf> {
    if path.exists() {
        std::fs::canonicalize(path)
    } else {
        Ok(path.to_path_buf())
    }
}

#[cfg(unix)]
fn temp_builder<'a, 'b>() -> tempfile::Builder<'a, 'b> {
    use std::os::unix::fs::PermissionsExt;
    // 0o666 goes through the umask, same as File::create
    let mut b = tempfile::Builder::new();
    b.prefix(".tu56_").permissions(std::fs::Permissions::from_mode(0o666));
    b
}
#[cfg(not(unix))]
fn temp_builder<'a, 'b>() -> tempfile::Builder<'a, 'b> {
    let mut b = tempfile::Builder::new();
    b.prefix(".tu56_");
    b
}

#[cfg(unix)]
fn fsync_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::OpenOptionsExt;
    let f = std::fs::OpenOptions::new()
        .read(true)
        .custom_flags(libc::O_DIRECTORY)
        .open(parent_dir(path))?;
    f.sync_all()
}
#[cfg(not(unix))]
fn fsync_dir(_path: &Path) -> std::io::Result<()> { Ok(()) }

/// What `write_image` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReport {
    pub path: PathBuf,
    pub blocks: usize,
    pub bytes: u64,
}

pub struct ImageWriter {
    // as given by the caller, reported back
    path: PathBuf,
    // rename target: `path` with symlinks resolved
    path_final: PathBuf,
    tmp: NamedTempFile,
    blocks: usize,
}

impl ImageWriter {
    /// Open a temp file next to the (resolved) destination; nothing is published yet.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let path_final = resolve_target(&path)?;
        let tmp = temp_builder().tempfile_in(parent_dir(&path_final))?;
        Ok(Self { path, path_final, tmp, blocks: 0 })
    }

    pub fn blocks_written(&self) -> usize {
        self.blocks
    }

    pub fn push_block(&mut self, block: &Block) -> Result<()> {
        block.write_to(self.tmp.as_file_mut())?;
        self.blocks += 1;
        Ok(())
    }

    /// Sync and rename over the destination. Refuses an image with the wrong block count.
    pub fn finalize(mut self) -> Result<ImageReport> {
        if self.blocks != BLOCKS {
            return Err(TapeError::BlockCount { expected: BLOCKS, written: self.blocks });
        }
        let f = self.tmp.as_file_mut();
        f.flush()?;
        f.sync_all()?;
        let bytes = f.metadata()?.len();

        let _persisted = self.tmp.persist(&self.path_final)?;
        let _ = fsync_dir(&self.path_final);
        tracing::info!(path = %self.path_final.display(), blocks = self.blocks, bytes, "image published");
        Ok(ImageReport { path: self.path, blocks: self.blocks, bytes })
    }
}

/// Write a full image, one label per block, to `path`.
pub fn write_image(path: impl AsRef<Path>, labels: &LabelTable<'_>) -> Result<ImageReport> {
    let mut w = ImageWriter::create(path)?;
    for index in 0..BLOCKS {
        let label = labels.label(index);
        let block = Block::from_label(&label)?;
        tracing::debug!(index, label = %label, "block encoded");
        w.push_block(&block)?;
    }
    let report = w.finalize()?;
    debug_assert_eq!(report.bytes, (BLOCKS * BLOCK_BYTES) as u64);
    Ok(report)
}
