//! Tree digesting — sha256 over sorted relative paths and file bytes.
//!
//! Two trees share a digest iff they contain the same files with the same
//! bytes; absolute locations do not contribute.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{io_err, BakeError};

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), BakeError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_files(root, &path, out)?;
        } else if meta.is_file() {
            out.push(
                path.strip_prefix(root)
                    .unwrap_or(path.as_path())
                    .to_path_buf(),
            );
        }
    }
    Ok(())
}

/// Content digest of a directory tree.
pub fn tree_digest(root: &Path) -> Result<String, BakeError> {
    let mut files = Vec::new();
    collect_files(root, root, &mut files)?;
    files.sort();

    let mut hasher = Sha256::new();
    for rel in &files {
        hasher.update(rel.to_string_lossy().as_bytes());
        hasher.update([0u8]);
        let full = root.join(rel);
        let bytes = std::fs::read(&full).map_err(|e| io_err(&full, e))?;
        hasher.update(&bytes);
        hasher.update([0u8]);
    }
    Ok(hex::encode(hasher.finalize()))
}
