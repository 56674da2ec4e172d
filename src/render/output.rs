//! Artifact output

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::{GeoDeckError, GeoDeckResult};

/// Write `content` to `path` so that readers see either the old file or
/// the complete new one
///
/// The document goes to a sibling temporary file first and is then renamed
/// over the target. On failure the temporary file is removed.
pub fn write_artifact(path: &str, content: &str) -> GeoDeckResult<()> {
    let target = Path::new(path);
    let temp = temp_path(target);
    debug!("Writing {} bytes to {} via {}", content.len(), path, temp.display());

    if let Err(e) = fs::write(&temp, content) {
        let _ = fs::remove_file(&temp);
        return Err(GeoDeckError::output(path, e));
    }
    if let Err(e) = fs::rename(&temp, target) {
        let _ = fs::remove_file(&temp);
        return Err(GeoDeckError::output(path, e));
    }
    Ok(())
}

fn temp_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "geodeck-output".into());
    name.push(".partial");
    target.with_file_name(name)
}
