//! Output path resolution.

use std::fs;
use std::path::{self, Path, PathBuf};

use crate::error::{Error, Result};

/// Folder used for documents given by bare file name.
pub const DEFAULT_EXPORT_DIR: &str = "exported_resumes";

/// Work out where an output file goes.
///
/// - With `output_dir`, the file name of `name` is placed inside it. A
///   relative directory is made absolute and created if missing.
/// - Without it, a bare file name goes into `default_dir` (created on demand).
/// - Otherwise `name` is made absolute.
pub fn resolve_output_path(
    name: &Path,
    output_dir: Option<&Path>,
    default_dir: &Path,
) -> Result<PathBuf> {
    if let Some(dir) = output_dir {
        let dir = path::absolute(dir)?;
        fs::create_dir_all(&dir)?;
        let file_name = name
            .file_name()
            .ok_or_else(|| Error::Config(format!("Output name has no file name: {}", name.display())))?;
        return Ok(dir.join(file_name));
    }

    if is_bare(name) {
        fs::create_dir_all(default_dir)?;
        return Ok(path::absolute(default_dir)?.join(name));
    }

    Ok(path::absolute(name)?)
}

/// Folder holding the running executable.
///
/// Falls back to the current directory when the executable path is unknown.
pub fn tool_dir() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
        Err(e) => {
            log::warn!("Cannot locate executable ({}); using current directory", e);
            PathBuf::from(".")
        }
    }
}

/// Resolve a relative path against [`tool_dir`]. Absolute paths are returned as is.
pub fn tool_relative(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        tool_dir().join(path)
    }
}

/// Check whether a path is a lone file name with no directory part.
pub fn is_bare(name: &Path) -> bool {
    name.parent().map_or(true, |p| p.as_os_str().is_empty())
}
