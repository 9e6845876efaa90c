//! Output naming and resume backups.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use uuid::Uuid;

/// Folder for tailored markup given by bare name.
pub const MARKDOWN_DIR: &str = "markdown_resumes";

/// Folder for backups of the source resume, under [`MARKDOWN_DIR`].
pub const BACKUP_DIR: &str = "backups";

/// Random lowercase hex of the given length (at most 32).
pub fn random_hex(len: usize) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..len.min(hex.len())].to_string()
}

/// `resume_<8 hex>.md`
pub fn default_markdown_name() -> String {
    format!("resume_{}.md", random_hex(8))
}

/// `docx_resume_<8 hex>.docx`
pub fn default_docx_name() -> String {
    format!("docx_resume_{}.docx", random_hex(8))
}

/// Put a bare file name inside `folder`, creating it on demand.
///
/// Names with a directory part are returned unchanged.
pub fn place_bare(name: &Path, folder: &Path) -> std::io::Result<PathBuf> {
    if !resumark::convert::is_bare(name) {
        return Ok(name.to_path_buf());
    }
    if !folder.exists() {
        fs::create_dir_all(folder)?;
        log::info!("Created folder: {}", folder.display());
    }
    Ok(folder.join(name))
}

/// Backup file name used when `<original>.bak` is already taken.
///
/// `resume.md` becomes `resume.<DDMMYY>_<suffix>.md.bak`; a name without a
/// dot becomes `<name>.<DDMMYY>_<suffix>.bak`. Only the last dot splits.
pub fn collision_backup_name(original: &str, date: NaiveDate, suffix: &str) -> String {
    let stamp = format!("{}_{}", date.format("%d%m%y"), suffix);
    match original.rsplit_once('.') {
        Some((stem, ext)) => format!("{}.{}.{}.bak", stem, stamp, ext),
        None => format!("{}.{}.bak", original, stamp),
    }
}

/// Copy the resume into `backup_dir` and return the backup path.
pub fn backup_resume(resume: &Path, backup_dir: &Path) -> std::io::Result<PathBuf> {
    fs::create_dir_all(backup_dir)?;

    let original = resume
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());

    let mut backup_path = backup_dir.join(format!("{}.bak", original));
    if backup_path.exists() {
        let today = chrono::Local::now().date_naive();
        let name = collision_backup_name(&original, today, &random_hex(5));
        backup_path = backup_dir.join(name);
    }

    fs::copy(resume, &backup_path)?;
    log::debug!("Backed up {} to {}", resume.display(), backup_path.display());
    Ok(backup_path)
}
