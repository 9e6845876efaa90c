//! Tailoring prompt assembly from the settings folder.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::error::TailorError;

/// Default settings folder.
pub const SETTINGS_DIR: &str = "settings";

/// Running header text, also placed at the top of the prompt.
pub const HEADER_FILE: &str = "header.txt";

/// Instructions favouring the baseline resume.
pub const MODERATE_FILE: &str = "moderate.txt";

/// Instructions allowing creative rewrites.
pub const UNMODERATED_FILE: &str = "unmoderated.txt";

/// Files read from the settings folder.
#[derive(Debug, Clone)]
pub struct Settings {
    dir: PathBuf,
}

impl Settings {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn header_path(&self) -> PathBuf {
        self.dir.join(HEADER_FILE)
    }

    pub fn instructions_path(&self, moderate: bool) -> PathBuf {
        let file = if moderate { MODERATE_FILE } else { UNMODERATED_FILE };
        self.dir.join(file)
    }

    /// Header text as written in the file.
    pub fn header(&self) -> Result<String, TailorError> {
        read_setting(&self.header_path())
    }

    pub fn instructions(&self, moderate: bool) -> Result<String, TailorError> {
        read_setting(&self.instructions_path(moderate))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(SETTINGS_DIR)
    }
}

fn read_setting(path: &Path) -> Result<String, TailorError> {
    fs::read_to_string(path).map_err(|source| TailorError::Settings {
        path: path.to_path_buf(),
        source,
    })
}

/// Inputs of a tailoring prompt.
#[derive(Debug, Clone, Copy)]
pub struct PromptParts<'a> {
    pub header: &'a str,
    pub date: NaiveDate,
    pub instructions: &'a str,
    pub job_details: &'a str,
    pub resume: &'a str,
}

/// Build the prompt sent to the model.
pub fn build_prompt(parts: &PromptParts<'_>) -> String {
    format!(
        "{header}\n\n\
         Current Date: {date}\n\n\
         {instructions}\n\n\
         Job Listing:\n\
         ------------------\n\
         {job}\n\n\
         Original Resume:\n\
         ------------------\n\
         {resume}\n\n\
         Tailored Resume (Markdown):\n",
        header = parts.header,
        date = parts.date.format("%Y-%m-%d"),
        instructions = parts.instructions,
        job = parts.job_details,
        resume = parts.resume,
    )
}
