//! Filesystem helpers: storage directories, timestamped backups, directory size
//!
//! These never touch the in-memory model.

use crate::core::config::PathsConfig;
use crate::core::error::DataError;
use crate::{debug, error, info};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Folder name prefix for each backup
pub const BACKUP_PREFIX: &str = "backup_";

/// Create the data and backup directories named in `paths`
///
/// # Errors
/// Returns [`DataError::Io`] for the first directory that cannot be created.
pub fn ensure_storage_dirs(paths: &PathsConfig) -> Result<(), DataError> {
    for dir in [&paths.data_dir, &paths.backup_dir] {
        fs::create_dir_all(dir).map_err(|e| DataError::io(dir, e))?;
    }
    Ok(())
}

/// Copy the tree under `data_dir` into `backup_dir/backup_<YYYYMMDD_HHMMSS>`
///
/// Files and subdirectories that fail to copy are logged and skipped; the rest
/// of the tree is still copied.
///
/// # Returns
/// Path of the new backup folder
///
/// # Errors
/// Returns [`DataError::NotFound`] if `data_dir` is missing, or
/// [`DataError::Io`] if the backup folder cannot be created or the data
/// directory cannot be listed.
pub fn create_backup(data_dir: &Path, backup_dir: &Path) -> Result<PathBuf, DataError> {
    if !data_dir.exists() {
        return Err(DataError::NotFound {
            path: data_dir.to_path_buf(),
        });
    }

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let destination = backup_dir.join(format!("{BACKUP_PREFIX}{stamp}"));
    fs::create_dir_all(&destination).map_err(|e| DataError::io(&destination, e))?;

    let entries = fs::read_dir(data_dir).map_err(|e| DataError::io(data_dir, e))?;
    let copied = copy_entries(entries, &destination);
    info!(
        "Backup successful: {} ({copied} files)",
        destination.display()
    );
    Ok(destination)
}

/// Copy `source` into `destination`; unreadable directories are logged and yield 0
fn copy_tree(source: &Path, destination: &Path) -> usize {
    match fs::read_dir(source) {
        Ok(entries) => copy_entries(entries, destination),
        Err(e) => {
            error!("Failed to read {}: {e}", source.display());
            0
        }
    }
}

fn copy_entries(entries: fs::ReadDir, destination: &Path) -> usize {
    let mut copied = 0;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!("Failed to read entry in {}: {e}", destination.display());
                continue;
            }
        };
        let from = entry.path();
        let to = destination.join(entry.file_name());

        if from.is_dir() {
            if let Err(e) = fs::create_dir_all(&to) {
                error!("Failed to create {}: {e}", to.display());
                continue;
            }
            copied += copy_tree(&from, &to);
        } else {
            match fs::copy(&from, &to) {
                Ok(_) => {
                    debug!("Copied {}", from.display());
                    copied += 1;
                }
                Err(e) => error!("Failed to copy {}: {e}", from.display()),
            }
        }
    }

    copied
}

/// Total size in bytes of every file under `path`
///
/// A file path returns its own size. Entries that cannot be read are logged
/// and counted as zero.
#[must_use]
pub fn directory_size(path: &Path) -> u64 {
    if !path.is_dir() {
        return match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                error!("Error calculating size for {}: {e}", path.display());
                0
            }
        };
    }

    match fs::read_dir(path) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .map(|entry| directory_size(&entry.path()))
            .sum(),
        Err(e) => {
            error!("Error calculating size for {}: {e}", path.display());
            0
        }
    }
}

/// Format a byte count as kilobytes with two decimals
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}
