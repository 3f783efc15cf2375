use crate::classifier::{self, DIRECTORY, UNKNOWN};
use crate::format::{format_size, format_timestamp};
use crate::types::EntryRecord;
use chrono::{DateTime, Local};
use log::{debug, info, warn};
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Walks `root` top-down and returns one record per directory and file
/// beneath it. The root itself is not reported.
///
/// Each directory contributes its subdirectories first, then its files,
/// in whatever order the OS lists them. Metadata failures are recorded in
/// the affected entry and never stop the walk.
#[must_use]
pub fn scan_directory(root: &Path) -> Vec<EntryRecord> {
    let mut results = Vec::new();
    let mut total_bytes: u64 = 0;
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        debug!("Listing {}", dir.display());
        let (subdirs, files) = list_children(&dir);

        for child in &subdirs {
            results.push(directory_record(child.name.clone(), &child.path));
        }
        for child in files {
            let (record, len) = file_record(child.name, &child.path);
            total_bytes = total_bytes.saturating_add(len);
            results.push(record);
        }

        // Symlinked directories are reported above but not descended into.
        // Reversed so the first listed subdirectory is walked next.
        pending.extend(
            subdirs
                .into_iter()
                .rev()
                .filter(|child| !child.is_symlink)
                .map(|child| child.path),
        );
    }

    info!(
        "Scanned {} items under {} ({} in files)",
        results.len(),
        root.display(),
        human_bytes::human_bytes(total_bytes as f64)
    );
    results
}

struct Child {
    name: String,
    path: PathBuf,
    is_symlink: bool,
}

/// Immediate children of `dir`, split into (subdirectories, files).
fn list_children(dir: &Path) -> (Vec<Child>, Vec<Child>) {
    let mut subdirs = Vec::new();
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Cannot list {}: {e}", dir.display());
                continue;
            }
        };

        let is_dir = is_directory(&entry);
        let child = Child {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_symlink: entry.path_is_symlink(),
            path: entry.into_path(),
        };
        if is_dir {
            subdirs.push(child);
        } else {
            files.push(child);
        }
    }

    (subdirs, files)
}

/// Uses the type reported by the directory listing, so a subdirectory that
/// cannot be stat'ed is still a directory. Only symlinks pay for a `stat`.
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

fn directory_record(name: String, path: &Path) -> EntryRecord {
    let path_str = path.to_string_lossy().into_owned();

    match fs::metadata(path).and_then(|m| created_time(&m)) {
        Ok(created) => EntryRecord {
            name,
            path: path_str,
            kind: DIRECTORY.to_string(),
            size: "-".to_string(),
            created: format_timestamp(&created),
        },
        Err(e) => {
            warn!("Cannot read metadata for {path_str}: {e}");
            EntryRecord {
                name,
                path: path_str,
                kind: DIRECTORY.to_string(),
                size: "Error".to_string(),
                created: format!("Error: {e}"),
            }
        }
    }
}

/// Returns the record together with the file's byte length (0 on failure).
fn file_record(name: String, path: &Path) -> (EntryRecord, u64) {
    let path_str = path.to_string_lossy().into_owned();

    let metadata = fs::metadata(path).and_then(|m| Ok((m.len(), created_time(&m)?)));
    match metadata {
        Ok((len, created)) => (
            EntryRecord {
                name,
                kind: classifier::file_type(path),
                path: path_str,
                size: format_size(len),
                created: format_timestamp(&created),
            },
            len,
        ),
        Err(e) => {
            warn!("Cannot read metadata for {path_str}: {e}");
            (
                EntryRecord {
                    name,
                    path: path_str,
                    kind: UNKNOWN.to_string(),
                    size: "Error".to_string(),
                    created: format!("Error: {e}"),
                },
                0,
            )
        }
    }
}

// Unix has no portable birth time, so the inode change time stands in for it
#[cfg(unix)]
fn created_time(metadata: &Metadata) -> io::Result<DateTime<Local>> {
    use std::os::unix::fs::MetadataExt;

    let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
    DateTime::from_timestamp(metadata.ctime(), nanos)
        .map(|t| t.with_timezone(&Local))
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "timestamp out of range"))
}

#[cfg(not(unix))]
fn created_time(metadata: &Metadata) -> io::Result<DateTime<Local>> {
    metadata.created().map(DateTime::<Local>::from)
}
