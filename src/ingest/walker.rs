use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{KmsError, Result};

/// A document file found under the documents root
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub relative_path: String,
    pub absolute_path: PathBuf,
    pub extension: String,
    pub file_size: u64,
}

/// Result of walking a documents root
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<FileMetadata>,
    /// Entries the walk could not read, as `path: error`.
    pub errors: Vec<String>,
}

/// Discover document files under `root`, recursively, sorted by relative path.
///
/// **Supported extensions** (case-insensitive): `.txt`, `.md`, `.json`.
/// Everything else is skipped. A missing root is `NotFound` and a root that
/// is not a directory is `InvalidInput`; unreadable entries below the root
/// are collected in [`Discovery::errors`] and the walk continues.
pub fn discover_files(root: &Path) -> Result<Discovery> {
    if !root.exists() {
        return Err(KmsError::NotFound(format!(
            "documents directory {}",
            root.display()
        )));
    }
    if !root.is_dir() {
        return Err(KmsError::InvalidInput(format!(
            "not a directory: {}",
            root.display()
        )));
    }

    let mut discovery = Discovery::default();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| relative_to(root, p))
                    .unwrap_or_else(|| root.display().to_string());
                log::warn!("Cannot read {}: {}", path, e);
                discovery.errors.push(format!("{}: {}", path, e));
                continue;
            }
        };
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        if !matches!(extension.as_str(), "txt" | "md" | "json") {
            continue;
        }

        let relative_path = relative_to(root, path);
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => {
                discovery.errors.push(format!("{}: {}", relative_path, e));
                continue;
            }
        };

        discovery.files.push(FileMetadata {
            relative_path,
            absolute_path: path.to_path_buf(),
            extension,
            file_size: metadata.len(),
        });
    }

    log::info!(
        "Discovered {} files in {} ({} unreadable)",
        discovery.files.len(),
        root.display(),
        discovery.errors.len()
    );
    Ok(discovery)
}

fn relative_to(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
