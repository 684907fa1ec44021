//! Local image folder inventory.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;

/// File extensions counted as images (compared case-insensitively).
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Image files found directly inside a folder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageInventory {
    /// File names, sorted.
    pub files: Vec<String>,
    /// Lower-cased extension → number of files.
    pub by_extension: BTreeMap<String, usize>,
}

impl ImageInventory {
    pub fn total(&self) -> usize {
        self.files.len()
    }
}

/// Scan `folder` for image files.
///
/// Returns `Ok(None)` when the folder does not exist. Subdirectories are not
/// descended into.
pub fn scan_images(folder: &Path) -> Result<Option<ImageInventory>> {
    if !folder.is_dir() {
        return Ok(None);
    }

    let mut inventory = ImageInventory::default();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        let Some(extension) = image_extension(&path) else {
            continue;
        };
        *inventory.by_extension.entry(extension).or_insert(0) += 1;
        inventory
            .files
            .push(entry.file_name().to_string_lossy().into_owned());
    }
    inventory.files.sort();

    Ok(Some(inventory))
}

fn image_extension(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| *known == extension)
        .then_some(extension)
}

/// Text report for a folder scan; a failed scan becomes a single error line.
pub fn render_folder_report(folder: &Path, scan: &Result<Option<ImageInventory>>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📁 Image folder: {}", folder.display());
    match scan {
        Err(e) => {
            let _ = writeln!(out, "   ❌ Could not scan folder: {}", e);
        }
        Ok(None) => {
            let _ = writeln!(out, "   ❌ Folder does not exist");
        }
        Ok(Some(inventory)) => {
            let _ = writeln!(out, "   ✅ Exists, {} image files", inventory.total());
            for (extension, count) in &inventory.by_extension {
                let _ = writeln!(out, "   .{}: {}", extension, count);
            }
            for file in &inventory.files {
                let _ = writeln!(out, "   - {}", file);
            }
        }
    }
    out
}

/// Resolve the folder to scan: an explicit override, else the default.
pub fn image_folder(override_path: Option<String>, default: &str) -> PathBuf {
    override_path
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}
