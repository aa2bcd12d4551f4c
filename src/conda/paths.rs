//! The file manifest of an extracted conda package.
//!
//! # Supported Formats
//! - `info/paths.json` - current format
//! - `info/files.json` - older JSON format, with `path` and `file_type`
//!   instead of `_path` and `path_type`
//! - `info/files` - oldest format, one path per line, supplemented by
//!   `info/has_prefix` and `info/no_link`

use std::collections::{HashMap, HashSet};
use std::fs::{self, Metadata};
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;

use crate::utils::file::read_optional;

const PATHS_JSON: &str = "info/paths.json";
const FILES_JSON: &str = "info/files.json";
const FILES: &str = "info/files";
const HAS_PREFIX: &str = "info/has_prefix";
const NO_LINK: &str = "info/no_link";

/// Characters Bazel does not accept in file names.
const BANNED_FILENAME_CHARACTERS: [char; 2] = [' ', ':'];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileMode {
    #[default]
    Binary,
    Text,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathType {
    #[default]
    Hardlink,
    Softlink,
    Directory,
    #[serde(other)]
    Other,
}

/// One file installed by a package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PathEntry {
    /// Path relative to the package root.
    #[serde(default, rename = "_path")]
    pub path: String,
    #[serde(default)]
    pub file_mode: FileMode,
    #[serde(default)]
    pub path_type: PathType,
    /// For text files, the build prefix embedded in the file which must be
    /// replaced on install.
    #[serde(default)]
    pub prefix_placeholder: String,
    /// The file must be copied rather than hardlinked.
    #[serde(default)]
    pub no_link: bool,
}

impl PathEntry {
    pub fn new(path: impl Into<String>) -> Self {
        PathEntry {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn needs_translate(&self) -> bool {
        self.file_mode == FileMode::Text && !self.prefix_placeholder.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct PathsJson {
    #[serde(default)]
    paths: Vec<PathEntry>,
}

#[derive(Debug, Deserialize)]
struct LegacyPathEntry {
    #[serde(default)]
    path: String,
    #[serde(default)]
    file_type: Option<PathType>,
    #[serde(flatten)]
    entry: PathEntry,
}

impl From<LegacyPathEntry> for PathEntry {
    fn from(legacy: LegacyPathEntry) -> Self {
        let mut entry = legacy.entry;
        if !legacy.path.is_empty() {
            entry.path = legacy.path;
        }
        if let Some(path_type) = legacy.file_type {
            entry.path_type = path_type;
        }
        entry
    }
}

#[derive(Debug, Deserialize)]
struct FilesJson {
    #[serde(default)]
    files: Vec<LegacyPathEntry>,
}

/// A symbolic link shipped by a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymlinkEntry {
    pub location: String,
    pub target: String,
}

/// The files of a package which are present on disk.
#[derive(Debug, Default)]
pub struct FileListing<'a> {
    /// Regular files and directories.
    pub files: Vec<&'a PathEntry>,
    pub symlinks: Vec<SymlinkEntry>,
    /// Regular files with any execute bit set.
    pub executables: Vec<String>,
}

/// The files of a package and the metadata files they were read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathsManifest {
    pub paths: Vec<PathEntry>,
    /// Package-relative metadata files, the primary manifest first.
    pub manifest: Vec<String>,
}

impl PathsManifest {
    /// Load the file manifest from the first available format.
    ///
    /// Returns `None` if the package has none of `paths.json`, `files.json`
    /// or `files`.
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        if let Some(content) = read_optional(&dir.join(PATHS_JSON))? {
            let parsed: PathsJson = serde_json::from_slice(&content)
                .with_context(|| format!("parsing {PATHS_JSON}"))?;
            return Ok(Some(PathsManifest {
                paths: parsed.paths,
                manifest: vec![PATHS_JSON.to_string()],
            }));
        }
        if let Some(content) = read_optional(&dir.join(FILES_JSON))? {
            let parsed: FilesJson = serde_json::from_slice(&content)
                .with_context(|| format!("parsing {FILES_JSON}"))?;
            return Ok(Some(PathsManifest {
                paths: parsed.files.into_iter().map(PathEntry::from).collect(),
                manifest: vec![FILES_JSON.to_string()],
            }));
        }
        if let Some(content) = read_optional(&dir.join(FILES))? {
            let mut manifest = PathsManifest {
                paths: String::from_utf8_lossy(&content)
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(PathEntry::new)
                    .collect(),
                manifest: vec![FILES.to_string()],
            };
            manifest.read_has_prefix(dir)?;
            manifest.read_no_link(dir)?;
            return Ok(Some(manifest));
        }
        Ok(None)
    }

    /// Apply `info/has_prefix`, which lists `<placeholder> <mode> <path>`
    /// for files containing the build prefix. Only text-mode entries are
    /// used.
    fn read_has_prefix(&mut self, dir: &Path) -> Result<()> {
        let Some(content) = read_optional(&dir.join(HAS_PREFIX))? else {
            return Ok(());
        };
        if !content.is_empty() {
            self.manifest.push(HAS_PREFIX.to_string());
        }
        let content = String::from_utf8_lossy(&content);
        let placeholders: HashMap<&str, &str> = content
            .lines()
            .filter_map(|line| {
                let fields: Vec<&str> = line.split_whitespace().collect();
                match fields.as_slice() {
                    [placeholder, "text", path] => Some((*path, *placeholder)),
                    _ => None,
                }
            })
            .collect();
        for entry in &mut self.paths {
            if let Some(placeholder) = placeholders.get(entry.path.as_str()) {
                entry.file_mode = FileMode::Text;
                entry.prefix_placeholder = placeholder.to_string();
            }
        }
        Ok(())
    }

    fn read_no_link(&mut self, dir: &Path) -> Result<()> {
        let Some(content) = read_optional(&dir.join(NO_LINK))? else {
            return Ok(());
        };
        if !content.is_empty() {
            self.manifest.push(NO_LINK.to_string());
        }
        let content = String::from_utf8_lossy(&content);
        let no_link: HashSet<&str> = content.lines().map(str::trim).collect();
        for entry in &mut self.paths {
            if no_link.contains(entry.path.as_str()) {
                entry.no_link = true;
            }
        }
        Ok(())
    }

    /// Sort the manifest's files into regular files and symlinks.
    ///
    /// Files missing from disk (including broken symlinks) are left out, as
    /// are files whose names Bazel cannot handle.
    pub fn files_list(&self, dir: &Path) -> Result<FileListing<'_>> {
        let mut listing = FileListing {
            files: Vec::with_capacity(self.paths.len()),
            ..Default::default()
        };
        for entry in &self.paths {
            let full_path = dir.join(&entry.path);
            if let Err(err) = fs::metadata(&full_path)
                && err.kind() == ErrorKind::NotFound
            {
                continue;
            }
            if entry.path.contains(BANNED_FILENAME_CHARACTERS) {
                warn!(
                    "omitting file {:?} from build because the filename contains characters which are not permitted",
                    entry.path
                );
                continue;
            }
            let metadata = fs::symlink_metadata(&full_path)
                .with_context(|| format!("accessing {}", full_path.display()))?;
            if metadata.file_type().is_symlink() {
                let target = fs::read_link(&full_path)
                    .with_context(|| format!("reading link {}", full_path.display()))?;
                listing.symlinks.push(SymlinkEntry {
                    location: entry.path.clone(),
                    target: target.to_string_lossy().into_owned(),
                });
                continue;
            }
            listing.files.push(entry);
            if !metadata.is_dir() && is_executable(&metadata, 0o111) {
                listing.executables.push(entry.path.clone());
            }
        }
        Ok(listing)
    }
}

/// Check whether any of the permission bits in `mask` are set.
#[cfg(unix)]
pub(crate) fn is_executable(metadata: &Metadata, mask: u32) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & mask != 0
}

#[cfg(not(unix))]
pub(crate) fn is_executable(_metadata: &Metadata, _mask: u32) -> bool {
    false
}
