//! Installing package files into an assembled conda environment.
//!
//! Most files are hardlinked or copied unchanged. Text files which embed the
//! build prefix are rewritten so that they refer to the environment's
//! location in the Bazel execution root instead.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::debug;
use regex::bytes::{NoExpand, Regex};

use super::Package;
use super::paths::{PathEntry, PathType};
use crate::utils::path::{base_name, clean_path};

pub const DEFAULT_CONDA_REPO: &str = "conda_env";

lazy_static! {
    static ref SHEBANG_REGEX: Regex = Regex::new(r"(?-u)^#!/.*/bin/python").expect("Invalid shebang regex");
    // sysconfigdata carries a placeholder for TZPATH, but a relative TZPATH
    // makes Python warn on every start.
    static ref TZPATH_REGEX: Regex =
        Regex::new(r#"(?-u)(\n\s*['"]TZPATH['"]: ['"])[^'"]*(['"])"#)
            .expect("Invalid TZPATH regex");
}

const NEW_SHEBANG: &[u8] = b"#!/usr/bin/env python";
const NEW_ARGV_PYTHON: &[u8] = br#""/usr/bin/env", "python""#;
const WL_SYSROOT: &[u8] = b"-Wl,--sysroot=/";

/// Rewrites the build prefix in text files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    replacement: Vec<u8>,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::new(DEFAULT_CONDA_REPO)
    }
}

impl Translator {
    /// Replace prefix placeholders with `external/<conda_repo>`.
    pub fn new(conda_repo: &str) -> Self {
        Translator {
            replacement: format!("external/{}", conda_repo.trim_start_matches('@')).into_bytes(),
        }
    }

    /// Rewrite the content of the file described by `entry`.
    pub fn translate(&self, entry: &PathEntry, content: &[u8]) -> Vec<u8> {
        let mut result = SHEBANG_REGEX
            .replace(content, NoExpand(NEW_SHEBANG))
            .into_owned();
        let placeholder = entry.prefix_placeholder.as_bytes();
        if !placeholder.is_empty() {
            if entry.path.ends_with(".json") {
                // kernel.json has `"argv": ["<placeholder>/bin/python", ...`.
                let argv = [&b"\""[..], placeholder, &b"/bin/python\""[..]].concat();
                result = replace_all(&result, &argv, NEW_ARGV_PYTHON);
            }
            result = replace_all(&result, placeholder, &self.replacement);
        }
        if entry.path.ends_with(".py") && base_name(&entry.path).starts_with("_sysconfigdata") {
            result = replace_all(&result, WL_SYSROOT, b"");
            result = TZPATH_REGEX.replace_all(&result, &b"${1}${2}"[..]).into_owned();
        }
        result
    }
}

fn replace_all(haystack: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(i) = rest.windows(from.len()).position(|window| window == from) {
        result.extend_from_slice(&rest[..i]);
        result.extend_from_slice(to);
        rest = &rest[i + from.len()..];
    }
    result.extend_from_slice(rest);
    result
}

/// Create a file which must not already exist.
fn create_new(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

/// Copy a file, keeping its permissions. The destination must not exist.
pub fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    let mut source = File::open(src).with_context(|| format!("opening {}", src.display()))?;
    let permissions = source
        .metadata()
        .with_context(|| format!("reading metadata of {}", src.display()))?
        .permissions();
    let mut target = create_new(dest).with_context(|| format!("creating {}", dest.display()))?;
    io::copy(&mut source, &mut target)
        .with_context(|| format!("copying {} to {}", src.display(), dest.display()))?;
    fs::set_permissions(dest, permissions)
        .with_context(|| format!("setting permissions of {}", dest.display()))
}

impl PathEntry {
    /// Install the file at `src` to `<dest>/<path>`.
    ///
    /// Symlinks are skipped since the Bazel rules create them. Files with a
    /// prefix placeholder are rewritten; others are hardlinked where allowed
    /// and copied otherwise.
    pub fn install(&self, src: &Path, dest: &Path, translator: &Translator) -> Result<()> {
        let target = dest.join(&self.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        if self.path_type == PathType::Softlink {
            return Ok(());
        }
        if self.needs_translate() {
            return self.translate(src, &target, translator);
        }
        self.link_or_copy(src, &target)
    }

    fn translate(&self, src: &Path, target: &Path, translator: &Translator) -> Result<()> {
        let content = fs::read(src).with_context(|| format!("reading {}", src.display()))?;
        let permissions = fs::metadata(src)
            .with_context(|| format!("reading metadata of {}", src.display()))?
            .permissions();
        debug!("Rewriting prefix in {}", self.path);
        let translated = translator.translate(self, &content);
        let mut file =
            create_new(target).with_context(|| format!("creating {}", target.display()))?;
        file.write_all(&translated)
            .with_context(|| format!("writing {}", target.display()))?;
        fs::set_permissions(target, permissions)
            .with_context(|| format!("setting permissions of {}", target.display()))
    }

    fn link_or_copy(&self, src: &Path, target: &Path) -> Result<()> {
        if !self.no_link
            && let Ok(resolved) = fs::canonicalize(src)
            && fs::hard_link(&resolved, target).is_ok()
        {
            return Ok(());
        }
        copy_file(src, target)
    }
}

/// Prefixes to strip from the paths of files being installed, longest
/// first: `<root>/<dir>/` for each root, then `<dir>/` itself.
pub fn clean_roots(dir: &str, roots: &[String]) -> Vec<String> {
    let dir = dir.trim_end_matches('/');
    let mut result: Vec<String> = roots
        .iter()
        .filter(|root| !root.is_empty())
        .map(|root| format!("{}/", clean_path(&format!("{root}/{dir}"))))
        .collect();
    result.push(format!("{dir}/"));
    result.sort_by_key(|root| std::cmp::Reverse(root.len()));
    result
}

/// Remove the first matching root from a file path.
pub fn strip_root<'a>(file: &'a str, roots: &[String]) -> &'a str {
    roots
        .iter()
        .find_map(|root| file.strip_prefix(root.as_str()))
        .unwrap_or(file)
}

impl Package {
    /// Install `files`, which live in this package's directory under one of
    /// `roots`, into `dest`.
    pub fn install(
        &self,
        roots: &[String],
        dest: &Path,
        files: &[String],
        translator: &Translator,
    ) -> Result<()> {
        let translate: HashMap<&str, &PathEntry> = self
            .paths
            .paths
            .iter()
            .filter(|entry| entry.needs_translate())
            .map(|entry| (entry.path.as_str(), entry))
            .collect();
        let roots = clean_roots(&self.dir.to_string_lossy(), roots);
        for file in files {
            let relative = strip_root(file, &roots);
            if let Some(entry) = translate.get(relative) {
                entry
                    .install(Path::new(file), dest, translator)
                    .with_context(|| format!("installing {file}"))?;
                continue;
            }
            let target = dest.join(relative.trim_start_matches('/'));
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating directory {}", parent.display()))?;
            }
            copy_file(Path::new(file), &target).with_context(|| format!("installing {file}"))?;
        }
        Ok(())
    }
}
