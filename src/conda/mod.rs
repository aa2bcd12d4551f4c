//! Extracted conda packages.
//!
//! A [`Package`] is loaded from the directory a conda tarball was extracted
//! to. It can then generate a `BUILD.bazel` file for that directory (see
//! [`build_file`]) or install its files into an assembled environment (see
//! [`install`]).

pub mod build_file;
pub mod install;
pub mod metadata;
pub mod paths;

#[cfg(test)]
mod paths_test;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use log::debug;

use crate::licensing::LicenseInfo;
use crate::licensing::fetch::LicenseFetcher;
use crate::licensing::purl::CondaPackageQualifiers;
use crate::utils::file::is_path_excluded;
use metadata::{IndexJson, NoArch};
use paths::{PathsManifest, is_executable};

pub use build_file::BuildFileOptions;
pub use install::{DEFAULT_CONDA_REPO, Translator};

#[derive(Debug, Clone, Default)]
pub struct Package {
    pub dir: PathBuf,
    pub index: IndexJson,
    pub noarch: NoArch,
    pub paths: PathsManifest,
    pub license: LicenseInfo,
}

impl Package {
    /// Load the metadata of the package extracted in `dir`.
    ///
    /// Files matching `exclude_patterns` are dropped from the manifest and
    /// deleted. A package without a file manifest is an error only if
    /// `require_paths` is set.
    pub fn load(dir: &Path, exclude_patterns: &[Pattern], require_paths: bool) -> Result<Self> {
        let index = IndexJson::load(dir).context("loading index metadata")?;
        let noarch = NoArch::load(dir).context("loading link metadata")?;
        let license = LicenseInfo::new(
            index.name.clone(),
            Some(CondaPackageQualifiers {
                build: index.build.clone(),
                subdir: index.subdir.clone(),
                ..Default::default()
            }),
        );
        let paths = match PathsManifest::load(dir).context("loading package file manifest")? {
            Some(paths) => paths,
            None if require_paths => bail!(
                "loading package file manifest: {} has no paths.json, files.json or files",
                dir.join("info").display()
            ),
            None => PathsManifest::default(),
        };
        let mut package = Package {
            dir: dir.to_path_buf(),
            index,
            noarch,
            paths,
            license,
        };
        package.exclude(exclude_patterns)?;
        Ok(package)
    }

    fn exclude(&mut self, exclude_patterns: &[Pattern]) -> Result<()> {
        if exclude_patterns.is_empty() {
            return Ok(());
        }
        let mut kept = Vec::with_capacity(self.paths.paths.len());
        for entry in self.paths.paths.drain(..) {
            if !is_path_excluded(&entry.path, exclude_patterns) {
                kept.push(entry);
                continue;
            }
            debug!("Excluding {}", entry.path);
            let path = self.dir.join(&entry.path);
            match fs::remove_file(&path) {
                Err(err) if err.kind() != ErrorKind::NotFound => {
                    return Err(err).with_context(|| format!("removing {}", path.display()));
                }
                _ => {}
            }
        }
        self.paths.paths = kept;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.index.name
    }

    /// Name of the Bazel repository holding this package.
    pub fn repo_name(&self) -> String {
        format!("conda_package_{}", self.name().replace(['.', '-'], "_"))
    }

    /// True for `noarch: python` packages.
    pub fn link_python(&self) -> bool {
        self.noarch.is_python()
    }

    /// Set the channel the package was downloaded from, and its archive
    /// type, for the package URL.
    pub fn set_channel(&mut self, channel: &str, package_type: &str) {
        if let Some(qualifiers) = self.license.qualifiers.as_mut() {
            qualifiers.channel = channel.to_string();
            qualifiers.package_type = package_type.to_string();
        }
    }

    /// Resolve license information. Packages without files have nothing to
    /// license and are skipped.
    pub fn canonicalize_license(
        &mut self,
        license_overrides: &[String],
        license_file: Option<&str>,
        fetcher: Option<&dyn LicenseFetcher>,
    ) -> Result<()> {
        if self.paths.paths.is_empty() {
            return Ok(());
        }
        self.license.canonicalize_conda(
            &self.dir,
            &self.index.license,
            license_overrides,
            license_file,
            fetcher,
        )
    }

    /// The package's main executable, relative to the package root.
    ///
    /// For python packages this is the console script named after the app
    /// entry point (or the package), else the first one. Otherwise it is the
    /// executable in `bin/` with that name, else the first executable in
    /// `bin/`.
    pub fn executable(&self) -> Option<String> {
        let search = if self.index.entry.is_empty() {
            self.name()
        } else {
            &self.index.entry
        };
        let stubs: Vec<&str> = self
            .noarch
            .entry_points
            .iter()
            .map(|stub| stub.split_once('=').map_or(stub.as_str(), |(name, _)| name).trim())
            .collect();
        if let Some(stub) = stubs.iter().find(|&&name| name == search).or(stubs.first()) {
            return Some(format!("bin/{stub}"));
        }

        let mut best: Option<&str> = None;
        for entry in &self.paths.paths {
            let Some(name) = entry.path.strip_prefix("bin/") else {
                continue;
            };
            if best.is_some() && name.rsplit('/').next() != Some(search) {
                continue;
            }
            if fs::metadata(self.dir.join(&entry.path)).is_ok_and(|m| is_executable(&m, 0o100)) {
                best = Some(entry.path.as_str());
            }
        }
        best.map(String::from)
    }
}
