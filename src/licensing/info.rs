//! License metadata for an extracted conda package.
//!
//! Reads `info/about.json`, resolves the package's license expression,
//! locates the license text files and guesses a copyright notice from them.
//!
//! # Implementation Notes
//! - The license expression comes from `about.json` `license`, then the
//!   caller's fallback (usually `index.json` `license`), then
//!   `license_family`. The literal `unknown` counts as absent.
//! - `license_file` may be absent, a string or a list of strings, relative
//!   to `info/licenses`. One license record is produced per file.
//! - Packages with no license file but a `license_url` can have the text
//!   downloaded into `LICENSE` at the package root.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use serde::Deserialize;
use url::Url;

use super::License;
use super::expression::get_license;
use super::fetch::LicenseFetcher;
use super::purl::{CondaPackageQualifiers, PurlQualifiers, purl};
use crate::utils::path::{base_name, clean_path};

const PURL_TYPE: &str = "conda";

lazy_static! {
    static ref COPYRIGHT_REGEX: Regex =
        Regex::new(r"^\s*((?i:copyright:?\s+[(c©0-9].*?))\s*$").expect("Invalid copyright regex");
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum LicenseFiles {
    One(String),
    Many(Vec<String>),
}

/// The subset of `info/about.json` used for license metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct AboutJson {
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default, rename = "license_family")]
    pub family: Option<String>,
    #[serde(default, rename = "license_file")]
    pub license_files: Option<LicenseFiles>,
    #[serde(default)]
    pub license_url: Option<String>,
    #[serde(default)]
    pub home: Option<String>,
    #[serde(default)]
    pub dev_url: Option<String>,
    #[serde(default)]
    pub doc_url: Option<String>,
    #[serde(default, rename = "doc_source_url")]
    pub doc_source: Option<String>,
    #[serde(default)]
    pub channels: Vec<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn is_unset(id: &str) -> bool {
    id.is_empty() || id.eq_ignore_ascii_case("unknown")
}

impl AboutJson {
    /// The channel the package came from.
    ///
    /// `main` wins outright. Otherwise the first channel, unless a later one
    /// is `free` or `defaults`.
    pub fn channel(&self) -> Option<String> {
        let mut best: Option<&str> = None;
        for channel in &self.channels {
            let base = base_name(channel);
            if base == "main" {
                return Some("main".to_string());
            }
            if best.is_none() || base == "free" || base == "defaults" {
                best = Some(base);
            }
        }
        best.map(String::from)
    }

    /// The license expression, falling back to `fallback` and then to the
    /// license family.
    pub fn license_id<'a>(&'a self, fallback: &'a str) -> &'a str {
        let license = self.license.as_deref().unwrap_or_default();
        if !is_unset(license) {
            return license;
        }
        if !is_unset(fallback) {
            return fallback;
        }
        self.family.as_deref().unwrap_or_default()
    }

    /// License files relative to the package root. `None` stands for a
    /// license without a file.
    pub fn license_file_paths(&self) -> Vec<Option<String>> {
        let files: Vec<&String> = match &self.license_files {
            None => Vec::new(),
            Some(LicenseFiles::One(file)) if file.is_empty() => Vec::new(),
            Some(LicenseFiles::One(file)) => vec![file],
            Some(LicenseFiles::Many(files)) => files.iter().collect(),
        };
        if files.is_empty() {
            return vec![None];
        }
        files
            .into_iter()
            .map(|file| Some(clean_path(&format!("info/licenses/{file}"))))
            .collect()
    }

    fn homepage(&self) -> Option<String> {
        non_empty(&self.home)
            .or_else(|| non_empty(&self.dev_url))
            .or_else(|| non_empty(&self.doc_url))
            .or_else(|| non_empty(&self.doc_source))
            .map(String::from)
    }
}

/// License information for one package.
#[derive(Debug, Clone, Default)]
pub struct LicenseInfo {
    pub licenses: Vec<License>,
    pub homepage: Option<String>,
    /// Package URL type, e.g. `conda`.
    pub source: String,
    pub name: String,
    pub qualifiers: Option<CondaPackageQualifiers>,
    about: AboutJson,
    use_license_url: bool,
}

impl LicenseInfo {
    pub fn new(name: impl Into<String>, qualifiers: Option<CondaPackageQualifiers>) -> Self {
        LicenseInfo {
            name: name.into(),
            qualifiers,
            ..Default::default()
        }
    }

    /// Read `info/about.json` from the package directory.
    ///
    /// Fills in the channel qualifier if it was not already known, and
    /// downloads the license text when the package only references it by URL
    /// and a fetcher is supplied.
    pub fn load_conda(&mut self, dir: &Path, fetcher: Option<&dyn LicenseFetcher>) -> Result<()> {
        let about_path = dir.join("info").join("about.json");
        let content = fs::read_to_string(&about_path)
            .with_context(|| format!("reading {}", about_path.display()))?;
        self.about = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", about_path.display()))?;

        if let Some(qualifiers) = self.qualifiers.as_mut()
            && qualifiers.channel.is_empty()
            && let Some(channel) = self.about.channel()
        {
            qualifiers.channel = channel;
        }

        if self.about.license_files.is_none()
            && let Some(license_url) = non_empty(&self.about.license_url)
            && let Some(fetcher) = fetcher
        {
            let url = Url::parse(license_url)
                .with_context(|| format!("invalid license_url {license_url:?}"))?;
            if let Some(body) = fetcher.fetch(&url)? {
                let target = dir.join("LICENSE");
                fs::write(&target, body)
                    .with_context(|| format!("writing license file {}", target.display()))?;
                self.use_license_url = true;
            }
        }
        Ok(())
    }

    /// Resolve the licenses of a conda package.
    ///
    /// `license_overrides` replaces the parsed license kinds, and
    /// `license_file` replaces the files listed in `about.json`.
    pub fn canonicalize_conda(
        &mut self,
        dir: &Path,
        fallback: &str,
        license_overrides: &[String],
        license_file: Option<&str>,
        fetcher: Option<&dyn LicenseFetcher>,
    ) -> Result<()> {
        if !license_overrides.is_empty() || license_file.is_none() {
            self.load_conda(dir, fetcher)?;
        }
        let license = if license_overrides.is_empty() {
            let id = self.about.license_id(fallback);
            get_license(id).with_context(|| format!("parsing license {id:?} of {}", self.name))?
        } else {
            License::new("license", license_overrides.to_vec())
        };

        let files = if let Some(file) = license_file {
            vec![Some(clean_path(file))]
        } else if self.use_license_url {
            vec![Some("LICENSE".to_string())]
        } else {
            self.about.license_file_paths()
        };
        self.licenses = files
            .into_iter()
            .map(|file| License {
                file,
                ..license.clone()
            })
            .collect();

        self.source = PURL_TYPE.to_string();
        self.homepage = self.about.homepage();
        self.guess_copyright(dir);
        Ok(())
    }

    /// The package URL for this package at the given version.
    pub fn purl(&self, version: Option<&str>) -> Option<String> {
        purl(
            &self.source,
            None,
            &self.name,
            version,
            self.qualifiers.as_ref().map(|q| q as &dyn PurlQualifiers),
        )
    }

    /// Guess the copyright notice from the license files.
    ///
    /// Conda does not record copyright explicitly, so this takes the first
    /// `Copyright ...` line found and attaches it to that license only.
    fn guess_copyright(&mut self, dir: &Path) {
        for license in &mut self.licenses {
            let Some(file) = &license.file else {
                continue;
            };
            match find_copyright(&dir.join(file)) {
                Ok(Some(notice)) => {
                    license.copyright = Some(notice);
                    return;
                }
                Ok(None) => {}
                Err(err) => warn!("Could not search {file} for a copyright notice: {err:#}"),
            }
        }
        warn!("No copyright notice found for {}", self.name);
    }
}

/// First line of the file that looks like a copyright notice.
pub(crate) fn find_copyright(path: &Path) -> Result<Option<String>> {
    let content = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let content = String::from_utf8_lossy(&content);
    Ok(content.lines().find_map(|line| {
        COPYRIGHT_REGEX
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|notice| notice.as_str().to_string())
    }))
}
