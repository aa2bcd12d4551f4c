//! Parsers for the `info/index.json` and `info/link.json` files of an
//! extracted conda package.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::utils::file::read_optional;

/// Package identity and dependencies from `info/index.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IndexJson {
    #[serde(default)]
    pub name: String,
    /// Name of the application entry point, for packages which declare one.
    #[serde(default, rename = "app_entry")]
    pub entry: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub build: String,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub subdir: String,
    /// Match specs such as `python >=3.8,<3.9.0a0`.
    #[serde(default)]
    pub depends: Vec<String>,
}

impl IndexJson {
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join("info").join("index.json");
        let content =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }
}

#[derive(Debug, Default, Deserialize)]
struct LinkJson {
    #[serde(default)]
    noarch: NoArch,
}

/// The `noarch` section of `info/link.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoArch {
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Console scripts, as `name = module:function`.
    #[serde(default)]
    pub entry_points: Vec<String>,
}

impl NoArch {
    /// Read `info/link.json`. Packages without one are architecture
    /// specific.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join("info").join("link.json");
        let Some(content) = read_optional(&path)? else {
            return Ok(NoArch::default());
        };
        let link: LinkJson = serde_json::from_slice(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(link.noarch)
    }

    /// True for `noarch: python` packages, whose files are relocated under
    /// the Python prefix when installed.
    pub fn is_python(&self) -> bool {
        self.kind == "python"
    }
}
