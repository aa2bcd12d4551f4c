//! `BUILD.bazel` generation for an extracted conda package.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use log::info;

use super::Package;
use super::paths::FileListing;
use crate::starlark::{Call, Expr, Statement, serialize};

const RULES_CONDA: &str = "@rules_conda";
const PUBLIC_VISIBILITY: &str = "//visibility:public";
const INDEX_JSON: &str = "info/index.json";

/// Settings for [`Package::write_build_file`].
#[derive(Debug, Clone)]
pub struct BuildFileOptions {
    /// Packages to depend on which the package metadata omits.
    pub include_deps: Vec<String>,
    /// Packages the metadata lists which should not be depended on.
    pub exclude_deps: Vec<String>,
    /// The repository containing every package of the environment.
    pub conda_repo: String,
    /// Recorded in the header comment.
    pub dist_name: String,
    /// Where the package was downloaded from.
    pub url: String,
}

impl Default for BuildFileOptions {
    fn default() -> Self {
        BuildFileOptions {
            include_deps: Vec::new(),
            exclude_deps: Vec::new(),
            conda_repo: super::DEFAULT_CONDA_REPO.to_string(),
            dist_name: String::new(),
            url: String::new(),
        }
    }
}

impl BuildFileOptions {
    /// The conda repository as a label, with a leading `@`.
    fn repo_label(&self) -> String {
        if self.conda_repo.starts_with('@') {
            self.conda_repo.clone()
        } else {
            format!("@{}", self.conda_repo)
        }
    }
}

impl Package {
    /// The `conda_deps` rule, listing the packages this one depends on.
    ///
    /// Virtual packages (`__glibc` and friends) are skipped.
    pub fn deps_rule(&self, include_deps: &[String], exclude_deps: &[String], repo: &str) -> Call {
        let mut deps = BTreeSet::new();
        for spec in &self.index.depends {
            let spec = spec.trim();
            let dep = spec.split_once(' ').map_or(spec, |(name, _)| name);
            if !dep.starts_with("__") && !exclude_deps.iter().any(|excluded| excluded == dep) {
                deps.insert(format!("{repo}//:{dep}"));
            }
        }
        for dep in include_deps {
            let dep = dep.trim();
            if !dep.is_empty() {
                deps.insert(format!("{repo}//:{dep}"));
            }
        }
        Call::new("conda_deps")
            .str_arg("name", "conda_deps")
            .arg("deps", Expr::str_list(deps))
            .arg("visibility", Expr::str_list([format!("{repo}//:__pkg__")]))
    }

    /// The `conda_manifest` rule, describing the package's files.
    pub fn manifest_rule(&self, listing: &FileListing<'_>) -> Result<Call> {
        let (manifest, info_files) = self
            .paths
            .manifest
            .split_first()
            .ok_or_else(|| anyhow!("{} has no file manifest", self.name()))?;
        let mut call = Call::new("conda_manifest")
            .str_arg("name", "conda_metadata")
            .str_arg("manifest", manifest)
            .str_arg("index", INDEX_JSON)
            .arg(
                "info_files",
                Expr::str_list(info_files.iter().map(String::as_str).chain([INDEX_JSON])),
            );
        if !listing.symlinks.is_empty() {
            call = call.arg(
                "symlinks",
                Expr::Dict(
                    listing
                        .symlinks
                        .iter()
                        .map(|link| (link.location.clone(), link.target.clone()))
                        .collect(),
                ),
            );
        }
        if self.link_python() {
            call = call
                .str_arg("noarch", "python")
                .arg("python_prefix", Expr::ident("PYTHON_PREFIX"));
        }
        call = call.opt_str_arg("executable", self.executable().as_deref());
        if !listing.executables.is_empty() {
            call = call.arg(
                "executables",
                Expr::str_list(listing.executables.iter().cloned()),
            );
        }
        Ok(call.arg("visibility", Expr::str_list([PUBLIC_VISIBILITY])))
    }

    /// All statements of the package's BUILD file.
    pub fn build_file(&self, options: &BuildFileOptions) -> Result<Vec<Statement>> {
        info!("Generating BUILD file for {}", self.repo_name());
        let repo = options.repo_label();
        let listing = self.paths.files_list(&self.dir)?;

        let mut statements = vec![
            Statement::Comment(format!("Generated BUILD file for {}", self.name())),
            Statement::Comment(format!("Package dist name: {}", options.dist_name)),
            Statement::load(
                format!("{RULES_CONDA}//rules:conda_manifest.bzl"),
                ["conda_deps", "conda_manifest"],
            ),
        ];
        if self.link_python() {
            statements.push(Statement::load(
                "@conda_package_python//:vars.bzl",
                ["PYTHON_PREFIX"],
            ));
        }
        statements.extend(
            self.license
                .rules(self.name(), &self.index.version, &options.url),
        );
        statements.push(self.manifest_rule(&listing)?.into());
        statements.push(
            self.deps_rule(&options.include_deps, &options.exclude_deps, &repo)
                .into(),
        );
        Ok(statements)
    }

    /// Write `BUILD.bazel` into the package directory.
    pub fn write_build_file(&self, options: &BuildFileOptions) -> Result<PathBuf> {
        let content = serialize(&self.build_file(options)?);
        let path = self.dir.join("BUILD.bazel");
        fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}
