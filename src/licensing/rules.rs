//! `rules_license` declarations for a package.
//!
//! Emits one `license` rule per license file, a `package_info` rule
//! carrying the package URL, and the `package` call which applies them all
//! to every target in the BUILD file.

use std::collections::HashSet;

use log::warn;

use super::License;
use super::info::LicenseInfo;
use crate::starlark::{Call, Expr, Statement};
use crate::utils::path::base_name;

const LICENSE_BZL: &str = "@rules_license//rules:license.bzl";
const PACKAGE_INFO_BZL: &str = "@rules_license//rules:package_info.bzl";
const PACKAGE_INFO_NAME: &str = "package_info";

impl License {
    /// Target name for this license, derived from its file.
    ///
    /// With several license files, each in a distinct directory, the whole
    /// path (with `/` flattened to `_`) is used so that names stay unique.
    pub fn name_from_file(&self, all: &[License]) -> String {
        let file = self.file.as_deref().unwrap_or_default();
        if all.len() > 1 {
            let flattened: HashSet<String> = all
                .iter()
                .map(|license| license.file.as_deref().unwrap_or_default().replace('/', "_"))
                .collect();
            if flattened.len() == all.len() {
                return file.replace('/', "_");
            }
            return base_name(file).to_string();
        }
        let name = base_name(file);
        let name = name.strip_suffix(".md").unwrap_or(name);
        let name = name.strip_suffix(".txt").unwrap_or(name);
        let name = name.strip_suffix(".markdown").unwrap_or(name);
        name.to_string()
    }

    /// The `license` rule for this license. Returns `None` when there is no
    /// license text to point at.
    pub fn license_rule(
        &self,
        name: &str,
        package_name: &str,
        version: Option<&str>,
        url: Option<&str>,
    ) -> Option<Call> {
        let file = self.file.as_deref()?;
        let call = Call::new("license")
            .str_arg("name", name)
            .str_arg("package_name", package_name)
            .arg(
                "license_kinds",
                Expr::str_list(self.kinds.iter().cloned()).multiline(!self.kinds.is_empty()),
            )
            .opt_str_arg("package_version", version)
            .opt_str_arg("package_url", url)
            .str_arg("license_text", file)
            .opt_str_arg("copyright_notice", self.copyright.as_deref());
        Some(call)
    }
}

impl LicenseInfo {
    fn metadata_rule(&self, package_name: &str, version: Option<&str>, url: Option<&str>) -> Call {
        let call = Call::new("package_info")
            .str_arg("name", PACKAGE_INFO_NAME)
            .str_arg("package_name", package_name)
            .opt_str_arg("package_version", version)
            .opt_str_arg("package_url", url);
        if self.source.is_empty() || self.name.is_empty() {
            return call;
        }
        call.opt_str_arg("purl", self.purl(version).as_deref())
    }

    /// Statements declaring the package's licenses: the loads, the
    /// `package(default_applicable_licenses = ...)` call, the `license`
    /// rules and the `package_info` rule.
    ///
    /// Returns nothing for a package without licenses.
    pub fn rules(&self, package_name: &str, version: &str, url: &str) -> Vec<Statement> {
        if self.licenses.is_empty() {
            return Vec::new();
        }
        let version = Some(version).filter(|v| !v.is_empty());
        let url = Some(url).filter(|u| !u.is_empty());

        let mut names = Vec::with_capacity(self.licenses.len() + 1);
        let mut license_rules = Vec::with_capacity(self.licenses.len());
        for license in &self.licenses {
            let name = if self.licenses.len() == 1 {
                "license".to_string()
            } else {
                license.name_from_file(&self.licenses)
            };
            // rules_license requires license_text.
            match license.license_rule(&name, package_name, version, url) {
                Some(rule) => {
                    names.push(name);
                    license_rules.push(Statement::Call(rule));
                }
                None => warn!(
                    "No license file found for {} ({}); omitting its license rule",
                    package_name, license.canonical_id
                ),
            }
        }
        names.push(PACKAGE_INFO_NAME.to_string());

        let mut result = Vec::with_capacity(license_rules.len() + 4);
        result.push(Statement::load(LICENSE_BZL, ["license"]));
        result.push(Statement::load(PACKAGE_INFO_BZL, ["package_info"]));
        let multiline = names.len() > 1;
        result.push(
            Call::new("package")
                .arg(
                    "default_applicable_licenses",
                    Expr::str_list(names).multiline(multiline),
                )
                .into(),
        );
        result.extend(license_rules);
        result.push(self.metadata_rule(package_name, version, url).into());
        result
    }
}
