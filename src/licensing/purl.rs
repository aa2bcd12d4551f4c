//! Package URLs for generated `package_info` rules.
//!
//! See <https://github.com/package-url/purl-spec>.

use log::warn;
use packageurl::PackageUrl;

/// Source-specific qualifiers added to a package URL.
pub trait PurlQualifiers {
    /// Add every qualifier that is set.
    fn add_to(&self, purl: &mut PackageUrl<'_>) -> Result<(), packageurl::Error>;
}

/// Qualifiers for conda packages.
///
/// See <https://github.com/package-url/purl-spec/blob/master/PURL-TYPES.rst#conda>
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CondaPackageQualifiers {
    pub build: String,
    pub channel: String,
    pub subdir: String,
    pub package_type: String,
}

impl PurlQualifiers for CondaPackageQualifiers {
    fn add_to(&self, purl: &mut PackageUrl<'_>) -> Result<(), packageurl::Error> {
        let qualifiers = [
            ("build", &self.build),
            ("channel", &self.channel),
            ("subdir", &self.subdir),
            ("type", &self.package_type),
        ];
        for (key, value) in qualifiers {
            if !value.is_empty() {
                purl.add_qualifier(key, value.clone())?;
            }
        }
        Ok(())
    }
}

/// Build a package URL such as `pkg:conda/astroid@2.9.0?channel=main`.
///
/// Returns `None` (with a warning) when the parts do not form a valid
/// package URL.
pub fn purl(
    source: &str,
    namespace: Option<&str>,
    name: &str,
    version: Option<&str>,
    qualifiers: Option<&dyn PurlQualifiers>,
) -> Option<String> {
    let mut package_url = match PackageUrl::new(source, name) {
        Ok(purl) => purl,
        Err(e) => {
            warn!("Failed to create PackageUrl for {source} package '{name}': {e}");
            return None;
        }
    };

    if let Some(namespace) = namespace.filter(|ns| !ns.is_empty())
        && let Err(e) = package_url.with_namespace(namespace)
    {
        warn!("Failed to set namespace '{namespace}' for {source} package '{name}': {e}");
        return None;
    }

    if let Some(version) = version.filter(|v| !v.is_empty())
        && let Err(e) = package_url.with_version(version)
    {
        warn!("Failed to set version '{version}' for {source} package '{name}': {e}");
        return None;
    }

    if let Some(qualifiers) = qualifiers
        && let Err(e) = qualifiers.add_to(&mut package_url)
    {
        warn!("Failed to set qualifiers for {source} package '{name}': {e}");
        return None;
    }

    Some(package_url.to_string())
}
