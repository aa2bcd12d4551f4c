use std::collections::HashMap;

use lazy_static::lazy_static;

use super::License;
use super::known_licenses::KNOWN_LICENSES;

lazy_static! {
    static ref EXACT_INDEX: HashMap<&'static str, &'static str> =
        KNOWN_LICENSES.iter().copied().collect();
}

/// Look up a normalized license ID in the known-license table.
///
/// The returned license keeps the ID as it was passed in, so a
/// case-insensitive hit such as `zlib` is reported as `zlib` rather than
/// `Zlib`. Public Domain equivalents carry no kinds.
pub fn get_known(id: &str) -> Option<License> {
    if id.eq_ignore_ascii_case("Public Domain") || id.eq_ignore_ascii_case("10X Genomics") {
        return Some(License::new("Public Domain", Vec::new()));
    }
    if let Some(kind) = EXACT_INDEX.get(id) {
        return Some(License::new(id, vec![kind.to_string()]));
    }
    KNOWN_LICENSES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(id))
        .map(|(_, kind)| License::new(id, vec![kind.to_string()]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_exact() {
        let license = get_known("MIT").unwrap();
        assert_eq!(license.canonical_id, "MIT");
        assert_eq!(license.kinds, vec!["@rules_license//licenses/spdx:MIT"]);
    }

    #[test]
    fn test_get_known_keeps_input_capitalization() {
        let license = get_known("zlib").unwrap();
        assert_eq!(license.canonical_id, "zlib");
        assert_eq!(license.kinds, vec!["@rules_license//licenses/spdx:Zlib"]);
    }

    #[test]
    fn test_get_known_public_domain_has_no_kinds() {
        for id in ["Public Domain", "public domain", "10X Genomics"] {
            let license = get_known(id).unwrap();
            assert_eq!(license.canonical_id, "Public Domain");
            assert!(license.kinds.is_empty());
        }
    }

    #[test]
    fn test_get_known_vendor_kinds() {
        let license = get_known("cuDNN").unwrap();
        assert_eq!(license.kinds, vec!["@rules_conda//licensing/known:cuDNN"]);
    }

    #[test]
    fn test_get_known_unknown() {
        assert!(get_known("Free software (MIT-like)").is_none());
        assert!(get_known("").is_none());
    }
}
