//! License identifier normalization.
//!
//! Conda metadata spells the same license in many ways (`BSD 3-clause`,
//! `3-clause BSD`, `BSD License`, `GNU GPL v2+`). Normalization rewrites a
//! single license term into the spelling used by the known-license table so
//! that lookup can be an exact (or case-insensitive) string comparison.
//!
//! # Implementation Notes
//! - Fixups are an ordered table of `(pattern, replacement)` pairs. Later
//!   rules depend on the output of earlier ones, so the order is significant.
//! - After the fixups, a bare family name gets a default version and a small
//!   redirect table maps known aliases onto their SPDX equivalents.

use lazy_static::lazy_static;
use regex::Regex;

/// One rewrite applied to every license term.
struct Fixup {
    pattern: Regex,
    replacement: &'static str,
}

impl Fixup {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Fixup {
            pattern: Regex::new(pattern).expect("Invalid license fixup regex"),
            replacement,
        }
    }
}

lazy_static! {
    static ref FIXUPS: Vec<Fixup> = vec![
        // British spelling.
        Fixup::new(r"(?i:\bLicence\b)", "License"),
        Fixup::new(r"(?i:GNU (?:General Public License|([AL]?)GPL))", "${1}GPL"),
        Fixup::new(r"(?i:Affero GPL)", "AGPL"),
        // `GPL v2`, `Apache License 2.0`, `MPL2` and friends.
        Fixup::new(
            concat!(
                r"^(?i:([AL]?GPL|BSD|AFL|Apache|MIT|MPL|PSF|EPL))",
                r"(?i:\s+license\s+)?",
                r"(?:[- ]?(?:v|(?i:version\s*))?)?",
                r"([0-9.]+)",
            ),
            "$1-$2",
        ),
        Fixup::new(
            r"(?i:BSD-(\d)(?:[- ]clause)?)|(?i:(\d)[- ]clause[- ]BSD)",
            "BSD-$1$2-Clause",
        ),
        Fixup::new(
            r"(?i:Public[ -]Domain(?:[- ]Dedict?ation)?(?:\s*\([^)]*\))?)",
            "Public Domain",
        ),
        Fixup::new(r"(?i:GPL-)(\d+)\+", "GPL-${1}.0-or-later"),
        Fixup::new(
            concat!(
                r"(?i:GPL)-([0-9.]+)(?i:-only|-or-later)?",
                r"(?i:[- ]WITH[- ]GCC[- ])",
                r"(?i:exception|Runtime Library)(?:-[0-9.]+)?",
            ),
            "GPL-$1-with-GCC-exception",
        ),
        // `Apache Software License`, `Biopython License Agreement`.
        Fixup::new(
            r"(?i:(?:\s+|-)Software)?(?i:(?:\s+|-)License(?:(?:\s+|-)Agreement)?)$",
            "",
        ),
    ];

    static ref GUESS_VERSION_REGEX: Regex = Regex::new(concat!(
        r"^(?i:([AL]?GPL|BSL|Boost|bzip2|AFL|Apache|MPL|PSF|EPL|OFL)|(BSD(?:[- ]like)?))",
        r"(?:-(\d+))?$",
    ))
    .expect("Invalid version guessing regex");
}

/// Rewrite a single license term into the spelling used by the known-license
/// table.
///
/// This never fails; a term that matches no rule comes back unchanged (apart
/// from a stripped `LicenseRef-` prefix).
pub fn normalize_license_id(id: &str) -> String {
    let mut id = id.strip_prefix("LicenseRef-").unwrap_or(id).to_string();
    for fixup in FIXUPS.iter() {
        id = fixup
            .pattern
            .replace_all(&id, fixup.replacement)
            .into_owned();
    }
    let id = assume_version(&id);
    match redirect_license(&id) {
        Some(redirect) => redirect.to_string(),
        None => id,
    }
}

/// Supply the customary version for a license family given without one.
///
/// Family names are compared case-sensitively here: `apache` is not assumed
/// to mean `Apache-2.0`.
pub(crate) fn assume_version(id: &str) -> String {
    if id.eq_ignore_ascii_case("BSD") {
        return "BSD-3-Clause".to_string();
    }
    let Some(caps) = GUESS_VERSION_REGEX.captures(id) else {
        return id.to_string();
    };
    let family = caps.get(1).map_or("", |m| m.as_str());
    let bsd_like = caps.get(2).is_some();
    if let Some(version) = caps.get(3) {
        let version = version.as_str();
        return if bsd_like {
            format!("BSD-{version}-Clause")
        } else {
            format!("{family}-{version}.0")
        };
    }
    match family {
        "AFL" | "AGPL" => format!("{family}-3.0"),
        "LGPL" => "LGPL-2.1".to_string(),
        "BSL" | "Boost" => "BSL-1.0".to_string(),
        "GPL" => "GPL-2.0-or-later".to_string(),
        "Apache" | "EPL" | "MPL" | "PSF" => format!("{family}-2.0"),
        "OFL" => "OFL-1.1".to_string(),
        "bzip2" => "bzip2-1.0.6".to_string(),
        _ if bsd_like => "BSD-3-Clause".to_string(),
        _ => id.to_string(),
    }
}

/// Licenses which are better described by an equivalent known license.
pub(crate) fn redirect_license(id: &str) -> Option<&'static str> {
    let redirect = match id {
        "Apache-2.0 WITH LLVM-exception" | "Apache Software" => "Apache-2.0",
        "C News-like" => "BSD-3-Clause",
        "MIT/X derivate (http://curl.haxx.se/docs/copyright.html)" => "curl",
        "SIL Open Font License, Version 1.1" => "OFL-1.1",
        "fitsio" => "Public Domain",
        "ISC (ISCL)" => "ISC",
        "Tcl/Tk" => "TCL",
        "zlib/libpng" => "zlib-acknowledgement",
        "Boost-1.0" => "BSL-1.0",
        "Perl Artistic" => "Artistic-1.0-Perl",
        "Ubuntu Font License Version 1.0" => "UFL-1.0",
        "FreeType" => "FTL",
        // The trailing-`License` fixup truncates this SPDX ID.
        "BSD-3-Clause-No-Nuclear" => "BSD-3-Clause-No-Nuclear-License",
        _ => return None,
    };
    Some(redirect)
}
