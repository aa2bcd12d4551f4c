//! License detection for conda packages.
//!
//! Turns the free-form `license` field of conda metadata into Bazel
//! `license_kind` labels and emits the matching `rules_license` rules.
//!
//! The parsing pipeline, leaves first:
//! 1. [`normalize`] rewrites spellings such as `GPLv2+` or `3-clause BSD`
//!    into SPDX-style IDs.
//! 2. [`known`] maps a normalized ID to its `license_kind` labels.
//! 3. [`expression`] splits AND/OR expressions and resolves them.
//! 4. [`picker`] chooses between OR alternatives and merges AND terms.

pub mod error;
pub mod expression;
pub mod fetch;
pub mod info;
pub mod known;
mod known_licenses;
pub mod normalize;
pub mod picker;
pub mod purl;
pub mod rules;

#[cfg(test)]
mod info_test;

use serde::Serialize;

pub use error::{LicenseError, LicenseErrorKind};
pub use expression::{canonicalize_license, get_license, split_license};
pub use info::LicenseInfo;

/// One license that applies to a package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct License {
    /// Normalized license ID, e.g. `BSD-3-Clause`.
    pub canonical_id: String,
    /// Bazel `license_kind` labels. Empty for Public Domain.
    pub kinds: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    /// License text, relative to the package root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl License {
    pub fn new(canonical_id: impl Into<String>, kinds: Vec<String>) -> Self {
        License {
            canonical_id: canonical_id.into(),
            kinds,
            copyright: None,
            file: None,
        }
    }
}
