//! Choosing between alternative license sets and combining conjunctive ones.
//!
//! When a package is offered under `A OR B`, we prefer the set with the
//! fewest obligations: licenses without a notice requirement first, then the
//! common permissive licenses, then anything else. Copyleft and commercial
//! licenses are avoided whenever there is an alternative.

use lazy_static::lazy_static;
use regex::Regex;

use super::License;

lazy_static! {
    /// Licenses we definitely prefer to avoid.
    static ref BAD_LICENSE_REGEX: Regex =
        Regex::new(r"^(?:A?GPL|Commercial)").expect("Invalid bad license regex");

    /// Known-good licenses, best first.
    static ref GOOD_LICENSE_REGEXES: [Regex; 2] = [
        // No notice requirement.
        Regex::new(r"^(?i:0BSD|Unlicense|Public Domain|WTFPL|Zlib)\b")
            .expect("Invalid no-notice license regex"),
        // Commonly known permissive licenses.
        Regex::new(r"^(?i:BSD|BSL|AFL|Apache|MIT|Python|PSF|MPL)\b")
            .expect("Invalid permissive license regex"),
    ];
}

const OTHER_PRIORITY: usize = 2;
const EMPTY_LIST_PRIORITY: usize = 3;
const BAD_PRIORITY: usize = 4;

/// Priority of a single license ID. Lower is better.
fn license_priority(id: &str) -> usize {
    if BAD_LICENSE_REGEX.is_match(id) {
        return BAD_PRIORITY;
    }
    GOOD_LICENSE_REGEXES
        .iter()
        .position(|re| re.is_match(id))
        .unwrap_or(OTHER_PRIORITY)
}

/// A set of licenses is only as good as its worst member.
fn license_list_priority(licenses: &[License]) -> usize {
    if licenses.is_empty() {
        return EMPTY_LIST_PRIORITY;
    }
    licenses
        .iter()
        .map(|license| license_priority(&license.canonical_id))
        .max()
        .unwrap_or(EMPTY_LIST_PRIORITY)
}

/// Pick the preferable of two alternative license sets.
///
/// An empty set always loses. Otherwise the set with the better priority
/// wins, with ties going to the shorter set and then to `first`.
pub fn pick_license(first: Vec<License>, second: Vec<License>) -> Vec<License> {
    if second.is_empty() {
        return first;
    }
    if first.is_empty() {
        return second;
    }
    let p1 = license_list_priority(&first);
    if p1 == 0 && second.len() >= first.len() {
        return first;
    }
    let p2 = license_list_priority(&second);
    if p1 < p2 || (p1 == p2 && second.len() >= first.len()) {
        first
    } else {
        second
    }
}

/// Combine two license sets which both apply, skipping duplicate IDs.
///
/// Order is preserved: everything in `first`, followed by whatever from
/// `second` was not already present. This handles `MIT AND (MIT OR Apache-2.0)`.
pub fn merge_and(mut first: Vec<License>, second: Vec<License>) -> Vec<License> {
    if first.is_empty() {
        return second;
    }
    for item in second {
        if !first
            .iter()
            .any(|existing| existing.canonical_id == item.canonical_id)
        {
            first.push(item);
        }
    }
    first
}
