//! Parsing of conda license expressions.
//!
//! Conda's `license` field is free text. It is usually something SPDX-like
//! (`BSD-3-Clause AND (PSF-2.0 OR MIT)`) but just as often `Adobe+GPLv2`,
//! `Commercial, GPL-2.0, GPL-3.0` or `BSD-3-Clause/MIT`. Rather than
//! tokenizing, the parser searches for the first connective in the remaining
//! text and recurses on either side, resolving OR choices as soon as both
//! alternatives are known.
//!
//! # Implementation Notes
//! - Operators bind left to right with no AND-over-OR precedence:
//!   `A OR B AND C` is `A OR (B AND C)` and `A AND B OR C` is
//!   `(A AND B) OR C`.
//! - Every intermediate result is a [`Split`]: the licenses that definitely
//!   apply (`primary`) and a still-open alternative (`alternate`). Keeping the
//!   alternative open lets a later AND attach to it.
//! - A `/` is only treated as OR when the whole term is not itself a known
//!   license (`Tcl/Tk`, `zlib/libpng`).

use lazy_static::lazy_static;
use regex::Regex;

use super::error::LicenseError;
use super::known::get_known;
use super::normalize::normalize_license_id;
use super::picker::{merge_and, pick_license};
use super::License;

lazy_static! {
    static ref AND_OR_REGEX: Regex = Regex::new(
        r"(?i:.\s+and\s+.)|(?:\s*[^0-9]\+\s*.)|(?:.,\s*[^vV\s])|(?i:.\s+or\s+.)"
    )
    .expect("Invalid connective regex");
    static ref OR_START_REGEX: Regex = Regex::new(r"^(?i:or)\s").expect("Invalid OR regex");
    static ref AND_START_REGEX: Regex = Regex::new(r"^(?i:and)\s").expect("Invalid AND regex");
}

/// The partial result of parsing a license expression.
///
/// `primary` applies unless `alternate` is chosen instead; an empty
/// `alternate` means there is no open choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Split {
    pub primary: Vec<License>,
    pub alternate: Vec<License>,
}

impl Split {
    fn leaf(license: License) -> Self {
        Split {
            primary: vec![license],
            alternate: Vec::new(),
        }
    }

    /// Resolve the open choice.
    pub fn pick(self) -> Vec<License> {
        pick_license(self.primary, self.alternate)
    }
}

/// Split `id` at its first AND/OR connective.
///
/// Returns the text on either side and whether the connective was an OR.
/// The comma and `+` forms count as AND. Commas followed by `v` do not split,
/// so `SIL Open Font License, Version 1.1` stays whole.
pub(crate) fn split_and_or(id: &str) -> Option<(&str, &str, bool)> {
    let found = AND_OR_REGEX.find(id)?;
    // The match starts and ends on a character belonging to the operands.
    let first_len = id[found.start()..].chars().next().map_or(0, char::len_utf8);
    let last_len = id[..found.end()].chars().next_back().map_or(0, char::len_utf8);
    let left_end = found.start() + first_len;
    let is_or = OR_START_REGEX.is_match(id[left_end..].trim());
    Some((&id[..left_end], &id[found.end() - last_len..], is_or))
}

/// Byte index of the parenthesis closing the one `id` starts with.
pub(crate) fn find_close(id: &str) -> Option<usize> {
    let mut open = 0usize;
    for (i, c) in id.char_indices() {
        match c {
            '(' => open += 1,
            ')' => open = open.saturating_sub(1),
            _ => {}
        }
        if open == 0 {
            return Some(i);
        }
    }
    None
}

/// `[prefix AND] a1 OR a2 OR b1 OR b2 = [prefix AND] a1 OR (a2 OR b1 OR b2)`
fn license_or(first: Split, second: Split) -> Split {
    Split {
        primary: first.primary,
        alternate: pick_license(first.alternate, second.pick()),
    }
}

fn license_and(first: Split, second: Split) -> Split {
    if first.alternate.is_empty() {
        // [prefix AND] a1 AND b1 OR b2 = ([prefix AND] a1 AND b1) OR b2
        return Split {
            primary: merge_and(first.primary, second.primary),
            alternate: second.alternate,
        };
    }
    // [prefix AND] a1 OR a2 AND b1 OR b2 = [prefix AND] a1 OR (a2 AND b1 OR b2)
    Split {
        primary: first.primary,
        alternate: pick_license(merge_and(first.alternate, second.primary), second.alternate),
    }
}

/// Parse a license expression into the licenses that apply.
///
/// OR clauses are collapsed eagerly as the expression is consumed:
///
/// ```text
///  A  OR   B AND C  OR   D AND E AND F  OR  G
/// (A) OR  (B AND C  OR   D AND E AND F  OR  G)
/// (A) OR ((B AND C) OR  (D AND E AND F  OR  G))
/// (A) OR ((B AND C) OR ((D AND E AND F) OR (G)))
/// (A) OR ((B AND C) OR  (D AND E AND F))
/// (A) OR  (B AND C)
///  A
/// ```
///
/// An empty expression yields a single license with no ID or kinds. The
/// literal `others` yields nothing at all.
pub fn split_license(id: &str) -> Result<Split, LicenseError> {
    let id = id.trim();
    if id.is_empty() {
        return Ok(Split::leaf(License::default()));
    }
    if id.starts_with('(')
        && let Some(split) = split_parenthetical(id)?
    {
        return Ok(split);
    }
    if let Some((left, right, is_or)) = split_and_or(id) {
        let clause = |err: LicenseError| {
            if is_or {
                err.context(format!("or clause {id:?} ({left:?} OR {right:?})"))
            } else {
                err.context(format!("and clause {id:?} ({left:?} AND {right:?})"))
            }
        };
        let first = split_license(left).map_err(clause)?;
        let second = split_license(right).map_err(clause)?;
        return Ok(if is_or {
            license_or(first, second)
        } else {
            license_and(first, second)
        });
    }
    if id.eq_ignore_ascii_case("others") {
        return Ok(Split::default());
    }
    match canonicalize_license(id) {
        Ok(license) => Ok(Split::leaf(license)),
        Err(err) => {
            // Conda uses `A/B` for dual licensing.
            if let Some((first, second)) = id.split_once('/')
                && !second.is_empty()
                && let Ok(first) = split_license(first)
                && let Ok(second) = split_license(second)
            {
                return Ok(license_or(first, second));
            }
            Err(err.context(format!("parsing {id:?}")))
        }
    }
}

/// Handle an expression starting with a parenthesized clause.
///
/// Returns `None` when the text after the closing parenthesis does not begin
/// with a connective, in which case the caller splits the whole expression.
fn split_parenthetical(id: &str) -> Result<Option<Split>, LicenseError> {
    let close = find_close(id).ok_or_else(|| LicenseError::UnbalancedParenthesis {
        expression: id.to_string(),
    })?;
    let head = &id[1..close];
    let first = split_license(head)
        .map_err(|err| err.context(format!("parenthetical clause ({head:?})")))?
        .pick();
    let tail = id[close + 1..].trim();
    if tail.is_empty() {
        return Ok(Some(Split {
            primary: first,
            alternate: Vec::new(),
        }));
    }
    if let Some(found) = OR_START_REGEX.find(tail) {
        // PREFIX AND X OR Y OR Z = PREFIX AND X OR (Y OR Z)
        let rest = &tail[found.end()..];
        let second = split_license(rest).map_err(|err| {
            err.context(format!("or clause {id:?} (({head:?}) OR {rest:?})"))
        })?;
        return Ok(Some(Split {
            primary: first,
            alternate: second.pick(),
        }));
    }
    if let Some(found) = AND_START_REGEX.find(tail) {
        // PREFIX AND X AND Y OR Z = (PREFIX AND X AND Y) OR Z
        let rest = &tail[found.end()..];
        let second = split_license(rest).map_err(|err| {
            err.context(format!("and clause {id:?} (({head:?}) AND {rest:?})"))
        })?;
        return Ok(Some(Split {
            primary: merge_and(first, second.primary),
            alternate: second.alternate,
        }));
    }
    Ok(None)
}

/// Resolve a single license term.
pub fn canonicalize_license(id: &str) -> Result<License, LicenseError> {
    if id.is_empty() || id.eq_ignore_ascii_case("unknown") {
        return Err(LicenseError::MissingLicense);
    }
    let normalized = normalize_license_id(id);
    get_known(&normalized).ok_or(LicenseError::UnrecognizedLicenseId { id: normalized })
}

/// Resolve a complete license expression into a single license record.
///
/// When several licenses apply, the record carries the original expression
/// as its ID and the kinds of every applicable license, in order.
pub fn get_license(expression: &str) -> Result<License, LicenseError> {
    let trimmed = expression.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("unknown") {
        return Err(LicenseError::MissingLicense);
    }
    // `()` parses to the empty record, which is not a license.
    let mut licenses = split_license(expression)?
        .pick()
        .into_iter()
        .filter(|license| !license.canonical_id.is_empty());
    let Some(mut license) = licenses.next() else {
        return Err(LicenseError::MissingLicense);
    };
    let rest: Vec<License> = licenses.collect();
    if !rest.is_empty() {
        license.canonical_id = expression.to_string();
        license.kinds.extend(rest.into_iter().flat_map(|l| l.kinds));
    }
    Ok(license)
}
