use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};

/// `*` and `?` never match `/`, as with shell globs.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Compile exclude patterns, failing on the first malformed one.
pub fn compile_exclude_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).with_context(|| format!("invalid exclude pattern {pattern:?}"))
        })
        .collect()
}

/// Check if a relative path, or any directory containing it, matches one of
/// the exclude patterns.
pub fn is_path_excluded(path: &str, exclude_patterns: &[Pattern]) -> bool {
    if exclude_patterns.is_empty() {
        return false;
    }
    let mut current = Some(path);
    while let Some(candidate) = current {
        if candidate.is_empty() || candidate == "/" || candidate == "." {
            break;
        }
        if exclude_patterns
            .iter()
            .any(|pattern| pattern.matches_with(candidate, MATCH_OPTIONS))
        {
            return true;
        }
        current = candidate.rsplit_once('/').map(|(parent, _)| parent);
    }
    false
}

/// Expand `@listfile` arguments into the paths listed in those files, one
/// per line. Other arguments are passed through unchanged.
pub fn expand_file_list(args: &[String]) -> Result<Vec<String>> {
    let mut result = Vec::with_capacity(args.len());
    for arg in args {
        match arg.strip_prefix('@') {
            Some(list) if !list.is_empty() => {
                let content = fs::read_to_string(list)
                    .with_context(|| format!("reading file list {list}"))?;
                result.extend(
                    content
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty())
                        .map(String::from),
                );
            }
            _ => result.push(arg.clone()),
        }
    }
    Ok(result)
}

/// Read a file which is allowed to be absent.
pub fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("reading {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn patterns(patterns: &[&str]) -> Vec<Pattern> {
        let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        compile_exclude_patterns(&patterns).unwrap()
    }

    #[test]
    fn test_is_path_excluded_matches_parents() {
        let exclude = patterns(&["share/doc", "*.a"]);
        assert!(is_path_excluded("share/doc/zlib/README", &exclude));
        assert!(is_path_excluded("share/doc", &exclude));
        assert!(!is_path_excluded("share/man/zlib.3", &exclude));
    }

    #[test]
    fn test_is_path_excluded_star_does_not_cross_separator() {
        let exclude = patterns(&["*.a"]);
        assert!(!is_path_excluded("lib/libz.a", &exclude));
        let exclude = patterns(&["lib/*.a"]);
        assert!(is_path_excluded("lib/libz.a", &exclude));
        assert!(!is_path_excluded("lib/static/libz.a", &exclude));
    }

    #[test]
    fn test_is_path_excluded_top_level_and_dotfiles() {
        let exclude = patterns(&["man", ".*"]);
        assert!(is_path_excluded("man/man1/gzip.1", &exclude));
        assert!(is_path_excluded(".hidden", &exclude));
        assert!(!is_path_excluded("bin/gzip", &exclude));
    }

    #[test]
    fn test_compile_exclude_patterns_rejects_malformed() {
        assert!(compile_exclude_patterns(&["[".to_string()]).is_err());
    }

    #[test]
    fn test_expand_file_list() {
        let mut list = NamedTempFile::new().unwrap();
        writeln!(list, "bin/python\n\n  lib/libz.so  ").unwrap();
        let arg = format!("@{}", list.path().display());
        let files = expand_file_list(&["share/a".to_string(), arg, "@".to_string()]).unwrap();
        assert_eq!(files, vec!["share/a", "bin/python", "lib/libz.so", "@"]);
    }

    #[test]
    fn test_expand_file_list_missing_file() {
        assert!(expand_file_list(&["@/nonexistent/list".to_string()]).is_err());
    }
}
