use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: `a/b/../c` becomes `a/c` and `a/./b` becomes
/// `a/b`. Leading `..` components of a relative path are kept.
pub fn clean_path(path: &str) -> String {
    let mut ret = PathBuf::with_capacity(path.len());
    for c in Path::new(path).components() {
        match c {
            Component::Normal(_) | Component::RootDir | Component::Prefix(_) => ret.push(c),
            Component::ParentDir => match ret.components().next_back() {
                Some(Component::Normal(_)) => {
                    ret.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => ret.push(c),
            },
            Component::CurDir => {}
        }
    }
    if ret.as_os_str().is_empty() {
        return ".".to_string();
    }
    ret.to_string_lossy().into_owned()
}

/// The last `/`-separated element of a path, ignoring trailing slashes.
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { "." } else { "/" };
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
