#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::super::paths::{FileMode, PathEntry, PathType, PathsManifest, SymlinkEntry};

    fn write(root: &Path, path: &str, content: &str) {
        let path = root.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_paths_json() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "info/paths.json",
            r#"{
  "paths": [
    {
      "_path": "bin/python3.9",
      "path_type": "hardlink",
      "sha256": "3fa4f6e0c1ac2cbc1e4e6e2ef2c6b3e3a5f5e0d9b0e6a0c5b4c1f3b2c2e6a2d1",
      "size_in_bytes": 15826384
    },
    {
      "_path": "bin/python3.9-config",
      "file_mode": "text",
      "path_type": "hardlink",
      "prefix_placeholder": "/opt/conda/conda-bld/python_1/_h_env_placehold",
      "size_in_bytes": 3214
    },
    {
      "_path": "bin/python",
      "path_type": "softlink",
      "no_link": true
    }
  ],
  "paths_version": 1
}"#,
        );
        let manifest = PathsManifest::load(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.manifest, vec!["info/paths.json"]);
        assert_eq!(manifest.paths.len(), 3);
        assert_eq!(manifest.paths[0], PathEntry::new("bin/python3.9"));
        assert!(!manifest.paths[0].needs_translate());
        assert_eq!(manifest.paths[1].file_mode, FileMode::Text);
        assert!(manifest.paths[1].needs_translate());
        assert_eq!(manifest.paths[2].path_type, PathType::Softlink);
        assert!(manifest.paths[2].no_link);
    }

    #[test]
    fn test_load_paths_json_takes_precedence() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "info/paths.json", r#"{"paths": [{"_path": "a"}]}"#);
        write(dir.path(), "info/files", "b\n");
        let manifest = PathsManifest::load(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.paths, vec![PathEntry::new("a")]);
    }

    #[test]
    fn test_load_files_json_legacy_keys() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "info/files.json",
            r#"{
  "files": [
    {"path": "lib/libz.so", "file_type": "softlink"},
    {"_path": "include/zlib.h", "path_type": "hardlink", "file_mode": "text", "prefix_placeholder": "/opt/anaconda1anaconda2anaconda3"}
  ]
}"#,
        );
        let manifest = PathsManifest::load(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.manifest, vec!["info/files.json"]);
        assert_eq!(manifest.paths[0].path, "lib/libz.so");
        assert_eq!(manifest.paths[0].path_type, PathType::Softlink);
        assert_eq!(manifest.paths[1].path, "include/zlib.h");
        assert!(manifest.paths[1].needs_translate());
    }

    #[test]
    fn test_load_files_with_has_prefix_and_no_link() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "info/files",
            "bin/gzip\n  bin/zcat  \n\nlib/libz.a\nshare/doc.txt\n",
        );
        write(
            dir.path(),
            "info/has_prefix",
            "/opt/anaconda1anaconda2anaconda3 text bin/zcat\n\
             /opt/anaconda1anaconda2anaconda3 binary lib/libz.a\n\
             share/doc.txt\n",
        );
        write(dir.path(), "info/no_link", "bin/gzip\n");
        let manifest = PathsManifest::load(dir.path()).unwrap().unwrap();
        assert_eq!(
            manifest.manifest,
            vec!["info/files", "info/has_prefix", "info/no_link"]
        );
        let paths: Vec<&str> = manifest.paths.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, vec!["bin/gzip", "bin/zcat", "lib/libz.a", "share/doc.txt"]);

        assert!(manifest.paths[0].no_link);
        assert!(!manifest.paths[0].needs_translate());
        assert_eq!(manifest.paths[1].file_mode, FileMode::Text);
        assert_eq!(
            manifest.paths[1].prefix_placeholder,
            "/opt/anaconda1anaconda2anaconda3"
        );
        assert!(!manifest.paths[1].no_link);
        assert_eq!(manifest.paths[2].file_mode, FileMode::Binary);
        assert!(!manifest.paths[3].needs_translate());
    }

    #[test]
    fn test_load_files_empty_metadata_not_listed() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "info/files", "bin/gzip\n");
        write(dir.path(), "info/has_prefix", "");
        let manifest = PathsManifest::load(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.manifest, vec!["info/files"]);
    }

    #[test]
    fn test_load_without_manifest() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("info")).unwrap();
        assert_eq!(PathsManifest::load(dir.path()).unwrap(), None);
    }

    #[test]
    fn test_load_malformed_paths_json() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "info/paths.json", "{");
        let err = PathsManifest::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("info/paths.json"));
    }

    #[cfg(unix)]
    #[test]
    fn test_files_list() {
        use std::os::unix::fs::{PermissionsExt, symlink};

        let dir = TempDir::new().unwrap();
        write(dir.path(), "bin/gzip", "#!/bin/sh\n");
        fs::set_permissions(
            dir.path().join("bin/gzip"),
            fs::Permissions::from_mode(0o755),
        )
        .unwrap();
        write(dir.path(), "lib/libz.so.1.2.12", "");
        symlink("libz.so.1.2.12", dir.path().join("lib/libz.so")).unwrap();
        symlink("missing.so", dir.path().join("lib/broken.so")).unwrap();
        write(dir.path(), "share/with space.txt", "");
        fs::create_dir_all(dir.path().join("share/empty")).unwrap();

        let manifest = PathsManifest {
            paths: [
                "bin/gzip",
                "lib/libz.so.1.2.12",
                "lib/libz.so",
                "lib/broken.so",
                "lib/not-there.so",
                "share/with space.txt",
                "share/empty",
            ]
            .into_iter()
            .map(PathEntry::new)
            .collect(),
            manifest: vec!["info/files".to_string()],
        };
        let listing = manifest.files_list(dir.path()).unwrap();
        let files: Vec<&str> = listing.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(files, vec!["bin/gzip", "lib/libz.so.1.2.12", "share/empty"]);
        assert_eq!(
            listing.symlinks,
            vec![SymlinkEntry {
                location: "lib/libz.so".to_string(),
                target: "libz.so.1.2.12".to_string(),
            }]
        );
        assert_eq!(listing.executables, vec!["bin/gzip"]);
    }
}
