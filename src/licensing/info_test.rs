#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;

    use anyhow::Result;
    use tempfile::TempDir;
    use url::Url;

    use super::super::error::{LicenseError, LicenseErrorKind};
    use super::super::fetch::LicenseFetcher;
    use super::super::info::{AboutJson, LicenseInfo};
    use super::super::purl::CondaPackageQualifiers;

    const MIT: &str = "@rules_license//licenses/spdx:MIT";

    struct StubFetcher {
        body: Option<Vec<u8>>,
        requested: RefCell<Vec<String>>,
    }

    impl StubFetcher {
        fn new(body: Option<&str>) -> Self {
            StubFetcher {
                body: body.map(|b| b.as_bytes().to_vec()),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl LicenseFetcher for StubFetcher {
        fn fetch(&self, url: &Url) -> Result<Option<Vec<u8>>> {
            self.requested.borrow_mut().push(url.to_string());
            Ok(self.body.clone())
        }
    }

    fn package(about: &str, files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "info/about.json", about);
        for (path, content) in files {
            write(dir.path(), path, content);
        }
        dir
    }

    fn write(root: &Path, path: &str, content: &str) {
        let path = root.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn parse_about(json: &str) -> AboutJson {
        serde_json::from_str(json).unwrap()
    }

    fn qualifiers() -> CondaPackageQualifiers {
        CondaPackageQualifiers {
            build: "py39h06a4308_0".to_string(),
            subdir: "linux-64".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_channel_prefers_main() {
        let about = parse_about(
            r#"{"channels": ["https://conda.anaconda.org/conda-forge", "https://repo.anaconda.com/pkgs/main"]}"#,
        );
        assert_eq!(about.channel().as_deref(), Some("main"));
    }

    #[test]
    fn test_channel_free_and_defaults_replace_first() {
        let about = parse_about(r#"{"channels": ["conda-forge", "bioconda", "defaults"]}"#);
        assert_eq!(about.channel().as_deref(), Some("defaults"));
        let about = parse_about(r#"{"channels": ["conda-forge", "bioconda"]}"#);
        assert_eq!(about.channel().as_deref(), Some("conda-forge"));
        assert_eq!(parse_about("{}").channel(), None);
    }

    #[test]
    fn test_license_id_fallbacks() {
        let about = parse_about(r#"{"license": "MIT", "license_family": "BSD"}"#);
        assert_eq!(about.license_id("Apache-2.0"), "MIT");

        let about = parse_about(r#"{"license": "unknown", "license_family": "BSD"}"#);
        assert_eq!(about.license_id("Apache-2.0"), "Apache-2.0");
        assert_eq!(about.license_id(""), "BSD");
        assert_eq!(about.license_id("UNKNOWN"), "BSD");
    }

    #[test]
    fn test_license_file_paths() {
        let about = parse_about(r#"{"license_file": "LICENSE.txt"}"#);
        assert_eq!(
            about.license_file_paths(),
            vec![Some("info/licenses/LICENSE.txt".to_string())]
        );

        let about = parse_about(r#"{"license_file": ["COPYING", "docs/../NOTICE"]}"#);
        assert_eq!(
            about.license_file_paths(),
            vec![
                Some("info/licenses/COPYING".to_string()),
                Some("info/licenses/NOTICE".to_string()),
            ]
        );

        for json in ["{}", r#"{"license_file": ""}"#, r#"{"license_file": []}"#] {
            assert_eq!(parse_about(json).license_file_paths(), vec![None], "{json}");
        }
    }

    #[test]
    fn test_canonicalize_conda() {
        let dir = package(
            r#"{
                "license": "MIT",
                "license_file": "LICENSE.txt",
                "dev_url": "https://github.com/PyCQA/astroid",
                "channels": ["https://repo.anaconda.com/pkgs/main"]
            }"#,
            &[(
                "info/licenses/LICENSE.txt",
                "The MIT License\n\n  Copyright (c) 2015 PyCQA  \n\nPermission is hereby granted\n",
            )],
        );
        let mut info = LicenseInfo::new("astroid", Some(qualifiers()));
        info.canonicalize_conda(dir.path(), "", &[], None, None).unwrap();

        assert_eq!(info.licenses.len(), 1);
        let license = &info.licenses[0];
        assert_eq!(license.canonical_id, "MIT");
        assert_eq!(license.kinds, vec![MIT]);
        assert_eq!(license.file.as_deref(), Some("info/licenses/LICENSE.txt"));
        assert_eq!(license.copyright.as_deref(), Some("Copyright (c) 2015 PyCQA"));
        assert_eq!(info.homepage.as_deref(), Some("https://github.com/PyCQA/astroid"));
        assert_eq!(info.source, "conda");
        assert_eq!(info.qualifiers.as_ref().unwrap().channel, "main");
        assert_eq!(
            info.purl(Some("2.9.0")).as_deref(),
            Some("pkg:conda/astroid@2.9.0?build=py39h06a4308_0&channel=main&subdir=linux-64")
        );
    }

    #[test]
    fn test_canonicalize_conda_copyright_only_on_first_match() {
        let dir = package(
            r#"{"license": "BSD-3-Clause", "license_file": ["a/LICENSE", "b/LICENSE"]}"#,
            &[
                ("info/licenses/a/LICENSE", "no notice here\n"),
                ("info/licenses/b/LICENSE", "COPYRIGHT: 2001 Someone\n"),
            ],
        );
        let mut info = LicenseInfo::new("pkg", None);
        info.canonicalize_conda(dir.path(), "", &[], None, None).unwrap();
        assert_eq!(info.licenses.len(), 2);
        assert_eq!(info.licenses[0].copyright, None);
        assert_eq!(info.licenses[1].copyright.as_deref(), Some("COPYRIGHT: 2001 Someone"));
    }

    #[test]
    fn test_canonicalize_conda_missing_license_file_is_not_fatal() {
        let dir = package(r#"{"license": "MIT", "license_file": "GONE"}"#, &[]);
        let mut info = LicenseInfo::new("pkg", None);
        info.canonicalize_conda(dir.path(), "", &[], None, None).unwrap();
        assert_eq!(info.licenses[0].file.as_deref(), Some("info/licenses/GONE"));
        assert_eq!(info.licenses[0].copyright, None);
    }

    #[test]
    fn test_canonicalize_conda_index_fallback() {
        let dir = package(r#"{"home": "https://zlib.net"}"#, &[]);
        let mut info = LicenseInfo::new("zlib", None);
        info.canonicalize_conda(dir.path(), "Zlib", &[], None, None).unwrap();
        assert_eq!(info.licenses.len(), 1);
        assert_eq!(info.licenses[0].canonical_id, "Zlib");
        assert_eq!(info.licenses[0].file, None);
        assert_eq!(info.homepage.as_deref(), Some("https://zlib.net"));
    }

    #[test]
    fn test_canonicalize_conda_overrides() {
        let dir = package(r#"{"license": "not a license at all"}"#, &[]);
        let overrides = vec!["@my_licenses//:internal".to_string()];
        let mut info = LicenseInfo::new("pkg", None);
        info.canonicalize_conda(dir.path(), "", &overrides, Some("COPYING"), None)
            .unwrap();
        assert_eq!(info.licenses.len(), 1);
        assert_eq!(info.licenses[0].canonical_id, "license");
        assert_eq!(info.licenses[0].kinds, overrides);
        assert_eq!(info.licenses[0].file.as_deref(), Some("COPYING"));
    }

    #[test]
    fn test_canonicalize_conda_license_file_skips_about_json() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "licenses/COPYING", "Copyright 2020 Example\n");
        let mut info = LicenseInfo::new("pkg", None);
        info.canonicalize_conda(dir.path(), "MIT", &[], Some("./licenses/COPYING"), None)
            .unwrap();
        assert_eq!(info.licenses[0].kinds, vec![MIT]);
        assert_eq!(info.licenses[0].file.as_deref(), Some("licenses/COPYING"));
        assert_eq!(info.licenses[0].copyright.as_deref(), Some("Copyright 2020 Example"));
    }

    #[test]
    fn test_canonicalize_conda_fetches_license_url() {
        let dir = package(
            r#"{"license": "MIT", "license_url": "https://example.com/LICENSE"}"#,
            &[],
        );
        let fetcher = StubFetcher::new(Some("Copyright (C) 2019 Example Corp\n"));
        let mut info = LicenseInfo::new("pkg", None);
        info.canonicalize_conda(dir.path(), "", &[], None, Some(&fetcher))
            .unwrap();

        assert_eq!(*fetcher.requested.borrow(), vec!["https://example.com/LICENSE"]);
        assert_eq!(info.licenses[0].file.as_deref(), Some("LICENSE"));
        assert_eq!(
            info.licenses[0].copyright.as_deref(),
            Some("Copyright (C) 2019 Example Corp")
        );
        assert!(dir.path().join("LICENSE").is_file());
    }

    #[test]
    fn test_canonicalize_conda_license_url_not_found() {
        let dir = package(
            r#"{"license": "MIT", "license_url": "https://example.com/LICENSE"}"#,
            &[],
        );
        let fetcher = StubFetcher::new(None);
        let mut info = LicenseInfo::new("pkg", None);
        info.canonicalize_conda(dir.path(), "", &[], None, Some(&fetcher))
            .unwrap();
        assert_eq!(info.licenses[0].file, None);
        assert!(!dir.path().join("LICENSE").exists());
    }

    #[test]
    fn test_canonicalize_conda_license_url_ignored_with_license_file() {
        let dir = package(
            r#"{"license": "MIT", "license_file": "LICENSE", "license_url": "https://example.com/LICENSE"}"#,
            &[],
        );
        let fetcher = StubFetcher::new(Some("text"));
        let mut info = LicenseInfo::new("pkg", None);
        info.canonicalize_conda(dir.path(), "", &[], None, Some(&fetcher))
            .unwrap();
        assert!(fetcher.requested.borrow().is_empty());
        assert_eq!(info.licenses[0].file.as_deref(), Some("info/licenses/LICENSE"));
    }

    #[test]
    fn test_canonicalize_conda_missing_license() {
        let dir = package(r#"{"license": "unknown"}"#, &[]);
        let mut info = LicenseInfo::new("pkg", None);
        let err = info
            .canonicalize_conda(dir.path(), "", &[], None, None)
            .unwrap_err();
        let license_err = err.downcast_ref::<LicenseError>().unwrap();
        assert!(license_err.is(LicenseErrorKind::MissingLicense));
    }

    #[test]
    fn test_canonicalize_conda_unrecognized_license() {
        let dir = package(r#"{"license": "Frobnicator"}"#, &[]);
        let mut info = LicenseInfo::new("pkg", None);
        let err = info
            .canonicalize_conda(dir.path(), "", &[], None, None)
            .unwrap_err();
        assert!(format!("{err:#}").contains("parsing license \"Frobnicator\" of pkg"));
        let license_err = err.downcast_ref::<LicenseError>().unwrap();
        assert_eq!(license_err.kind(), LicenseErrorKind::UnrecognizedLicenseId);
    }

    #[test]
    fn test_load_conda_missing_about_json() {
        let dir = TempDir::new().unwrap();
        let mut info = LicenseInfo::new("pkg", None);
        let err = info.load_conda(dir.path(), None).unwrap_err();
        assert!(format!("{err}").contains("about.json"));
    }
}
