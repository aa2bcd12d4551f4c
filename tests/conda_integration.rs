use std::fs;
use std::path::Path;

use rules_conda::conda::{BuildFileOptions, Package, Translator};
use rules_conda::utils::file::compile_exclude_patterns;
use tempfile::TempDir;

fn write(root: &Path, path: &str, content: &str) {
    let path = root.join(path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// An extracted `zlib` package with a paths.json manifest.
fn zlib_package() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(
        root,
        "info/index.json",
        r#"{
            "name": "zlib",
            "version": "1.2.12",
            "build": "h7f8727e_2",
            "subdir": "linux-64",
            "license": "Zlib",
            "depends": ["libgcc-ng >=7.5.0", "__glibc >=2.17"]
        }"#,
    );
    write(
        root,
        "info/about.json",
        r#"{
            "home": "https://zlib.net/",
            "license": "Zlib",
            "license_file": "LICENSE",
            "channels": ["https://repo.anaconda.com/pkgs/main"]
        }"#,
    );
    write(
        root,
        "info/licenses/LICENSE",
        "zlib.h -- interface of the 'zlib' general purpose compression library\n\n  Copyright (C) 1995-2022 Jean-loup Gailly and Mark Adler\n",
    );
    write(
        root,
        "info/paths.json",
        r#"{
            "paths": [
                {"_path": "include/zlib.h", "path_type": "hardlink"},
                {"_path": "lib/libz.a", "path_type": "hardlink"},
                {"_path": "lib/libz.so.1.2.12", "path_type": "hardlink"},
                {
                    "_path": "lib/pkgconfig/zlib.pc",
                    "path_type": "hardlink",
                    "file_mode": "text",
                    "prefix_placeholder": "/opt/conda/conda-bld/zlib_1650292637937/_h_env_placehold"
                }
            ],
            "paths_version": 1
        }"#,
    );
    write(root, "include/zlib.h", "#define ZLIB_VERSION \"1.2.12\"\n");
    write(root, "lib/libz.a", "!<arch>\n");
    write(root, "lib/libz.so.1.2.12", "\x7fELF");
    write(
        root,
        "lib/pkgconfig/zlib.pc",
        "prefix=/opt/conda/conda-bld/zlib_1650292637937/_h_env_placehold\nlibdir=${prefix}/lib\n",
    );
    dir
}

#[test]
fn test_build_file_for_extracted_package() {
    let dir = zlib_package();
    let patterns = compile_exclude_patterns(&["lib/*.a".to_string()]).unwrap();
    let mut package = Package::load(dir.path(), &patterns, true).unwrap();
    package.set_channel("main", "conda");
    package.canonicalize_license(&[], None, None).unwrap();

    let options = BuildFileOptions {
        dist_name: "zlib-1.2.12-h7f8727e_2".to_string(),
        url: "https://repo.anaconda.com/pkgs/main/linux-64/zlib-1.2.12-h7f8727e_2.conda"
            .to_string(),
        ..Default::default()
    };
    let path = package.write_build_file(&options).unwrap();
    assert_eq!(path, dir.path().join("BUILD.bazel"));
    let content = fs::read_to_string(path).unwrap();

    assert!(content.starts_with("# Generated BUILD file for zlib\n# Package dist name: zlib-1.2.12-h7f8727e_2\n"));
    assert!(content.contains(
        "load(\"@rules_conda//rules:conda_manifest.bzl\", \"conda_deps\", \"conda_manifest\")"
    ));
    assert!(!content.contains("PYTHON_PREFIX"));
    assert!(content.contains("    license_kinds = [\n        \"@rules_license//licenses/spdx:Zlib\",\n    ],\n"));
    assert!(content.contains("    license_text = \"info/licenses/LICENSE\",\n"));
    assert!(content.contains(
        "    copyright_notice = \"Copyright (C) 1995-2022 Jean-loup Gailly and Mark Adler\",\n"
    ));
    assert!(content.contains(
        "    purl = \"pkg:conda/zlib@1.2.12?build=h7f8727e_2&channel=main&subdir=linux-64&type=conda\",\n"
    ));
    assert!(content.contains("    manifest = \"info/paths.json\",\n"));
    assert!(content.contains("    deps = [\"@conda_env//:libgcc-ng\"],\n"));
    assert!(!content.contains("__glibc"));
    assert!(!dir.path().join("lib/libz.a").exists());
}

#[test]
fn test_build_file_with_license_override() {
    let dir = zlib_package();
    let mut package = Package::load(dir.path(), &[], true).unwrap();
    package
        .canonicalize_license(
            &["@rules_license//licenses/generic:notice".to_string()],
            Some("include/zlib.h"),
            None,
        )
        .unwrap();

    let options = BuildFileOptions {
        conda_repo: "@my_env".to_string(),
        exclude_deps: vec!["libgcc-ng".to_string()],
        ..Default::default()
    };
    let content = rules_conda::starlark::serialize(&package.build_file(&options).unwrap());
    assert!(content.contains("        \"@rules_license//licenses/generic:notice\",\n"));
    assert!(content.contains("    license_text = \"include/zlib.h\",\n"));
    assert!(content.contains("    deps = [],\n    visibility = [\"@my_env//:__pkg__\"],\n"));
}

#[test]
fn test_build_file_unrecognized_license_fails() {
    let dir = zlib_package();
    write(dir.path(), "info/about.json", r#"{"license": "Frobnicator"}"#);
    let mut package = Package::load(dir.path(), &[], true).unwrap();
    assert!(package.canonicalize_license(&[], None, None).is_err());
}

#[test]
fn test_install_package_files() {
    let dir = zlib_package();
    let package = Package::load(dir.path(), &[], false).unwrap();
    let dest = TempDir::new().unwrap();
    let files: Vec<String> = ["include/zlib.h", "lib/libz.so.1.2.12", "lib/pkgconfig/zlib.pc"]
        .iter()
        .map(|file| dir.path().join(file).to_string_lossy().into_owned())
        .collect();

    package
        .install(&[], dest.path(), &files, &Translator::new("@py_env"))
        .unwrap();

    assert_eq!(
        fs::read_to_string(dest.path().join("include/zlib.h")).unwrap(),
        "#define ZLIB_VERSION \"1.2.12\"\n"
    );
    assert!(dest.path().join("lib/libz.so.1.2.12").exists());
    assert_eq!(
        fs::read_to_string(dest.path().join("lib/pkgconfig/zlib.pc")).unwrap(),
        "prefix=external/py_env\nlibdir=${prefix}/lib\n"
    );
    // The source keeps its placeholder.
    assert!(
        fs::read_to_string(dir.path().join("lib/pkgconfig/zlib.pc"))
            .unwrap()
            .starts_with("prefix=/opt/conda")
    );
}

#[test]
fn test_install_refuses_to_overwrite() {
    let dir = zlib_package();
    let package = Package::load(dir.path(), &[], false).unwrap();
    let dest = TempDir::new().unwrap();
    write(dest.path(), "include/zlib.h", "existing");
    let files = vec![dir.path().join("include/zlib.h").to_string_lossy().into_owned()];
    assert!(
        package
            .install(&[], dest.path(), &files, &Translator::default())
            .is_err()
    );
}
