use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use serde::Serialize;

use rules_conda::cli::{BuildFileArgs, Cli, Command, InstallArgs, LicenseArgs};
use rules_conda::conda::{BuildFileOptions, Package, Translator};
use rules_conda::licensing::fetch::{HttpLicenseFetcher, LicenseFetcher};
use rules_conda::licensing::{License, LicenseError, split_license};
use rules_conda::utils::file::{compile_exclude_patterns, expand_file_list};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    match Cli::parse().command {
        Command::BuildFile(args) => build_file(args),
        Command::Install(args) => install(args),
        Command::License(args) => license(args),
    }
}

fn build_file(args: BuildFileArgs) -> Result<()> {
    let exclude_patterns = compile_exclude_patterns(&args.exclude)?;
    let mut package = Package::load(Path::new(&args.dir), &exclude_patterns, true)
        .context("Could not load package metadata")?;
    if let Some(channel) = args.channel.as_deref().filter(|c| !c.is_empty()) {
        package.set_channel(channel, &args.package_type);
    }

    let fetcher = if args.offline {
        None
    } else {
        Some(HttpLicenseFetcher::new(Duration::from_secs(args.fetch_timeout))?)
    };
    let license_overrides: Vec<String> =
        args.licenses.split_whitespace().map(String::from).collect();
    package
        .canonicalize_license(
            &license_overrides,
            args.license_file.as_deref().filter(|f| !f.is_empty()),
            fetcher.as_ref().map(|f| f as &dyn LicenseFetcher),
        )
        .context("Could not parse license information")?;

    let options = BuildFileOptions {
        include_deps: args.extra_deps,
        exclude_deps: args.exclude_deps,
        conda_repo: args.conda,
        dist_name: args.distname,
        url: args.url,
    };
    let path = package
        .write_build_file(&options)
        .context("Could not generate BUILD file")?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn install(args: InstallArgs) -> Result<()> {
    let package = Package::load(Path::new(&args.install), &[], false)
        .with_context(|| format!("Could not load package {}", args.install))?;
    let mut dest = PathBuf::from(&args.dest);
    if let Some(prefix) = args.prefix.as_deref().filter(|p| !p.is_empty()) {
        dest = dest.join(prefix.trim_start_matches('/'));
    }
    let files = expand_file_list(&args.files)?;
    package.install(&args.roots, &dest, &files, &Translator::new(&args.conda))
}

#[derive(Serialize)]
struct LicenseReport<'a> {
    expression: &'a str,
    licenses: Vec<License>,
}

fn resolve_licenses(expression: &str) -> Result<Vec<License>, LicenseError> {
    let licenses = split_license(expression)?.pick();
    if licenses.is_empty() {
        return Err(LicenseError::MissingLicense);
    }
    Ok(licenses)
}

fn license(args: LicenseArgs) -> Result<()> {
    let mut reports = Vec::with_capacity(args.expressions.len());
    for expression in &args.expressions {
        let licenses = resolve_licenses(expression)
            .with_context(|| format!("parsing license {expression:?}"))?;
        reports.push(LicenseReport {
            expression,
            licenses,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }
    for report in &reports {
        println!("{}", report.expression);
        for license in &report.licenses {
            if license.kinds.is_empty() {
                println!("  {}", license.canonical_id);
            } else {
                println!("  {}: {}", license.canonical_id, license.kinds.join(", "));
            }
        }
    }
    Ok(())
}
