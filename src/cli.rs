use clap::{Parser, Subcommand};

use crate::conda::DEFAULT_CONDA_REPO;
use crate::licensing::fetch::DEFAULT_FETCH_TIMEOUT;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the BUILD.bazel file for an extracted conda package
    BuildFile(BuildFileArgs),

    /// Copy files from extracted conda packages into an assembled environment
    Install(InstallArgs),

    /// Resolve conda license expressions to Bazel license_kind labels
    License(LicenseArgs),
}

#[derive(clap::Args, Debug)]
pub struct BuildFileArgs {
    /// The directory in which to create the BUILD file
    #[arg(long)]
    pub dir: String,

    /// Use the given license_kind labels (whitespace separated) instead of
    /// the license in about.json
    #[arg(long, default_value = "")]
    pub licenses: String,

    /// Use the given license file instead of the ones in about.json
    #[arg(long)]
    pub license_file: Option<String>,

    /// Packages this package depends on which are missing from its metadata
    #[arg(long, value_delimiter = ',')]
    pub extra_deps: Vec<String>,

    /// Packages this package claims to depend on which should be skipped
    #[arg(long, value_delimiter = ',')]
    pub exclude_deps: Vec<String>,

    /// The dist name of the package, for the header comment
    #[arg(long, default_value = "")]
    pub distname: String,

    /// The conda channel the package was downloaded from
    #[arg(long)]
    pub channel: Option<String>,

    /// The package archive type (e.g. tar.bz2 or conda)
    #[arg(long = "type", default_value = "tar.bz2")]
    pub package_type: String,

    /// The URL the package was downloaded from
    #[arg(long, default_value = "")]
    pub url: String,

    /// The repository used to refer to dependencies
    #[arg(long, default_value = DEFAULT_CONDA_REPO)]
    pub conda: String,

    /// Never download license text referenced by license_url
    #[arg(long)]
    pub offline: bool,

    /// Timeout in seconds for downloading license text
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT.as_secs())]
    pub fetch_timeout: u64,

    /// Files to drop from the package (glob patterns like "share/doc" or
    /// "lib/*.a")
    pub exclude: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct InstallArgs {
    /// The root directories under which conda packages can be found
    #[arg(long, value_delimiter = ',')]
    pub roots: Vec<String>,

    /// The extracted package to install
    #[arg(long)]
    pub install: String,

    /// The destination path relative to the working directory
    #[arg(long, default_value = "")]
    pub dest: String,

    /// The name of the conda repository
    #[arg(long, default_value = DEFAULT_CONDA_REPO)]
    pub conda: String,

    /// An additional prefix to use for a noarch install
    #[arg(long)]
    pub prefix: Option<String>,

    /// Files to install; @FILE reads the list from FILE, one per line
    pub files: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct LicenseArgs {
    /// Print the resolved licenses as JSON
    #[arg(long)]
    pub json: bool,

    /// License expressions, e.g. "BSD-3-Clause AND (PSF-2.0 OR MIT)"
    #[arg(required = true)]
    pub expressions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_file() {
        let cli = Cli::parse_from([
            "rules-conda",
            "build-file",
            "--dir",
            "external/conda_package_zlib",
            "--extra-deps",
            "libgcc-ng,zlib",
            "--channel",
            "main",
            "share/doc",
            "lib/*.a",
        ]);
        let Command::BuildFile(args) = cli.command else {
            panic!("expected build-file");
        };
        assert_eq!(args.dir, "external/conda_package_zlib");
        assert_eq!(args.extra_deps, vec!["libgcc-ng", "zlib"]);
        assert!(args.exclude_deps.is_empty());
        assert_eq!(args.channel.as_deref(), Some("main"));
        assert_eq!(args.package_type, "tar.bz2");
        assert_eq!(args.conda, "conda_env");
        assert_eq!(args.fetch_timeout, 30);
        assert_eq!(args.exclude, vec!["share/doc", "lib/*.a"]);
    }

    #[test]
    fn test_parse_install() {
        let cli = Cli::parse_from([
            "rules-conda",
            "install",
            "--roots",
            "bazel-out/k8-opt/bin/external,external",
            "--install",
            "external/conda_package_zlib",
            "--dest",
            "out",
            "@files.txt",
        ]);
        let Command::Install(args) = cli.command else {
            panic!("expected install");
        };
        assert_eq!(args.roots.len(), 2);
        assert_eq!(args.prefix, None);
        assert_eq!(args.files, vec!["@files.txt"]);
    }

    #[test]
    fn test_license_requires_expression() {
        assert!(Cli::try_parse_from(["rules-conda", "license"]).is_err());
    }
}
