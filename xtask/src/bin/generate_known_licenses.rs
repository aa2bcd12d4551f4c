//! Regenerates `src/licensing/known_licenses.rs` from Bazel `license_kind`
//! targets.
//!
//! ```sh
//! cargo run -p rules-conda-xtask --bin generate-known-licenses -- \
//!     -o src/licensing/known_licenses.rs
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};
use clap::Parser;

const THIS_REPO: &str = "@rules_conda";

const HEADER: &str = "// Code generated by generate-known-licenses. DO NOT EDIT.

/// Bazel `license_kind` targets, keyed by the license ID they describe.
pub(crate) static KNOWN_LICENSES: &[(&str, &str)] = &[";

#[derive(Parser, Debug)]
#[command(about = "Generate the known-license table from Bazel license_kind targets")]
struct Args {
    /// Output file (defaults to stdout)
    #[arg(short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Read the target labels from stdin instead of running `bazel query`
    #[arg(long)]
    stdin: bool,

    /// Packages to query for license_kind and alias targets
    #[arg(default_values_t = [
        "@rules_license//licenses/spdx:all".to_string(),
        format!("{THIS_REPO}//licensing/known:all"),
    ])]
    targets: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    if args.stdin {
        generate(io::stdin().lock(), &mut output)?;
    } else {
        let query = format!(
            "let all_targets = set({}) in kind(license_kind, $all_targets) + kind(alias, $all_targets)",
            args.targets.join(" ")
        );
        let mut child = Command::new("bazel")
            .args(["query", "--output=label", &query])
            .stdout(Stdio::piped())
            .spawn()
            .context("running bazel query")?;
        let stdout = child.stdout.take().context("capturing bazel output")?;
        generate(BufReader::new(stdout), &mut output)?;
        let status = child.wait().context("waiting for bazel query")?;
        if !status.success() {
            bail!("bazel query failed: {status}");
        }
    }
    output.flush()?;
    Ok(())
}

fn generate(input: impl BufRead, output: &mut impl Write) -> Result<()> {
    let mut targets: Vec<String> = input
        .lines()
        .collect::<io::Result<_>>()
        .context("reading target labels")?;
    targets.sort();

    writeln!(output, "{HEADER}")?;
    for target in targets {
        let target = target.trim();
        if target.is_empty() {
            continue;
        }
        let target = if target.starts_with("//") {
            format!("{THIS_REPO}{target}")
        } else {
            target.to_string()
        };
        let key = target.rsplit_once(':').map_or(target.as_str(), |(_, name)| name);
        writeln!(output, "    ({key:?}, {target:?}),")?;
    }
    writeln!(output, "];")?;
    Ok(())
}
