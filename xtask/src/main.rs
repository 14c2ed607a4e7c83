//! Developer tasks for phonerank, run as `cargo xtask <task>`.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A named task: a list of cargo invocations run in order, stopping at the
/// first failure.
struct Task {
    name: &'static str,
    summary: &'static str,
    steps: &'static [&'static [&'static str]],
}

const TASKS: &[Task] = &[
    Task {
        name: "verify",
        summary: "formatting, tests (rayon on and off), clippy on all targets",
        steps: &[
            &["fmt", "--all", "--", "--check"],
            &["test", "--quiet"],
            // search_batch falls back to a sequential loop without rayon
            &["test", "--quiet", "--no-default-features"],
            &["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"],
        ],
    },
    Task {
        name: "check",
        summary: "build check, tests, clippy on the library and binary",
        steps: &[
            &["check"],
            &["test", "--quiet"],
            &["clippy", "--quiet", "--", "-D", "warnings"],
        ],
    },
    Task {
        name: "test",
        summary: "unit, integration and property tests",
        steps: &[&["test"]],
    },
    Task {
        name: "bench",
        summary: "criterion benchmarks for scorers and search",
        steps: &[&["bench"]],
    },
];

fn main() -> Result<()> {
    let requested = env::args().nth(1);
    let Some(task) = requested
        .as_deref()
        .and_then(|name| TASKS.iter().find(|t| t.name == name))
    else {
        usage();
        return Ok(());
    };

    let root = workspace_root()?;
    let total = task.steps.len();
    for (i, args) in task.steps.iter().enumerate() {
        println!("[{}/{}] cargo {}", i + 1, total, args.join(" "));
        cargo(&root, args)?;
    }
    println!("\n{} ok", task.name);
    Ok(())
}

fn usage() {
    eprintln!("usage: cargo xtask <task>\n\ntasks:");
    for task in TASKS {
        eprintln!("  {:<8} {}", task.name, task.summary);
    }
}

/// The directory above this crate's manifest.
fn workspace_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("cannot read current directory")?,
    };
    Ok(manifest_dir
        .parent()
        .map(PathBuf::from)
        .unwrap_or(manifest_dir))
}

fn cargo(root: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(root)
        .status()
        .with_context(|| format!("cannot spawn cargo {}", args.join(" ")))?;
    if !status.success() {
        bail!("cargo {} failed", args.join(" "));
    }
    Ok(())
}
