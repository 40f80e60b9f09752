//! Workspace automation for weekplan.
//!
//! Run with: `cargo xtask <command>`

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fmt::Write as _;
use std::path::Path;
use std::process::{Command, ExitCode};
use std::{env, fs};

use anyhow::{bail, Context, Result};

mod features;

/// Where `ts-rs` writes the domain crate's exports
const BINDINGS_DIR: &str = "crates/domain/bindings";

const TASKS: &[(&str, &str)] = &[
    ("ci", "fmt, clippy, test and test-features in sequence"),
    ("fmt", "check formatting"),
    ("clippy", "lint every target with all features"),
    ("test", "run the workspace test suite"),
    ("test-features", "compile each crate under its feature sets"),
    ("codegen", "export TypeScript schedule types and write their index.ts"),
];

fn main() -> ExitCode {
    let result = match env::args().nth(1).as_deref() {
        Some("ci") => ci(),
        Some("fmt") => cargo(&["fmt", "--all", "--", "--check"]),
        Some("clippy") => cargo(&["clippy", "--workspace", "--all-targets", "--all-features"]),
        Some("test") => cargo(&["test", "--workspace", "--all-features"]),
        Some("test-features") => features::test_feature_matrix(),
        Some("codegen") => codegen(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            print_help();
            Err(anyhow::anyhow!("unknown task '{unknown}'"))
        }
    };

    if let Err(err) = result {
        eprintln!("xtask failed: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_help() {
    println!("usage: cargo xtask <task>\n\ntasks:");
    for (name, summary) in TASKS {
        println!("    {name:<14} {summary}");
    }
}

/// Run `cargo` with `args`, failing on a non-zero exit
fn cargo(args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("could not spawn `cargo {}`", args.join(" ")))?;

    if !status.success() {
        bail!("`cargo {}` exited with {status}", args.join(" "));
    }
    Ok(())
}

fn ci() -> Result<()> {
    let steps: [(&str, fn() -> Result<()>); 4] = [
        ("fmt", || cargo(&["fmt", "--all", "--", "--check"])),
        ("clippy", || cargo(&["clippy", "--workspace", "--all-targets", "--all-features"])),
        ("test", || cargo(&["test", "--workspace", "--all-features"])),
        ("test-features", features::test_feature_matrix),
    ];

    for (index, (name, step)) in steps.iter().enumerate() {
        println!("==> [{}/{}] {name}", index + 1, steps.len());
        step()?;
    }

    println!("✓ ci passed");
    Ok(())
}

/// Export the domain types and index them for the renderer
///
/// The `ts-gen` unit tests are what trigger `ts-rs` to write one file per
/// exported type into [`BINDINGS_DIR`].
fn codegen() -> Result<()> {
    cargo(&["test", "-p", "weekplan-domain", "--features", "ts-gen", "--lib"])?;

    let dir = Path::new(BINDINGS_DIR);
    if !dir.is_dir() {
        bail!("{} was not created; did the ts-gen tests run?", dir.display());
    }

    let exported = write_index(dir)?;
    println!("✓ indexed {exported} types in {}", dir.join("index.ts").display());
    Ok(())
}

/// Write `index.ts` re-exporting every type file in `dir`
fn write_index(dir: &Path) -> Result<usize> {
    let mut modules: Vec<String> = fs::read_dir(dir)
        .with_context(|| format!("could not list {}", dir.display()))?
        .filter_map(|entry| {
            let name = entry.ok()?.file_name().into_string().ok()?;
            let module = name.strip_suffix(".ts")?;
            (module != "index").then(|| module.to_string())
        })
        .collect();
    modules.sort();

    let mut index = String::from("// Generated by `cargo xtask codegen`. Do not edit.\n\n");
    for module in &modules {
        let _ = writeln!(index, "export type {{ {module} }} from './{module}';");
    }

    let path = dir.join("index.ts");
    fs::write(&path, index).with_context(|| format!("could not write {}", path.display()))?;
    Ok(modules.len())
}
