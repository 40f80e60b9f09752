use std::process::Command;

use anyhow::{bail, Context, Result};

/// Crates whose feature sets must each compile in isolation
const FEATURE_SETS: &[(&str, &[&str])] = &[
    ("weekplan-common", &[]),
    ("weekplan-common", &["foundation"]),
    ("weekplan-common", &["observability"]),
    ("weekplan-domain", &[]),
    ("weekplan-domain", &["ts-gen"]),
];

/// `cargo check` every entry of [`FEATURE_SETS`] with default features off
pub fn test_feature_matrix() -> Result<()> {
    for &(package, features) in FEATURE_SETS {
        let features = features.join(",");
        let label = if features.is_empty() { "none" } else { features.as_str() };
        println!("==> {package} [features: {label}]");

        let mut check = Command::new("cargo");
        check.args(["check", "-p", package, "--no-default-features"]);
        if !features.is_empty() {
            check.args(["--features", features.as_str()]);
        }

        let status =
            check.status().with_context(|| format!("could not spawn cargo check for {package}"))?;
        if !status.success() {
            bail!("{package} does not compile with features [{label}]");
        }
    }

    println!("✓ {} feature sets compile", FEATURE_SETS.len());
    Ok(())
}
