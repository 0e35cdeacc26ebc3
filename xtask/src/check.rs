//! Workspace-wide quality checks.
//!
//! This module runs all automated quality checks across the entire workspace.

use std::collections::HashMap;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use xshell::{cmd, Shell};

/// Run all checks (non-CI mode - warnings are reported but don't fail)
pub fn run(ci_mode: bool) -> Result<()> {
    let sh = Shell::new()?;

    println!();
    println!("{}", "ShatterForge Quality Check".bold());
    println!("{}", "==========================".bold());
    println!();

    let mut all_passed = true;

    // 1. Formatting
    println!("{}", "Checking formatting...".dimmed());
    let fmt_result = run_fmt_check(&sh);
    report_result("Formatting", &fmt_result);
    if fmt_result.is_err() {
        all_passed = false;
    }

    // 2. Clippy
    println!("{}", "Running clippy...".dimmed());
    let clippy_result = run_clippy(&sh);
    report_result("Clippy", &clippy_result);
    if clippy_result.is_err() {
        all_passed = false;
    }

    // 3. Tests
    println!("{}", "Running tests...".dimmed());
    let test_result = run_tests(&sh);
    report_result("Tests", &test_result);
    if test_result.is_err() {
        all_passed = false;
    }

    // 4. Documentation
    println!("{}", "Building documentation...".dimmed());
    let doc_result = run_doc_check(&sh);
    report_result("Documentation", &doc_result);
    if doc_result.is_err() {
        all_passed = false;
    }

    // 5. Safety scan
    println!("{}", "Scanning for safety violations...".dimmed());
    let safety_result = run_safety_scan(&sh);
    report_result("Safety", &safety_result);
    if safety_result.is_err() {
        all_passed = false;
    }

    println!();

    if all_passed {
        println!("{}", "✓ All checks passed!".green().bold());
        Ok(())
    } else if ci_mode {
        println!("{}", "✗ Some checks failed.".red().bold());
        std::process::exit(1);
    } else {
        println!("{}", "⚠ Some checks failed. Fix before committing.".yellow());
        Ok(())
    }
}

/// Run full CI suite
pub fn run_ci() -> Result<()> {
    let sh = Shell::new()?;

    println!();
    println!("{}", "ShatterForge CI Suite".bold());
    println!("{}", "=====================".bold());
    println!();
    println!(
        "{}",
        "Running the same checks as GitHub Actions...".dimmed()
    );
    println!();

    let mut failures = Vec::new();

    // 1. Formatting (must be exact)
    println!("{}", "Step 1/5: Checking formatting...".cyan());
    if let Err(e) = run_fmt_check(&sh) {
        failures.push(format!("Formatting: {}", e));
        println!("  {} Formatting check failed", "✗".red());
    } else {
        println!("  {} Formatting OK", "✓".green());
    }

    // 2. Clippy with all features
    println!("{}", "Step 2/5: Running clippy...".cyan());
    if let Err(e) = run_clippy(&sh) {
        failures.push(format!("Clippy: {}", e));
        println!("  {} Clippy failed", "✗".red());
    } else {
        println!("  {} Clippy OK", "✓".green());
    }

    // 3. Tests with all features
    println!("{}", "Step 3/5: Running tests...".cyan());
    if let Err(e) = run_tests(&sh) {
        failures.push(format!("Tests: {}", e));
        println!("  {} Tests failed", "✗".red());
    } else {
        println!("  {} Tests OK", "✓".green());
    }

    // 4. Documentation build
    println!("{}", "Step 4/5: Building docs...".cyan());
    if let Err(e) = run_doc_check(&sh) {
        failures.push(format!("Documentation: {}", e));
        println!("  {} Documentation failed", "✗".red());
    } else {
        println!("  {} Documentation OK", "✓".green());
    }

    // 5. Safety scan
    println!("{}", "Step 5/5: Safety scan...".cyan());
    if let Err(e) = run_safety_scan(&sh) {
        failures.push(format!("Safety: {}", e));
        println!("  {} Safety scan failed", "✗".red());
    } else {
        println!("  {} Safety scan OK", "✓".green());
    }

    println!();

    if failures.is_empty() {
        println!("{}", "═══════════════════════════════════════".green());
        println!("{}", "  ✓ CI PASSED - Ready to push".green().bold());
        println!("{}", "═══════════════════════════════════════".green());
        Ok(())
    } else {
        println!("{}", "═══════════════════════════════════════".red());
        println!("{}", "  ✗ CI FAILED".red().bold());
        println!("{}", "═══════════════════════════════════════".red());
        println!();
        println!("Failures:");
        for f in &failures {
            println!("  - {}", f.red());
        }
        std::process::exit(1);
    }
}

fn report_result(name: &str, result: &Result<()>) {
    match result {
        Ok(()) => println!("  {} {}", "✓".green(), name),
        Err(e) => println!("  {} {} - {}", "✗".red(), name, e),
    }
}

fn run_fmt_check(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo fmt --all -- --check")
        .run()
        .context("Formatting check failed")?;
    Ok(())
}

fn run_clippy(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo clippy --all-targets --all-features -- -D warnings")
        .run()
        .context("Clippy check failed")?;
    Ok(())
}

fn run_tests(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo test --all-features")
        .run()
        .context("Tests failed")?;
    Ok(())
}

fn run_doc_check(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo doc --no-deps --all-features")
        .env("RUSTDOCFLAGS", "-D warnings")
        .run()
        .context("Documentation build failed")?;
    Ok(())
}

fn run_safety_scan(sh: &Shell) -> Result<()> {
    // Unit tests sit at the bottom of each source file; everything at or
    // after the #[cfg(test)] marker is exempt
    let test_starts = cmd!(sh, "grep -rn '#\\[cfg(test)\\]' mesh badge --include='*.rs'")
        .ignore_status()
        .ignore_stderr()
        .read()
        .unwrap_or_default();

    let mut test_start_lines: HashMap<String, usize> = HashMap::new();
    for line in test_starts.lines() {
        // Format: path/file.rs:123:#[cfg(test)]
        let parts: Vec<&str> = line.splitn(3, ':').collect();
        if parts.len() >= 2 {
            if let Ok(line_num) = parts[1].parse::<usize>() {
                test_start_lines.entry(parts[0].to_string()).or_insert(line_num);
            }
        }
    }

    let output = cmd!(sh, "grep -rn -E '\\.(unwrap|expect)\\(' mesh badge --include='*.rs'")
        .ignore_status()
        .ignore_stderr()
        .read()
        .unwrap_or_default();

    let mut violations = 0;
    for line in output.lines() {
        let parts: Vec<&str> = line.splitn(3, ':').collect();
        if parts.len() < 3 {
            continue;
        }
        let file = parts[0];
        let line_num: usize = parts[1].parse().unwrap_or(0);
        let content = parts[2].trim();

        // Integration tests and benches may unwrap freely
        if file.contains("/tests/") || file.contains("/benches/") {
            continue;
        }
        if let Some(&test_start) = test_start_lines.get(file) {
            if line_num >= test_start {
                continue;
            }
        }

        // Skip comments and doc comments (doctests unwrap deliberately)
        if content.starts_with("//") {
            continue;
        }

        violations += 1;
    }

    if violations > 0 {
        anyhow::bail!("Found {} unwrap/expect calls in library code", violations);
    }

    Ok(())
}
