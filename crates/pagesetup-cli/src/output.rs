//! Terminal and JSON rendering of command reports.

use std::path::Path;

use anyhow::Result;
use console::style;

use pagesetup_core::commands::{DetectReport, SetupReport};
use pagesetup_core::detect::{BuildScript, Detection};
use pagesetup_core::fs::MarkerOutcome;
use pagesetup_core::types::ProjectType;
use pagesetup_core::workflow::WriteOutcome;

use crate::OutputFormat;

const RULE_WIDTH: usize = 50;

pub fn print_scan_start(root: &Path) {
    println!("🔍 Scanning repository in: {}", root.display());
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", style("❌ Error:").red().bold(), err);
}

pub fn print_setup_report(report: &SetupReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_setup_table(report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Quiet => {}
    }
    Ok(())
}

pub fn print_detect_report(report: &DetectReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("✅ Found index.html at: {}", report.index_html.display());
            print_detection(&report.detection);
            for warning in &report.detection.warnings {
                print_warning(warning);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Quiet => {}
    }
    Ok(())
}

fn print_setup_table(report: &SetupReport) {
    println!("✅ Found index.html at: {}", report.index_html.display());
    print_detection(&report.detection);

    let kind = match report.project_type() {
        ProjectType::Node => "Node.js",
        ProjectType::Static => "Static HTML",
    };
    println!("📝 Generating {} GitHub Actions workflow...", kind);

    let path = report.workflow_display_path();
    match report.workflow.outcome {
        WriteOutcome::Created | WriteOutcome::Updated => {
            println!("✅ Workflow file created/updated at: {}", path.display());
        }
        WriteOutcome::Unchanged => {
            println!("ℹ️  Workflow file already up to date: {}", path.display());
        }
        WriteOutcome::Skipped => {
            println!(
                "{} would write workflow file: {}",
                style("[dry run]").cyan(),
                path.display()
            );
        }
    }

    if let Some((first, rest)) = report.advice.split_first() {
        println!("⚠️  {} {}", style("IMPORTANT:").yellow().bold(), first);
        for line in rest {
            println!("   - {}", line);
        }
    }

    match report.marker {
        Some(MarkerOutcome::Created) => {
            println!("✅ Created .nojekyll file to ensure proper file handling.");
        }
        Some(MarkerOutcome::AlreadyPresent) => println!("ℹ️  .nojekyll already exists."),
        Some(MarkerOutcome::Skipped) => {
            println!("{} would create .nojekyll", style("[dry run]").cyan());
        }
        None => {}
    }

    for warning in &report.warnings {
        print_warning(warning);
    }

    let rule = "=".repeat(RULE_WIDTH);
    println!();
    println!("{}", rule);
    if report.dry_run {
        println!("{}", style("🔎 DRY RUN COMPLETE (nothing written)").bold());
    } else {
        println!("{}", style("🚀 SETUP COMPLETE!").green().bold());
    }
    println!("{}", rule);
    println!("Next steps:");
    for (i, step) in report.next_steps.iter().enumerate() {
        println!("{}. {}", i + 1, step);
    }
    println!("{}", rule);
}

fn print_detection(detection: &Detection) {
    match detection.project_type {
        ProjectType::Node => {
            println!("📦 Detected project type: Node.js / Framework (React, Vue, etc.)");
        }
        ProjectType::Static => println!("📄 Detected project type: Static HTML/CSS/JS"),
    }

    if let Some(BuildScript::Found(cmd)) = &detection.build_script {
        println!("🛠️  Build script found: npm run build ({})", cmd);
    }
}

fn print_warning(message: &str) {
    println!("{}  {}", style("⚠️").yellow(), message);
}
