use crate::commands::render::load_template;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagekit_schema::{validate_template, ValidationIssue, ValidationLevel};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Template JSON file or directory of them
    pub input: PathBuf,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Default, PartialEq)]
pub(crate) struct Summary {
    pub files: usize,
    pub unreadable: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl Summary {
    fn failed(&self, strict: bool) -> bool {
        self.unreadable > 0 || self.errors > 0 || (strict && self.warnings > 0)
    }
}

pub fn validate(args: ValidateArgs) -> Result<()> {
    println!("🔍 {} templates in {}", "Validating".green().bold(), args.input.display());

    let summary = validate_path(&args.input, &mut |path, outcome| match outcome {
        Ok(issues) if issues.is_empty() => println!("  {} {}", "✓".green(), path.display()),
        Ok(issues) => {
            println!("  {} {}", "•".yellow(), path.display());
            for issue in issues {
                let level = match issue.level {
                    ValidationLevel::Error => "error".red().bold(),
                    ValidationLevel::Warning => "warning".yellow(),
                };
                match &issue.component_id {
                    Some(id) => println!("      {} [{}] {}", level, id.dimmed(), issue.message),
                    None => println!("      {} {}", level, issue.message),
                }
            }
        }
        Err(message) => println!("  {} {} - {}", "✗".red(), path.display(), message.red()),
    })?;

    println!();
    println!("   Files checked: {}", summary.files);
    if summary.unreadable > 0 {
        println!("   {} {}", "Unreadable:".red(), summary.unreadable);
    }
    if summary.errors > 0 {
        println!("   {} {}", "Errors:".red(), summary.errors);
    }
    if summary.warnings > 0 {
        println!("   {} {}", "Warnings:".yellow(), summary.warnings);
    }

    if summary.failed(args.strict) {
        return Err(anyhow!("Validation failed"));
    }
    Ok(())
}

fn find_json_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    files.sort();
    files
}

/// Validate one file or every `*.json` under a directory, reporting each
/// file's outcome through `report`
pub(crate) fn validate_path(
    input: &Path,
    report: &mut dyn FnMut(&Path, Result<&[ValidationIssue], String>),
) -> Result<Summary> {
    let files = if input.is_file() {
        vec![input.to_path_buf()]
    } else if input.is_dir() {
        find_json_files(input)
    } else {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    };

    let mut summary = Summary::default();
    for file in files {
        summary.files += 1;
        match load_template(&file) {
            Ok(template) => {
                let issues = validate_template(&template);
                for issue in &issues {
                    match issue.level {
                        ValidationLevel::Error => summary.errors += 1,
                        ValidationLevel::Warning => summary.warnings += 1,
                    }
                }
                report(&file, Ok(&issues));
            }
            Err(e) => {
                summary.unreadable += 1;
                report(&file, Err(format!("{:#}", e)));
            }
        }
    }
    Ok(summary)
}
