//! Check command handler.

use std::path::Path;

use anyhow::{Result, bail};

use super::{display_name, read_marks};
use crate::cli::CheckArgs;
use crate::cli::output::{DiagnosticListing, Output, OutputFormat};
use crate::domain::validate;

pub fn handle_check(args: &CheckArgs, marks_file: &Path, root: &Path, verbose: bool) -> Result<()> {
    if !root.is_dir() {
        bail!("root directory not found: {}", root.display());
    }

    let content = read_marks(marks_file)?;
    let name = display_name(marks_file);

    if verbose {
        eprintln!("checking {} against root {}", name, root.display());
    }

    let diagnostics = validate(&content, root);

    match args.format {
        OutputFormat::Human => {
            if diagnostics.is_empty() {
                println!("All marks OK.");
            } else {
                for diagnostic in &diagnostics {
                    println!("{}:{}: {}", name, diagnostic.line_no, diagnostic.message());
                }
                println!("\nFound {} problem(s)", diagnostics.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<DiagnosticListing> = diagnostics
                .iter()
                .map(|d| DiagnosticListing {
                    file: name.clone(),
                    line_no: d.line_no,
                    message: d.message(),
                })
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => {
            for diagnostic in &diagnostics {
                println!("{}:{}", name, diagnostic.line_no);
            }
        }
    }

    // Exit code: fail iff there are diagnostics
    if !diagnostics.is_empty() {
        bail!("check failed");
    }
    Ok(())
}
