//! List command handler.

use std::path::Path;

use anyhow::Result;

use super::read_marks;
use crate::cli::ListArgs;
use crate::cli::output::{MarkListing, Output, OutputFormat};
use crate::domain::collect_marks;

pub fn handle_list(args: &ListArgs, marks_file: &Path, root: &Path) -> Result<()> {
    let content = read_marks(marks_file)?;
    let marks = collect_marks(&content, root);

    match args.format {
        OutputFormat::Human => {
            if marks.is_empty() {
                println!("No marks found.");
            } else {
                println!("{:>4}  {:<30}  {}", "#", "Label", "Location");
                println!(
                    "{:>4}  {:<30}  {}",
                    "----",
                    "------------------------------",
                    "--------"
                );

                for entry in &marks {
                    let label = entry.mark.label().unwrap_or("-");
                    println!(
                        "{:>4}  {:<30}  {}:{}",
                        entry.index,
                        label,
                        entry.mark.path(),
                        entry.mark.line()
                    );
                }

                println!();
                println!("{} mark(s)", marks.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<MarkListing> = marks
                .iter()
                .map(|entry| MarkListing {
                    index: entry.index,
                    label: entry.mark.label().map(str::to_string),
                    path: entry.resolved.to_string_lossy().to_string(),
                    line: entry.mark.line(),
                })
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => {
            for entry in &marks {
                println!("{}:{}", entry.resolved.display(), entry.mark.line());
            }
        }
    }

    Ok(())
}
