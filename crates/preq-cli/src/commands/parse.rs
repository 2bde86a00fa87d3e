use preq_core::error::PreqError;
use preq_core::extraction::pdftohtml::PdftohtmlReader;
use preq_core::scan::ScanOptions;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), PreqError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let reader = PdftohtmlReader::new();
    let roster = preq_core::extract_roster(&pdf_bytes, &reader, &ScanOptions::default())?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&roster)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} contractor(s), written to {}",
                roster.records.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&roster)?,
            _ => println!("{}", output::table::format_roster(&roster)),
        },
    }

    Ok(())
}
