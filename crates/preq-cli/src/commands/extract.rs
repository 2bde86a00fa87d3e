use preq_core::error::PreqError;
use preq_core::extraction::pdftohtml::PdftohtmlReader;
use preq_core::scan::ScanOptions;
use preq_core::export;
use std::path::PathBuf;

pub fn run(
    input_file: PathBuf,
    out: Option<PathBuf>,
    span_pages: bool,
) -> Result<(), PreqError> {
    let pdf_bytes = std::fs::read(&input_file)?;
    let reader = PdftohtmlReader::new();
    let options = ScanOptions {
        carry_across_pages: span_pages,
        ..Default::default()
    };
    let roster = preq_core::extract_roster(&pdf_bytes, &reader, &options)?;

    // --out may name the file directly or a directory to drop the
    // default-named file into.
    let path = match out {
        Some(p) if p.is_dir() => p.join(export::output_file_name(&roster.as_of_date)),
        Some(p) => p,
        None => PathBuf::from(export::output_file_name(&roster.as_of_date)),
    };

    let file = std::fs::File::create(&path)?;
    export::write_csv(file, &roster)?;

    eprintln!(
        "Extracted {} contractor(s) as of {}",
        roster.records.len(),
        roster.as_of_date
    );
    eprintln!("Written to {}", path.display());

    Ok(())
}
