pub mod asof;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod scan;

use serde::{Deserialize, Serialize};
use tracing::debug;

use error::PreqError;
use extraction::DocumentReader;
use model::ContractorRecord;
use scan::{PageScanner, ScanOptions};

/// The document-level extraction result: the report's as-of date plus every
/// contractor record, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// MM/DD/YYYY, taken from the report title on page 1.
    pub as_of_date: String,
    pub records: Vec<ContractorRecord>,
}

/// Main API entry point: extract the contractor roster from a report PDF.
///
/// Reads the as-of date from page 1 (fatal when absent), then scans every
/// page except the last, which holds the work-class legend rather than
/// contractor data.
pub fn extract_roster(
    pdf_bytes: &[u8],
    reader: &dyn DocumentReader,
    options: &ScanOptions,
) -> Result<Roster, PreqError> {
    let pages = reader.read_pages(pdf_bytes)?;

    let first = pages
        .first()
        .ok_or_else(|| PreqError::ParseError("no pages in document".into()))?;
    let as_of_date = asof::parse_as_of_date(&first.plain_text()).ok_or(PreqError::MissingAsOfDate)?;

    let mut records = Vec::new();
    let mut scanner = PageScanner::new(options);
    let data_pages = pages.len().saturating_sub(1);
    for page in &pages[..data_pages] {
        scanner.scan_page(page, &mut records);
    }
    scanner.finish(&mut records);

    debug!(
        backend = reader.backend_name(),
        pages = pages.len(),
        records = records.len(),
        as_of = %as_of_date,
        "document scan complete"
    );

    Ok(Roster { as_of_date, records })
}
