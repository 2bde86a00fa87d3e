use std::io::Write;

use crate::error::PreqError;
use crate::model::{ContractorRecord, WORK_CLASSES};
use crate::Roster;

/// Leading columns of the exported CSV, followed by the 36 work-class codes.
pub const BASE_COLUMNS: [&str; 12] = [
    "Contractor",
    "Expiration Date",
    "Vendor ID",
    "Mailing Address",
    "City",
    "State",
    "Zip",
    "Phone",
    "Fax",
    "Certified SBE",
    "Certified DBE",
    "Limited Prequalification",
];

/// The full fixed column order (48 columns).
pub fn column_order() -> Vec<&'static str> {
    BASE_COLUMNS.iter().chain(WORK_CLASSES.iter()).copied().collect()
}

/// Default name for the exported artifact, derived from the as-of date.
pub fn output_file_name(as_of_date: &str) -> String {
    format!(
        "TDOT_Prequalified_Contractors_As_Of_{}.csv",
        as_of_date.replace('/', "_")
    )
}

/// Write the roster as CSV: a header row plus one row per record. Missing
/// optional fields become empty cells; flags render as Yes/No.
pub fn write_csv<W: Write>(writer: W, roster: &Roster) -> Result<(), PreqError> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(column_order())?;
    for record in &roster.records {
        w.write_record(csv_row(record))?;
    }
    w.flush()?;
    Ok(())
}

fn csv_row(record: &ContractorRecord) -> Vec<String> {
    let mut row = vec![
        record.contractor.clone(),
        record.expiration_date.clone().unwrap_or_default(),
        record.vendor_id.clone().unwrap_or_default(),
        record.mailing_address.clone().unwrap_or_default(),
        record.city.clone().unwrap_or_default(),
        record.state.clone().unwrap_or_default(),
        record.zip.clone().unwrap_or_default(),
        record.phone.clone().unwrap_or_default(),
        record.fax.clone().unwrap_or_default(),
        yes_no(record.certified_sbe).to_string(),
        yes_no(record.certified_dbe).to_string(),
        yes_no(record.limited_prequalification).to_string(),
    ];
    for (_, qualified) in record.work_classes.iter() {
        row.push(yes_no(qualified).to_string());
    }
    row
}

fn yes_no(v: bool) -> &'static str {
    if v {
        "Yes"
    } else {
        "No"
    }
}
