use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::{is_state_abbreviation, WorkClassFlags};
use crate::scan::phone::normalize_phone;
use crate::scan::Draft;

static EXPIRATION_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Expiration Date:\s*(\d{2}/\d{2}/\d{4})").unwrap());
static VENDOR_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Vendor ID:\s*(\d+)").unwrap());
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Phone:\s*([()\-\d\s]+)").unwrap());
static FAX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Fax:\s*([()\-\d\s*]+)").unwrap());
static MAILING_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\s+.*?)\s{2,}").unwrap());
static CITY_STATE_ZIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}(.+?),\s*(\w{2})\s*(\d{5})").unwrap());
static WORK_CLASS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Work Class:\s*(.*)").unwrap());

/// Marker printed in place of a fax number when a contractor has none.
const NO_FAX_MARKER: &str = "* NO FAX *";

/// Run every field matcher against one fragment's text and merge the hits
/// into the open draft. Each matcher is independent; a miss leaves its field
/// untouched.
pub(crate) fn apply(draft: &mut Draft, text: &str) {
    if let Some(caps) = EXPIRATION_DATE.captures(text) {
        draft.expiration_date = Some(caps[1].to_string());
    }
    if let Some(caps) = VENDOR_ID.captures(text) {
        draft.vendor_id = Some(caps[1].to_string());
    }
    if let Some(caps) = PHONE.captures(text) {
        draft.phone = Some(normalize_phone(caps[1].trim()));
    }
    // Once the no-fax sentinel has been seen, later fax numbers are ignored.
    if !draft.no_fax {
        if let Some(caps) = FAX.captures(text) {
            draft.fax = Some(normalize_phone(caps[1].trim()));
        }
    }
    if let Some(caps) = MAILING_ADDRESS.captures(text) {
        draft.mailing_address = Some(caps[1].trim().to_string());
    }
    if let Some(caps) = CITY_STATE_ZIP.captures(text) {
        let state = caps[2].trim().to_string();
        if !is_state_abbreviation(&state) {
            debug!(%state, "parsed state is not a canonical postal abbreviation");
        }
        draft.city = Some(caps[1].trim().to_string());
        draft.state = Some(state);
        draft.zip = Some(caps[3].to_string());
    }
    if text.contains(NO_FAX_MARKER) {
        draft.fax = Some("N/A".to_string());
        draft.no_fax = true;
    }
    if text.contains("Certified SBE") {
        draft.certified_sbe = true;
    }
    if text.contains("Certified DBE") {
        draft.certified_dbe = true;
    }
    if text.contains("Limited Prequalification") {
        draft.limited_prequalification = true;
    }
    if let Some(caps) = WORK_CLASS.captures(text) {
        draft.work_classes = Some(WorkClassFlags::from_listing(caps[1].trim()));
    }
}
