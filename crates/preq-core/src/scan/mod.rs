pub mod fields;
pub mod phone;

use tracing::{debug, trace};

use crate::extraction::{PageContent, StyledFragment};
use crate::model::{ContractorRecord, WorkClassFlags};

/// Report boilerplate that never carries record data. The bare "Contractor"
/// entry is the report's column header; as a substring test it also drops
/// any other fragment containing the word, which reproduces the source
/// report's known filtering behavior.
pub const DEFAULT_NOISE_SUBSTRINGS: [&str; 3] = [
    "TDOT Prequalified Contractors As Of",
    "Contractor",
    "See last page of report",
];

/// Column-header labels repeated on every page of the report.
pub const DEFAULT_COLUMN_HEADERS: [&str; 6] =
    ["Mailing Address", "Phone", "State", "City", "Fax", "Zip"];

/// Options controlling the page scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Fragments containing any of these substrings are dropped.
    pub noise_substrings: Vec<String>,
    /// Fragments exactly equal to one of these labels are dropped.
    pub column_headers: Vec<String>,
    /// Carry a record still open at the end of a page into the next page
    /// instead of flushing it at the page break.
    pub carry_across_pages: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            noise_substrings: DEFAULT_NOISE_SUBSTRINGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            column_headers: DEFAULT_COLUMN_HEADERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            carry_across_pages: false,
        }
    }
}

/// Whether the next emphasized fragment continues the name just opened or
/// starts a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameState {
    Idle,
    AwaitingContinuation,
}

/// An in-progress contractor record. Fields stay unset until a fragment
/// matches them; finalization fills the defaulted ones.
#[derive(Debug)]
pub(crate) struct Draft {
    pub(crate) contractor: String,
    pub(crate) expiration_date: Option<String>,
    pub(crate) vendor_id: Option<String>,
    pub(crate) mailing_address: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) state: Option<String>,
    pub(crate) zip: Option<String>,
    pub(crate) phone: Option<String>,
    pub(crate) fax: Option<String>,
    /// Set by the no-fax sentinel; locks the fax field.
    pub(crate) no_fax: bool,
    pub(crate) certified_sbe: bool,
    pub(crate) certified_dbe: bool,
    pub(crate) limited_prequalification: bool,
    pub(crate) work_classes: Option<WorkClassFlags>,
}

impl Draft {
    pub(crate) fn new(contractor: &str) -> Self {
        Draft {
            contractor: contractor.to_string(),
            expiration_date: None,
            vendor_id: None,
            mailing_address: None,
            city: None,
            state: None,
            zip: None,
            phone: None,
            fax: None,
            no_fax: false,
            certified_sbe: false,
            certified_dbe: false,
            limited_prequalification: false,
            work_classes: None,
        }
    }

    /// Close the draft, filling every defaulted field.
    fn finish(self) -> ContractorRecord {
        ContractorRecord {
            contractor: self.contractor,
            expiration_date: self.expiration_date,
            vendor_id: self.vendor_id,
            mailing_address: self.mailing_address,
            city: self.city,
            state: self.state,
            zip: self.zip,
            phone: self.phone,
            fax: self.fax,
            certified_sbe: self.certified_sbe,
            certified_dbe: self.certified_dbe,
            limited_prequalification: self.limited_prequalification,
            work_classes: self.work_classes.unwrap_or_default(),
        }
    }
}

/// Walks a page's fragments in reading order, assembling contractor records.
///
/// A record opens on an emphasized fragment, accumulates field values from
/// the non-emphasized fragments that follow, and closes when the next record
/// opens or the page ends.
pub struct PageScanner<'a> {
    options: &'a ScanOptions,
    draft: Option<Draft>,
    name_state: NameState,
}

impl<'a> PageScanner<'a> {
    pub fn new(options: &'a ScanOptions) -> Self {
        PageScanner {
            options,
            draft: None,
            name_state: NameState::Idle,
        }
    }

    /// Scan one page, appending completed records to `records`.
    ///
    /// Unless `carry_across_pages` is set, a record still open when the
    /// page's fragments run out is flushed here: records do not span page
    /// boundaries.
    pub fn scan_page(&mut self, page: &PageContent, records: &mut Vec<ContractorRecord>) {
        for fragment in &page.fragments {
            self.step(fragment, records);
        }
        if !self.options.carry_across_pages {
            self.flush(records);
        }
    }

    /// Flush any record left open after the last page.
    pub fn finish(&mut self, records: &mut Vec<ContractorRecord>) {
        self.flush(records);
    }

    fn step(&mut self, fragment: &StyledFragment, records: &mut Vec<ContractorRecord>) {
        let text = fragment.text.trim();

        // Boilerplate is dropped without touching scan state, so a pending
        // name continuation survives interleaved headers.
        if self.is_noise(text) {
            trace!(text, "dropping boilerplate fragment");
            return;
        }

        if fragment.emphasized && !text.is_empty() {
            match self.name_state {
                NameState::AwaitingContinuation => {
                    if let Some(draft) = self.draft.as_mut() {
                        draft.contractor.push(' ');
                        draft.contractor.push_str(text);
                    }
                    self.name_state = NameState::Idle;
                }
                NameState::Idle => {
                    self.flush(records);
                    self.draft = Some(Draft::new(text));
                    self.name_state = NameState::AwaitingContinuation;
                }
            }
            return;
        }

        self.name_state = NameState::Idle;
        if let Some(draft) = self.draft.as_mut() {
            fields::apply(draft, text);
        }
    }

    fn flush(&mut self, records: &mut Vec<ContractorRecord>) {
        if let Some(draft) = self.draft.take() {
            let record = draft.finish();
            debug!(contractor = %record.contractor, "record complete");
            records.push(record);
        }
        self.name_state = NameState::Idle;
    }

    fn is_noise(&self, text: &str) -> bool {
        self.options
            .noise_substrings
            .iter()
            .any(|s| text.contains(s.as_str()))
            || self.options.column_headers.iter().any(|h| h == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold(text: &str) -> StyledFragment {
        StyledFragment {
            text: text.to_string(),
            emphasized: true,
        }
    }

    fn plain(text: &str) -> StyledFragment {
        StyledFragment {
            text: text.to_string(),
            emphasized: false,
        }
    }

    fn page(fragments: Vec<StyledFragment>) -> PageContent {
        PageContent {
            page_number: 1,
            fragments,
        }
    }

    fn scan(fragments: Vec<StyledFragment>) -> Vec<ContractorRecord> {
        let options = ScanOptions::default();
        let mut scanner = PageScanner::new(&options);
        let mut records = Vec::new();
        scanner.scan_page(&page(fragments), &mut records);
        records
    }

    #[test]
    fn test_record_opens_on_bold_and_flushes_at_page_end() {
        let records = scan(vec![bold("ACME PAVING"), plain("Vendor ID: 1")]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].contractor, "ACME PAVING");
        assert_eq!(records[0].vendor_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_two_fragment_name_yields_one_record() {
        let records = scan(vec![
            bold("JONES"),
            bold("CONSTRUCTION LLC"),
            plain("Vendor ID: 4821"),
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].contractor, "JONES CONSTRUCTION LLC");
        assert_eq!(records[0].vendor_id.as_deref(), Some("4821"));
    }

    #[test]
    fn test_third_bold_fragment_starts_a_new_record() {
        let records = scan(vec![bold("A"), bold("B"), bold("C")]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].contractor, "A B");
        assert_eq!(records[1].contractor, "C");
    }

    #[test]
    fn test_continuation_survives_interleaved_noise() {
        let records = scan(vec![bold("JONES"), plain("Phone"), bold("CONSTRUCTION")]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].contractor, "JONES CONSTRUCTION");
    }

    #[test]
    fn test_plain_fragment_breaks_continuation() {
        let records = scan(vec![
            bold("JONES"),
            plain("Vendor ID: 1"),
            bold("SMITH GRADING"),
        ]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].contractor, "JONES");
        assert_eq!(records[1].contractor, "SMITH GRADING");
    }

    #[test]
    fn test_next_record_closes_the_previous_one() {
        let records = scan(vec![
            bold("FIRST CO"),
            plain("Vendor ID: 1"),
            bold("SECOND CO"),
            plain("Vendor ID: 2"),
        ]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].vendor_id.as_deref(), Some("1"));
        assert_eq!(records[1].vendor_id.as_deref(), Some("2"));
    }

    #[test]
    fn test_noise_only_page_yields_nothing() {
        let records = scan(vec![
            plain("TDOT Prequalified Contractors As Of November 15, 2024"),
            plain("Contractor"),
            plain("Mailing Address"),
            plain("See last page of report for work class codes"),
        ]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_bold_name_containing_contractor_word_is_dropped() {
        // The broad substring filter also swallows names carrying the bare
        // header word. Tunable via ScanOptions::noise_substrings.
        let records = scan(vec![bold("Contractor Services Inc")]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_unattributed_data_before_first_record_is_ignored() {
        let records = scan(vec![plain("Vendor ID: 99"), bold("REAL CO")]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].vendor_id, None);
    }

    #[test]
    fn test_finalized_record_has_all_defaults() {
        let records = scan(vec![bold("BARE CO")]);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert!(!r.certified_sbe);
        assert!(!r.certified_dbe);
        assert!(!r.limited_prequalification);
        assert_eq!(r.work_classes.iter().count(), 36);
        assert!(r.work_classes.iter().all(|(_, set)| !set));
    }

    #[test]
    fn test_page_boundary_flush_without_carry() {
        let options = ScanOptions::default();
        let mut scanner = PageScanner::new(&options);
        let mut records = Vec::new();
        scanner.scan_page(&page(vec![bold("SPLIT CO")]), &mut records);
        scanner.scan_page(&page(vec![plain("Vendor ID: 7")]), &mut records);
        scanner.finish(&mut records);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].vendor_id, None);
    }

    #[test]
    fn test_page_boundary_carry_when_enabled() {
        let options = ScanOptions {
            carry_across_pages: true,
            ..Default::default()
        };
        let mut scanner = PageScanner::new(&options);
        let mut records = Vec::new();
        scanner.scan_page(&page(vec![bold("SPLIT CO")]), &mut records);
        scanner.scan_page(&page(vec![plain("Vendor ID: 7")]), &mut records);
        scanner.finish(&mut records);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].vendor_id.as_deref(), Some("7"));
    }
}
