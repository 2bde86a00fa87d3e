use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The 36 work-class codes a contractor can be prequalified for, in the
/// column order of the source report's legend page.
pub const WORK_CLASSES: [&str; 36] = [
    "ASPH", "BASE", "CONC", "ENGR", "ERTH", "FNCE", "HAUL", "ITS", "LITE",
    "NONR", "RIPR", "RR", "SGNL", "SLLE", "STBR", "SWPD", "TRFT", "UTIL",
    "BARR", "BRPT", "DRNG", "EROS", "FLAT", "GAT", "INCI", "LAND", "MOVL",
    "PVWK", "RMVL", "SALT", "SLIP", "SNOW", "STDR", "TRFP", "TUNN", "WARW",
];

/// US state postal abbreviations. Used as a sanity check on parsed
/// City/State/Zip values, not as a hard filter.
pub const STATE_ABBREVIATIONS: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID",
    "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS",
    "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK",
    "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV",
    "WI", "WY",
];

pub fn is_state_abbreviation(s: &str) -> bool {
    STATE_ABBREVIATIONS.contains(&s)
}

/// Prequalification flags, one per known work class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkClassFlags([bool; WORK_CLASSES.len()]);

impl Default for WorkClassFlags {
    fn default() -> Self {
        WorkClassFlags([false; WORK_CLASSES.len()])
    }
}

impl WorkClassFlags {
    /// Build flags from a "Work Class:" listing.
    ///
    /// A code is set only when it appears as a whole token, so RR does not
    /// match inside BARR.
    pub fn from_listing(listing: &str) -> Self {
        let mut flags = WorkClassFlags::default();
        for token in listing.split(|c: char| !c.is_ascii_alphanumeric()) {
            if let Some(i) = WORK_CLASSES.iter().position(|code| *code == token) {
                flags.0[i] = true;
            }
        }
        flags
    }

    pub fn is_qualified(&self, code: &str) -> bool {
        WORK_CLASSES
            .iter()
            .position(|c| *c == code)
            .map(|i| self.0[i])
            .unwrap_or(false)
    }

    /// Iterate all codes with their flag, in the fixed set order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        WORK_CLASSES.iter().copied().zip(self.0.iter().copied())
    }

    /// The codes this contractor is qualified for, in set order.
    pub fn qualified_codes(&self) -> Vec<&'static str> {
        self.iter()
            .filter_map(|(code, set)| set.then_some(code))
            .collect()
    }
}

impl Serialize for WorkClassFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.qualified_codes())
    }
}

impl<'de> Deserialize<'de> for WorkClassFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let codes = Vec::<String>::deserialize(deserializer)?;
        let mut flags = WorkClassFlags::default();
        for code in &codes {
            if let Some(i) = WORK_CLASSES.iter().position(|c| *c == code.as_str()) {
                flags.0[i] = true;
            }
        }
        Ok(flags)
    }
}

/// One contractor entry reconstructed from the report.
///
/// Optional fields were simply not found for the record; they export as
/// empty CSV cells. The flag fields are always present once a record is
/// finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractorRecord {
    pub contractor: String,
    pub expiration_date: Option<String>,
    pub vendor_id: Option<String>,
    pub mailing_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    /// Either "(AAA)BBB-CCCC" or "N/A".
    pub phone: Option<String>,
    /// Either "(AAA)BBB-CCCC" or "N/A".
    pub fax: Option<String>,
    pub certified_sbe: bool,
    pub certified_dbe: bool,
    pub limited_prequalification: bool,
    pub work_classes: WorkClassFlags,
}
