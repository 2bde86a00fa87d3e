pub mod pdftohtml;

use crate::error::PreqError;

/// One styled span of text, in the document's reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledFragment {
    pub text: String,
    /// Rendered in a heavier font weight. The report marks contractor names
    /// (and nothing else) in bold.
    pub emphasized: bool,
}

/// Content extracted from a single page of the report.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub fragments: Vec<StyledFragment>,
}

impl PageContent {
    /// Page text with styling discarded, one fragment per line. Used for the
    /// "As Of" date search on page 1.
    pub fn plain_text(&self) -> String {
        self.fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Trait for document reading backends.
pub trait DocumentReader: Send + Sync {
    /// Read styled text from PDF bytes, returning one PageContent per page.
    fn read_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, PreqError>;

    /// Name of this reading backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
