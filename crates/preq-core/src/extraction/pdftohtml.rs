use crate::error::PreqError;
use crate::extraction::{DocumentReader, PageContent, StyledFragment};
use std::io::Write;
use std::process::Command;

/// Document reading backend using pdftohtml (from poppler-utils).
///
/// Uses `pdftohtml -xml`, whose output wraps bold spans in <b> tags. Bold is
/// the only styling cue the report uses, so nothing else of the layout needs
/// to survive extraction.
pub struct PdftohtmlReader;

impl PdftohtmlReader {
    pub fn new() -> Self {
        PdftohtmlReader
    }

    /// Check if pdftohtml is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftohtml")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftohtmlReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for PdftohtmlReader {
    fn read_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, PreqError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| PreqError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| PreqError::Extraction(e.to_string()))?;
        let tmp_path = tmpfile.path().to_path_buf();

        let output = Command::new("pdftohtml")
            .arg("-xml")
            .arg("-i") // ignore images
            .arg("-stdout")
            .arg(&tmp_path)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PreqError::PdftohtmlNotFound
                } else {
                    PreqError::Extraction(format!("pdftohtml failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(PreqError::PdftohtmlFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        Ok(parse_pdf2xml(&xml))
    }

    fn backend_name(&self) -> &str {
        "pdftohtml"
    }
}

/// Parse poppler's pdf2xml output into pages of styled fragments.
///
/// Each single-line <text> element becomes one fragment; a <b> wrapper marks
/// it emphasized. Coordinates and fontspecs are not needed, so every
/// attribute except the page number is ignored.
fn parse_pdf2xml(xml: &str) -> Vec<PageContent> {
    let mut pages: Vec<PageContent> = Vec::new();
    let mut current: Option<PageContent> = None;

    for raw in xml.lines() {
        let line = raw.trim();

        if line.starts_with("<page ") {
            if let Some(page) = current.take() {
                pages.push(page);
            }
            current = Some(PageContent {
                page_number: parse_attr_usize(line, "number").unwrap_or(pages.len() + 1),
                fragments: Vec::new(),
            });
            continue;
        }

        if line.starts_with("</page>") {
            if let Some(page) = current.take() {
                pages.push(page);
            }
            continue;
        }

        if line.starts_with("<text ") {
            let Some(page) = current.as_mut() else {
                continue;
            };
            if let Some(body) = element_body(line) {
                let emphasized = body.contains("<b>");
                let text = decode_xml_entities(&strip_markup(body));
                let text = text.trim();
                if !text.is_empty() {
                    page.fragments.push(StyledFragment {
                        text: text.to_string(),
                        emphasized,
                    });
                }
            }
        }
    }

    if let Some(page) = current.take() {
        pages.push(page);
    }

    pages
}

/// Body of a single-line <text> element: everything between the first '>'
/// and the closing tag.
fn element_body(tag: &str) -> Option<&str> {
    let start = tag.find('>')? + 1;
    let end = tag.rfind("</text>")?;
    if start > end {
        return None;
    }
    Some(&tag[start..end])
}

/// Drop inline markup (<b>, <i>, <a ...>) from an element body.
fn strip_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn parse_attr_usize(tag: &str, name: &str) -> Option<usize> {
    parse_attr(tag, name)?.parse().ok()
}

fn parse_attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

fn decode_xml_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE pdf2xml SYSTEM "pdf2xml.dtd">
<pdf2xml producer="poppler" version="24.02.0">
<page number="1" position="absolute" top="0" left="0" height="1188" width="918">
	<fontspec id="0" size="14" family="Helvetica" color="#000000"/>
<text top="89" left="295" width="328" height="28" font="0">TDOT Prequalified Contractors As Of November 15, 2024</text>
<text top="140" left="36" width="200" height="16" font="0"><b>ACME PAVING &amp; GRADING</b></text>
<text top="160" left="36" width="300" height="16" font="0">Phone: (615) 555-1212</text>
</page>
<page number="2" position="absolute" top="0" left="0" height="1188" width="918">
<text top="89" left="36" width="120" height="16" font="0">Work class legend</text>
</page>
</pdf2xml>
"##;

    #[test]
    fn test_parse_pdf2xml_pages_and_fragments() {
        let pages = parse_pdf2xml(SAMPLE);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[0].fragments.len(), 3);
        assert_eq!(pages[1].page_number, 2);
        assert_eq!(pages[1].fragments.len(), 1);
    }

    #[test]
    fn test_bold_wrapper_marks_emphasis() {
        let pages = parse_pdf2xml(SAMPLE);
        let fragments = &pages[0].fragments;
        assert!(!fragments[0].emphasized);
        assert!(fragments[1].emphasized);
        assert_eq!(fragments[1].text, "ACME PAVING & GRADING");
        assert!(!fragments[2].emphasized);
    }

    #[test]
    fn test_plain_text_joins_fragments() {
        let pages = parse_pdf2xml(SAMPLE);
        let text = pages[0].plain_text();
        assert!(text.contains("As Of November 15, 2024"));
        assert!(text.contains("Phone: (615) 555-1212"));
    }

    #[test]
    fn test_element_body() {
        assert_eq!(
            element_body(r#"<text top="1" left="2">hello</text>"#),
            Some("hello")
        );
        assert_eq!(element_body(r#"<text top="1" left="2">"#), None);
    }

    #[test]
    fn test_strip_markup_nested() {
        assert_eq!(strip_markup("<b><i>BOLD CO</i></b>"), "BOLD CO");
        assert_eq!(strip_markup("plain"), "plain");
    }

    #[test]
    fn test_empty_text_elements_skipped() {
        let xml = r#"<page number="1" height="1" width="1">
<text top="0" left="0" width="0" height="0" font="0"> </text>
</page>"#;
        let pages = parse_pdf2xml(xml);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].fragments.is_empty());
    }
}
