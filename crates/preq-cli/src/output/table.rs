use preq_core::Roster;

/// Render the roster as a human-readable listing.
pub fn format_roster(roster: &Roster) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} contractor(s), as of {}\n",
        roster.records.len(),
        roster.as_of_date
    ));

    for record in &roster.records {
        out.push('\n');
        out.push_str(&record.contractor);
        out.push('\n');

        out.push_str(&format!(
            "  Vendor ID: {}   Expires: {}\n",
            record.vendor_id.as_deref().unwrap_or("-"),
            record.expiration_date.as_deref().unwrap_or("-")
        ));

        if let Some(address) = &record.mailing_address {
            out.push_str(&format!("  {address}\n"));
        }
        if record.city.is_some() || record.state.is_some() || record.zip.is_some() {
            out.push_str(&format!(
                "  {}, {} {}\n",
                record.city.as_deref().unwrap_or(""),
                record.state.as_deref().unwrap_or(""),
                record.zip.as_deref().unwrap_or("")
            ));
        }

        out.push_str(&format!(
            "  Phone: {}   Fax: {}\n",
            record.phone.as_deref().unwrap_or("-"),
            record.fax.as_deref().unwrap_or("-")
        ));

        let mut certifications = Vec::new();
        if record.certified_sbe {
            certifications.push("SBE");
        }
        if record.certified_dbe {
            certifications.push("DBE");
        }
        if record.limited_prequalification {
            certifications.push("Limited Prequalification");
        }
        if !certifications.is_empty() {
            out.push_str(&format!("  Certifications: {}\n", certifications.join(", ")));
        }

        let codes = record.work_classes.qualified_codes();
        if !codes.is_empty() {
            out.push_str(&format!("  Work classes: {}\n", codes.join(", ")));
        }
    }

    out
}
