/// Reduce a raw phone/fax capture to the canonical "(AAA)BBB-CCCC" form.
///
/// Strips all non-digit characters first. Any input that does not leave
/// exactly ten digits standardizes to "N/A", so the result is always one of
/// the two shapes.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        format!("({}){}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        "N/A".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parenthesized() {
        assert_eq!(normalize_phone("(615) 555-1212"), "(615)555-1212");
    }

    #[test]
    fn test_bare_digits() {
        assert_eq!(normalize_phone("6155551212"), "(615)555-1212");
    }

    #[test]
    fn test_dashed() {
        assert_eq!(normalize_phone("615-555-1212"), "(615)555-1212");
    }

    #[test]
    fn test_too_few_digits() {
        assert_eq!(normalize_phone("555-1212"), "N/A");
    }

    #[test]
    fn test_too_many_digits() {
        assert_eq!(normalize_phone("1-615-555-1212"), "N/A");
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(normalize_phone("* NO FAX *"), "N/A");
        assert_eq!(normalize_phone(""), "N/A");
    }

    #[test]
    fn test_output_is_always_canonical_or_na() {
        let inputs = [
            "(615) 555-1212",
            "615.555.1212",
            "garbage",
            "123",
            "12345678901",
            "  (901)555 0000  ",
        ];
        for raw in inputs {
            let out = normalize_phone(raw);
            let canonical = out.len() == 13
                && out.starts_with('(')
                && out[1..4].chars().all(|c| c.is_ascii_digit())
                && &out[4..5] == ")"
                && out[5..8].chars().all(|c| c.is_ascii_digit())
                && &out[8..9] == "-"
                && out[9..].chars().all(|c| c.is_ascii_digit());
            assert!(canonical || out == "N/A", "unexpected shape: {out}");
        }
    }

    #[test]
    fn test_ten_digit_inputs_never_na() {
        for raw in ["(615)555-1212", "615 555 1212", "615-555-1212"] {
            assert_ne!(normalize_phone(raw), "N/A");
        }
    }
}
