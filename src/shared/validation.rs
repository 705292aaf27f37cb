use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating Philippine mobile numbers
    /// Accepts the local 0-prefixed and the +63 international form
    /// - Valid: "09171234567", "+639171234567"
    /// - Invalid: "9171234567", "0917123456", "0917-123-4567"
    pub static ref MOBILE_NO_REGEX: Regex = Regex::new(r"^(?:\+63|0)9\d{9}$").unwrap();

    /// Regex for report reference numbers assigned by the service
    /// - Valid: "RPT-2026-0000042"
    pub static ref REPORT_NUMBER_REGEX: Regex = Regex::new(r"^RPT-\d{4}-\d{7}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_no_regex_valid() {
        assert!(MOBILE_NO_REGEX.is_match("09171234567"));
        assert!(MOBILE_NO_REGEX.is_match("+639171234567"));
        assert!(MOBILE_NO_REGEX.is_match("09998887777"));
    }

    #[test]
    fn test_mobile_no_regex_invalid() {
        assert!(!MOBILE_NO_REGEX.is_match("9171234567")); // missing prefix
        assert!(!MOBILE_NO_REGEX.is_match("0917123456")); // too short
        assert!(!MOBILE_NO_REGEX.is_match("091712345678")); // too long
        assert!(!MOBILE_NO_REGEX.is_match("0917-123-4567")); // separators
        assert!(!MOBILE_NO_REGEX.is_match("08171234567")); // not a 9xx block
        assert!(!MOBILE_NO_REGEX.is_match(""));
    }

    #[test]
    fn test_report_number_regex() {
        assert!(REPORT_NUMBER_REGEX.is_match("RPT-2026-0000042"));
        assert!(!REPORT_NUMBER_REGEX.is_match("RPT-26-42"));
        assert!(!REPORT_NUMBER_REGEX.is_match("rpt-2026-0000042"));
    }
}
