//! Phone number grouping for tel inputs

/// Group up to ten digits as `XXX-XXX-XXXX`, dropping everything else
///
/// Idempotent: formatting an already formatted value returns it unchanged.
pub fn format_phone(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).take(10).collect();

    let mut formatted = String::with_capacity(12);
    for (index, digit) in digits.iter().enumerate() {
        if index == 3 || index == 6 {
            formatted.push('-');
        }
        formatted.push(*digit);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_digits() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("55"), "55");
        assert_eq!(format_phone("555"), "555");
        assert_eq!(format_phone("5551"), "555-1");
        assert_eq!(format_phone("5551234"), "555-123-4");
        assert_eq!(format_phone("5551234567"), "555-123-4567");
    }

    #[test]
    fn test_strips_non_digits_and_extra_digits() {
        assert_eq!(format_phone("(555) 123-4567 ext 9"), "555-123-4567");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["", "5", "555-12", "555-123-4567", "+1 (555) 000"] {
            let once = format_phone(raw);
            assert_eq!(format_phone(&once), once);
        }
    }
}
