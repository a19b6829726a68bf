/// First phone-looking substring in `text`. Two shapes are recognized, the
/// first tried before the second at each position: a US ten-digit grouping
/// with optional punctuation ("(555) 123-4567", "555 123 4567",
/// "5551234567") and a '+' followed by ten or more digits.
pub fn scan_phone(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    for start in 0..bytes.len() {
        if let Some(len) = match_us_grouping(&bytes[start..]) {
            return Some(&text[start..start + len]);
        }
        if let Some(len) = match_plus_digits(&bytes[start..]) {
            return Some(&text[start..start + len]);
        }
    }
    None
}

/// Scans fields in order; the first field containing a match wins.
pub fn find_phone<S: AsRef<str>>(fields: &[S]) -> Option<String> {
    fields
        .iter()
        .find_map(|field| scan_phone(field.as_ref()).map(str::to_string))
}

/// Strips everything but digits, then applies the US grouping when the
/// digit count allows it. Ten digits become `(AAA) BBB-CCCC`, eleven
/// starting with a country code 1 become `+1 (BBB) CCC-DDDD`, anything
/// else stays as the bare digit string.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else if digits.len() == 11 && digits.starts_with('1') {
        format!("+1 ({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..])
    } else {
        digits
    }
}

// Optional '(', three digits, optional ')', then two more digit groups of
// three and four with an optional '-' or whitespace before each.
fn match_us_grouping(bytes: &[u8]) -> Option<usize> {
    let mut i = 0;
    if bytes.first() == Some(&b'(') {
        i += 1;
    }
    i = take_digits(bytes, i, 3)?;
    if bytes.get(i) == Some(&b')') {
        i += 1;
    }
    i = take_separator(bytes, i);
    i = take_digits(bytes, i, 3)?;
    i = take_separator(bytes, i);
    i = take_digits(bytes, i, 4)?;
    Some(i)
}

fn match_plus_digits(bytes: &[u8]) -> Option<usize> {
    if bytes.first() != Some(&b'+') {
        return None;
    }
    let digits = bytes[1..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits >= 10 {
        Some(1 + digits)
    } else {
        None
    }
}

fn take_digits(bytes: &[u8], mut i: usize, count: usize) -> Option<usize> {
    for _ in 0..count {
        if !bytes.get(i).is_some_and(|b| b.is_ascii_digit()) {
            return None;
        }
        i += 1;
    }
    Some(i)
}

fn take_separator(bytes: &[u8], i: usize) -> usize {
    match bytes.get(i) {
        Some(&b) if b == b'-' || b.is_ascii_whitespace() => i + 1,
        _ => i,
    }
}

#[cfg(test)]
mod tests {
    use super::{find_phone, format_phone, scan_phone};

    #[test]
    fn scan_matches_parenthesized_grouping() {
        assert_eq!(scan_phone("call (555) 123-4567 anytime"), Some("(555) 123-4567"));
    }

    #[test]
    fn scan_matches_bare_digits() {
        assert_eq!(scan_phone("5551234567"), Some("5551234567"));
    }

    #[test]
    fn scan_matches_plus_form() {
        assert_eq!(scan_phone("+15551234567"), Some("+15551234567"));
    }

    #[test]
    fn scan_rejects_short_numbers() {
        assert!(scan_phone("555-1234").is_none());
        assert!(scan_phone("+555123").is_none());
    }

    #[test]
    fn find_phone_respects_field_order() {
        let fields = ["Bella", "Imported on 3/4/21", "555 123 4567", "(555) 999-0000"];
        assert_eq!(find_phone(&fields).as_deref(), Some("555 123 4567"));
    }

    #[test]
    fn format_groups_ten_digits() {
        assert_eq!(format_phone("555-123-4567"), "(555) 123-4567");
    }

    #[test]
    fn format_prefixes_eleven_digit_us_numbers() {
        assert_eq!(format_phone("15551234567"), "+1 (555) 123-4567");
    }

    #[test]
    fn format_leaves_other_lengths_raw() {
        assert_eq!(format_phone("5551234"), "5551234");
        assert_eq!(format_phone("+441234567890"), "441234567890");
        assert_eq!(format_phone(""), "");
    }
}
