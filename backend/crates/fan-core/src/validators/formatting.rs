//! Input masks. Each strips everything but digits and re-inserts the
//! separators, so applying a mask twice yields the same string.

/// Keep only ASCII digits
pub fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// `00000000000` -> `000.000.000-00`
pub fn format_national_id(input: &str) -> String {
    mask(&digits(input), &[(3, ""), (3, "."), (3, "."), (2, "-")])
}

/// `00000000000` -> `(00) 00000-0000`
pub fn format_phone(input: &str) -> String {
    mask(&digits(input), &[(2, "("), (5, ") "), (4, "-")])
}

/// `00000000` -> `00000-000`
pub fn format_zip_code(input: &str) -> String {
    mask(&digits(input), &[(5, ""), (3, "-")])
}

/// Apply `groups` (length, prefix) when enough digits are present.
///
/// Shorter input is returned as bare digits; digits past the mask are
/// appended unchanged.
fn mask(digits: &str, groups: &[(usize, &str)]) -> String {
    let needed: usize = groups.iter().map(|(len, _)| len).sum();
    if digits.len() < needed {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + 6);
    let mut offset = 0;
    for (len, prefix) in groups {
        out.push_str(prefix);
        out.push_str(&digits[offset..offset + len]);
        offset += len;
    }
    out.push_str(&digits[offset..]);
    out
}
