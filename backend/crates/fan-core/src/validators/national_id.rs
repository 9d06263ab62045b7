use crate::validators::digits;

const NATIONAL_ID_LENGTH: usize = 11;

/// Validate a CPF: 11 digits, not all identical, both check digits matching.
///
/// Separators are ignored, so formatted and bare input validate the same.
pub fn is_valid_national_id(input: &str) -> bool {
    let numbers: Vec<u32> = digits(input)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if numbers.len() != NATIONAL_ID_LENGTH {
        return false;
    }

    if numbers.iter().all(|&d| d == numbers[0]) {
        return false;
    }

    let first = check_digit(&numbers[..9], 10);
    if numbers[9] != first {
        return false;
    }

    let second = check_digit(&numbers[..10], 11);
    numbers[10] == second
}

/// Weighted sum with weights counting down from `start_weight` to 2, mod 11
fn check_digit(numbers: &[u32], start_weight: u32) -> u32 {
    let sum: u32 = numbers
        .iter()
        .zip((2..=start_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}
