use crate::validators::{digits, format_national_id, format_phone, format_zip_code};

use proptest::prelude::*;

#[test]
fn test_format_national_id() {
    assert_eq!(format_national_id("52998224725"), "529.982.247-25");
    assert_eq!(format_national_id("529.982.247-25"), "529.982.247-25");
    assert_eq!(format_national_id("5299"), "5299");
}

#[test]
fn test_format_phone() {
    assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
    assert_eq!(format_phone("(11) 98765-4321"), "(11) 98765-4321");
    assert_eq!(format_phone("1198765"), "1198765");
}

#[test]
fn test_format_zip_code() {
    assert_eq!(format_zip_code("01310100"), "01310-100");
    assert_eq!(format_zip_code("01310-100"), "01310-100");
}

#[test]
fn test_digits_strips_everything_else() {
    assert_eq!(digits("(11) 9a8-7"), "11987");
}

proptest! {
    #[test]
    fn phone_mask_is_idempotent(input in "[0-9]{0,14}") {
        let once = format_phone(&input);
        prop_assert_eq!(format_phone(&once), once);
    }

    #[test]
    fn national_id_mask_is_idempotent(input in "[0-9]{0,14}") {
        let once = format_national_id(&input);
        prop_assert_eq!(format_national_id(&once), once);
    }

    #[test]
    fn zip_code_mask_is_idempotent(input in "[0-9]{0,12}") {
        let once = format_zip_code(&input);
        prop_assert_eq!(format_zip_code(&once), once);
    }

    #[test]
    fn masks_preserve_digits(input in "[0-9]{0,14}") {
        prop_assert_eq!(digits(&format_phone(&input)), input.clone());
        prop_assert_eq!(digits(&format_national_id(&input)), input.clone());
        prop_assert_eq!(digits(&format_zip_code(&input)), input);
    }
}
