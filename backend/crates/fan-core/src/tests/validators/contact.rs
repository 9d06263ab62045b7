use crate::validators::{is_valid_email, is_valid_url};

#[test]
fn test_email_shapes() {
    assert!(is_valid_email("fan@furia.gg"));
    assert!(is_valid_email("a.b+c@mail.example.com"));
    assert!(!is_valid_email("fan@furia"));
    assert!(!is_valid_email("fan furia@gg.com"));
    assert!(!is_valid_email("@furia.gg"));
    assert!(!is_valid_email("fan@@furia.gg"));
    assert!(!is_valid_email(""));
}

#[test]
fn test_absolute_urls_accepted() {
    assert!(is_valid_url("https://instagram.com/furiagg"));
    assert!(is_valid_url("http://steamcommunity.com/id/fan"));
}

#[test]
fn test_relative_or_hostless_urls_rejected() {
    assert!(!is_valid_url("instagram.com/furiagg"));
    assert!(!is_valid_url("/profile/fan"));
    assert!(!is_valid_url("mailto:fan@furia.gg"));
    assert!(!is_valid_url(""));
}
