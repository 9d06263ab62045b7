use crate::FanLevel;

#[test]
fn test_fan_level_thresholds() {
    assert_eq!(FanLevel::from_score(0), FanLevel::Novice);
    assert_eq!(FanLevel::from_score(29), FanLevel::Novice);
    assert_eq!(FanLevel::from_score(30), FanLevel::Fan);
    assert_eq!(FanLevel::from_score(59), FanLevel::Fan);
    assert_eq!(FanLevel::from_score(60), FanLevel::Enthusiast);
    assert_eq!(FanLevel::from_score(79), FanLevel::Enthusiast);
    assert_eq!(FanLevel::from_score(80), FanLevel::Superfan);
    assert_eq!(FanLevel::from_score(100), FanLevel::Superfan);
}

#[test]
fn test_points_to_superfan() {
    assert_eq!(FanLevel::points_to_superfan(50), 30);
    assert_eq!(FanLevel::points_to_superfan(80), 0);
    assert_eq!(FanLevel::points_to_superfan(95), 0);
}

#[test]
fn test_fan_level_labels() {
    assert_eq!(FanLevel::Superfan.label(), "Superfã");
    assert_eq!(FanLevel::Novice.as_str(), "novice");
}
