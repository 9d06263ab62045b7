use crate::FormStep;

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_first_step_when_previous_then_none() {
    assert_that!(FormStep::Personal.previous(), none());
    assert_that!(FormStep::first(), eq(FormStep::Personal));
}

#[test]
fn given_last_step_when_next_then_none() {
    assert_that!(FormStep::Summary.next(), none());
    assert_that!(FormStep::last(), eq(FormStep::Summary));
}

#[test]
fn given_all_steps_when_walking_forward_then_order_is_fixed() {
    let mut walked = vec![FormStep::first()];
    while let Some(next) = walked.last().and_then(|s| s.next()) {
        walked.push(next);
    }

    assert_that!(walked.as_slice(), eq(FormStep::all()));
    assert_that!(FormStep::total(), eq(7));
}

#[test]
fn given_step_when_number_then_one_based() {
    assert_that!(FormStep::Personal.number(), eq(1));
    assert_that!(FormStep::Esports.number(), eq(6));
    assert_that!(FormStep::Summary.number(), eq(7));
}

#[test]
fn given_step_names_when_parsed_then_round_trip() {
    for step in FormStep::all() {
        assert_that!(FormStep::from_str(step.as_str()).unwrap(), eq(*step));
    }
    assert!(FormStep::from_str("payment").is_err());
}

#[test]
fn given_steps_when_ordered_then_follow_wizard_order() {
    assert!(FormStep::Personal < FormStep::Address);
    assert!(FormStep::Esports < FormStep::Summary);
}
