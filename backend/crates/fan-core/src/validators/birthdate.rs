use chrono::{Months, NaiveDate};

pub const MINIMUM_AGE_YEARS: u32 = 13;

/// Outcome of checking a birthdate against a reference day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdateCheck {
    Valid,
    Missing,
    /// Not an ISO `YYYY-MM-DD` date
    Malformed,
    InFuture,
    TooYoung,
}

pub fn check_birthdate(value: &str, today: NaiveDate) -> BirthdateCheck {
    let value = value.trim();
    if value.is_empty() {
        return BirthdateCheck::Missing;
    }

    let Ok(birthdate) = NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
        return BirthdateCheck::Malformed;
    };

    if birthdate > today {
        return BirthdateCheck::InFuture;
    }

    let latest_allowed = today
        .checked_sub_months(Months::new(MINIMUM_AGE_YEARS * 12))
        .unwrap_or(NaiveDate::MIN);
    if birthdate > latest_allowed {
        return BirthdateCheck::TooYoung;
    }

    BirthdateCheck::Valid
}
