use crate::domain::payment::{FieldViolation, PaymentRequest};
use chrono::{DateTime, Datelike, Utc};

pub const SUPPORTED_CURRENCIES: [&str; 3] = ["USD", "GBP", "EUR"];
pub const CARD_NUMBER_LEN: usize = 16;

/// Checks every rule and returns all violations in field order. `now` is
/// taken as input so callers control what "expired" means.
pub fn validate(req: &PaymentRequest, now: DateTime<Utc>) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if req.card_number.is_empty() {
        violations.push(FieldViolation::new("card_number", "card_number is required"));
    } else if !is_digits(req.card_number.expose(), CARD_NUMBER_LEN..=CARD_NUMBER_LEN) {
        violations.push(FieldViolation::new(
            "card_number",
            format!("card_number must be exactly {CARD_NUMBER_LEN} digits"),
        ));
    }

    let month_ok = (1..=12).contains(&req.expiry_month);
    if !month_ok {
        violations.push(FieldViolation::new(
            "expiry_month",
            "expiry_month must be between 1 and 12",
        ));
    }

    if !(1000..=9999).contains(&req.expiry_year) {
        violations.push(FieldViolation::new(
            "expiry_year",
            "expiry_year must be a 4-digit year",
        ));
    } else if is_expired(req.expiry_year, month_ok.then_some(req.expiry_month), now) {
        violations.push(FieldViolation::new(
            "expiry_year",
            "card expiry date must not be in the past",
        ));
    }

    if !SUPPORTED_CURRENCIES.contains(&req.currency.as_str()) {
        violations.push(FieldViolation::new(
            "currency",
            format!("currency must be one of {}", SUPPORTED_CURRENCIES.join(", ")),
        ));
    }

    if req.amount <= 0 {
        violations.push(FieldViolation::new("amount", "amount must be a positive integer"));
    }

    if !is_digits(req.cvv.expose(), 3..=4) {
        violations.push(FieldViolation::new("cvv", "cvv must be 3 or 4 digits"));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn is_digits(s: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

// Without a usable month only the year can be compared.
fn is_expired(year: u16, month: Option<u8>, now: DateTime<Utc>) -> bool {
    let current = (now.year(), now.month());
    match month {
        Some(m) => (i32::from(year), u32::from(m)) < current,
        None => i32::from(year) < current.0,
    }
}
