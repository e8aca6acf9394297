//! Request validation at the HTTP boundary, before any service call.
//! All violations for a body are collected and reported together, in field
//! order.

use crate::error::{AppError, FieldViolation};
use crate::model::{BeerPatch, BeerUpsert, CustomerPatch, CustomerUpsert};

pub const BEER_NAME_MAX_LEN: usize = 50;
pub const CUSTOMER_NAME_MAX_LEN: usize = 100;

fn check_required_name(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    value: Option<&str>,
    max_len: usize,
) {
    match value {
        None => violations.push(FieldViolation::new(field, "must not be blank")),
        Some(s) if s.trim().is_empty() => {
            violations.push(FieldViolation::new(field, "must not be blank"));
        }
        Some(s) if s.chars().count() > max_len => {
            violations.push(FieldViolation::new(
                field,
                format!("must be at most {max_len} characters"),
            ));
        }
        Some(_) => {}
    }
}

/// Length bound only, for PATCH bodies where blank means "leave unchanged".
fn check_optional_name(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    value: Option<&str>,
    max_len: usize,
) {
    if let Some(s) = value {
        if !s.trim().is_empty() && s.chars().count() > max_len {
            violations.push(FieldViolation::new(
                field,
                format!("must be at most {max_len} characters"),
            ));
        }
    }
}

fn check_price(violations: &mut Vec<FieldViolation>, price: Option<f64>) {
    if let Some(p) = price {
        if p < 0.0 {
            violations.push(FieldViolation::new("price", "must not be negative"));
        }
    }
}

fn finish(violations: Vec<FieldViolation>) -> Result<(), AppError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(violations))
    }
}

pub fn validate_beer_upsert(body: &BeerUpsert) -> Result<(), AppError> {
    let mut violations = Vec::new();
    check_required_name(
        &mut violations,
        "beerName",
        body.beer_name.as_deref(),
        BEER_NAME_MAX_LEN,
    );
    check_price(&mut violations, body.price);
    finish(violations)
}

pub fn validate_beer_patch(body: &BeerPatch) -> Result<(), AppError> {
    let mut violations = Vec::new();
    check_optional_name(
        &mut violations,
        "beerName",
        body.beer_name.as_deref(),
        BEER_NAME_MAX_LEN,
    );
    check_price(&mut violations, body.price);
    finish(violations)
}

pub fn validate_customer_upsert(body: &CustomerUpsert) -> Result<(), AppError> {
    let mut violations = Vec::new();
    check_required_name(
        &mut violations,
        "customerName",
        body.customer_name.as_deref(),
        CUSTOMER_NAME_MAX_LEN,
    );
    finish(violations)
}

pub fn validate_customer_patch(body: &CustomerPatch) -> Result<(), AppError> {
    let mut violations = Vec::new();
    check_optional_name(
        &mut violations,
        "customerName",
        body.customer_name.as_deref(),
        CUSTOMER_NAME_MAX_LEN,
    );
    finish(violations)
}
