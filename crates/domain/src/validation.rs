//! Identifier, date and string predicates shared by entities and services
//!
//! Entity checks report `Validation` failures. Argument checks used by services
//! report `ArgumentMissing` for absent values before looking at their format.

use crate::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// True for a zero-length string
pub fn is_empty(value: &str) -> bool {
    value.is_empty()
}

/// True when `value` parses as a unique identifier
pub fn is_guid(value: &str) -> bool {
    Uuid::parse_str(value).is_ok()
}

/// True when `to` is not strictly later than `from` (an invalid period)
pub fn is_date_not_older(from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
    from >= to
}

/// Entity field that must hold a unique identifier
pub fn require_id(value: &str, field: &str) -> DomainResult<()> {
    if is_empty(value) {
        return Err(DomainError::validation(field, format!("Field {field} is empty")));
    }
    if !is_guid(value) {
        return Err(DomainError::validation(
            field,
            format!("The value in the field {field} is not a unique identifier"),
        ));
    }
    Ok(())
}

/// Entity field that must not be empty
pub fn require_not_empty(value: &str, field: &str) -> DomainResult<()> {
    if is_empty(value) {
        return Err(DomainError::validation(field, format!("Field {field} is empty")));
    }
    Ok(())
}

/// Entity field that must be strictly positive
pub fn require_positive(value: f64, field: &str) -> DomainResult<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(DomainError::validation(
            field,
            format!("Field {field} is less than or equal to 0"),
        ));
    }
    Ok(())
}

/// Service argument that must be present and be a unique identifier
pub fn check_id_argument(value: &str, name: &str) -> DomainResult<()> {
    if is_empty(value) {
        return Err(DomainError::ArgumentMissing(name.to_string()));
    }
    if !is_guid(value) {
        return Err(DomainError::validation(
            name,
            format!("The value in the field {name} is not a unique identifier"),
        ));
    }
    Ok(())
}

/// Service argument that must be present
pub fn check_present_argument(value: &str, name: &str) -> DomainResult<()> {
    if is_empty(value) {
        return Err(DomainError::ArgumentMissing(name.to_string()));
    }
    Ok(())
}

/// Period arguments: `from` must be strictly before `to`
pub fn check_period(from: DateTime<Utc>, to: DateTime<Utc>) -> DomainResult<()> {
    if is_date_not_older(from, to) {
        return Err(DomainError::IncorrectDates { from, to });
    }
    Ok(())
}
