//! Structural checks on submitted credentials, run before any cryptographic work.
//!
//! Field rules live on the request DTOs as `validator` attributes. This module
//! runs them and collects every violation instead of stopping at the first.

use validator::{Validate, ValidationErrors};
use warden_shared::FieldViolation;

use crate::error::AuthError;

/// Validate any request DTO, returning all field violations sorted by field name.
pub fn validate<T: Validate>(input: &T) -> Result<(), AuthError> {
    input
        .validate()
        .map_err(|errors| AuthError::Validation(collect_violations(&errors)))
}

fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let reason = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                FieldViolation::new(field.to_string(), reason)
            })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}
