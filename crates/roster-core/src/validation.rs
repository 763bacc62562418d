//! Validation utilities.
//!
//! User fields arrive as raw JSON values so that type mismatches (a numeric
//! name, a string age) are reported as validation failures rather than
//! deserialization errors. Every rule is evaluated and all failures are
//! returned together.

use crate::{FieldError, RosterError, RosterResult, UserDraft};
use serde_json::Value;
use validator::ValidationError;

/// Message for a missing or blank name.
pub const NAME_REQUIRED: &str = "Name is required and must be a non-empty string";
/// Message for a name that is not a string.
pub const NAME_NOT_STRING: &str = "Name must be a string";
/// Message for a name over the length limit.
pub const NAME_TOO_LONG: &str = "Name must be 100 characters or less";
/// Message for an age that is absent or not a number.
pub const AGE_NOT_NUMBER: &str = "Age must be a number";
/// Message for an age with a fractional part.
pub const AGE_NOT_INTEGER: &str = "Age must be an integer";
/// Message for an age outside the accepted range.
pub const AGE_OUT_OF_RANGE: &str = "Age must be between 0 and 150";
/// Message for a non-boolean admin flag.
pub const IS_ADMIN_NOT_BOOLEAN: &str = "isAdmin must be a boolean value";

/// Collects field errors in the order they are found.
#[derive(Debug, Default)]
pub struct Violations {
    errors: Vec<FieldError>,
}

impl Violations {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failed rule for `field`.
    pub fn add(&mut self, field: &str, error: ValidationError) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: error
                .message
                .as_ref()
                .map_or_else(|| error.code.to_string(), ToString::to_string),
            code: error.code.to_string(),
        });
    }

    /// Unwraps a rule result, recording its errors and yielding `None` on failure.
    pub fn check<T>(&mut self, field: &str, result: Result<T, Vec<ValidationError>>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(errors) => {
                for error in errors {
                    self.add(field, error);
                }
                None
            }
        }
    }

    /// Returns true if no rule has failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts to a `RosterError::Validation` if any rule failed.
    pub fn into_result(self) -> RosterResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(RosterError::validation(self.errors))
        }
    }
}

/// Validates raw user fields and produces a draft ready for storage.
///
/// `None` and JSON `null` are both treated as an absent field.
pub fn validate_user_fields(
    name: Option<&Value>,
    age: Option<&Value>,
    is_admin: Option<&Value>,
) -> RosterResult<UserDraft> {
    let mut violations = Violations::new();

    let name = violations.check("name", rules::name(name));
    let age = violations.check("age", rules::age(age));
    let is_admin = violations.check("isAdmin", rules::is_admin(is_admin));

    violations.into_result()?;

    match (name, age, is_admin) {
        (Some(name), Some(age), Some(is_admin)) => Ok(UserDraft::new(name, age, is_admin)),
        _ => Err(RosterError::internal("rule failed without recording a violation")),
    }
}

/// Field rules.
pub mod rules {
    use super::{
        AGE_NOT_INTEGER, AGE_NOT_NUMBER, AGE_OUT_OF_RANGE, IS_ADMIN_NOT_BOOLEAN, NAME_NOT_STRING,
        NAME_REQUIRED, NAME_TOO_LONG,
    };
    use crate::{AGE_MAX, AGE_MIN, NAME_MAX_CHARS};
    use serde_json::Value;
    use std::borrow::Cow;
    use validator::ValidationError;

    fn violation(code: &'static str, message: &'static str) -> ValidationError {
        let mut error = ValidationError::new(code);
        error.message = Some(Cow::Borrowed(message));
        error
    }

    fn present(value: Option<&Value>) -> Option<&Value> {
        value.filter(|v| !v.is_null())
    }

    /// Validates a name and returns it trimmed.
    ///
    /// Length is counted in Unicode scalar values, so astral characters such
    /// as emoji count once.
    pub fn name(value: Option<&Value>) -> Result<String, Vec<ValidationError>> {
        let raw = match present(value) {
            None => return Err(vec![violation("name_required", NAME_REQUIRED)]),
            Some(Value::String(raw)) => raw,
            Some(_) => return Err(vec![violation("name_not_string", NAME_NOT_STRING)]),
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(vec![violation("name_required", NAME_REQUIRED)]);
        }
        if trimmed.chars().count() > NAME_MAX_CHARS {
            return Err(vec![violation("name_too_long", NAME_TOO_LONG)]);
        }
        Ok(trimmed.to_string())
    }

    /// Validates an age.
    ///
    /// A missing or non-numeric age fails both the type and the range rule.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn age(value: Option<&Value>) -> Result<u8, Vec<ValidationError>> {
        let Some(age) = present(value).and_then(Value::as_f64) else {
            return Err(vec![
                violation("age_not_number", AGE_NOT_NUMBER),
                violation("age_out_of_range", AGE_OUT_OF_RANGE),
            ]);
        };

        let mut errors = Vec::new();
        if age.fract() != 0.0 {
            errors.push(violation("age_not_integer", AGE_NOT_INTEGER));
        }
        if !(AGE_MIN as f64..=AGE_MAX as f64).contains(&age) {
            errors.push(violation("age_out_of_range", AGE_OUT_OF_RANGE));
        }

        if errors.is_empty() {
            Ok(age as u8)
        } else {
            Err(errors)
        }
    }

    /// Validates the admin flag, defaulting to `false` when absent.
    pub fn is_admin(value: Option<&Value>) -> Result<bool, Vec<ValidationError>> {
        match present(value) {
            None => Ok(false),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(_) => Err(vec![violation("is_admin_not_boolean", IS_ADMIN_NOT_BOOLEAN)]),
        }
    }
}
