//! Request payload validation.
//!
//! Wraps the `validator` derive output into a single message listing every
//! violated field, e.g. `"email is not valid format, first_name is required"`.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::ApiError;

pub fn validate<T: Validate>(req: &T) -> Result<(), ApiError> {
    req.validate()
        .map_err(|errors| ApiError::Validation(format_errors(&errors)))
}

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            messages.push(format_field_error(field, error));
        }
    }
    // Field iteration order is a hash map's; sort so bodies are deterministic.
    messages.sort();
    messages.join(", ")
}

fn format_field_error(field: &str, error: &ValidationError) -> String {
    match error.code.as_ref() {
        "length" => {
            let len = error
                .params
                .get("value")
                .and_then(|v| v.as_str())
                .map(|s| s.chars().count() as u64);
            let min = error.params.get("min").and_then(|v| v.as_u64());
            let max = error.params.get("max").and_then(|v| v.as_u64());
            match (min, len) {
                (Some(min), Some(len)) if len < min => format!("{} is required", field),
                _ => match max {
                    Some(max) => format!("{} length max {}", field, max),
                    None => format!("{} is not valid", field),
                },
            }
        }
        "email" => format!("{} is not valid format", field),
        _ => format!("{} is not valid", field),
    }
}
