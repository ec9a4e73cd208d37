use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::core::error::AppError;

/// Validate a request body, collecting every failing field into one error
pub fn validate_body<T: Validate>(dto: &T) -> Result<(), AppError> {
    dto.validate()
        .map_err(|e| AppError::Validation(validation_messages(&e)))
}

/// Flatten field errors (including nested structs) into sorted, human-readable messages
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect_messages(errors, &mut messages);
    messages.sort();
    messages
}

fn collect_messages(errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, out),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect_messages(nested, out);
                }
            }
        }
    }
}
