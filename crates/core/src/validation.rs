//! Declarative payload validation.
//!
//! Create payloads derive [`validator::Validate`] for their presence and
//! range rules and implement [`Schema`] to describe the fully-typed record
//! they turn into once those rules hold. [`validate_into`] is the single
//! entry point: it either yields the record or a [`CoreError::InvalidInput`]
//! carrying every failing field.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// A validated wire payload that converts into a typed record.
pub trait Schema: Validate {
    /// The record produced once validation has passed.
    type Record;

    /// `(field, wire key)` pairs for fields whose JSON key differs from the
    /// Rust field name. Failures are reported under the wire key.
    const WIRE_NAMES: &'static [(&'static str, &'static str)] = &[];

    /// Convert into the record. Only called after [`Validate::validate`]
    /// succeeded, so required fields are known to be present.
    fn into_record(self) -> Self::Record;
}

/// Validate `payload` and convert it into its record type.
pub fn validate_into<S: Schema>(payload: S) -> Result<S::Record, CoreError> {
    payload
        .validate()
        .map_err(|errors| CoreError::InvalidInput(rename_fields(errors, S::WIRE_NAMES)))?;
    Ok(payload.into_record())
}

fn rename_fields(
    mut errors: ValidationErrors,
    names: &[(&'static str, &'static str)],
) -> ValidationErrors {
    let fields = errors.errors_mut();
    for &(field, wire) in names {
        if let Some(kind) = fields.remove(field) {
            fields.insert(wire, kind);
        }
    }
    errors
}

/// Per-field messages, sorted by field name.
pub fn field_messages(errors: &ValidationErrors) -> Vec<(String, Vec<String>)> {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
}

/// Render validation errors as one human-readable line.
///
/// `"efternavn: is required; fornavn: is required"`
pub fn describe(errors: &ValidationErrors) -> String {
    field_messages(errors)
        .into_iter()
        .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Debug, Validate)]
    struct Renamed {
        #[validate(required(message = "is required"))]
        prove: Option<String>,
    }

    impl Schema for Renamed {
        type Record = String;

        const WIRE_NAMES: &'static [(&'static str, &'static str)] = &[("prove", "prøve")];

        fn into_record(self) -> String {
            self.prove.unwrap_or_default()
        }
    }

    #[derive(Debug, Validate)]
    struct Payload {
        #[validate(required(message = "is required"), length(min = 1, message = "must not be empty"))]
        name: Option<String>,
        #[validate(range(min = 0, message = "must be zero or greater"))]
        count: Option<i32>,
    }

    impl Schema for Payload {
        type Record = (String, i32);

        fn into_record(self) -> Self::Record {
            (self.name.unwrap_or_default(), self.count.unwrap_or_default())
        }
    }

    #[test]
    fn valid_payload_becomes_record() {
        let record = validate_into(Payload {
            name: Some("Hold A".into()),
            count: Some(12),
        })
        .unwrap();
        assert_eq!(record, ("Hold A".to_string(), 12));
    }

    #[test]
    fn missing_required_field_is_reported() {
        let err = validate_into(Payload {
            name: None,
            count: Some(1),
        })
        .unwrap_err();
        assert_matches!(&err, CoreError::InvalidInput(_));
        assert_eq!(err.to_string(), "Validation failed: name: is required");
    }

    #[test]
    fn all_failures_are_collected_in_field_order() {
        let err = Payload {
            name: None,
            count: Some(-1),
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            describe(&err),
            "count: must be zero or greater; name: is required"
        );
    }

    #[test]
    fn failures_are_reported_under_the_wire_key() {
        let err = validate_into(Renamed { prove: None }).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: prøve: is required");
        assert_matches!(&err, CoreError::InvalidInput(errors) if errors.errors().contains_key("prøve"));
    }
}
