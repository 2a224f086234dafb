use std::fmt;

use thiserror::Error;

use crate::value::{KindList, ValueKind};

/// Failure raised while a record type is being defined.
///
/// These surface when a schema is built (or, for `#[record]` types, when the
/// static schema is first touched) and never during ordinary reads or writes.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The declared type of the attribute cannot hold values of the field kind.
    #[error("field '{field}' of '{owner}' is declared as `{hint}`, which is incompatible with {kind} field types {accepted}")]
    IncompatibleHint {
        owner: String,
        field: String,
        hint: String,
        kind: &'static str,
        accepted: KindList,
    },

    /// No annotation was declared for the attribute.
    #[error("field '{field}' of '{owner}' has no declared type")]
    MissingHint { owner: String, field: String },

    /// A string-form annotation names a type the owner does not know about.
    #[error("cannot resolve type `{name}` for field '{field}' of '{owner}'")]
    UnresolvedHint { owner: String, field: String, name: String },

    /// A string-form annotation could not be parsed.
    #[error("malformed type annotation `{input}`: {reason}")]
    MalformedHint { input: String, reason: String },

    /// The same attribute was declared twice on one owner.
    #[error("field '{field}' is declared more than once on '{owner}'")]
    DuplicateField { owner: String, field: String },

    #[error("invalid regex pattern `{pattern}`: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A comparison limit does not belong to the field's accepted kinds.
    #[error("field '{field}' of '{owner}': `{constraint}` limit {limit} must be one of {expected}")]
    InvalidLimit {
        owner: String,
        field: String,
        constraint: Constraint,
        limit: String,
        expected: KindList,
    },

    #[error("cannot parse `{input}` as {kind}")]
    InvalidLiteral { kind: ValueKind, input: String },

    /// The configured default does not pass the field's own validation.
    #[error("default for field '{field}' of '{owner}' is invalid: {source}")]
    InvalidDefault {
        owner: String,
        field: String,
        #[source]
        source: Box<FieldError>,
    },
}

/// Failure raised by a descriptor's get or set hook.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("'{owner}' has no field '{field}'")]
    UnknownField { owner: String, field: String },

    /// A required field with no default was read before it was ever written.
    #[error("'{owner}' field '{field}' is not set")]
    Unset { owner: String, field: String },

    /// A required field with no default was assigned the absence-value.
    #[error("'{owner}' field '{field}' cannot be null")]
    NullOnRequired { owner: String, field: String },

    #[error("value ({value}) set to field '{field}' must be of type {accepted} and not {actual}")]
    TypeMismatch {
        field: String,
        value: String,
        actual: ValueKind,
        accepted: KindList,
    },

    /// The value has an accepted kind but overflows the declared Rust type.
    #[error("value ({value}) set to field '{field}' does not fit its declared type {declared}")]
    OutOfRange {
        field: String,
        value: String,
        declared: String,
    },

    /// An ordering limit and the value belong to different families.
    #[error("'{field}' value '{value}' cannot be compared with {constraint} limit {limit}")]
    Incomparable {
        field: String,
        value: String,
        constraint: Constraint,
        limit: String,
    },

    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    /// A stored value could not be read back as the record's declared Rust type.
    #[error("field '{field}' holds {value}, which cannot be read as `{expected}`")]
    Conversion {
        field: String,
        value: String,
        expected: &'static str,
    },
}

/// Coarse classification of [`FieldError`], mirroring attribute/type/value errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Attribute,
    Type,
    Value,
}

impl FieldError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FieldError::UnknownField { .. } | FieldError::Unset { .. } | FieldError::NullOnRequired { .. } => {
                ErrorCategory::Attribute
            }
            FieldError::TypeMismatch { .. }
            | FieldError::OutOfRange { .. }
            | FieldError::Incomparable { .. }
            | FieldError::Conversion { .. } => ErrorCategory::Type,
            FieldError::Constraint(_) => ErrorCategory::Value,
        }
    }

    /// Returns the violated constraint when this is a constraint failure.
    pub fn constraint(&self) -> Option<Constraint> {
        match self {
            FieldError::Constraint(violation) => Some(violation.constraint),
            _ => None,
        }
    }

    pub fn is_type_error(&self) -> bool {
        self.category() == ErrorCategory::Type
    }

    pub fn is_value_error(&self) -> bool {
        self.category() == ErrorCategory::Value
    }

    pub fn is_attribute_error(&self) -> bool {
        self.category() == ErrorCategory::Attribute
    }
}

/// Kind-specific rule checked by `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Gt,
    Lt,
    Ge,
    Le,
    NotANumber,
    MaxLength,
    MinLength,
    Blank,
    Regex,
    Custom(&'static str),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Constraint::Gt => "gt",
            Constraint::Lt => "lt",
            Constraint::Ge => "ge",
            Constraint::Le => "le",
            Constraint::NotANumber => "nan",
            Constraint::MaxLength => "max_length",
            Constraint::MinLength => "min_length",
            Constraint::Blank => "blank",
            Constraint::Regex => "regex",
            Constraint::Custom(name) => name,
        };
        f.write_str(name)
    }
}

/// A single failed constraint. Validation stops at the first one.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ConstraintViolation {
    pub field: String,
    pub constraint: Constraint,
    pub value: String,
    pub limit: Option<String>,
    pub message: String,
}

impl ConstraintViolation {
    /// Builds a violation using the stock message template for `constraint`.
    pub fn new(
        field: impl Into<String>,
        constraint: Constraint,
        value: impl fmt::Display,
        limit: Option<&dyn fmt::Display>,
    ) -> Self {
        let field = field.into();
        let value = value.to_string();
        let limit = limit.map(|limit| limit.to_string());
        let shown = limit.as_deref().unwrap_or("");
        let message = match constraint {
            Constraint::Gt => format!("'{field}' value '{value}' must be greater than {shown}."),
            Constraint::Lt => format!("'{field}' value '{value}' must be less than {shown}."),
            Constraint::Ge => format!("'{field}' value '{value}' must be greater than or equal to {shown}."),
            Constraint::Le => format!("'{field}' value '{value}' must be less than or equal to {shown}."),
            Constraint::NotANumber => format!("'{field}' value '{value}' is not a number."),
            Constraint::MaxLength => format!("'{field}' value '{value}' length cannot be more than {shown}."),
            Constraint::MinLength => format!("'{field}' value '{value}' length cannot be less than {shown}."),
            Constraint::Blank => format!("'{field}' cannot be blank."),
            Constraint::Regex => format!("'{field}' value '{value}' does not match regex: {shown}"),
            Constraint::Custom(name) => format!("'{field}' value '{value}' failed {name}."),
        };
        Self {
            field,
            constraint,
            value,
            limit,
            message,
        }
    }

    /// Builds a violation for a user-defined field kind with its own message.
    pub fn custom(
        field: impl Into<String>,
        name: &'static str,
        value: impl fmt::Display,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            constraint: Constraint::Custom(name),
            value: value.to_string(),
            limit: None,
            message: message.into(),
        }
    }
}

pub type FieldResult<T> = Result<T, FieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_messages_name_field_value_and_limit() {
        let violation = ConstraintViolation::new("age", Constraint::Gt, 3, Some(&3));
        assert_eq!(violation.to_string(), "'age' value '3' must be greater than 3.");
        assert_eq!(violation.limit.as_deref(), Some("3"));
    }

    #[test]
    fn blank_message_omits_limit() {
        let violation = ConstraintViolation::new("name", Constraint::Blank, "", None);
        assert_eq!(violation.to_string(), "'name' cannot be blank.");
        assert!(violation.limit.is_none());
    }

    #[test]
    fn categories_follow_error_taxonomy() {
        let unset = FieldError::Unset {
            owner: "T".into(),
            field: "name".into(),
        };
        assert!(unset.is_attribute_error());

        let violation: FieldError = ConstraintViolation::new("name", Constraint::MaxLength, "abcdef", Some(&5)).into();
        assert!(violation.is_value_error());
        assert_eq!(violation.constraint(), Some(Constraint::MaxLength));
    }
}
