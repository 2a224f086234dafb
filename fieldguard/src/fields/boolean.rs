use crate::descriptor::{Binding, FieldKind};
use crate::errors::FieldError;
use crate::value::{Value, ValueKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct BoolField;

impl BoolField {
    pub fn new() -> Self {
        Self
    }
}

impl FieldKind for BoolField {
    fn name(&self) -> &'static str {
        "bool"
    }

    fn valid_types(&self) -> &[ValueKind] {
        &[ValueKind::Bool]
    }

    fn validate(&self, _binding: &Binding, _value: &Value) -> Result<(), FieldError> {
        Ok(())
    }
}
