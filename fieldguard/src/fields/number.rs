use super::bounds::{Bounds, bound_setters};
use crate::descriptor::{Binding, FieldKind};
use crate::errors::{DefinitionError, FieldError};
use crate::value::{Value, ValueKind};

/// Integer, float and decimal field with optional ordering limits.
///
/// [`NumberField::new`] also accepts complex values; those can only pass a
/// field without limits, since complex numbers do not order.
#[derive(Debug, Clone)]
pub struct NumberField {
    types: &'static [ValueKind],
    bounds: Bounds,
}

impl NumberField {
    pub fn new() -> Self {
        Self::with_types(ValueKind::NUMERIC)
    }

    pub fn int() -> Self {
        Self::with_types(&[ValueKind::Int])
    }

    pub fn float() -> Self {
        Self::with_types(&[ValueKind::Float])
    }

    pub fn decimal() -> Self {
        Self::with_types(&[ValueKind::Decimal])
    }

    fn with_types(types: &'static [ValueKind]) -> Self {
        Self {
            types,
            bounds: Bounds::default(),
        }
    }

    bound_setters!();
}

impl Default for NumberField {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldKind for NumberField {
    fn name(&self) -> &'static str {
        match self.types {
            [ValueKind::Int] => "int",
            [ValueKind::Float] => "float",
            [ValueKind::Decimal] => "decimal",
            _ => "number",
        }
    }

    fn valid_types(&self) -> &[ValueKind] {
        self.types
    }

    fn check_config(&self, binding: &Binding) -> Result<(), DefinitionError> {
        self.bounds.check_config(binding, ValueKind::ORDERED_NUMERIC)
    }

    fn validate(&self, binding: &Binding, value: &Value) -> Result<(), FieldError> {
        self.bounds.check(binding.field(), value)
    }
}

/// Complex-number field. Type check only: it has no ordering limits to configure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexField;

impl ComplexField {
    pub fn new() -> Self {
        Self
    }
}

impl FieldKind for ComplexField {
    fn name(&self) -> &'static str {
        "complex"
    }

    fn valid_types(&self) -> &[ValueKind] {
        &[ValueKind::Complex]
    }

    fn validate(&self, _binding: &Binding, _value: &Value) -> Result<(), FieldError> {
        Ok(())
    }
}
