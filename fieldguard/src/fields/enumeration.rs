use crate::descriptor::{Binding, FieldKind};
use crate::errors::FieldError;
use crate::value::{EnumType, Enumeration, Value, ValueKind};

/// Enumeration member field.
///
/// Membership follows from the type gate: a member of another enumeration,
/// even one with identical variant names, has a different runtime kind.
#[derive(Debug, Clone, Copy)]
pub struct EnumField {
    types: [ValueKind; 1],
}

impl EnumField {
    /// Accepts members of whichever enumeration the attribute is declared as.
    pub fn any() -> Self {
        Self {
            types: [ValueKind::AnyEnum],
        }
    }

    /// Accepts members of `E` only.
    pub fn of<E: Enumeration>() -> Self {
        Self {
            types: [ValueKind::Enum(EnumType::of::<E>())],
        }
    }
}

impl Default for EnumField {
    fn default() -> Self {
        Self::any()
    }
}

impl FieldKind for EnumField {
    fn name(&self) -> &'static str {
        "enum"
    }

    fn valid_types(&self) -> &[ValueKind] {
        &self.types
    }

    fn validate(&self, _binding: &Binding, _value: &Value) -> Result<(), FieldError> {
        Ok(())
    }
}
