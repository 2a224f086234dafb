use super::bounds::{Bounds, bound_setters};
use crate::descriptor::{Binding, FieldKind};
use crate::errors::{DefinitionError, FieldError};
use crate::value::{Value, ValueKind};

/// Date and time family: points in time, durations, dates and times of day.
///
/// Limits must be of a kind the bound attribute accepts. On the generic
/// [`TemporalField::new`] a value of another temporal kind than its limit is
/// rejected as a type error.
#[derive(Debug, Clone)]
pub struct TemporalField {
    types: &'static [ValueKind],
    bounds: Bounds,
}

impl TemporalField {
    pub fn new() -> Self {
        Self::with_types(ValueKind::TEMPORAL)
    }

    pub fn datetime() -> Self {
        Self::with_types(&[ValueKind::DateTime])
    }

    pub fn duration() -> Self {
        Self::with_types(&[ValueKind::Duration])
    }

    pub fn date() -> Self {
        Self::with_types(&[ValueKind::Date])
    }

    pub fn time() -> Self {
        Self::with_types(&[ValueKind::Time])
    }

    fn with_types(types: &'static [ValueKind]) -> Self {
        Self {
            types,
            bounds: Bounds::default(),
        }
    }

    bound_setters!();
}

impl Default for TemporalField {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldKind for TemporalField {
    fn name(&self) -> &'static str {
        match self.types {
            [ValueKind::DateTime] => "datetime",
            [ValueKind::Duration] => "duration",
            [ValueKind::Date] => "date",
            [ValueKind::Time] => "time",
            _ => "temporal",
        }
    }

    fn valid_types(&self) -> &[ValueKind] {
        self.types
    }

    fn check_config(&self, binding: &Binding) -> Result<(), DefinitionError> {
        self.bounds.check_config(binding, &binding.accepted)
    }

    fn validate(&self, binding: &Binding, value: &Value) -> Result<(), FieldError> {
        self.bounds.check(binding.field(), value)
    }
}
