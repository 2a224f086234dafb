use crate::errors::{DefinitionError, FieldError};
use crate::schema::Schema;
use crate::slot::Slot;
use crate::storage::Storage;
use crate::value::{FieldValue, Value};

/// A statically declared record type backed by a lazily built [`Schema`].
///
/// Implemented by `#[fieldguard::record]`. Every attribute access goes through
/// the bound descriptor of that attribute.
pub trait Record: Sized {
    /// The record's schema, or the error that prevented it from being defined.
    fn try_schema() -> Result<&'static Schema, &'static DefinitionError>;

    /// The record's schema.
    ///
    /// # Panics
    ///
    /// Panics if the record definition is invalid, e.g. a field's declared
    /// type does not fit its kind.
    fn schema() -> &'static Schema {
        match Self::try_schema() {
            Ok(schema) => schema,
            Err(err) => panic!("invalid record definition: {err}"),
        }
    }

    fn storage(&self) -> &Storage;

    fn storage_mut(&mut self) -> &mut Storage;

    fn get(&self, name: &str) -> Result<Value, FieldError> {
        Self::schema().get(self.storage(), name)
    }

    fn set(&mut self, name: &str, value: impl Into<Slot<Value>>) -> Result<(), FieldError> {
        Self::schema().set(self.storage_mut(), name, value)
    }

    /// Reads `name` back as its declared Rust type.
    fn read<T: FieldValue>(&self, name: &str) -> Result<T, FieldError> {
        let value = self.get(name)?;
        T::from_value(value.clone()).ok_or_else(|| FieldError::Conversion {
            field: name.to_string(),
            value: value.to_string(),
            expected: std::any::type_name::<T>(),
        })
    }

    fn write<T: FieldValue>(&mut self, name: &str, value: T) -> Result<(), FieldError> {
        self.set(name, Slot::Present(value.into_value()))
    }
}
