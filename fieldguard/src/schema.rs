use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::descriptor::{Bindable, BoundDescriptor, Descriptor};
use crate::errors::{DefinitionError, FieldError};
use crate::hint::{Annotations, TypeHint, TypeHintSource};
use crate::slot::Slot;
use crate::storage::Storage;
use crate::value::{Enumeration, Value};

/// The owner type of a set of bound descriptors.
///
/// Descriptors are bound as they are declared, so an incompatible type hint
/// or a bad constraint fails the definition before any instance exists.
#[derive(Debug)]
pub struct Schema {
    name: String,
    fields: Vec<BoundDescriptor>,
    index: HashMap<String, usize>,
}

/// Builder for [`Schema`].
#[derive(Debug)]
pub struct SchemaBuilder {
    annotations: Annotations,
    fields: Vec<BoundDescriptor>,
    index: HashMap<String, usize>,
}

impl SchemaBuilder {
    /// Lets string-form type hints name `E`.
    pub fn enumeration<E: Enumeration>(mut self) -> Self {
        self.annotations.register_enumeration::<E>();
        self
    }

    /// Declares `name` with its type hint and binds `descriptor` to it.
    pub fn field(
        mut self,
        name: &str,
        hint: impl Into<TypeHint>,
        descriptor: impl Into<Descriptor>,
    ) -> Result<Self, DefinitionError> {
        if self.annotations.is_declared(name) {
            return Err(DefinitionError::DuplicateField {
                owner: self.annotations.owner_name().to_string(),
                field: name.to_string(),
            });
        }
        self.annotations.declare(name, hint);
        let bound = descriptor.into().bind_to(&self.annotations, name)?;
        self.index.insert(name.to_string(), self.fields.len());
        self.fields.push(bound);
        Ok(self)
    }

    pub fn build(self) -> Schema {
        let name = self.annotations.owner_name().to_string();
        debug!(owner = %name, fields = self.fields.len(), "built schema");
        Schema {
            name,
            fields: self.fields,
            index: self.index,
        }
    }
}

impl Schema {
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            annotations: Annotations::new(name),
            fields: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bound descriptors in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &BoundDescriptor> {
        self.fields.iter()
    }

    pub fn field(&self, name: &str) -> Option<&BoundDescriptor> {
        self.index.get(name).map(|idx| &self.fields[*idx])
    }

    pub fn descriptor(&self, name: &str) -> Result<&BoundDescriptor, FieldError> {
        self.field(name).ok_or_else(|| FieldError::UnknownField {
            owner: self.name.clone(),
            field: name.to_string(),
        })
    }

    pub fn get(&self, storage: &Storage, name: &str) -> Result<Value, FieldError> {
        self.descriptor(name)?.get(storage)
    }

    pub fn set(&self, storage: &mut Storage, name: &str, value: impl Into<Slot<Value>>) -> Result<(), FieldError> {
        self.descriptor(name)?.set(storage, value)
    }

    /// Builds the storage of a new instance.
    ///
    /// Every declared field goes through its set hook in declaration order;
    /// fields without a supplied value receive [`Slot::Unset`].
    pub fn construct<I, N, V>(&self, values: I) -> Result<Storage, FieldError>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<Slot<Value>>,
    {
        let mut supplied: HashMap<String, Slot<Value>> = HashMap::new();
        for (name, value) in values {
            let name = name.into();
            if !self.index.contains_key(&name) {
                return Err(FieldError::UnknownField {
                    owner: self.name.clone(),
                    field: name,
                });
            }
            supplied.insert(name, value.into());
        }

        let mut storage = Storage::new();
        for field in &self.fields {
            let value = supplied.remove(field.name()).unwrap_or_default();
            field.set(&mut storage, value)?;
        }
        Ok(storage)
    }

    /// Constructs a [`DynamicRecord`] sharing this schema.
    pub fn instance<I, N, V>(self: &Arc<Self>, values: I) -> Result<DynamicRecord, FieldError>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<Slot<Value>>,
    {
        let storage = self.construct(values)?;
        Ok(DynamicRecord {
            schema: Arc::clone(self),
            storage,
        })
    }
}

/// A record whose shape is only known at runtime.
#[derive(Debug, Clone)]
pub struct DynamicRecord {
    schema: Arc<Schema>,
    storage: Storage,
}

impl DynamicRecord {
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn get(&self, name: &str) -> Result<Value, FieldError> {
        self.schema.get(&self.storage, name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<Slot<Value>>) -> Result<(), FieldError> {
        self.schema.set(&mut self.storage, name, value)
    }

    /// Stores a plain attribute that no descriptor manages.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.storage.insert_attr(name, value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{NumberField, TextField};

    fn person() -> Schema {
        Schema::builder("Person")
            .field("name", "String", TextField::new().max_length(10))
            .and_then(|b| b.field("age", "Option<i64>", NumberField::int().ge(0)))
            .map(SchemaBuilder::build)
            .unwrap()
    }

    #[test]
    fn duplicate_fields_are_rejected() {
        let err = Schema::builder("T")
            .field("a", "String", TextField::new())
            .and_then(|b| b.field("a", "String", TextField::new()))
            .unwrap_err();
        assert!(matches!(err, DefinitionError::DuplicateField { .. }));
    }

    #[test]
    fn construct_runs_every_set_hook_in_order() {
        let schema = person();
        let storage = schema.construct([("name", Value::from("Ana"))]).unwrap();
        assert_eq!(schema.get(&storage, "name").unwrap(), Value::from("Ana"));
        assert_eq!(schema.get(&storage, "age").unwrap(), Value::Null);
        assert_eq!(schema.fields().map(BoundDescriptor::name).collect::<Vec<_>>(), vec!["name", "age"]);
    }

    #[test]
    fn construct_rejects_unknown_names() {
        let err = person().construct([("nickname", Value::from("A"))]).unwrap_err();
        assert!(matches!(err, FieldError::UnknownField { .. }));
    }

    #[test]
    fn dynamic_records_share_the_schema() {
        let schema = Arc::new(person());
        let mut first = schema.instance([("name", Value::from("Ana"))]).unwrap();
        let second = schema.instance([("name", Value::from("Bo"))]).unwrap();

        first.set("age", Value::Int(30)).unwrap();
        first.set_attr("note", "plain");
        assert_eq!(first.get("age").unwrap(), Value::Int(30));
        assert_eq!(second.get("age").unwrap(), Value::Null);
        assert_eq!(first.storage().attr("note"), Some(&Value::from("plain")));
    }
}
