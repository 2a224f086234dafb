//! The field-descriptor protocol.
//!
//! A [`Descriptor`] is created unbound, then attached to one attribute of an
//! owner type through [`Bindable::bind_to`]. Binding checks the attribute's
//! declared type against the field kind once, and yields a
//! [`BoundDescriptor`] whose [`get`](BoundDescriptor::get) and
//! [`set`](BoundDescriptor::set) hooks mediate every access to the value held
//! in a record's [`Storage`].

use std::fmt;

use tracing::{debug, trace};

use crate::errors::{DefinitionError, FieldError};
use crate::hint::{TypeHint, TypeHintSource};
use crate::slot::Slot;
use crate::storage::Storage;
use crate::value::{KindList, Value, ValueKind, Width};

/// A family of field values: the accepted runtime kinds plus the constraints
/// layered on top of them.
pub trait FieldKind: fmt::Debug + Send + Sync + 'static {
    /// Short label used in diagnostics, e.g. `"text"`.
    fn name(&self) -> &'static str;

    /// Runtime kinds this field can ever hold.
    fn valid_types(&self) -> &[ValueKind];

    /// Verifies constraint configuration once the attribute is known.
    fn check_config(&self, _binding: &Binding) -> Result<(), DefinitionError> {
        Ok(())
    }

    /// Reshapes a value before it is type checked and validated.
    fn transform(&self, value: Value) -> Value {
        value
    }

    /// Checks kind-specific constraints, stopping at the first violation.
    ///
    /// Only called with values that already passed the type gate.
    fn validate(&self, binding: &Binding, value: &Value) -> Result<(), FieldError>;
}

/// Settings shared by every field kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOptions {
    /// Configured default; `None` means no default.
    pub default: Option<Value>,
    pub optional: bool,
    /// Keep the value in the shadow slot instead of the visible attribute map.
    pub use_private_attr: bool,
}

/// An unbound field descriptor.
#[derive(Debug)]
pub struct Descriptor {
    kind: Box<dyn FieldKind>,
    options: FieldOptions,
}

impl Descriptor {
    pub fn new(kind: impl FieldKind) -> Self {
        Self {
            kind: Box::new(kind),
            options: FieldOptions::default(),
        }
    }

    /// Sets the default. A default makes the field optional; a `Null`
    /// default only makes it optional.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.options.optional = true;
        self.options.default = (!value.is_null()).then_some(value);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.options.optional = optional || self.options.default.is_some();
        self
    }

    pub fn private(mut self) -> Self {
        self.options.use_private_attr = true;
        self
    }

    pub fn kind(&self) -> &dyn FieldKind {
        self.kind.as_ref()
    }

    pub fn options(&self) -> &FieldOptions {
        &self.options
    }
}

impl<K: FieldKind> From<K> for Descriptor {
    fn from(kind: K) -> Self {
        Descriptor::new(kind)
    }
}

/// Attaches a descriptor to a named attribute of an owner type.
pub trait Bindable {
    type Bound;

    fn bind_to(self, owner: &dyn TypeHintSource, name: &str) -> Result<Self::Bound, DefinitionError>;
}

/// What a descriptor learned about its attribute at bind time.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub owner: String,
    pub public_attr_name: String,
    pub private_attr_name: String,
    pub type_hint: TypeHint,
    /// Valid kinds narrowed by the declared type hint.
    pub accepted: Vec<ValueKind>,
    /// Narrow Rust types bounding the accepted kinds, e.g. `u8` for integers.
    pub widths: Vec<Width>,
}

impl Binding {
    pub fn field(&self) -> &str {
        &self.public_attr_name
    }
}

impl Bindable for Descriptor {
    type Bound = BoundDescriptor;

    fn bind_to(self, owner: &dyn TypeHintSource, name: &str) -> Result<BoundDescriptor, DefinitionError> {
        let Descriptor { kind, mut options } = self;
        let owner_name = owner.owner_name().to_string();
        let type_hint = owner.type_hint(name)?;

        let accepted = type_hint
            .accepted_kinds(kind.valid_types())
            .ok_or_else(|| DefinitionError::IncompatibleHint {
                owner: owner_name.clone(),
                field: name.to_string(),
                hint: type_hint.to_string(),
                kind: kind.name(),
                accepted: KindList::from(kind.valid_types()),
            })?;
        if type_hint.is_optional() {
            options.optional = true;
        }

        let binding = Binding {
            owner: owner_name,
            public_attr_name: name.to_string(),
            private_attr_name: Storage::private_name(name),
            widths: type_hint.width_limits(),
            type_hint,
            accepted,
        };
        kind.check_config(&binding)?;

        let mut bound = BoundDescriptor { kind, options, binding };
        if let Some(default) = bound.options.default.take() {
            let admitted = bound.admit(default).map_err(|source| DefinitionError::InvalidDefault {
                owner: bound.binding.owner.clone(),
                field: bound.binding.public_attr_name.clone(),
                source: Box::new(source),
            })?;
            bound.options.default = Some(admitted);
        }

        debug!(
            owner = %bound.binding.owner,
            field = %bound.binding.public_attr_name,
            kind = bound.kind.name(),
            hint = %bound.binding.type_hint,
            optional = bound.options.optional,
            "bound field descriptor"
        );
        Ok(bound)
    }
}

/// A descriptor attached to one attribute; shared by every instance of its owner.
#[derive(Debug)]
pub struct BoundDescriptor {
    kind: Box<dyn FieldKind>,
    options: FieldOptions,
    binding: Binding,
}

impl BoundDescriptor {
    pub fn name(&self) -> &str {
        self.binding.field()
    }

    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    pub fn options(&self) -> &FieldOptions {
        &self.options
    }

    pub fn kind(&self) -> &dyn FieldKind {
        self.kind.as_ref()
    }

    pub fn is_optional(&self) -> bool {
        self.options.optional
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.options.default.as_ref()
    }

    fn slot_name(&self) -> &str {
        if self.options.use_private_attr {
            &self.binding.private_attr_name
        } else {
            &self.binding.public_attr_name
        }
    }

    /// Resolves the current value of the attribute in `storage`.
    ///
    /// The default is looked up again on every read and never written back.
    pub fn get(&self, storage: &Storage) -> Result<Value, FieldError> {
        let raw = storage.read(self.slot_name(), self.options.use_private_attr);
        match (raw, &self.options.default) {
            (None | Some(Value::Null), Some(default)) => {
                trace!(owner = %self.binding.owner, field = self.name(), "resolved default on read");
                Ok(default.clone())
            }
            (None, None) if !self.options.optional => Err(FieldError::Unset {
                owner: self.binding.owner.clone(),
                field: self.name().to_string(),
            }),
            (None, None) => Ok(Value::Null),
            (Some(value), _) => Ok(value.clone()),
        }
    }

    /// Writes `value` to the attribute in `storage`.
    ///
    /// Defaults and optionality are resolved first; concrete values are then
    /// transformed, type checked and validated. Nothing is stored on failure.
    pub fn set(&self, storage: &mut Storage, value: impl Into<Slot<Value>>) -> Result<(), FieldError> {
        let private = self.options.use_private_attr;
        match (value.into().normalize(), &self.options.default) {
            (Slot::Unset | Slot::Null, Some(default)) => {
                trace!(owner = %self.binding.owner, field = self.name(), "substituted default on write");
                let admitted = self.admit_logged(default.clone())?;
                storage.write(self.slot_name(), private, admitted);
                Ok(())
            }
            (Slot::Unset | Slot::Null, None) if self.options.optional => {
                storage.write(self.slot_name(), private, Value::Null);
                Ok(())
            }
            // Nothing supplied for a required field: leave it unset so reads report it.
            (Slot::Unset, None) => Ok(()),
            (Slot::Null, None) => {
                debug!(owner = %self.binding.owner, field = self.name(), "rejected null on required field");
                Err(self.null_on_required())
            }
            (Slot::Present(value), _) => {
                let admitted = self.admit_logged(value)?;
                storage.write(self.slot_name(), private, admitted);
                Ok(())
            }
        }
    }

    /// Fails unless `value`'s runtime kind is one this binding accepts and the
    /// value fits the declared Rust type.
    pub fn check_type(&self, value: &Value) -> Result<(), FieldError> {
        let Some(actual) = value.kind() else {
            return Err(self.null_on_required());
        };
        if !self.binding.accepted.iter().any(|kind| actual.is_subtype_of(kind)) {
            return Err(FieldError::TypeMismatch {
                field: self.name().to_string(),
                value: value.to_string(),
                actual,
                accepted: KindList(self.binding.accepted.clone()),
            });
        }

        let mut limits = self.binding.widths.iter().filter(|width| width.kind() == actual).peekable();
        if limits.peek().is_some() && !limits.any(|width| width.admits(value)) {
            return Err(FieldError::OutOfRange {
                field: self.name().to_string(),
                value: value.to_string(),
                declared: self.binding.type_hint.to_string(),
            });
        }
        Ok(())
    }

    /// Runs transform, the type gate and validation, returning the value to store.
    pub fn admit(&self, value: Value) -> Result<Value, FieldError> {
        let value = self.kind.transform(value);
        self.check_type(&value)?;
        self.kind.validate(&self.binding, &value)?;
        Ok(value)
    }

    fn admit_logged(&self, value: Value) -> Result<Value, FieldError> {
        self.admit(value).inspect_err(|err| {
            debug!(owner = %self.binding.owner, field = self.name(), error = %err, "rejected write");
        })
    }

    fn null_on_required(&self) -> FieldError {
        FieldError::NullOnRequired {
            owner: self.binding.owner.clone(),
            field: self.name().to_string(),
        }
    }
}
