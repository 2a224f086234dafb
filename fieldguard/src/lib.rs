//! Declarative field validation for typed records.
//!
//! A field descriptor is attached to one attribute of a record type. It checks
//! the attribute's declared type once, when the type is defined, then
//! validates (and optionally transforms) every value written to the attribute
//! and resolves defaults when it is read.
//!
//! ```
//! #[fieldguard::record]
//! #[derive(Debug)]
//! struct Person {
//!     #[field(text(min_length = 3, max_length = 5))]
//!     name: String,
//!     #[field(int(ge = 0), default = 18)]
//!     age: i64,
//! }
//!
//! let mut person = Person::builder().name("Ana").build()?;
//! assert_eq!(person.age()?, 18);
//! assert!(person.set_name("x").is_err());
//! assert_eq!(person.name()?, "Ana");
//! # Ok::<(), fieldguard::FieldError>(())
//! ```
//!
//! Records whose shape is only known at runtime use [`Schema`] directly.

extern crate self as fieldguard;

pub mod descriptor;
pub mod errors;
pub mod fields;
pub mod hint;
pub mod record;
pub mod schema;
pub mod slot;
pub mod storage;
pub mod value;

pub use descriptor::{Bindable, Binding, BoundDescriptor, Descriptor, FieldKind, FieldOptions};
pub use errors::{Constraint, ConstraintViolation, DefinitionError, ErrorCategory, FieldError, FieldResult};
pub use fields::{BoolField, ComplexField, EnumField, NumberField, TemporalField, TextField};
pub use hint::{Annotations, TypeHint, TypeHintSource};
pub use record::Record;
pub use schema::{DynamicRecord, Schema, SchemaBuilder};
pub use slot::Slot;
pub use storage::Storage;
pub use value::{EnumType, EnumValue, Enumeration, FieldValue, KindList, Number, Value, ValueKind, Width};

pub use fieldguard_macros::{Enumeration, record};

pub use chrono;
pub use num_complex;
pub use once_cell;
pub use rust_decimal;
