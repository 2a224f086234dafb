//! Concrete field kinds built on the descriptor core.

mod boolean;
mod bounds;
mod enumeration;
mod number;
mod temporal;
mod text;

pub use boolean::BoolField;
pub use bounds::Bounds;
pub use enumeration::EnumField;
pub use number::{ComplexField, NumberField};
pub use temporal::TemporalField;
pub use text::{Pattern, TextField, Trim};
