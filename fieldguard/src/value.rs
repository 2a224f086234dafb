//! Runtime payloads carried through descriptors.
//!
//! Every field kind validates a [`Value`]. Typed records convert their declared
//! Rust types to and from `Value` through [`FieldValue`].

use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use num_complex::Complex64;
use rust_decimal::Decimal;

use crate::errors::DefinitionError;
use crate::hint::TypeHint;

/// A dynamically typed field value. `Null` is the absence-value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    Complex(Complex64),
    Text(String),
    Bytes(Vec<u8>),
    DateTime(NaiveDateTime),
    Duration(TimeDelta),
    Date(NaiveDate),
    Time(NaiveTime),
    Enum(EnumValue),
}

/// Runtime type of a non-null [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Decimal,
    Complex,
    Text,
    Bytes,
    DateTime,
    Duration,
    Date,
    Time,
    /// Any enumeration.
    AnyEnum,
    /// One specific enumeration.
    Enum(EnumType),
}

impl ValueKind {
    pub const NUMERIC: &'static [ValueKind] = &[ValueKind::Int, ValueKind::Float, ValueKind::Decimal, ValueKind::Complex];
    pub const ORDERED_NUMERIC: &'static [ValueKind] = &[ValueKind::Int, ValueKind::Float, ValueKind::Decimal];
    pub const TEMPORAL: &'static [ValueKind] =
        &[ValueKind::DateTime, ValueKind::Duration, ValueKind::Date, ValueKind::Time];

    /// `true` when every value of `self` is also a value of `other`.
    pub fn is_subtype_of(&self, other: &ValueKind) -> bool {
        self == other || matches!((self, other), (ValueKind::Enum(_), ValueKind::AnyEnum))
    }

    pub fn is_temporal(&self) -> bool {
        Self::TEMPORAL.contains(self)
    }

    pub fn is_ordered_numeric(&self) -> bool {
        Self::ORDERED_NUMERIC.contains(self)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "i64",
            ValueKind::Float => "f64",
            ValueKind::Decimal => "Decimal",
            ValueKind::Complex => "Complex64",
            ValueKind::Text => "String",
            ValueKind::Bytes => "Vec<u8>",
            ValueKind::DateTime => "NaiveDateTime",
            ValueKind::Duration => "TimeDelta",
            ValueKind::Date => "NaiveDate",
            ValueKind::Time => "NaiveTime",
            ValueKind::AnyEnum => "enum",
            ValueKind::Enum(ty) => ty.name,
        };
        f.write_str(name)
    }
}

/// Display helper for a set of accepted kinds, e.g. `(i64, f64)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindList(pub Vec<ValueKind>);

impl From<&[ValueKind]> for KindList {
    fn from(kinds: &[ValueKind]) -> Self {
        Self(kinds.to_vec())
    }
}

impl fmt::Display for KindList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (idx, kind) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{kind}")?;
        }
        f.write_str(")")
    }
}

/// Identity of an enumeration type.
#[derive(Debug, Clone, Copy)]
pub struct EnumType {
    id: TypeId,
    pub name: &'static str,
}

impl EnumType {
    pub fn of<E: Enumeration>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: E::NAME,
        }
    }
}

impl PartialEq for EnumType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EnumType {}

impl std::hash::Hash for EnumType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Unit-only enumerations usable as field payloads. Implemented by `#[derive(Enumeration)]`.
pub trait Enumeration: Clone + 'static {
    const NAME: &'static str;

    fn variants() -> &'static [Self];

    fn variant_name(&self) -> &'static str;
}

/// A member of some [`Enumeration`], erased to its type identity and variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
    pub ty: EnumType,
    pub variant: &'static str,
}

impl EnumValue {
    pub fn of<E: Enumeration>(member: &E) -> Self {
        Self {
            ty: EnumType::of::<E>(),
            variant: member.variant_name(),
        }
    }

    /// Recovers the concrete member when this value belongs to `E`.
    pub fn downcast<E: Enumeration>(&self) -> Option<E> {
        if self.ty != EnumType::of::<E>() {
            return None;
        }
        E::variants()
            .iter()
            .find(|member| member.variant_name() == self.variant)
            .cloned()
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.ty.name, self.variant)
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Runtime kind, or `None` for the absence-value.
    pub fn kind(&self) -> Option<ValueKind> {
        let kind = match self {
            Value::Null => return None,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::Complex(_) => ValueKind::Complex,
            Value::Text(_) => ValueKind::Text,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::DateTime(_) => ValueKind::DateTime,
            Value::Duration(_) => ValueKind::Duration,
            Value::Date(_) => ValueKind::Date,
            Value::Time(_) => ValueKind::Time,
            Value::Enum(member) => ValueKind::Enum(member.ty),
        };
        Some(kind)
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Float(value) if value.is_nan())
    }

    /// Orders two values of the same family.
    ///
    /// Integers, floats and decimals compare across each other by their exact
    /// values, never by a rounded conversion. Temporal values only compare
    /// within their own kind. Complex numbers, NaN and mismatched
    /// families yield `None`.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Decimal(a), Value::Decimal(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Float(b)) => compare_int_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => compare_int_float(*b, *a).map(Ordering::reverse),
            (Value::Int(a), Value::Decimal(b)) => Some(Decimal::from(*a).cmp(b)),
            (Value::Decimal(a), Value::Int(b)) => Some(a.cmp(&Decimal::from(*b))),
            (Value::Float(a), Value::Decimal(b)) => compare_float_decimal(*a, b),
            (Value::Decimal(a), Value::Float(b)) => compare_float_decimal(*b, a).map(Ordering::reverse),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Bytes(a), Value::Bytes(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
            (Value::Duration(a), Value::Duration(b)) => Some(a.cmp(b)),
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            (Value::Time(a), Value::Time(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Parses a literal as a value of `kind`.
    ///
    /// Temporal kinds use ISO-8601 forms (`2021-01-01`, `2021-01-01T10:00:00`,
    /// `10:00:00`); durations are given in whole seconds.
    pub fn parse_as(kind: ValueKind, input: &str) -> Result<Value, DefinitionError> {
        let invalid = || DefinitionError::InvalidLiteral {
            kind,
            input: input.to_string(),
        };
        let trimmed = input.trim();
        let value = match kind {
            ValueKind::Bool => Value::Bool(trimmed.parse().map_err(|_| invalid())?),
            ValueKind::Int => Value::Int(trimmed.parse().map_err(|_| invalid())?),
            ValueKind::Float => Value::Float(trimmed.parse().map_err(|_| invalid())?),
            ValueKind::Decimal => Value::Decimal(trimmed.parse().map_err(|_| invalid())?),
            ValueKind::Text => Value::Text(input.to_string()),
            ValueKind::Bytes => Value::Bytes(input.as_bytes().to_vec()),
            ValueKind::DateTime => Value::DateTime(
                trimmed
                    .parse::<NaiveDateTime>()
                    .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
                    .map_err(|_| invalid())?,
            ),
            ValueKind::Duration => {
                let seconds: i64 = trimmed.parse().map_err(|_| invalid())?;
                Value::Duration(TimeDelta::try_seconds(seconds).ok_or_else(invalid)?)
            }
            ValueKind::Date => Value::Date(trimmed.parse().map_err(|_| invalid())?),
            ValueKind::Time => Value::Time(trimmed.parse().map_err(|_| invalid())?),
            ValueKind::Complex | ValueKind::AnyEnum | ValueKind::Enum(_) => return Err(invalid()),
        };
        Ok(value)
    }
}

/// 2^63 as a float: the first value above every `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn compare_int_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I64_LIMIT {
        return Some(Ordering::Less);
    }
    if float < -I64_LIMIT {
        return Some(Ordering::Greater);
    }
    // In range, the integral part converts without loss.
    let whole = float.trunc();
    let ordering = int.cmp(&(whole as i64)).then_with(|| 0.0_f64.total_cmp(&(float - whole)));
    Some(ordering)
}

fn compare_float_decimal(float: f64, decimal: &Decimal) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    // `from_f64_retain` keeps the binary expansion instead of rounding to the
    // shortest decimal, so 0.1_f64 stays above Decimal 0.1.
    match Decimal::from_f64_retain(float) {
        Some(converted) => Some(converted.cmp(decimal)),
        // Beyond the decimal range, or infinite.
        None => Some(if float > 0.0 { Ordering::Greater } else { Ordering::Less }),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Decimal(value) => write!(f, "{value}"),
            Value::Complex(value) => write!(f, "{value}"),
            Value::Text(value) => f.write_str(value),
            Value::Bytes(value) => write!(f, "b{:?}", String::from_utf8_lossy(value)),
            Value::DateTime(value) => write!(f, "{value}"),
            Value::Duration(value) => write!(f, "{value}"),
            Value::Date(value) => write!(f, "{value}"),
            Value::Time(value) => write!(f, "{value}"),
            Value::Enum(value) => write!(f, "{value}"),
        }
    }
}

/// Union of the numeric payloads, for fields declared to hold any number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    Complex(Complex64),
}

/// A Rust numeric type narrower than the payload that carries it.
///
/// Declaring an attribute as one of these limits the values a write may
/// store, so that a stored value can always be read back as the declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    I8,
    I16,
    I32,
    U8,
    U16,
    U32,
    F32,
}

impl Width {
    /// Payload kind the narrow type is carried in.
    pub fn kind(&self) -> ValueKind {
        match self {
            Width::F32 => ValueKind::Float,
            _ => ValueKind::Int,
        }
    }

    /// `true` when `value` is representable by the narrow type.
    ///
    /// Floats only need to stay finite; rounding to `f32` precision is allowed.
    pub fn admits(&self, value: &Value) -> bool {
        match (self, value) {
            (Width::I8, Value::Int(n)) => i8::try_from(*n).is_ok(),
            (Width::I16, Value::Int(n)) => i16::try_from(*n).is_ok(),
            (Width::I32, Value::Int(n)) => i32::try_from(*n).is_ok(),
            (Width::U8, Value::Int(n)) => u8::try_from(*n).is_ok(),
            (Width::U16, Value::Int(n)) => u16::try_from(*n).is_ok(),
            (Width::U32, Value::Int(n)) => u32::try_from(*n).is_ok(),
            (Width::F32, Value::Float(x)) => narrow_f32(*x).is_some(),
            _ => false,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Width::I8 => "i8",
            Width::I16 => "i16",
            Width::I32 => "i32",
            Width::U8 => "u8",
            Width::U16 => "u16",
            Width::U32 => "u32",
            Width::F32 => "f32",
        };
        f.write_str(name)
    }
}

fn narrow_f32(value: f64) -> Option<f32> {
    let narrowed = value as f32;
    (narrowed.is_finite() || !value.is_finite()).then_some(narrowed)
}

/// Statically typed Rust values that can be stored in a field.
pub trait FieldValue: Sized {
    /// Declared type annotation for an attribute of this type.
    fn type_hint() -> TypeHint;

    fn into_value(self) -> Value;

    /// Returns `None` when `value` does not hold this type.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! scalar_field_value {
    ($ty:ty, $hint:expr, |$v:ident| $into:expr, $pat:pat => $from:expr) => {
        impl From<$ty> for Value {
            fn from($v: $ty) -> Self {
                $into
            }
        }

        impl FieldValue for $ty {
            fn type_hint() -> TypeHint {
                $hint
            }

            fn into_value(self) -> Value {
                Value::from(self)
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    $pat => $from,
                    _ => None,
                }
            }
        }
    };
}

macro_rules! narrow_int_field_value {
    ($($ty:ty => $width:ident),*) => {
        $(
            scalar_field_value!(
                $ty,
                TypeHint::Narrow(Width::$width),
                |v| Value::Int(i64::from(v)),
                Value::Int(inner) => <$ty>::try_from(inner).ok()
            );
        )*
    };
}

narrow_int_field_value!(i8 => I8, i16 => I16, i32 => I32, u8 => U8, u16 => U16, u32 => U32);

scalar_field_value!(i64, TypeHint::Kind(ValueKind::Int), |v| Value::Int(v), Value::Int(inner) => Some(inner));
scalar_field_value!(bool, TypeHint::Kind(ValueKind::Bool), |v| Value::Bool(v), Value::Bool(inner) => Some(inner));
scalar_field_value!(f64, TypeHint::Kind(ValueKind::Float), |v| Value::Float(v), Value::Float(inner) => Some(inner));
scalar_field_value!(f32, TypeHint::Narrow(Width::F32), |v| Value::Float(f64::from(v)), Value::Float(inner) => narrow_f32(inner));
scalar_field_value!(Decimal, TypeHint::Kind(ValueKind::Decimal), |v| Value::Decimal(v), Value::Decimal(inner) => Some(inner));
scalar_field_value!(Complex64, TypeHint::Kind(ValueKind::Complex), |v| Value::Complex(v), Value::Complex(inner) => Some(inner));
scalar_field_value!(String, TypeHint::Kind(ValueKind::Text), |v| Value::Text(v), Value::Text(inner) => Some(inner));
scalar_field_value!(Vec<u8>, TypeHint::Kind(ValueKind::Bytes), |v| Value::Bytes(v), Value::Bytes(inner) => Some(inner));
scalar_field_value!(NaiveDateTime, TypeHint::Kind(ValueKind::DateTime), |v| Value::DateTime(v), Value::DateTime(inner) => Some(inner));
scalar_field_value!(TimeDelta, TypeHint::Kind(ValueKind::Duration), |v| Value::Duration(v), Value::Duration(inner) => Some(inner));
scalar_field_value!(NaiveDate, TypeHint::Kind(ValueKind::Date), |v| Value::Date(v), Value::Date(inner) => Some(inner));
scalar_field_value!(NaiveTime, TypeHint::Kind(ValueKind::Time), |v| Value::Time(v), Value::Time(inner) => Some(inner));
scalar_field_value!(EnumValue, TypeHint::Kind(ValueKind::AnyEnum), |v| Value::Enum(v), Value::Enum(inner) => Some(inner));

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(inner) => Value::Int(inner),
            Number::Float(inner) => Value::Float(inner),
            Number::Decimal(inner) => Value::Decimal(inner),
            Number::Complex(inner) => Value::Complex(inner),
        }
    }
}

impl FieldValue for Number {
    fn type_hint() -> TypeHint {
        TypeHint::Union(ValueKind::NUMERIC.iter().copied().map(TypeHint::Kind).collect())
    }

    fn into_value(self) -> Value {
        Value::from(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Int(inner) => Some(Number::Int(inner)),
            Value::Float(inner) => Some(Number::Float(inner)),
            Value::Decimal(inner) => Some(Number::Decimal(inner)),
            Value::Complex(inner) => Some(Number::Complex(inner)),
            _ => None,
        }
    }
}

impl FieldValue for Value {
    fn type_hint() -> TypeHint {
        TypeHint::Any
    }

    fn into_value(self) -> Value {
        self
    }

    fn from_value(value: Value) -> Option<Self> {
        Some(value)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn type_hint() -> TypeHint {
        TypeHint::Optional(Box::new(T::type_hint()))
    }

    fn into_value(self) -> Value {
        match self {
            Some(inner) => inner.into_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_across_families() {
        assert_eq!(Value::Int(3).compare(&Value::Float(3.1)), Some(Ordering::Less));
        assert_eq!(Value::Float(3.0).compare(&Value::Int(3)), Some(Ordering::Equal));
        assert_eq!(
            Value::Decimal(Decimal::new(31, 1)).compare(&Value::Int(3)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::Float(2.5).compare(&Value::Decimal(Decimal::new(3, 0))),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn integers_and_floats_compare_exactly_past_f64_precision() {
        let limit = Value::Float(9_007_199_254_740_992.0);
        assert_eq!(Value::Int(9_007_199_254_740_993).compare(&limit), Some(Ordering::Greater));
        assert_eq!(limit.compare(&Value::Int(9_007_199_254_740_993)), Some(Ordering::Less));
        assert_eq!(Value::Int(9_007_199_254_740_992).compare(&limit), Some(Ordering::Equal));

        assert_eq!(Value::Int(i64::MAX).compare(&Value::Float(I64_LIMIT)), Some(Ordering::Less));
        assert_eq!(Value::Int(i64::MIN).compare(&Value::Float(-I64_LIMIT)), Some(Ordering::Equal));
        assert_eq!(Value::Int(-3).compare(&Value::Float(-3.5)), Some(Ordering::Greater));
        assert_eq!(Value::Int(0).compare(&Value::Float(f64::NEG_INFINITY)), Some(Ordering::Greater));
        assert_eq!(Value::Int(0).compare(&Value::Float(f64::NAN)), None);
    }

    #[test]
    fn floats_and_decimals_compare_by_binary_value() {
        let tenth = Value::Decimal(Decimal::new(1, 1));
        assert_eq!(Value::Float(0.1).compare(&tenth), Some(Ordering::Greater));
        assert_eq!(tenth.compare(&Value::Float(0.1)), Some(Ordering::Less));
        assert_eq!(Value::Float(0.5).compare(&Value::Decimal(Decimal::new(5, 1))), Some(Ordering::Equal));
        assert_eq!(Value::Float(1e30).compare(&Value::Decimal(Decimal::MAX)), Some(Ordering::Greater));
        assert_eq!(Value::Float(f64::NEG_INFINITY).compare(&tenth), Some(Ordering::Less));
    }

    #[test]
    fn narrow_widths_bound_their_payloads() {
        assert!(Width::I8.admits(&Value::Int(-128)));
        assert!(!Width::I8.admits(&Value::Int(1000)));
        assert!(!Width::U32.admits(&Value::Int(-1)));
        assert!(Width::F32.admits(&Value::Float(0.1)));
        assert!(Width::F32.admits(&Value::Float(f64::INFINITY)));
        assert!(!Width::F32.admits(&Value::Float(1e300)));
        assert_eq!(f32::from_value(Value::Float(1e300)), None);
        assert_eq!(u8::type_hint(), TypeHint::Narrow(Width::U8));
    }

    #[test]
    fn complex_and_cross_kind_values_do_not_order() {
        let complex = Value::Complex(Complex64::new(1.0, 2.0));
        assert_eq!(complex.compare(&Value::Int(1)), None);
        let date = Value::Date(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        let duration = Value::Duration(TimeDelta::try_hours(1).unwrap());
        assert_eq!(date.compare(&duration), None);
        assert_eq!(Value::Float(f64::NAN).compare(&Value::Float(1.0)), None);
    }

    #[test]
    fn parse_as_reads_iso_temporal_literals() {
        let date = Value::parse_as(ValueKind::Date, "2021-01-01").unwrap();
        assert_eq!(date, Value::Date(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()));

        let time = Value::parse_as(ValueKind::Time, "01:00:00").unwrap();
        assert_eq!(time, Value::Time(NaiveTime::from_hms_opt(1, 0, 0).unwrap()));

        let duration = Value::parse_as(ValueKind::Duration, "3600").unwrap();
        assert_eq!(duration, Value::Duration(TimeDelta::try_hours(1).unwrap()));

        assert!(Value::parse_as(ValueKind::Date, "not a date").is_err());
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(None::<i64>.into_value(), Value::Null);
        assert_eq!(Option::<i64>::from_value(Value::Null), Some(None));
        assert_eq!(Option::<i64>::from_value(Value::Int(4)), Some(Some(4)));
        assert_eq!(i8::from_value(Value::Int(1000)), None);
    }

    #[test]
    fn kind_list_display() {
        let list = KindList::from(ValueKind::ORDERED_NUMERIC);
        assert_eq!(list.to_string(), "(i64, f64, Decimal)");
    }
}
