//! Declared type annotations and their compatibility with field kinds.

use std::collections::HashMap;
use std::fmt;

use syn::{GenericArgument, PathArguments, Type};

use crate::errors::DefinitionError;
use crate::value::{EnumType, Enumeration, FieldValue, ValueKind, Width};

/// The declared type of a record attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeHint {
    /// Undeclared; accepts whatever the field kind accepts.
    Any,
    Kind(ValueKind),
    /// A Rust numeric type narrower than its payload kind, e.g. `u8`.
    Narrow(Width),
    Optional(Box<TypeHint>),
    Union(Vec<TypeHint>),
    /// A generic wrapper such as `Box<String>`; compatibility looks through one level of arguments.
    Param { name: String, args: Vec<TypeHint> },
    /// String-form annotation, resolved against the owner when the field is bound.
    Named(String),
}

impl TypeHint {
    pub fn of<T: FieldValue>() -> Self {
        T::type_hint()
    }

    /// `true` when the annotation admits the absence-value.
    pub fn is_optional(&self) -> bool {
        match self {
            TypeHint::Optional(_) => true,
            TypeHint::Union(items) => items.iter().any(TypeHint::is_optional),
            _ => false,
        }
    }

    /// Replaces every string-form annotation with its parsed form.
    ///
    /// `lookup` resolves names that are not built in, typically enumerations
    /// registered on the owner.
    pub fn resolve(&self, lookup: &dyn Fn(&str) -> Option<ValueKind>) -> Result<TypeHint, HintError> {
        match self {
            TypeHint::Named(source) => parse_annotation(source, lookup),
            TypeHint::Optional(inner) => Ok(TypeHint::Optional(Box::new(inner.resolve(lookup)?))),
            TypeHint::Union(items) => Ok(TypeHint::Union(
                items.iter().map(|item| item.resolve(lookup)).collect::<Result<_, _>>()?,
            )),
            TypeHint::Param { name, args } => Ok(TypeHint::Param {
                name: name.clone(),
                args: args.iter().map(|arg| arg.resolve(lookup)).collect::<Result<_, _>>()?,
            }),
            other => Ok(other.clone()),
        }
    }

    /// Concrete kinds a field with `valid` types accepts under this annotation.
    ///
    /// Every non-null branch must be compatible with at least one valid kind:
    /// identical, a subtype, or a supertype that narrows to the valid kind.
    /// Returns `None` when some branch is incompatible or still unresolved.
    pub fn accepted_kinds(&self, valid: &[ValueKind]) -> Option<Vec<ValueKind>> {
        let mut accepted = Vec::new();
        collect_accepted(self, valid, false, &mut accepted)?;
        if accepted.is_empty() { None } else { Some(accepted) }
    }

    /// Narrow types that limit the values of their payload kind.
    ///
    /// A kind is only limited when no branch accepts it at full width, so
    /// `u8 | i64` places no limit on integers.
    pub fn width_limits(&self) -> Vec<Width> {
        let mut full = Vec::new();
        let mut narrow = Vec::new();
        collect_widths(self, &mut full, &mut narrow);
        narrow.retain(|width| !full.contains(&width.kind()));
        narrow
    }
}

fn collect_widths(hint: &TypeHint, full: &mut Vec<ValueKind>, narrow: &mut Vec<Width>) {
    match hint {
        TypeHint::Any => full.extend([ValueKind::Int, ValueKind::Float]),
        TypeHint::Kind(kind) => full.push(*kind),
        TypeHint::Narrow(width) => {
            if !narrow.contains(width) {
                narrow.push(*width);
            }
        }
        TypeHint::Optional(inner) => collect_widths(inner, full, narrow),
        TypeHint::Union(items) | TypeHint::Param { args: items, .. } => {
            items.iter().for_each(|item| collect_widths(item, full, narrow));
        }
        TypeHint::Named(_) => {}
    }
}

fn collect_accepted(hint: &TypeHint, valid: &[ValueKind], in_param: bool, out: &mut Vec<ValueKind>) -> Option<()> {
    match hint {
        TypeHint::Any => valid.iter().for_each(|kind| push_unique(out, *kind)),
        TypeHint::Kind(kind) => {
            if valid.iter().any(|candidate| kind.is_subtype_of(candidate)) {
                push_unique(out, *kind);
            } else {
                let narrowed: Vec<ValueKind> = valid.iter().copied().filter(|candidate| candidate.is_subtype_of(kind)).collect();
                if narrowed.is_empty() {
                    return None;
                }
                narrowed.into_iter().for_each(|kind| push_unique(out, kind));
            }
        }
        TypeHint::Narrow(width) => collect_accepted(&TypeHint::Kind(width.kind()), valid, in_param, out)?,
        TypeHint::Optional(inner) => collect_accepted(inner, valid, in_param, out)?,
        TypeHint::Union(items) => {
            for item in items {
                collect_accepted(item, valid, in_param, out)?;
            }
        }
        TypeHint::Param { args, .. } => {
            if in_param || args.is_empty() {
                return None;
            }
            for arg in args {
                collect_accepted(arg, valid, true, out)?;
            }
        }
        TypeHint::Named(_) => return None,
    }
    Some(())
}

fn push_unique(out: &mut Vec<ValueKind>, kind: ValueKind) {
    if !out.contains(&kind) {
        out.push(kind);
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeHint::Any => f.write_str("Value"),
            TypeHint::Kind(kind) => write!(f, "{kind}"),
            TypeHint::Narrow(width) => write!(f, "{width}"),
            TypeHint::Optional(inner) => write!(f, "Option<{inner}>"),
            TypeHint::Union(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            TypeHint::Param { name, args } => {
                write!(f, "{name}<")?;
                for (idx, arg) in args.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            TypeHint::Named(source) => f.write_str(source),
        }
    }
}

impl From<ValueKind> for TypeHint {
    fn from(kind: ValueKind) -> Self {
        TypeHint::Kind(kind)
    }
}

impl From<&str> for TypeHint {
    fn from(source: &str) -> Self {
        TypeHint::Named(source.to_string())
    }
}

impl From<String> for TypeHint {
    fn from(source: String) -> Self {
        TypeHint::Named(source)
    }
}

/// Why a string-form annotation could not be turned into a [`TypeHint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    Malformed { input: String, reason: String },
    Unresolved(String),
}

/// Parses annotations such as `Option<String>`, `i64 | f64` or `Box<Size>`.
fn parse_annotation(source: &str, lookup: &dyn Fn(&str) -> Option<ValueKind>) -> Result<TypeHint, HintError> {
    let branches = split_union(source);
    if branches.len() > 1 {
        let items = branches
            .iter()
            .map(|branch| parse_single(branch, lookup))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(TypeHint::Union(items));
    }
    parse_single(source, lookup)
}

fn split_union(source: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (idx, ch) in source.char_indices() {
        match ch {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth -= 1,
            '|' if depth == 0 => {
                parts.push(&source[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&source[start..]);
    parts
}

fn parse_single(source: &str, lookup: &dyn Fn(&str) -> Option<ValueKind>) -> Result<TypeHint, HintError> {
    let ty: Type = syn::parse_str(source.trim()).map_err(|err| HintError::Malformed {
        input: source.trim().to_string(),
        reason: err.to_string(),
    })?;
    from_syn_type(&ty, source.trim(), lookup)
}

fn from_syn_type(ty: &Type, source: &str, lookup: &dyn Fn(&str) -> Option<ValueKind>) -> Result<TypeHint, HintError> {
    let malformed = |reason: &str| HintError::Malformed {
        input: source.to_string(),
        reason: reason.to_string(),
    };
    match ty {
        Type::Paren(inner) => from_syn_type(&inner.elem, source, lookup),
        Type::Group(inner) => from_syn_type(&inner.elem, source, lookup),
        Type::Reference(reference) => from_syn_type(&reference.elem, source, lookup),
        Type::Path(path) if path.qself.is_none() => {
            let segment = path.path.segments.last().ok_or_else(|| malformed("empty path"))?;
            let name = segment.ident.to_string();
            let args: Vec<&Type> = match &segment.arguments {
                PathArguments::None => Vec::new(),
                PathArguments::AngleBracketed(generic) => generic
                    .args
                    .iter()
                    .filter_map(|arg| match arg {
                        GenericArgument::Type(inner) => Some(inner),
                        _ => None,
                    })
                    .collect(),
                PathArguments::Parenthesized(_) => return Err(malformed("function types are not field types")),
            };
            match (name.as_str(), args.as_slice()) {
                ("Option", [inner]) => Ok(TypeHint::Optional(Box::new(from_syn_type(inner, source, lookup)?))),
                ("Vec", [inner]) if is_u8(inner) => Ok(TypeHint::Kind(ValueKind::Bytes)),
                (_, []) => builtin_hint(&name)
                    .or_else(|| lookup(&name).map(TypeHint::Kind))
                    .ok_or_else(|| HintError::Unresolved(name.clone())),
                (_, args) => Ok(TypeHint::Param {
                    args: args
                        .iter()
                        .map(|arg| from_syn_type(arg, source, lookup))
                        .collect::<Result<_, _>>()?,
                    name: name.clone(),
                }),
            }
        }
        _ => Err(malformed("unsupported type syntax")),
    }
}

fn is_u8(ty: &Type) -> bool {
    matches!(ty, Type::Path(path) if path.path.is_ident("u8"))
}

fn builtin_hint(name: &str) -> Option<TypeHint> {
    let kind = match name {
        "Value" | "Any" => return Some(TypeHint::Any),
        "Number" => return Some(TypeHint::Union(ValueKind::NUMERIC.iter().copied().map(TypeHint::Kind).collect())),
        "bool" => ValueKind::Bool,
        "i8" => return Some(TypeHint::Narrow(Width::I8)),
        "i16" => return Some(TypeHint::Narrow(Width::I16)),
        "i32" => return Some(TypeHint::Narrow(Width::I32)),
        "u8" => return Some(TypeHint::Narrow(Width::U8)),
        "u16" => return Some(TypeHint::Narrow(Width::U16)),
        "u32" => return Some(TypeHint::Narrow(Width::U32)),
        "f32" => return Some(TypeHint::Narrow(Width::F32)),
        "i64" => ValueKind::Int,
        "f64" => ValueKind::Float,
        "Decimal" => ValueKind::Decimal,
        "Complex" | "Complex64" => ValueKind::Complex,
        "String" | "str" => ValueKind::Text,
        "Bytes" => ValueKind::Bytes,
        "NaiveDateTime" | "DateTime" => ValueKind::DateTime,
        "TimeDelta" | "Duration" => ValueKind::Duration,
        "NaiveDate" | "Date" => ValueKind::Date,
        "NaiveTime" | "Time" => ValueKind::Time,
        "EnumValue" | "Enum" => ValueKind::AnyEnum,
        _ => return None,
    };
    Some(TypeHint::Kind(kind))
}

/// Answers "what type was this attribute declared as" for an owner type.
pub trait TypeHintSource {
    fn owner_name(&self) -> &str;

    /// The fully resolved annotation of `attribute`.
    fn type_hint(&self, attribute: &str) -> Result<TypeHint, DefinitionError>;
}

/// Annotation table of an owner type, plus the enumerations its annotations may name.
#[derive(Debug, Clone, Default)]
pub struct Annotations {
    owner: String,
    hints: HashMap<String, TypeHint>,
    enumerations: HashMap<String, EnumType>,
}

impl Annotations {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..Self::default()
        }
    }

    pub fn declare(&mut self, attribute: impl Into<String>, hint: impl Into<TypeHint>) {
        self.hints.insert(attribute.into(), hint.into());
    }

    pub fn is_declared(&self, attribute: &str) -> bool {
        self.hints.contains_key(attribute)
    }

    /// Makes `E` nameable from string-form annotations.
    pub fn register_enumeration<E: Enumeration>(&mut self) {
        let ty = EnumType::of::<E>();
        self.enumerations.insert(ty.name.to_string(), ty);
    }
}

impl TypeHintSource for Annotations {
    fn owner_name(&self) -> &str {
        &self.owner
    }

    fn type_hint(&self, attribute: &str) -> Result<TypeHint, DefinitionError> {
        let declared = self.hints.get(attribute).ok_or_else(|| DefinitionError::MissingHint {
            owner: self.owner.clone(),
            field: attribute.to_string(),
        })?;
        let lookup = |name: &str| self.enumerations.get(name).copied().map(ValueKind::Enum);
        declared.resolve(&lookup).map_err(|err| match err {
            HintError::Malformed { input, reason } => DefinitionError::MalformedHint { input, reason },
            HintError::Unresolved(name) => DefinitionError::UnresolvedHint {
                owner: self.owner.clone(),
                field: attribute.to_string(),
                name,
            },
        })
    }
}
