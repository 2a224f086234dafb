use syn::{GenericArgument, PathArguments, Type, TypePath};

/// What the macro can tell about a declared field type without name resolution.
#[derive(Clone)]
pub(crate) struct TypeInfo {
    pub optional: bool,
    pub base: FieldBase,
    pub ty: Type,
    /// `T` for an `Option<T>` field.
    pub option_inner: Option<Type>,
}

impl TypeInfo {
    /// The type defaults are converted into: `T` for `Option<T>`, else the field type.
    pub fn value_type(&self) -> &Type {
        self.option_inner.as_ref().unwrap_or(&self.ty)
    }

    pub fn is_string(&self) -> bool {
        !self.optional && self.base == FieldBase::Text
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FieldBase {
    Text,
    Bytes,
    Int,
    Float,
    Decimal,
    Complex,
    Number,
    Bool,
    DateTime,
    Duration,
    Date,
    Time,
    AnyEnum,
    /// `fieldguard::Value`, accepts anything the kind accepts.
    Value,
    /// A type the macro cannot classify, typically a user enumeration.
    Other,
}

impl FieldBase {
    pub fn label(self) -> &'static str {
        match self {
            FieldBase::Text => "String",
            FieldBase::Bytes => "Vec<u8>",
            FieldBase::Int => "an integer type",
            FieldBase::Float => "a float type",
            FieldBase::Decimal => "Decimal",
            FieldBase::Complex => "Complex64",
            FieldBase::Number => "Number",
            FieldBase::Bool => "bool",
            FieldBase::DateTime => "NaiveDateTime",
            FieldBase::Duration => "TimeDelta",
            FieldBase::Date => "NaiveDate",
            FieldBase::Time => "NaiveTime",
            FieldBase::AnyEnum => "EnumValue",
            FieldBase::Value => "Value",
            FieldBase::Other => "this type",
        }
    }

    pub fn is_temporal(self) -> bool {
        matches!(
            self,
            FieldBase::DateTime | FieldBase::Duration | FieldBase::Date | FieldBase::Time
        )
    }

    /// Types the macro cannot rule out; the runtime hint check decides.
    pub fn is_open(self) -> bool {
        matches!(self, FieldBase::Value | FieldBase::Other)
    }
}

pub(crate) fn classify_type(ty: &Type) -> TypeInfo {
    if let Some(inner) = unwrap_option(ty) {
        let mut info = classify_type(inner);
        info.optional = true;
        info.ty = ty.clone();
        info.option_inner = Some(inner.clone());
        return info;
    }

    let base = match ty {
        Type::Path(path) if is_byte_vec(path) => FieldBase::Bytes,
        Type::Path(path) => last_ident_str(path).map_or(FieldBase::Other, |id| base_for_ident(&id)),
        _ => FieldBase::Other,
    };
    TypeInfo {
        optional: false,
        base,
        ty: ty.clone(),
        option_inner: None,
    }
}

fn base_for_ident(id: &str) -> FieldBase {
    match id {
        "String" => FieldBase::Text,
        "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" => FieldBase::Int,
        "f32" | "f64" => FieldBase::Float,
        "Decimal" => FieldBase::Decimal,
        "Complex64" => FieldBase::Complex,
        "Number" => FieldBase::Number,
        "bool" => FieldBase::Bool,
        "NaiveDateTime" => FieldBase::DateTime,
        "TimeDelta" | "Duration" => FieldBase::Duration,
        "NaiveDate" => FieldBase::Date,
        "NaiveTime" => FieldBase::Time,
        "EnumValue" => FieldBase::AnyEnum,
        "Value" => FieldBase::Value,
        _ => FieldBase::Other,
    }
}

fn unwrap_option(ty: &Type) -> Option<&Type> {
    match ty {
        Type::Path(path) if last_ident_str(path).as_deref() == Some("Option") => first_type_argument(path),
        _ => None,
    }
}

fn is_byte_vec(path: &TypePath) -> bool {
    last_ident_str(path).as_deref() == Some("Vec")
        && matches!(first_type_argument(path), Some(Type::Path(inner)) if inner.path.is_ident("u8"))
}

fn first_type_argument(path: &TypePath) -> Option<&Type> {
    match &path.path.segments.last()?.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(inner) => Some(inner),
            _ => None,
        }),
        _ => None,
    }
}

fn last_ident_str(path: &TypePath) -> Option<String> {
    path.path.segments.last().map(|seg| seg.ident.to_string())
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn classifies_options_by_their_inner_type() {
        let info = classify_type(&parse_quote!(Option<chrono::NaiveDate>));
        assert!(info.optional);
        assert_eq!(info.base, FieldBase::Date);
        assert!(info.option_inner.is_some());
    }

    #[test]
    fn byte_vectors_are_bytes_and_other_vecs_are_open() {
        assert_eq!(classify_type(&parse_quote!(Vec<u8>)).base, FieldBase::Bytes);
        assert_eq!(classify_type(&parse_quote!(Vec<String>)).base, FieldBase::Other);
        assert_eq!(classify_type(&parse_quote!(Size)).base, FieldBase::Other);
    }

    #[test]
    fn only_plain_strings_count_as_string() {
        assert!(classify_type(&parse_quote!(String)).is_string());
        assert!(!classify_type(&parse_quote!(Option<String>)).is_string());
    }
}
