mod emit;
mod kind;

use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Attribute, Error, Expr, Field, Ident, Result, Visibility};

use kind::{KindSpec, parse_flag};

use super::types::{TypeInfo, classify_type};

pub(crate) struct ParsedField {
    ident: Ident,
    name: String,
    vis: Visibility,
    docs: Vec<Attribute>,
    ty: TypeInfo,
    kind: KindSpec,
    default: Option<Expr>,
    optional: bool,
    private: bool,
}

impl ParsedField {
    pub(crate) fn from_field(field: &Field) -> Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new(field.span(), "#[record] requires named fields"))?;
        let name = ident.unraw().to_string();
        let ty = classify_type(&field.ty);

        let mut docs = Vec::new();
        let mut spec = None;
        for attr in &field.attrs {
            if attr.path().is_ident("field") {
                if spec.is_some() {
                    return Err(Error::new(attr.span(), "duplicate #[field(...)] attribute"));
                }
                spec = Some(FieldSpec::parse(attr, &ty)?);
            } else if attr.path().is_ident("doc") {
                docs.push(attr.clone());
            } else {
                return Err(Error::new(
                    attr.span(),
                    "only #[field(...)] and doc comments are supported on #[record] fields",
                ));
            }
        }
        let spec = spec.ok_or_else(|| {
            Error::new(
                ident.span(),
                format!("field `{name}` needs a #[field(...)] attribute naming its kind"),
            )
        })?;

        if let Some(span) = spec.optional
            && spec.default.is_none()
            && !ty.optional
        {
            return Err(Error::new(
                span,
                format!("`optional` on `{name}` requires an Option<T> type or a `default`"),
            ));
        }

        Ok(Self {
            ident,
            name,
            vis: field.vis.clone(),
            docs,
            ty,
            kind: spec.kind,
            default: spec.default,
            optional: spec.optional.is_some(),
            private: spec.private,
        })
    }
}

/// Contents of one `#[field(...)]` attribute.
struct FieldSpec {
    kind: KindSpec,
    default: Option<Expr>,
    /// Span of the `optional` flag, when set.
    optional: Option<Span>,
    private: bool,
}

impl FieldSpec {
    fn parse(attr: &Attribute, ty: &TypeInfo) -> Result<Self> {
        let mut kind: Option<KindSpec> = None;
        let mut default = None;
        let mut optional = None;
        let mut private = false;

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                default = Some(meta.value()?.parse::<Expr>()?);
            } else if meta.path.is_ident("optional") {
                if parse_flag(&meta)? {
                    optional = Some(meta.path.span());
                }
            } else if meta.path.is_ident("private") {
                private = parse_flag(&meta)?;
            } else if let Some(parsed) = KindSpec::parse(&meta, ty)? {
                if let Some(existing) = &kind {
                    return Err(meta.error(format!("field kind already given as `{}`", existing.label())));
                }
                parsed.ensure_supported(ty, meta.path.span())?;
                kind = Some(parsed);
            } else {
                return Err(meta.error(
                    "unknown field option; expected a kind (text, number, int, float, decimal, complex, boolean, \
                     enumeration, datetime, duration, date, time, temporal, custom) or default, optional, private",
                ));
            }
            Ok(())
        })?;

        let kind = kind.ok_or_else(|| Error::new(attr.span(), "#[field(...)] must name a field kind"))?;
        Ok(Self {
            kind,
            default,
            optional,
            private,
        })
    }
}
