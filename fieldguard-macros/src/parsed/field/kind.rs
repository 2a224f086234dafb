use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use proc_macro2::Span;
use regex::Regex;
use syn::meta::ParseNestedMeta;
use syn::{Error, Expr, ExprLit, Ident, Lit, LitBool, LitInt, LitStr, Path, Result, Token};

use crate::parsed::types::{FieldBase, TypeInfo};

/// The field kind named in `#[field(...)]`, with its constraints.
pub(crate) enum KindSpec {
    Text(TextSpec),
    Number { variant: NumberVariant, bounds: BoundsSpec },
    Complex,
    Bool,
    Enumeration,
    Temporal { variant: TemporalVariant, bounds: BoundsSpec },
    Custom(Path),
}

#[derive(Default)]
pub(crate) struct TextSpec {
    pub max_length: Option<usize>,
    pub min_length: Option<usize>,
    pub blank: Option<bool>,
    pub regex: Option<LitStr>,
    pub trim: TrimSpec,
}

#[derive(Default)]
pub(crate) enum TrimSpec {
    #[default]
    Off,
    Whitespace,
    Chars(LitStr),
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberVariant {
    Any,
    Int,
    Float,
    Decimal,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum TemporalVariant {
    Any,
    DateTime,
    Duration,
    Date,
    Time,
}

/// Ordering limits in the order they were written.
#[derive(Default)]
pub(crate) struct BoundsSpec {
    pub limits: Vec<(Ident, Limit)>,
}

pub(crate) enum Limit {
    Expr(Expr),
    /// A string literal parsed at runtime as `kind`, already checked here.
    Literal { lit: LitStr, kind: Ident },
}

const BOUND_KEYS: [&str; 4] = ["gt", "lt", "ge", "le"];

impl KindSpec {
    pub fn label(&self) -> &'static str {
        match self {
            KindSpec::Text(_) => "text",
            KindSpec::Number { variant, .. } => match variant {
                NumberVariant::Any => "number",
                NumberVariant::Int => "int",
                NumberVariant::Float => "float",
                NumberVariant::Decimal => "decimal",
            },
            KindSpec::Complex => "complex",
            KindSpec::Bool => "boolean",
            KindSpec::Enumeration => "enumeration",
            KindSpec::Temporal { variant, .. } => match variant {
                TemporalVariant::Any => "temporal",
                TemporalVariant::DateTime => "datetime",
                TemporalVariant::Duration => "duration",
                TemporalVariant::Date => "date",
                TemporalVariant::Time => "time",
            },
            KindSpec::Custom(_) => "custom",
        }
    }

    /// Parses the kind named by `meta`, or returns `None` if `meta` is not a kind.
    pub fn parse(meta: &ParseNestedMeta, ty: &TypeInfo) -> Result<Option<Self>> {
        let Some(ident) = meta.path.get_ident() else {
            return Ok(None);
        };
        let kind = match ident.to_string().as_str() {
            "text" => KindSpec::Text(parse_text(meta)?),
            "number" => parse_number(meta, NumberVariant::Any)?,
            "int" => parse_number(meta, NumberVariant::Int)?,
            "float" => parse_number(meta, NumberVariant::Float)?,
            "decimal" => parse_number(meta, NumberVariant::Decimal)?,
            "complex" => {
                if meta.input.peek(syn::token::Paren) {
                    meta.parse_nested_meta(|item| {
                        Err(item.error("complex numbers have no ordering; `complex` takes no limits"))
                    })?;
                }
                KindSpec::Complex
            }
            "boolean" | "bool" => KindSpec::Bool,
            "enumeration" => KindSpec::Enumeration,
            "temporal" => parse_temporal(meta, TemporalVariant::Any, ty)?,
            "datetime" => parse_temporal(meta, TemporalVariant::DateTime, ty)?,
            "duration" => parse_temporal(meta, TemporalVariant::Duration, ty)?,
            "date" => parse_temporal(meta, TemporalVariant::Date, ty)?,
            "time" => parse_temporal(meta, TemporalVariant::Time, ty)?,
            "custom" => {
                let lit: LitStr = meta.value()?.parse()?;
                KindSpec::Custom(lit.parse()?)
            }
            _ => return Ok(None),
        };
        Ok(Some(kind))
    }

    /// Rejects kinds that cannot hold the declared type.
    pub fn ensure_supported(&self, ty: &TypeInfo, span: Span) -> Result<()> {
        let base = ty.base;
        if base.is_open() {
            return Ok(());
        }
        let supported = match self {
            KindSpec::Text(_) => matches!(base, FieldBase::Text | FieldBase::Bytes),
            KindSpec::Number { variant, .. } => match variant {
                NumberVariant::Any => matches!(
                    base,
                    FieldBase::Int | FieldBase::Float | FieldBase::Decimal | FieldBase::Complex | FieldBase::Number
                ),
                NumberVariant::Int => base == FieldBase::Int,
                NumberVariant::Float => base == FieldBase::Float,
                NumberVariant::Decimal => base == FieldBase::Decimal,
            },
            KindSpec::Complex => base == FieldBase::Complex,
            KindSpec::Bool => base == FieldBase::Bool,
            KindSpec::Enumeration => base == FieldBase::AnyEnum,
            KindSpec::Temporal { variant, .. } => match variant {
                TemporalVariant::Any => base.is_temporal(),
                TemporalVariant::DateTime => base == FieldBase::DateTime,
                TemporalVariant::Duration => base == FieldBase::Duration,
                TemporalVariant::Date => base == FieldBase::Date,
                TemporalVariant::Time => base == FieldBase::Time,
            },
            KindSpec::Custom(_) => true,
        };
        if supported {
            Ok(())
        } else {
            Err(Error::new(
                span,
                format!("`{}` fields cannot be declared as {}", self.label(), base.label()),
            ))
        }
    }
}

fn parse_text(meta: &ParseNestedMeta) -> Result<TextSpec> {
    let mut spec = TextSpec::default();
    if !meta.input.peek(syn::token::Paren) {
        return Ok(spec);
    }
    meta.parse_nested_meta(|item| {
        if item.path.is_ident("max_length") {
            let lit: LitInt = item.value()?.parse()?;
            spec.max_length = Some(lit.base10_parse()?);
        } else if item.path.is_ident("min_length") {
            let lit: LitInt = item.value()?.parse()?;
            spec.min_length = Some(lit.base10_parse()?);
        } else if item.path.is_ident("blank") {
            spec.blank = Some(parse_flag(&item)?);
        } else if item.path.is_ident("regex") {
            let lit: LitStr = item.value()?.parse()?;
            ensure_valid_regex(&lit.value(), lit.span())?;
            spec.regex = Some(lit);
        } else if item.path.is_ident("trim") {
            spec.trim = if item.input.peek(Token![=]) {
                match item.value()?.parse::<Lit>()? {
                    Lit::Str(chars) => TrimSpec::Chars(chars),
                    Lit::Bool(flag) if flag.value => TrimSpec::Whitespace,
                    Lit::Bool(_) => TrimSpec::Off,
                    other => return Err(Error::new(other.span(), "`trim` expects a string of characters or a bool")),
                }
            } else {
                TrimSpec::Whitespace
            };
        } else {
            return Err(item.error("unknown text option; expected max_length, min_length, blank, regex or trim"));
        }
        Ok(())
    })?;
    if let (Some(min), Some(max)) = (spec.min_length, spec.max_length)
        && min > max
    {
        return Err(meta.error(format!("min_length ({min}) cannot exceed max_length ({max})")));
    }
    Ok(spec)
}

fn parse_number(meta: &ParseNestedMeta, variant: NumberVariant) -> Result<KindSpec> {
    let literal_kind = (variant == NumberVariant::Decimal).then_some("Decimal");
    let bounds = parse_bounds(meta, literal_kind)?;
    Ok(KindSpec::Number { variant, bounds })
}

fn parse_temporal(meta: &ParseNestedMeta, variant: TemporalVariant, ty: &TypeInfo) -> Result<KindSpec> {
    let literal_kind = match variant {
        TemporalVariant::DateTime => Some("DateTime"),
        TemporalVariant::Duration => Some("Duration"),
        TemporalVariant::Date => Some("Date"),
        TemporalVariant::Time => Some("Time"),
        TemporalVariant::Any => match ty.base {
            FieldBase::DateTime => Some("DateTime"),
            FieldBase::Duration => Some("Duration"),
            FieldBase::Date => Some("Date"),
            FieldBase::Time => Some("Time"),
            _ => None,
        },
    };
    let bounds = parse_bounds(meta, literal_kind)?;
    Ok(KindSpec::Temporal { variant, bounds })
}

fn parse_bounds(meta: &ParseNestedMeta, literal_kind: Option<&'static str>) -> Result<BoundsSpec> {
    let mut bounds = BoundsSpec::default();
    if !meta.input.peek(syn::token::Paren) {
        return Ok(bounds);
    }
    meta.parse_nested_meta(|item| {
        let key = item
            .path
            .get_ident()
            .filter(|ident| BOUND_KEYS.contains(&ident.to_string().as_str()))
            .cloned()
            .ok_or_else(|| item.error("unknown limit; expected gt, lt, ge or le"))?;
        if bounds.limits.iter().any(|(existing, _)| *existing == key) {
            return Err(item.error(format!("`{key}` is given more than once")));
        }
        let expr: Expr = item.value()?.parse()?;
        let limit = match expr {
            Expr::Lit(ExprLit { lit: Lit::Str(lit), .. }) => {
                let kind = literal_kind.ok_or_else(|| {
                    Error::new(
                        lit.span(),
                        "string limits need a concrete kind; use a numeric expression or datetime/duration/date/time",
                    )
                })?;
                ensure_valid_literal(kind, &lit)?;
                Limit::Literal {
                    kind: Ident::new(kind, lit.span()),
                    lit,
                }
            }
            other => Limit::Expr(other),
        };
        bounds.limits.push((key, limit));
        Ok(())
    })?;
    Ok(bounds)
}

pub(crate) fn parse_flag(meta: &ParseNestedMeta) -> Result<bool> {
    if meta.input.peek(Token![=]) {
        let lit: LitBool = meta.value()?.parse()?;
        Ok(lit.value)
    } else {
        Ok(true)
    }
}

fn ensure_valid_regex(pattern: &str, span: Span) -> Result<()> {
    Regex::new(pattern).map(|_| ()).map_err(|err| {
        // Syntax errors render the pattern over several lines; the last one names the problem.
        let rendered = err.to_string();
        let last = rendered.lines().last().unwrap_or_default();
        let reason = last.strip_prefix("error: ").unwrap_or(last);
        Error::new(span, format!("invalid regex pattern `{pattern}`: {reason}"))
    })
}

fn ensure_valid_literal(kind: &str, lit: &LitStr) -> Result<()> {
    let value = lit.value();
    let input = value.trim();
    let valid = match kind {
        "DateTime" => {
            input.parse::<NaiveDateTime>().is_ok()
                || NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S").is_ok()
        }
        "Date" => input.parse::<NaiveDate>().is_ok(),
        "Time" => input.parse::<NaiveTime>().is_ok(),
        "Duration" => input.parse::<i64>().is_ok(),
        "Decimal" => is_decimal_literal(input),
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        let hint = match kind {
            "DateTime" => "expected YYYY-MM-DDTHH:MM:SS",
            "Date" => "expected YYYY-MM-DD",
            "Time" => "expected HH:MM:SS",
            "Duration" => "expected a whole number of seconds",
            _ => "expected a decimal number",
        };
        Err(Error::new(lit.span(), format!("invalid {kind} limit `{value}`: {hint}")))
    }
}

fn is_decimal_literal(input: &str) -> bool {
    let unsigned = input.strip_prefix(['+', '-']).unwrap_or(input);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "0"));
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit());
    digits(whole) && digits(fraction)
}
