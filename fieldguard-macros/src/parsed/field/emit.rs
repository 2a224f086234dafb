use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};

use super::ParsedField;
use super::kind::{BoundsSpec, KindSpec, Limit, NumberVariant, TemporalVariant, TextSpec, TrimSpec};

impl ParsedField {
    /// `.field(name, hint, descriptor)?` link of the schema builder chain.
    pub(crate) fn schema_entry(&self) -> TokenStream2 {
        let name = &self.name;
        let ty = &self.ty.ty;
        let descriptor = self.descriptor_tokens();
        quote! {
            .field(#name, <#ty as ::fieldguard::FieldValue>::type_hint(), #descriptor)?
        }
    }

    fn descriptor_tokens(&self) -> TokenStream2 {
        let kind = match &self.kind {
            KindSpec::Text(spec) => text_tokens(spec),
            KindSpec::Number { variant, bounds } => {
                let ctor = match variant {
                    NumberVariant::Any => quote! { new },
                    NumberVariant::Int => quote! { int },
                    NumberVariant::Float => quote! { float },
                    NumberVariant::Decimal => quote! { decimal },
                };
                let limits = bounds_tokens(bounds);
                quote! { ::fieldguard::NumberField::#ctor() #limits }
            }
            KindSpec::Complex => quote! { ::fieldguard::ComplexField::new() },
            KindSpec::Bool => quote! { ::fieldguard::BoolField::new() },
            KindSpec::Enumeration => quote! { ::fieldguard::EnumField::any() },
            KindSpec::Temporal { variant, bounds } => {
                let ctor = match variant {
                    TemporalVariant::Any => quote! { new },
                    TemporalVariant::DateTime => quote! { datetime },
                    TemporalVariant::Duration => quote! { duration },
                    TemporalVariant::Date => quote! { date },
                    TemporalVariant::Time => quote! { time },
                };
                let limits = bounds_tokens(bounds);
                quote! { ::fieldguard::TemporalField::#ctor() #limits }
            }
            KindSpec::Custom(path) => quote! { <#path as ::core::default::Default>::default() },
        };

        let mut options = Vec::new();
        if let Some(default) = &self.default {
            let value_ty = self.ty.value_type();
            options.push(quote! {
                .with_default(<#value_ty as ::fieldguard::FieldValue>::into_value(
                    ::core::convert::Into::<#value_ty>::into(#default)
                ))
            });
        }
        if self.optional {
            options.push(quote! { .optional(true) });
        }
        if self.private {
            options.push(quote! { .private() });
        }

        quote! {
            ::fieldguard::Descriptor::new(#kind) #(#options)*
        }
    }

    /// Typed getter and setter on the record.
    pub(crate) fn accessors(&self) -> TokenStream2 {
        let ident = &self.ident;
        let name = &self.name;
        let vis = &self.vis;
        let ty = &self.ty.ty;
        let docs = &self.docs;
        let setter = format_ident!("set_{}", ident);
        let set_doc = format!("Validates and stores `{name}`. Nothing is stored when validation fails.");

        let (param, convert) = if self.ty.is_string() {
            (
                quote! { value: impl ::core::convert::Into<::std::string::String> },
                quote! { ::core::convert::Into::<::std::string::String>::into(value) },
            )
        } else {
            (quote! { value: #ty }, quote! { value })
        };

        quote! {
            #(#docs)*
            #vis fn #ident(&self) -> ::core::result::Result<#ty, ::fieldguard::FieldError> {
                ::fieldguard::Record::read::<#ty>(self, #name)
            }

            #[doc = #set_doc]
            #vis fn #setter(&mut self, #param) -> ::core::result::Result<(), ::fieldguard::FieldError> {
                ::fieldguard::Record::write::<#ty>(self, #name, #convert)
            }
        }
    }

    pub(crate) fn builder_field(&self) -> TokenStream2 {
        let ident = &self.ident;
        quote! { #ident: ::fieldguard::Slot<::fieldguard::Value> }
    }

    pub(crate) fn builder_setter(&self) -> TokenStream2 {
        let ident = &self.ident;
        let vis = &self.vis;
        let ty = &self.ty.ty;

        let (param, convert) = if self.ty.is_string() {
            (
                quote! { value: impl ::core::convert::Into<::std::string::String> },
                quote! { ::core::convert::Into::<::std::string::String>::into(value) },
            )
        } else {
            (quote! { value: #ty }, quote! { value })
        };

        quote! {
            #vis fn #ident(mut self, #param) -> Self {
                self.#ident = ::fieldguard::Slot::Present(<#ty as ::fieldguard::FieldValue>::into_value(#convert));
                self
            }
        }
    }

    /// `(name, slot)` pair handed to `Schema::construct`.
    pub(crate) fn builder_entry(&self) -> TokenStream2 {
        let ident = &self.ident;
        let name = &self.name;
        quote! { (#name, self.#ident) }
    }
}

fn text_tokens(spec: &TextSpec) -> TokenStream2 {
    let mut chain = Vec::new();
    if let Some(max) = spec.max_length {
        chain.push(quote! { .max_length(#max) });
    }
    if let Some(min) = spec.min_length {
        chain.push(quote! { .min_length(#min) });
    }
    if let Some(blank) = spec.blank {
        chain.push(quote! { .blank(#blank) });
    }
    match &spec.trim {
        TrimSpec::Off => {}
        TrimSpec::Whitespace => chain.push(quote! { .trim() }),
        TrimSpec::Chars(chars) => chain.push(quote! { .trim_chars(#chars) }),
    }
    if let Some(pattern) = &spec.regex {
        chain.push(quote! { .regex(#pattern)? });
    }
    quote! { ::fieldguard::TextField::new() #(#chain)* }
}

fn bounds_tokens(bounds: &BoundsSpec) -> TokenStream2 {
    let chain = bounds.limits.iter().map(|(key, limit)| match limit {
        Limit::Expr(expr) => quote! { .#key(#expr) },
        Limit::Literal { lit, kind } => quote! {
            .#key(::fieldguard::Value::parse_as(::fieldguard::ValueKind::#kind, #lit)?)
        },
    });
    quote! { #(#chain)* }
}
