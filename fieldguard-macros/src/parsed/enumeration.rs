use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Error, Fields, Ident, LitStr, Result};

pub(crate) struct ParsedEnumeration {
    ident: Ident,
    name: String,
    variants: Vec<Ident>,
}

impl ParsedEnumeration {
    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self> {
        let Data::Enum(data) = &input.data else {
            return Err(Error::new(input.ident.span(), "Enumeration can only be derived for enums"));
        };
        if !input.generics.params.is_empty() {
            return Err(Error::new(input.generics.span(), "Enumeration cannot be derived for generic enums"));
        }

        let mut name = input.ident.to_string();
        for attr in &input.attrs {
            if !attr.path().is_ident("enumeration") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    name = lit.value();
                    Ok(())
                } else {
                    Err(meta.error("unsupported enumeration option; expected `name = \"...\"`"))
                }
            })?;
        }

        let variants = data
            .variants
            .iter()
            .map(|variant| match variant.fields {
                Fields::Unit => Ok(variant.ident.clone()),
                _ => Err(Error::new(
                    variant.span(),
                    format!("variant `{}` carries data; enumerations must be unit-only", variant.ident),
                )),
            })
            .collect::<Result<Vec<_>>>()?;
        if variants.is_empty() {
            return Err(Error::new(input.ident.span(), "an enumeration needs at least one variant"));
        }

        Ok(Self {
            ident: input.ident.clone(),
            name,
            variants,
        })
    }

    pub(crate) fn emit(&self) -> TokenStream2 {
        let ident = &self.ident;
        let name = &self.name;
        let variants = &self.variants;
        let variant_names = variants.iter().map(|variant| variant.to_string());

        quote! {
            impl ::fieldguard::Enumeration for #ident {
                const NAME: &'static str = #name;

                fn variants() -> &'static [Self] {
                    const VARIANTS: &[#ident] = &[#(#ident::#variants),*];
                    VARIANTS
                }

                fn variant_name(&self) -> &'static str {
                    match self {
                        #(#ident::#variants => #variant_names,)*
                    }
                }
            }

            impl ::fieldguard::FieldValue for #ident {
                fn type_hint() -> ::fieldguard::TypeHint {
                    ::fieldguard::TypeHint::Kind(::fieldguard::ValueKind::Enum(
                        ::fieldguard::EnumType::of::<#ident>(),
                    ))
                }

                fn into_value(self) -> ::fieldguard::Value {
                    ::fieldguard::Value::Enum(::fieldguard::EnumValue::of(&self))
                }

                fn from_value(value: ::fieldguard::Value) -> ::core::option::Option<Self> {
                    match value {
                        ::fieldguard::Value::Enum(member) => member.downcast::<#ident>(),
                        _ => ::core::option::Option::None,
                    }
                }
            }

            impl ::core::convert::From<#ident> for ::fieldguard::Value {
                fn from(member: #ident) -> Self {
                    ::fieldguard::Value::Enum(::fieldguard::EnumValue::of(&member))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn message(input: DeriveInput) -> String {
        match ParsedEnumeration::from_input(&input) {
            Ok(_) => panic!("expected an error"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn collects_unit_variants_and_name_override() {
        let parsed = ParsedEnumeration::from_input(&parse_quote! {
            #[enumeration(name = "TShirtSize")]
            enum Size { S, M, L }
        })
        .unwrap();
        assert_eq!(parsed.name, "TShirtSize");
        assert_eq!(parsed.variants.len(), 3);

        let out = parsed.emit().to_string();
        assert!(out.contains("Size :: M => \"M\""));
    }

    #[test]
    fn rejects_data_variants_structs_and_empty_enums() {
        let msg = message(parse_quote! { enum Shape { Circle(f64), Square } });
        assert_eq!(msg, "variant `Circle` carries data; enumerations must be unit-only");

        let msg = message(parse_quote! { struct NotAnEnum; });
        assert_eq!(msg, "Enumeration can only be derived for enums");

        let msg = message(parse_quote! { enum Never {} });
        assert_eq!(msg, "an enumeration needs at least one variant");
    }
}
