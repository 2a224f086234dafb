use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::parse::Parser;
use syn::spanned::Spanned;
use syn::{Attribute, Error, Fields, Ident, ItemStruct, LitStr, Result, Visibility};

use super::field::ParsedField;

pub(crate) struct ParsedRecord {
    attrs: Vec<Attribute>,
    vis: Visibility,
    ident: Ident,
    owner_name: String,
    fields: Vec<ParsedField>,
}

impl ParsedRecord {
    pub(crate) fn from_item(args: TokenStream2, item: &ItemStruct) -> Result<Self> {
        let mut owner_name = item.ident.to_string();
        let args_parser = syn::meta::parser(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                owner_name = lit.value();
                Ok(())
            } else {
                Err(meta.error("unsupported record option; expected `name = \"...\"`"))
            }
        });
        args_parser.parse2(args)?;

        if !item.generics.params.is_empty() || item.generics.where_clause.is_some() {
            return Err(Error::new(item.generics.span(), "#[record] does not support generic structs"));
        }

        let fields = match &item.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .map(ParsedField::from_field)
                .collect::<Result<Vec<_>>>()?,
            _ => return Err(Error::new(item.ident.span(), "#[record] requires a struct with named fields")),
        };

        Ok(Self {
            attrs: item.attrs.clone(),
            vis: item.vis.clone(),
            ident: item.ident.clone(),
            owner_name,
            fields,
        })
    }

    pub(crate) fn emit(&self) -> TokenStream2 {
        let attrs = &self.attrs;
        let vis = &self.vis;
        let ident = &self.ident;
        let owner_name = &self.owner_name;
        let builder_ident = Ident::new(&format!("{}Builder", ident), Span::call_site());
        let builder_doc = format!("Builder for [`{ident}`]. Unset fields fall back to their defaults.");

        let schema_entries = self.fields.iter().map(ParsedField::schema_entry);
        let accessors = self.fields.iter().map(ParsedField::accessors);
        let builder_fields = self.fields.iter().map(ParsedField::builder_field);
        let builder_setters = self.fields.iter().map(ParsedField::builder_setter);
        let builder_entries = self.fields.iter().map(ParsedField::builder_entry);
        let field_count = self.fields.len();

        quote! {
            #(#attrs)*
            #vis struct #ident {
                __storage: ::fieldguard::Storage,
            }

            impl #ident {
                fn __fieldguard_schema() -> ::core::result::Result<::fieldguard::Schema, ::fieldguard::DefinitionError> {
                    ::core::result::Result::Ok(
                        ::fieldguard::Schema::builder(#owner_name)
                            #(#schema_entries)*
                            .build()
                    )
                }

                /// Starts building a new instance.
                #vis fn builder() -> #builder_ident {
                    <#builder_ident as ::core::default::Default>::default()
                }

                #(#accessors)*
            }

            impl ::fieldguard::Record for #ident {
                fn try_schema() -> ::core::result::Result<
                    &'static ::fieldguard::Schema,
                    &'static ::fieldguard::DefinitionError,
                > {
                    static SCHEMA: ::fieldguard::once_cell::sync::Lazy<
                        ::core::result::Result<::fieldguard::Schema, ::fieldguard::DefinitionError>,
                    > = ::fieldguard::once_cell::sync::Lazy::new(#ident::__fieldguard_schema);
                    ::core::result::Result::as_ref(&*SCHEMA)
                }

                fn storage(&self) -> &::fieldguard::Storage {
                    &self.__storage
                }

                fn storage_mut(&mut self) -> &mut ::fieldguard::Storage {
                    &mut self.__storage
                }
            }

            #[doc = #builder_doc]
            #[derive(Debug, Clone, Default)]
            #vis struct #builder_ident {
                #(#builder_fields,)*
            }

            impl #builder_ident {
                #(#builder_setters)*

                /// Runs every field's set hook in declaration order.
                ///
                /// # Panics
                ///
                /// Panics if the record definition itself is invalid.
                #vis fn build(self) -> ::core::result::Result<#ident, ::fieldguard::FieldError> {
                    let values: [(&'static str, ::fieldguard::Slot<::fieldguard::Value>); #field_count] = [
                        #(#builder_entries,)*
                    ];
                    let __storage = <#ident as ::fieldguard::Record>::schema().construct(values)?;
                    ::core::result::Result::Ok(#ident { __storage })
                }
            }
        }
    }
}
