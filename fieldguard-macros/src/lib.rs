use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

mod parsed;

use parsed::{ParsedEnumeration, ParsedRecord};

/// Turns a struct into a validated record.
///
/// Every field must carry a `#[field(...)]` attribute naming its kind:
///
/// ```text
/// #[fieldguard::record]
/// struct Person {
///     #[field(text(min_length = 3, max_length = 5, trim))]
///     name: String,
///     #[field(int(gt = 0), default = 18)]
///     age: i64,
///     #[field(date(ge = "2021-01-01"), optional)]
///     joined: Option<chrono::NaiveDate>,
/// }
/// ```
///
/// Generates:
/// - a storage-backed struct implementing `fieldguard::Record`
/// - typed getters (`name()`) and setters (`set_name(..)`) that go through the field's descriptor
/// - a `PersonBuilder` returned by `Person::builder()`
///
/// Declared types are checked against the field kinds at compile time where
/// the type is known, and again when the schema is first used.
#[proc_macro_attribute]
pub fn record(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as ItemStruct);

    match ParsedRecord::from_item(args.into(), &item) {
        Ok(parsed) => parsed.emit().into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Implements `fieldguard::Enumeration` and `fieldguard::FieldValue` for a
/// unit-only enum. The enum must also implement `Clone`.
#[proc_macro_derive(Enumeration, attributes(enumeration))]
pub fn derive_enumeration(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ParsedEnumeration::from_input(&input) {
        Ok(parsed) => parsed.emit().into(),
        Err(err) => err.to_compile_error().into(),
    }
}
