use fieldguard::{BoolField, Descriptor, FieldError, Schema, Storage, Value};

fn schema() -> Schema {
    Schema::builder("Flags")
        .field("active", "bool", Descriptor::new(BoolField::new()).with_default(false))
        .and_then(|b| b.field("verified", "Option<bool>", BoolField::new()))
        .map(|b| b.build())
        .expect("valid schema")
}

#[test]
fn accepts_only_booleans() {
    let schema = schema();
    let mut storage = Storage::new();

    schema.set(&mut storage, "active", Value::Bool(true)).expect("bool accepted");
    assert_eq!(schema.get(&storage, "active").expect("stored"), Value::Bool(true));

    let err = schema.set(&mut storage, "active", Value::Int(1)).unwrap_err();
    assert!(matches!(err, FieldError::TypeMismatch { .. }));
    assert_eq!(schema.get(&storage, "active").expect("kept"), Value::Bool(true));
}

#[test]
fn default_and_optional_fallbacks() {
    let schema = schema();
    let storage = schema.construct(Vec::<(&str, Value)>::new()).expect("nothing required");

    assert_eq!(schema.get(&storage, "active").expect("default"), Value::Bool(false));
    assert_eq!(schema.get(&storage, "verified").expect("optional"), Value::Null);
}

#[test]
fn integer_hint_is_not_a_boolean() {
    let err = Schema::builder("Flags").field("active", "i64", BoolField::new()).unwrap_err();
    assert!(err.to_string().contains("incompatible with bool field types (bool)"));
}
