use fieldguard::num_complex::Complex64;
use fieldguard::rust_decimal::Decimal;
use fieldguard::{ComplexField, Constraint, DefinitionError, FieldError, NumberField, Schema, Storage, Value};

fn single(hint: &str, field: NumberField) -> Schema {
    Schema::builder("Measure")
        .field("amount", hint, field)
        .map(|b| b.build())
        .expect("valid schema")
}

fn write(schema: &Schema, value: impl Into<Value>) -> Result<Value, FieldError> {
    let mut storage = Storage::new();
    schema.set(&mut storage, "amount", value.into())?;
    schema.get(&storage, "amount")
}

#[test]
fn strict_lower_bound() {
    let schema = single("i64", NumberField::int().gt(3));

    assert_eq!(write(&schema, 4).expect("accepted"), Value::Int(4));

    let err = write(&schema, 3).unwrap_err();
    let FieldError::Constraint(violation) = &err else {
        panic!("expected a constraint violation, got {err:?}");
    };
    assert_eq!(violation.constraint, Constraint::Gt);
    assert_eq!(violation.limit.as_deref(), Some("3"));
    assert_eq!(err.to_string(), "'amount' value '3' must be greater than 3.");
}

#[test]
fn type_is_checked_before_limits() {
    let schema = single("i64", NumberField::int().gt(3));
    let err = write(&schema, "3").unwrap_err();
    assert!(matches!(err, FieldError::TypeMismatch { .. }));

    let err = write(&schema, "5").unwrap_err();
    assert!(err.is_type_error());
}

#[test]
fn every_limit_is_enforced_in_order() {
    let schema = single("f64", NumberField::float().ge(0).le(1.0).lt(0.5));

    assert!(write(&schema, 0.25).is_ok());
    assert_eq!(write(&schema, 0.75).unwrap_err().constraint(), Some(Constraint::Lt));
    assert_eq!(write(&schema, -1.0).unwrap_err().constraint(), Some(Constraint::Ge));
}

#[test]
fn nan_fails_any_limit() {
    let schema = single("f64", NumberField::float().lt(10));
    let err = write(&schema, f64::NAN).unwrap_err();
    assert_eq!(err.constraint(), Some(Constraint::NotANumber));
    assert!(err.to_string().ends_with("is not a number."));

    let unbounded = single("f64", NumberField::float());
    assert!(write(&unbounded, f64::NAN).is_ok());
}

#[test]
fn limits_compare_across_numeric_kinds() {
    let schema = single("Decimal", NumberField::decimal().gt(1).le(2.5));
    assert!(write(&schema, Decimal::new(15, 1)).is_ok());
    assert_eq!(
        write(&schema, Decimal::new(26, 1)).unwrap_err().constraint(),
        Some(Constraint::Le)
    );
}

#[test]
fn generic_number_accepts_every_numeric_kind() {
    let schema = single("Number", NumberField::new());
    assert!(write(&schema, 1).is_ok());
    assert!(write(&schema, 1.5).is_ok());
    assert!(write(&schema, Decimal::new(1, 2)).is_ok());
    assert!(write(&schema, Complex64::new(1.0, 1.0)).is_ok());
    assert!(write(&schema, true).unwrap_err().is_type_error());
}

#[test]
fn complex_values_cannot_meet_limits() {
    let schema = single("Number", NumberField::new().gt(0));
    let err = write(&schema, Complex64::new(1.0, 1.0)).unwrap_err();
    assert!(matches!(err, FieldError::Incomparable { constraint: Constraint::Gt, .. }));
}

#[test]
fn limits_must_be_ordered_numbers() {
    let err = Schema::builder("Measure")
        .field("amount", "Complex64", NumberField::new().gt(Complex64::new(0.0, 1.0)))
        .unwrap_err();
    assert!(matches!(err, DefinitionError::InvalidLimit { .. }));

    let err = Schema::builder("Measure")
        .field("amount", "f64", NumberField::float().lt(f64::NAN))
        .unwrap_err();
    assert!(matches!(err, DefinitionError::InvalidLimit { .. }));
}

#[test]
fn complex_field_only_checks_the_type() {
    let schema = Schema::builder("Signal")
        .field("z", "Complex64", ComplexField::new())
        .map(|b| b.build())
        .expect("valid schema");
    let mut storage = Storage::new();

    schema
        .set(&mut storage, "z", Value::Complex(Complex64::new(0.0, -2.0)))
        .expect("any complex value");
    assert!(schema.set(&mut storage, "z", Value::Float(1.0)).unwrap_err().is_type_error());

    let err = Schema::builder("Signal").field("z", "f64", ComplexField::new()).unwrap_err();
    assert!(matches!(err, DefinitionError::IncompatibleHint { kind: "complex", .. }));
}

#[test]
fn declared_type_narrows_the_kind() {
    let schema = single("i64", NumberField::new());
    assert!(write(&schema, 1.5).unwrap_err().is_type_error());
    assert!(write(&schema, 2).is_ok());
}

#[test]
fn limits_compare_exact_values_across_kinds() {
    let schema = single("Number", NumberField::new().gt(9_007_199_254_740_992.0));
    assert!(write(&schema, 9_007_199_254_740_993_i64).is_ok());
    assert_eq!(
        write(&schema, 9_007_199_254_740_992_i64).unwrap_err().constraint(),
        Some(Constraint::Gt)
    );

    let schema = single("Number", NumberField::new().gt(Decimal::new(1, 1)));
    assert!(write(&schema, 0.1).is_ok());
    assert_eq!(write(&schema, Decimal::new(1, 1)).unwrap_err().constraint(), Some(Constraint::Gt));

    let schema = single("Number", NumberField::new().le(0.1));
    assert!(write(&schema, Decimal::new(1, 1)).is_ok());
}
