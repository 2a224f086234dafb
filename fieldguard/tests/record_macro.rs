use fieldguard::chrono::NaiveDate;
use fieldguard::rust_decimal::Decimal;
use fieldguard::{Constraint, FieldError, Number, Record, Value};

#[fieldguard::record]
#[derive(Debug, Clone)]
pub struct Person {
    /// Display name.
    #[field(text(min_length = 3, max_length = 5, trim = " "))]
    pub name: String,
    #[field(int(gt = 0), default = 18)]
    pub age: i64,
    #[field(text(regex = "^[a-z]+@"), optional)]
    pub email: Option<String>,
    #[field(date(ge = "2021-01-01"))]
    pub joined: Option<NaiveDate>,
    #[field(decimal(ge = "0.00", le = 1000), default = Decimal::new(0, 2))]
    pub balance: Decimal,
    #[field(boolean, private, default = true)]
    pub active: bool,
}

#[fieldguard::record(name = "measurement")]
struct Reading {
    #[field(number)]
    value: Number,
    #[field(text(trim))]
    label: fieldguard::Value,
}

#[fieldguard::record]
struct Sample {
    #[field(int)]
    count: i8,
    #[field(float, optional)]
    ratio: Option<f32>,
}

#[test]
fn builder_applies_defaults_and_validates() {
    let person = Person::builder().name("  Ana ").build().expect("valid person");

    assert_eq!(person.name().expect("name"), "Ana");
    assert_eq!(person.age().expect("default age"), 18);
    assert_eq!(person.email().expect("optional"), None);
    assert_eq!(person.joined().expect("optional"), None);
    assert_eq!(person.balance().expect("default balance"), Decimal::new(0, 2));
    assert!(person.active().expect("default flag"));
}

#[test]
fn builder_reports_the_first_failing_field() {
    let err = Person::builder().name("Al").age(30).build().unwrap_err();
    assert_eq!(err.constraint(), Some(Constraint::MinLength));

    let err = Person::builder().name("Ana").age(-1).build().unwrap_err();
    assert_eq!(err.constraint(), Some(Constraint::Gt));
}

#[test]
fn required_field_unset_is_reported_on_read() {
    let person = Person::builder().age(40).build();
    let person = match person {
        Ok(person) => person,
        Err(err) => panic!("unset required fields do not fail construction: {err}"),
    };
    let err = person.name().unwrap_err();
    assert!(matches!(err, FieldError::Unset { ref field, .. } if field == "name"));
}

#[test]
fn setters_validate_and_keep_old_values_on_failure() {
    let mut person = Person::builder().name("Ana").build().expect("valid person");

    person.set_age(41).expect("positive age");
    assert_eq!(person.age().expect("age"), 41);

    let err = person.set_age(0).unwrap_err();
    assert_eq!(err.to_string(), "'age' value '0' must be greater than 0.");
    assert_eq!(person.age().expect("kept"), 41);

    assert!(person.set_email(Some("ana@example.com".to_string())).is_ok());
    assert_eq!(
        person.set_email(Some("Ana@example.com".to_string())).unwrap_err().constraint(),
        Some(Constraint::Regex)
    );
    person.set_email(None).expect("optional accepts none");
    assert_eq!(person.email().expect("cleared"), None);
}

#[test]
fn literal_limits_are_typed() {
    let mut person = Person::builder().name("Ana").build().expect("valid person");

    let day = NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid date");
    person.set_joined(Some(day)).expect("limit itself");
    let err = person
        .set_joined(NaiveDate::from_ymd_opt(2020, 12, 31))
        .unwrap_err();
    assert_eq!(err.constraint(), Some(Constraint::Ge));

    assert!(person.set_balance(Decimal::new(100050, 2)).is_err());
    assert!(person.set_balance(Decimal::new(99999, 2)).is_ok());
}

#[test]
fn null_resets_defaulted_fields() {
    let mut person = Person::builder().name("Ana").age(30).build().expect("valid person");
    person.set("age", Value::Null).expect("default substitutes null");
    assert_eq!(person.age().expect("default"), 18);
}

#[test]
fn private_fields_stay_out_of_visible_storage() {
    let mut person = Person::builder().name("Ana").build().expect("valid person");
    person.set_active(false).expect("bool");

    assert!(person.storage().attr("active").is_none());
    assert!(!person.active().expect("shadowed"));
    assert_eq!(person.storage().attr("name"), Some(&Value::from("Ana")));
}

#[test]
fn dynamic_facade_checks_types() {
    let mut person = Person::builder().name("Ana").build().expect("valid person");

    let err = person.set("age", Value::from("5")).unwrap_err();
    assert!(matches!(err, FieldError::TypeMismatch { .. }));

    let err = person.set("nickname", Value::from("A")).unwrap_err();
    assert!(matches!(err, FieldError::UnknownField { ref owner, .. } if owner == "Person"));
}

#[test]
fn schema_lists_fields_in_declaration_order() {
    let schema = Person::schema();
    let names: Vec<&str> = schema.fields().map(|field| field.name()).collect();
    assert_eq!(names, vec!["name", "age", "email", "joined", "balance", "active"]);
    assert!(schema.field("email").expect("declared").is_optional());
    assert!(Person::try_schema().is_ok());
}

#[test]
fn open_declared_types_take_any_accepted_kind() {
    let mut reading = Reading::builder()
        .value(Number::Float(1.5))
        .label(Value::from(" cpu "))
        .build()
        .expect("valid reading");

    assert_eq!(Reading::schema().name(), "measurement");
    assert_eq!(reading.label().expect("trimmed"), Value::from("cpu"));

    reading.set_value(Number::Int(3)).expect("any number");
    assert_eq!(reading.value().expect("stored"), Number::Int(3));

    reading.set_label(Value::from(b" raw ".as_slice())).expect("bytes are text too");
    assert!(reading.set_label(Value::Int(1)).unwrap_err().is_type_error());
}

#[test]
fn dynamic_writes_must_fit_the_declared_rust_type() {
    let mut sample = Sample::builder().count(1).build().expect("valid sample");

    let err = sample.set("count", Value::Int(1000)).unwrap_err();
    assert!(matches!(err, FieldError::OutOfRange { ref field, .. } if field == "count"));
    assert!(err.is_type_error());
    assert_eq!(sample.count().expect("kept"), 1);

    sample.set("count", Value::Int(-128)).expect("fits i8");
    assert_eq!(sample.count().expect("stored"), -128);

    let err = sample.set("ratio", Value::Float(1e300)).unwrap_err();
    assert!(matches!(err, FieldError::OutOfRange { .. }));
    assert_eq!(sample.ratio().expect("still unset"), None);

    sample.set("ratio", Value::Float(0.5)).expect("fits f32");
    assert_eq!(sample.ratio().expect("stored"), Some(0.5));
}
