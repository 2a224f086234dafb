use fieldguard::chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use fieldguard::{Constraint, DefinitionError, FieldError, Schema, Storage, TemporalField, Value};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn single(hint: &str, field: TemporalField) -> Schema {
    Schema::builder("Event")
        .field("at", hint, field)
        .map(|b| b.build())
        .expect("valid schema")
}

fn write(schema: &Schema, value: impl Into<Value>) -> Result<Value, FieldError> {
    let mut storage = Storage::new();
    schema.set(&mut storage, "at", value.into())?;
    schema.get(&storage, "at")
}

#[test]
fn date_lower_bound() {
    let schema = single("NaiveDate", TemporalField::date().ge(date(2021, 1, 1)));

    assert_eq!(write(&schema, date(2021, 1, 1)).expect("limit itself"), Value::Date(date(2021, 1, 1)));

    let err = write(&schema, date(2020, 1, 1)).unwrap_err();
    let FieldError::Constraint(violation) = &err else {
        panic!("expected a constraint violation, got {err:?}");
    };
    assert_eq!(violation.constraint, Constraint::Ge);
    assert_eq!(violation.limit.as_deref(), Some("2021-01-01"));
}

#[test]
fn datetimes_and_times_order_within_their_kind() {
    let noon = NaiveTime::from_hms_opt(12, 0, 0).expect("valid time");
    let schema = single("NaiveTime", TemporalField::time().lt(noon));
    assert!(write(&schema, NaiveTime::from_hms_opt(9, 30, 0).expect("valid time")).is_ok());
    assert_eq!(write(&schema, noon).unwrap_err().constraint(), Some(Constraint::Lt));

    let start: NaiveDateTime = date(2021, 6, 1).and_time(noon);
    let schema = single("NaiveDateTime", TemporalField::datetime().gt(start));
    assert!(write(&schema, start + TimeDelta::try_minutes(1).expect("valid delta")).is_ok());
    assert!(write(&schema, start).is_err());
}

#[test]
fn durations_use_limits_of_their_own_kind() {
    let hour = TimeDelta::try_hours(1).expect("valid delta");
    let schema = single("TimeDelta", TemporalField::duration().le(hour));
    assert!(write(&schema, TimeDelta::try_minutes(30).expect("valid delta")).is_ok());
    assert_eq!(
        write(&schema, TimeDelta::try_minutes(90).expect("valid delta")).unwrap_err().constraint(),
        Some(Constraint::Le)
    );
}

#[test]
fn limit_kind_must_match_the_field() {
    let err = Schema::builder("Event")
        .field("at", "NaiveDate", TemporalField::date().ge(TimeDelta::try_hours(1).expect("valid delta")))
        .unwrap_err();
    assert!(matches!(err, DefinitionError::InvalidLimit { .. }));
}

#[test]
fn generic_field_rejects_values_of_another_temporal_kind() {
    let schema = single(
        "NaiveDate | NaiveTime",
        TemporalField::new().ge(date(2021, 1, 1)),
    );
    assert!(write(&schema, date(2022, 1, 1)).is_ok());

    let err = write(&schema, NaiveTime::from_hms_opt(1, 0, 0).expect("valid time")).unwrap_err();
    assert!(matches!(err, FieldError::Incomparable { .. }));
    assert!(err.is_type_error());
}

#[test]
fn non_temporal_values_are_type_errors() {
    let schema = single("NaiveDate", TemporalField::date());
    assert!(write(&schema, "2021-01-01").unwrap_err().is_type_error());
}
