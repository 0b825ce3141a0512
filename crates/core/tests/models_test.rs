use chrono::{NaiveDate, NaiveTime};
use clinic_core::{
    errors::ClinicError,
    models::{
        appointment::DoctorAppointment,
        timeslot::{
            CreateTimeslotRequest, DEFAULT_DOCTOR_ID, NewTimeslot, Timeslot, TimeslotUpdate,
            UpdateTimeslotRequest,
        },
        wire,
    },
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, from_value, json, to_value};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn request(body: Value) -> CreateTimeslotRequest {
    from_value(body).expect("request should decode")
}

#[test]
fn test_create_request_validates_into_new_timeslot() {
    let new = request(json!({
        "date": "2024-01-01",
        "starttime": "09:00",
        "endtime": "09:30",
        "doctorid": 3,
    }))
    .validate()
    .unwrap();

    assert_eq!(
        new,
        NewTimeslot {
            date: date("2024-01-01"),
            starttime: hm(9, 0),
            endtime: hm(9, 30),
            doctorid: 3,
        }
    );
}

#[rstest]
#[case::absent(json!({ "date": "2024-01-01", "starttime": "09:00", "endtime": "09:30" }))]
#[case::null(json!({ "date": "2024-01-01", "starttime": "09:00", "endtime": "09:30", "doctorid": null }))]
#[case::zero(json!({ "date": "2024-01-01", "starttime": "09:00", "endtime": "09:30", "doctorid": 0 }))]
#[case::empty_string(json!({ "date": "2024-01-01", "starttime": "09:00", "endtime": "09:30", "doctorid": "" }))]
#[case::false_flag(json!({ "date": "2024-01-01", "starttime": "09:00", "endtime": "09:30", "doctorid": false }))]
#[case::zero_string(json!({ "date": "2024-01-01", "starttime": "09:00", "endtime": "09:30", "doctorid": "0" }))]
fn test_falsy_doctor_defaults(#[case] body: Value) {
    let new = request(body).validate().unwrap();
    assert_eq!(new.doctorid, DEFAULT_DOCTOR_ID);
}

#[rstest]
#[case::missing_date(json!({ "starttime": "09:00", "endtime": "09:30" }))]
#[case::blank_date(json!({ "date": "  ", "starttime": "09:00", "endtime": "09:30" }))]
#[case::missing_start(json!({ "date": "2024-01-01", "endtime": "09:30" }))]
#[case::null_end(json!({ "date": "2024-01-01", "starttime": "09:00", "endtime": null }))]
#[case::nothing(json!({}))]
#[case::false_date(json!({ "date": false, "starttime": "09:00", "endtime": "09:30" }))]
#[case::zero_end(json!({ "date": "2024-01-01", "starttime": "09:00", "endtime": 0 }))]
fn test_missing_required_fields(#[case] body: Value) {
    let err = request(body).validate().unwrap_err();

    match err {
        ClinicError::Validation(message) => assert_eq!(message, "Missing required fields"),
        other => panic!("Expected Validation error, got: {:?}", other),
    }
}

#[rstest]
#[case("09:00", hm(9, 0))]
#[case("09:00:00", hm(9, 0))]
#[case("23:59:59", NaiveTime::from_hms_opt(23, 59, 59).unwrap())]
#[case("07:05:30.250", NaiveTime::from_hms_milli_opt(7, 5, 30, 250).unwrap())]
fn test_time_formats_accepted(#[case] raw: &str, #[case] expected: NaiveTime) {
    assert_eq!(wire::parse_time(raw).unwrap(), expected);
}

#[rstest]
#[case("9am")]
#[case("25:00")]
#[case("")]
fn test_time_formats_rejected(#[case] raw: &str) {
    assert!(wire::parse_time(raw).is_err());
}

#[test]
fn test_numeric_string_doctor_id() {
    let new = request(json!({
        "date": "2024-01-01",
        "starttime": "09:00",
        "endtime": "09:30",
        "doctorid": " 7 ",
    }))
    .validate()
    .unwrap();
    assert_eq!(new.doctorid, 7);
}

#[rstest]
#[case::true_flag(json!(true))]
#[case::word(json!("seven"))]
#[case::too_large(json!(5_000_000_000_i64))]
fn test_unusable_doctor_id_is_a_decode_error(#[case] doctorid: Value) {
    let result = from_value::<CreateTimeslotRequest>(json!({
        "date": "2024-01-01",
        "starttime": "09:00",
        "endtime": "09:30",
        "doctorid": doctorid,
    }));
    assert!(result.is_err());
}

#[test]
fn test_malformed_date_is_a_decode_error() {
    let result = from_value::<CreateTimeslotRequest>(json!({
        "date": "01/02/2024",
        "starttime": "09:00",
        "endtime": "09:30",
    }));
    assert!(result.is_err());
}

#[test]
fn test_timeslot_wire_format() {
    let timeslot = Timeslot {
        timeslotid: 11,
        date: date("2024-01-01"),
        starttime: hm(9, 0),
        endtime: hm(9, 30),
        doctorid: 1,
        available: None,
    };

    assert_eq!(
        to_value(&timeslot).unwrap(),
        json!({
            "timeslotid": 11,
            "date": "2024-01-01",
            "starttime": "09:00:00",
            "endtime": "09:30:00",
            "doctorid": 1,
            "available": null,
        })
    );
}

#[test]
fn test_fractional_seconds_survive_output() {
    let starttime = NaiveTime::from_hms_milli_opt(7, 5, 30, 250).unwrap();
    let timeslot = Timeslot {
        timeslotid: 3,
        date: date("2024-01-01"),
        starttime,
        endtime: hm(8, 0),
        doctorid: 1,
        available: Some(true),
    };

    let value = to_value(&timeslot).unwrap();
    assert_eq!(value["starttime"], json!("07:05:30.250"));
    assert_eq!(value["endtime"], json!("08:00:00"));
    assert_eq!(from_value::<Timeslot>(value).unwrap(), timeslot);
}

#[test]
fn test_update_request_validates_like_create() {
    let update: UpdateTimeslotRequest = from_value(json!({
        "date": "2024-06-01",
        "starttime": "10:00",
        "endtime": "10:30",
        "available": true,
    }))
    .unwrap();

    assert_eq!(
        update.validate().unwrap(),
        TimeslotUpdate {
            doctorid: DEFAULT_DOCTOR_ID,
            date: date("2024-06-01"),
            starttime: hm(10, 0),
            endtime: hm(10, 30),
            available: Some(true),
        }
    );
}

#[rstest]
#[case::only_available(json!({ "available": true }))]
#[case::no_end(json!({ "doctorid": 2, "date": "2024-06-01", "starttime": "10:00" }))]
#[case::nothing(json!({}))]
fn test_partial_update_is_rejected(#[case] body: Value) {
    let update: UpdateTimeslotRequest = from_value(body).unwrap();

    match update.validate().unwrap_err() {
        ClinicError::Validation(message) => assert_eq!(message, "Missing required fields"),
        other => panic!("Expected Validation error, got: {:?}", other),
    }
}

#[test]
fn test_appointment_type_field_name() {
    let appointment: DoctorAppointment = from_value(json!({
        "appointmentid": 1,
        "date": "2024-03-01",
        "time": "09:30:00",
        "type": "follow-up",
        "active": true,
        "patientid": 4,
        "patient_name": "Ines",
        "age": 33,
        "gender": null,
        "phone": null,
        "address": null,
        "email": null,
        "profileimageurl": null,
        "latitude": null,
        "longitude": null,
    }))
    .unwrap();

    assert_eq!(appointment.appointment_type.as_deref(), Some("follow-up"));
    assert_eq!(appointment.schedule_key(), (date("2024-03-01"), hm(9, 30)));
    assert_eq!(to_value(&appointment).unwrap()["type"], json!("follow-up"));
}
