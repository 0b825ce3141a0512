use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::{ClinicError, ClinicResult};
use crate::models::wire;

/// Doctor assumed when a create request names none.
pub const DEFAULT_DOCTOR_ID: i32 = 1;

/// A bookable time window for a doctor, as stored in `DoctorTimeSlots`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeslot {
    pub timeslotid: i32,
    pub date: NaiveDate,
    #[serde(with = "wire::time")]
    pub starttime: NaiveTime,
    #[serde(with = "wire::time")]
    pub endtime: NaiveTime,
    pub doctorid: i32,
    pub available: Option<bool>,
}

/// Body of `POST /api/timeslots`.
///
/// Every field is optional at the decoding stage; [`CreateTimeslotRequest::validate`]
/// decides what is required and fills in the doctor default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTimeslotRequest {
    #[serde(default, with = "wire::optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, with = "wire::optional_time")]
    pub starttime: Option<NaiveTime>,
    #[serde(default, with = "wire::optional_time")]
    pub endtime: Option<NaiveTime>,
    #[serde(default, with = "wire::optional_id")]
    pub doctorid: Option<i32>,
}

/// A validated timeslot ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTimeslot {
    pub date: NaiveDate,
    pub starttime: NaiveTime,
    pub endtime: NaiveTime,
    pub doctorid: i32,
}

impl CreateTimeslotRequest {
    /// Checks that date, start and end are present and resolves the doctor.
    ///
    /// A missing or falsy (`null`, `0`, `false`, `""`) doctor id falls back to
    /// [`DEFAULT_DOCTOR_ID`].
    pub fn validate(self) -> ClinicResult<NewTimeslot> {
        let (date, starttime, endtime) = required_window(self.date, self.starttime, self.endtime)?;
        Ok(NewTimeslot {
            date,
            starttime,
            endtime,
            doctorid: resolve_doctor(self.doctorid),
        })
    }
}

/// Body of `PUT /api/timeslots/:timeslotid`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTimeslotRequest {
    #[serde(default, with = "wire::optional_id")]
    pub doctorid: Option<i32>,
    #[serde(default, with = "wire::optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, with = "wire::optional_time")]
    pub starttime: Option<NaiveTime>,
    #[serde(default, with = "wire::optional_time")]
    pub endtime: Option<NaiveTime>,
    #[serde(default)]
    pub available: Option<bool>,
}

/// Replacement values for every mutable column of a timeslot.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeslotUpdate {
    pub doctorid: i32,
    pub date: NaiveDate,
    pub starttime: NaiveTime,
    pub endtime: NaiveTime,
    pub available: Option<bool>,
}

impl UpdateTimeslotRequest {
    /// Same rules as creation: date, start and end are required and the
    /// doctor falls back to [`DEFAULT_DOCTOR_ID`]. `available` may stay unset.
    pub fn validate(self) -> ClinicResult<TimeslotUpdate> {
        let (date, starttime, endtime) = required_window(self.date, self.starttime, self.endtime)?;
        Ok(TimeslotUpdate {
            doctorid: resolve_doctor(self.doctorid),
            date,
            starttime,
            endtime,
            available: self.available,
        })
    }
}

fn required_window(
    date: Option<NaiveDate>,
    starttime: Option<NaiveTime>,
    endtime: Option<NaiveTime>,
) -> ClinicResult<(NaiveDate, NaiveTime, NaiveTime)> {
    match (date, starttime, endtime) {
        (Some(date), Some(starttime), Some(endtime)) => Ok((date, starttime, endtime)),
        _ => Err(ClinicError::Validation(
            "Missing required fields".to_string(),
        )),
    }
}

fn resolve_doctor(doctorid: Option<i32>) -> i32 {
    doctorid.filter(|id| *id != 0).unwrap_or(DEFAULT_DOCTOR_ID)
}
