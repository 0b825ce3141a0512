use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::wire;

/// An appointment booked with a doctor, joined with the patient it is for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorAppointment {
    pub appointmentid: i32,
    pub date: NaiveDate,
    #[serde(with = "wire::time")]
    pub time: NaiveTime,
    #[serde(rename = "type")]
    pub appointment_type: Option<String>,
    pub active: Option<bool>,
    pub patientid: i32,
    pub patient_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub profileimageurl: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl DoctorAppointment {
    /// Key the appointment listing is ordered by.
    pub fn schedule_key(&self) -> (NaiveDate, NaiveTime) {
        (self.date, self.time)
    }
}
