use chrono::{NaiveDate, NaiveTime};
use clinic_core::models::{
    appointment::DoctorAppointment, patient::DoctorPatient, timeslot::Timeslot,
};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct DbTimeslot {
    pub timeslotid: i32,
    pub date: NaiveDate,
    pub starttime: NaiveTime,
    pub endtime: NaiveTime,
    pub doctorid: i32,
    pub available: Option<bool>,
}

impl From<DbTimeslot> for Timeslot {
    fn from(row: DbTimeslot) -> Self {
        Timeslot {
            timeslotid: row.timeslotid,
            date: row.date,
            starttime: row.starttime,
            endtime: row.endtime,
            doctorid: row.doctorid,
            available: row.available,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DbDoctorPatient {
    pub doctorpatientid: i32,
    pub patientid: i32,
    pub patient_name: Option<String>,
    pub profileimageurl: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<DbDoctorPatient> for DoctorPatient {
    fn from(row: DbDoctorPatient) -> Self {
        DoctorPatient {
            doctorpatientid: row.doctorpatientid,
            patientid: row.patientid,
            patient_name: row.patient_name,
            profileimageurl: row.profileimageurl,
            phone: row.phone,
            email: row.email,
            address: row.address,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DbDoctorAppointment {
    pub appointmentid: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[sqlx(rename = "type")]
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

impl From<DbDoctorAppointment> for DoctorAppointment {
    fn from(row: DbDoctorAppointment) -> Self {
        DoctorAppointment {
            appointmentid: row.appointmentid,
            date: row.date,
            time: row.time,
            appointment_type: row.appointment_type,
            active: row.active,
            patientid: row.patientid,
            patient_name: row.patient_name,
            age: row.age,
            gender: row.gender,
            phone: row.phone,
            address: row.address,
            email: row.email,
            profileimageurl: row.profileimageurl,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}
