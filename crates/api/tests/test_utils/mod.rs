#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI32, Ordering},
};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{NaiveDate, NaiveTime};
use clinic_api::{ApiState, app, config::ApiConfig};
use clinic_core::models::{
    appointment::DoctorAppointment,
    patient::DoctorPatient,
    timeslot::{NewTimeslot, Timeslot, TimeslotUpdate},
};
use clinic_db::ClinicRepository;
use fake::{Fake, faker::internet::en::SafeEmail, faker::name::en::Name};

pub fn test_config() -> ApiConfig {
    ApiConfig::from_lookup(|_| None).expect("default configuration should load")
}

/// Serves the real router on top of the given repository.
pub fn server_with(repository: impl ClinicRepository + 'static) -> TestServer {
    let state = Arc::new(ApiState::new(repository));
    TestServer::new(app(state, &test_config())).expect("failed to start test server")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

pub fn timeslot_from(id: i32, new: &NewTimeslot) -> Timeslot {
    Timeslot {
        timeslotid: id,
        date: new.date,
        starttime: new.starttime,
        endtime: new.endtime,
        doctorid: new.doctorid,
        available: None,
    }
}

pub fn fake_patient(doctorpatientid: i32, patientid: i32) -> DoctorPatient {
    DoctorPatient {
        doctorpatientid,
        patientid,
        patient_name: Some(Name().fake()),
        profileimageurl: None,
        phone: Some("555-0100".to_string()),
        email: Some(SafeEmail().fake()),
        address: None,
        latitude: Some(52.52),
        longitude: Some(13.40),
    }
}

pub fn fake_appointment(appointmentid: i32, on: &str, at: &str) -> DoctorAppointment {
    DoctorAppointment {
        appointmentid,
        date: date(on),
        time: time(at),
        appointment_type: Some("checkup".to_string()),
        active: Some(true),
        patientid: 3,
        patient_name: Some(Name().fake()),
        age: Some((18..90).fake()),
        gender: Some("F".to_string()),
        phone: None,
        address: None,
        email: Some(SafeEmail().fake()),
        profileimageurl: None,
        latitude: None,
        longitude: None,
    }
}

/// A gateway holding timeslots in memory, for tests that chain requests.
#[derive(Default)]
pub struct InMemoryRepository {
    timeslots: Mutex<Vec<Timeslot>>,
    last_id: AtomicI32,
}

#[async_trait]
impl ClinicRepository for InMemoryRepository {
    async fn list_timeslots(&self) -> eyre::Result<Vec<Timeslot>> {
        Ok(self.timeslots.lock().unwrap().clone())
    }

    async fn create_timeslot(&self, timeslot: NewTimeslot) -> eyre::Result<Timeslot> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = timeslot_from(id, &timeslot);
        self.timeslots.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update_timeslot(
        &self,
        timeslot_id: i32,
        update: TimeslotUpdate,
    ) -> eyre::Result<Option<Timeslot>> {
        let mut timeslots = self.timeslots.lock().unwrap();
        let Some(row) = timeslots.iter_mut().find(|t| t.timeslotid == timeslot_id) else {
            return Ok(None);
        };

        row.doctorid = update.doctorid;
        row.date = update.date;
        row.starttime = update.starttime;
        row.endtime = update.endtime;
        row.available = update.available;
        Ok(Some(row.clone()))
    }

    async fn delete_timeslot(&self, timeslot_id: i32) -> eyre::Result<u64> {
        let mut timeslots = self.timeslots.lock().unwrap();
        let before = timeslots.len();
        timeslots.retain(|t| t.timeslotid != timeslot_id);
        Ok((before - timeslots.len()) as u64)
    }

    async fn patients_for_doctor(&self, _doctor_id: i32) -> eyre::Result<Vec<DoctorPatient>> {
        Ok(Vec::new())
    }

    async fn appointments_for_doctor(
        &self,
        _doctor_id: i32,
    ) -> eyre::Result<Vec<DoctorAppointment>> {
        Ok(Vec::new())
    }
}
