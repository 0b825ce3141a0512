//! The gateway the HTTP layer talks to.
//!
//! Every method maps onto exactly one parameterized statement. The Postgres
//! implementation borrows a pooled connection for the duration of that
//! statement; the pool takes it back on success and failure alike. Driver
//! errors are returned unchanged.

use async_trait::async_trait;
use clinic_core::models::{
    appointment::DoctorAppointment,
    patient::DoctorPatient,
    timeslot::{NewTimeslot, Timeslot, TimeslotUpdate},
};

use crate::{DbPool, repositories};

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait ClinicRepository: Send + Sync {
    async fn list_timeslots(&self) -> eyre::Result<Vec<Timeslot>>;

    async fn create_timeslot(&self, timeslot: NewTimeslot) -> eyre::Result<Timeslot>;

    /// `None` when no timeslot has the given id.
    async fn update_timeslot(
        &self,
        timeslot_id: i32,
        update: TimeslotUpdate,
    ) -> eyre::Result<Option<Timeslot>>;

    /// Returns the number of rows removed.
    async fn delete_timeslot(&self, timeslot_id: i32) -> eyre::Result<u64>;

    /// Patients linked to the doctor, ordered by name.
    async fn patients_for_doctor(&self, doctor_id: i32) -> eyre::Result<Vec<DoctorPatient>>;

    /// Appointments booked with the doctor, ordered by date then time.
    async fn appointments_for_doctor(
        &self,
        doctor_id: i32,
    ) -> eyre::Result<Vec<DoctorAppointment>>;
}

#[derive(Debug, Clone)]
pub struct PgClinicRepository {
    pool: DbPool,
}

impl PgClinicRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClinicRepository for PgClinicRepository {
    async fn list_timeslots(&self) -> eyre::Result<Vec<Timeslot>> {
        repositories::timeslot::list_timeslots(&self.pool).await
    }

    async fn create_timeslot(&self, timeslot: NewTimeslot) -> eyre::Result<Timeslot> {
        repositories::timeslot::create_timeslot(&self.pool, &timeslot).await
    }

    async fn update_timeslot(
        &self,
        timeslot_id: i32,
        update: TimeslotUpdate,
    ) -> eyre::Result<Option<Timeslot>> {
        repositories::timeslot::update_timeslot(&self.pool, timeslot_id, &update).await
    }

    async fn delete_timeslot(&self, timeslot_id: i32) -> eyre::Result<u64> {
        repositories::timeslot::delete_timeslot(&self.pool, timeslot_id).await
    }

    async fn patients_for_doctor(&self, doctor_id: i32) -> eyre::Result<Vec<DoctorPatient>> {
        repositories::doctor::get_patients_by_doctor_id(&self.pool, doctor_id).await
    }

    async fn appointments_for_doctor(
        &self,
        doctor_id: i32,
    ) -> eyre::Result<Vec<DoctorAppointment>> {
        repositories::doctor::get_appointments_by_doctor_id(&self.pool, doctor_id).await
    }
}
