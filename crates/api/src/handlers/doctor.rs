use axum::{Json, extract::State};
use clinic_core::{
    errors::ClinicError,
    models::{appointment::DoctorAppointment, patient::DoctorPatient},
};
use std::sync::Arc;

use crate::{ApiState, extract::Path, middleware::error_handling::AppError};

/// Patients linked to a doctor, by name. 404 when the doctor has none.
#[axum::debug_handler]
pub async fn list_doctor_patients(
    State(state): State<Arc<ApiState>>,
    Path(doctor_id): Path<i32>,
) -> Result<Json<Vec<DoctorPatient>>, AppError> {
    let patients = state.repository.patients_for_doctor(doctor_id).await?;

    if patients.is_empty() {
        return Err(AppError(ClinicError::NotFound(
            "No patients found for this doctor.".to_string(),
        )));
    }

    Ok(Json(patients))
}

/// Appointments booked with a doctor, by date then time. 404 when there are
/// none.
#[axum::debug_handler]
pub async fn list_doctor_appointments(
    State(state): State<Arc<ApiState>>,
    Path(doctor_id): Path<i32>,
) -> Result<Json<Vec<DoctorAppointment>>, AppError> {
    let appointments = state.repository.appointments_for_doctor(doctor_id).await?;

    if appointments.is_empty() {
        return Err(AppError(ClinicError::NotFound(
            "No appointments found for the specified doctor.".to_string(),
        )));
    }

    Ok(Json(appointments))
}
