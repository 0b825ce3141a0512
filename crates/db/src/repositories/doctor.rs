use crate::models::{DbDoctorAppointment, DbDoctorPatient};
use clinic_core::models::{appointment::DoctorAppointment, patient::DoctorPatient};
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn get_patients_by_doctor_id(
    pool: &Pool<Postgres>,
    doctor_id: i32,
) -> Result<Vec<DoctorPatient>> {
    let rows = sqlx::query_as::<_, DbDoctorPatient>(
        r#"
        SELECT
            dp.doctorpatientid,
            p.patientid,
            p.name AS patient_name,
            p.profileimageurl,
            p.phone,
            p.email,
            p.address,
            p.latitude::float8 AS latitude,
            p.longitude::float8 AS longitude
        FROM public."DoctorPatient" dp
        JOIN public."Patient" p ON dp.patientid = p.patientid
        WHERE dp.doctorid = $1
        ORDER BY p.name ASC
        "#,
    )
    .bind(doctor_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(DoctorPatient::from).collect())
}

// Appointments reference the patient's user id, not the patient id.
pub async fn get_appointments_by_doctor_id(
    pool: &Pool<Postgres>,
    doctor_id: i32,
) -> Result<Vec<DoctorAppointment>> {
    let rows = sqlx::query_as::<_, DbDoctorAppointment>(
        r#"
        SELECT
            a.appointmentid,
            a.date,
            a.time,
            a.type,
            a.active,
            p.patientid,
            p.name AS patient_name,
            p.age::int4 AS age,
            p.gender,
            p.phone,
            p.address,
            p.email,
            p.profileimageurl,
            p.latitude::float8 AS latitude,
            p.longitude::float8 AS longitude
        FROM public."Appointment" a
        INNER JOIN public."Patient" p ON a.patientid = p.userid
        WHERE a.doctorid = $1
        ORDER BY a.date ASC, a.time ASC
        "#,
    )
    .bind(doctor_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(DoctorAppointment::from).collect())
}
