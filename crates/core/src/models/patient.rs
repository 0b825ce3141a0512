use serde::{Deserialize, Serialize};

/// A patient linked to a doctor through `DoctorPatient`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorPatient {
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
