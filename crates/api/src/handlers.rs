pub mod doctor;
pub mod timeslot;
