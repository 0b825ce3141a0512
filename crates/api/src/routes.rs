pub mod doctor;
pub mod health;
pub mod timeslot;
