pub mod appointment;
pub mod patient;
pub mod timeslot;
pub mod wire;
