pub mod appointment;
pub mod contact;
pub mod doctor;
pub mod notice;
pub mod specialty;
pub mod timeslot;
