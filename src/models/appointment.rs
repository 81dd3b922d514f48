use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::doctor::Doctor;
use crate::models::timeslot::TimeSlot;

/// Store-assigned identifier, never reused within one collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(u64);

impl From<u64> for AppointmentId {
    fn from(raw: u64) -> Self {
        AppointmentId(raw)
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Completed and cancelled appointments accept no further changes
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AppointmentStatus::Upcoming)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Upcoming => write!(f, "upcoming"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub doctor_name: String,
    pub specialty: String,
    pub image: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub location: String,
    pub status: AppointmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Appointment {
    /// Copies the doctor's display fields so the record outlives catalog changes
    pub fn for_doctor(
        id: AppointmentId,
        doctor: &Doctor,
        date: NaiveDate,
        time: TimeSlot,
        status: AppointmentStatus,
        notes: Option<String>,
    ) -> Self {
        Appointment {
            id,
            doctor_name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
            image: doctor.image.clone(),
            date,
            time,
            location: doctor.location.clone(),
            status,
            notes,
        }
    }

    pub fn is_upcoming(&self) -> bool {
        self.status == AppointmentStatus::Upcoming
    }
}

/// "Thursday, October 22, 2026"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "October 22, 2026"
pub fn medium_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_labels() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 2).unwrap();
        assert_eq!(long_date(date), "Friday, October 2, 2026");
        assert_eq!(medium_date(date), "October 2, 2026");
    }

    #[test]
    fn only_upcoming_is_mutable() {
        assert!(!AppointmentStatus::Upcoming.is_terminal());
        assert!(AppointmentStatus::Completed.is_terminal());
        assert!(AppointmentStatus::Cancelled.is_terminal());
    }

    #[test]
    fn serializes_status_lowercase_and_skips_empty_notes() {
        let doctor = Doctor {
            id: 1,
            name: "Dr. A".into(),
            specialty: "Cardiologist".into(),
            image: "doctor-1.jpg".into(),
            rating: 4.9,
            reviews: 10,
            location: "Downtown Medical Center".into(),
            next_available: "Today, 3:00 PM".into(),
        };
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let appointment = Appointment::for_doctor(
            AppointmentId::from(7),
            &doctor,
            date,
            TimeSlot::NineAm,
            AppointmentStatus::Upcoming,
            None,
        );
        let json = serde_json::to_value(&appointment).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["status"], "upcoming");
        assert_eq!(json["time"], "9:00 AM");
        assert_eq!(json["date"], "2026-10-17");
        assert!(json.get("notes").is_none());
    }
}
