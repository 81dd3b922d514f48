use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::booking::error::FlowError;
use crate::booking::store::AppointmentStore;
use crate::models::appointment::{Appointment, AppointmentId, medium_date};
use crate::models::notice::Notice;
use crate::models::timeslot::TimeSlot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CancelPrompt {
    pub appointment_id: AppointmentId,
    pub doctor_name: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub message: String,
}

/// One-step confirmation in front of `AppointmentStore::cancel`. Both outcomes
/// consume the gate.
#[derive(Debug, Clone)]
pub struct CancelGate {
    target: AppointmentId,
    doctor_name: String,
    date: NaiveDate,
    time: TimeSlot,
}

impl CancelGate {
    pub fn open(appointment: &Appointment) -> Self {
        CancelGate {
            target: appointment.id,
            doctor_name: appointment.doctor_name.clone(),
            date: appointment.date,
            time: appointment.time,
        }
    }

    pub fn target(&self) -> AppointmentId {
        self.target
    }

    pub fn prompt(&self) -> CancelPrompt {
        CancelPrompt {
            appointment_id: self.target,
            doctor_name: self.doctor_name.clone(),
            date: self.date,
            time: self.time,
            message: format!(
                "Are you sure you want to cancel your appointment with {} on {} at {}?",
                self.doctor_name,
                medium_date(self.date),
                self.time
            ),
        }
    }

    pub fn confirm(self, store: &mut AppointmentStore) -> Result<(Appointment, Notice), FlowError> {
        let appointment = store.cancel(self.target)?;
        let notice = Notice::new(
            "Appointment Cancelled",
            format!(
                "Your appointment with {} has been cancelled.",
                appointment.doctor_name
            ),
        );
        Ok((appointment, notice))
    }

    pub fn decline(self) {
        info!("kept appointment {}", self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::error::StoreError;
    use crate::models::appointment::AppointmentStatus;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn prompt_names_doctor_date_and_time() {
        let store = AppointmentStore::seeded(today());
        let gate = CancelGate::open(store.list_upcoming()[0]);

        let prompt = gate.prompt();

        let expected = concat!(
            "Are you sure you want to cancel your appointment with ",
            "Dr. Sarah Mitchell on October 18, 2026 at 10:00 AM?"
        );
        assert_eq!(prompt.date, today() + Days::new(2));
        assert_eq!(prompt.message, expected);
    }

    #[test]
    fn confirm_cancels_and_notifies() {
        let mut store = AppointmentStore::seeded(today());
        let gate = CancelGate::open(store.list_upcoming()[1]);
        let target = gate.target();

        let (cancelled, notice) = gate.confirm(&mut store).unwrap();

        assert_eq!(cancelled.id, target);
        assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
        assert_eq!(
            notice.description,
            "Your appointment with Dr. James Wilson has been cancelled."
        );
        assert_eq!(store.stats().cancelled, 1);
        assert_eq!(store.list_upcoming().len(), 1);
    }

    #[test]
    fn decline_leaves_the_store_alone() {
        let store = AppointmentStore::seeded(today());
        let before = store.all().to_vec();

        CancelGate::open(store.list_upcoming()[0]).decline();

        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn confirm_on_an_already_cancelled_appointment_fails() {
        let mut store = AppointmentStore::seeded(today());
        let upcoming = store.list_upcoming()[0].clone();
        let first = CancelGate::open(&upcoming);
        let second = CancelGate::open(&upcoming);
        first.confirm(&mut store).unwrap();

        assert!(matches!(
            second.confirm(&mut store),
            Err(FlowError::Store(StoreError::Terminal { .. }))
        ));
    }
}
