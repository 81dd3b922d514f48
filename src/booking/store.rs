use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};

use crate::booking::error::StoreError;
use crate::booking::selection::SlotSelection;
use crate::catalog::constants::{
    DEFAULT_DOCTORS, EMILY_CHEN, JAMES_WILSON, MICHAEL_ADAMS, SARAH_MITCHELL,
};
use crate::models::appointment::{Appointment, AppointmentId, AppointmentStatus};
use crate::models::contact::ContactDetails;
use crate::models::doctor::{Doctor, DoctorId};
use crate::models::timeslot::TimeSlot;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AppointmentStats {
    pub upcoming: usize,
    pub completed: usize,
    pub cancelled: usize,
}

/// In-memory appointment collection of one session.
///
/// Records are never removed: cancelling is a status change. Ids come from a
/// counter that only moves forward, so they stay unique for the life of the store.
#[derive(Debug, Default)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
    last_id: u64,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dashboard history every new session starts with, dated relative to `today`
    pub fn seeded(today: NaiveDate) -> Self {
        let mut store = Self::new();

        let history = [
            (
                SARAH_MITCHELL,
                2,
                TimeSlot::TenAm,
                AppointmentStatus::Upcoming,
                None,
            ),
            (
                JAMES_WILSON,
                7,
                TimeSlot::TwoThirtyPm,
                AppointmentStatus::Upcoming,
                None,
            ),
            (
                EMILY_CHEN,
                -14,
                TimeSlot::ElevenAm,
                AppointmentStatus::Completed,
                Some("Follow-up in 3 months"),
            ),
            (
                MICHAEL_ADAMS,
                -30,
                TimeSlot::ThreePm,
                AppointmentStatus::Completed,
                Some("Annual checkup completed"),
            ),
        ];

        for (doctor_id, offset_days, time, status, notes) in history {
            // The history only names doctors from DEFAULT_DOCTORS
            let Some(doctor) = builtin_doctor(doctor_id) else {
                continue;
            };
            let date = offset(today, offset_days);
            store.push(doctor, date, time, status, notes.map(String::from));
        }

        store
    }

    fn next_id(&mut self) -> AppointmentId {
        self.last_id += 1;
        AppointmentId::from(self.last_id)
    }

    fn push(
        &mut self,
        doctor: &Doctor,
        date: NaiveDate,
        time: TimeSlot,
        status: AppointmentStatus,
        notes: Option<String>,
    ) -> &Appointment {
        let id = self.next_id();
        let appointment = Appointment::for_doctor(id, doctor, date, time, status, notes);
        self.appointments.push(appointment);
        &self.appointments[self.appointments.len() - 1]
    }

    fn find_mut(&mut self, id: AppointmentId) -> Result<&mut Appointment, StoreError> {
        self.appointments
            .iter_mut()
            .find(|appointment| appointment.id == id)
            .ok_or_else(|| {
                warn!("appointment {} not found", id);
                StoreError::NotFound(id)
            })
    }

    /// Books `doctor` for the selected slot. No check against other bookings of the
    /// same slot is made.
    pub fn create(
        &mut self,
        doctor: &Doctor,
        selection: SlotSelection,
        contact: &ContactDetails,
        today: NaiveDate,
    ) -> Result<Appointment, StoreError> {
        let (date, time) = selection.require(today)?;

        let note = contact.note();
        let appointment = self
            .push(doctor, date, time, AppointmentStatus::Upcoming, note)
            .clone();

        info!(
            "booked appointment {} with {} on {} at {}",
            appointment.id, appointment.doctor_name, date, time
        );

        Ok(appointment)
    }

    pub fn cancel(&mut self, id: AppointmentId) -> Result<Appointment, StoreError> {
        let appointment = self.find_mut(id)?;

        if appointment.status.is_terminal() {
            warn!(
                "refusing to cancel appointment {} in status {}",
                id, appointment.status
            );
            return Err(StoreError::Terminal {
                id,
                status: appointment.status,
            });
        }

        appointment.status = AppointmentStatus::Cancelled;
        info!("cancelled appointment {}", id);

        Ok(appointment.clone())
    }

    pub fn reschedule(
        &mut self,
        id: AppointmentId,
        selection: SlotSelection,
        today: NaiveDate,
    ) -> Result<Appointment, StoreError> {
        let appointment = self.find_mut(id)?;
        let (date, time) = selection.require(today)?;

        if appointment.status.is_terminal() {
            warn!(
                "refusing to reschedule appointment {} in status {}",
                id, appointment.status
            );
            return Err(StoreError::Terminal {
                id,
                status: appointment.status,
            });
        }

        appointment.date = date;
        appointment.time = time;
        info!("rescheduled appointment {} to {} at {}", id, date, time);

        Ok(appointment.clone())
    }

    pub fn get(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments
            .iter()
            .find(|appointment| appointment.id == id)
    }

    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn list_upcoming(&self) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|appointment| appointment.is_upcoming())
            .collect()
    }

    /// Completed and cancelled appointments, in booking order
    pub fn list_past(&self) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|appointment| appointment.status.is_terminal())
            .collect()
    }

    pub fn stats(&self) -> AppointmentStats {
        self.appointments
            .iter()
            .fold(AppointmentStats::default(), |mut stats, appointment| {
                match appointment.status {
                    AppointmentStatus::Upcoming => stats.upcoming += 1,
                    AppointmentStatus::Completed => stats.completed += 1,
                    AppointmentStatus::Cancelled => stats.cancelled += 1,
                }
                stats
            })
    }
}

fn builtin_doctor(id: DoctorId) -> Option<&'static Doctor> {
    DEFAULT_DOCTORS.iter().find(|doctor| doctor.id == id)
}

fn offset(today: NaiveDate, days: i64) -> NaiveDate {
    let shift = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        today.checked_add_days(shift)
    } else {
        today.checked_sub_days(shift)
    };
    shifted.unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn tomorrow() -> NaiveDate {
        today() + Days::new(1)
    }

    fn dr_a() -> Doctor {
        Doctor {
            id: 1,
            name: "Dr. A".into(),
            specialty: "Cardiologist".into(),
            image: "doctor-1.jpg".into(),
            rating: 4.9,
            reviews: 284,
            location: "Downtown Medical Center".into(),
            next_available: "Today, 3:00 PM".into(),
        }
    }

    fn contact() -> ContactDetails {
        ContactDetails {
            name: "John Doe".into(),
            phone: "(555) 123-4567".into(),
            email: "john@example.com".into(),
            reason: "Palpitations".into(),
        }
    }

    fn book(store: &mut AppointmentStore, time: TimeSlot) -> Appointment {
        store
            .create(
                &dr_a(),
                SlotSelection {
                    date: Some(tomorrow()),
                    time: Some(time),
                },
                &contact(),
                today(),
            )
            .unwrap()
    }

    fn assert_partition(store: &AppointmentStore) {
        let upcoming: HashSet<_> = store.list_upcoming().iter().map(|a| a.id).collect();
        let past: HashSet<_> = store.list_past().iter().map(|a| a.id).collect();
        assert!(upcoming.is_disjoint(&past));
        assert_eq!(upcoming.len() + past.len(), store.all().len());
    }

    #[test]
    fn create_then_cancel_scenario() {
        let mut store = AppointmentStore::new();

        let booked = book(&mut store, TimeSlot::NineAm);

        assert_eq!(store.all().len(), 1);
        assert_eq!(booked.status, AppointmentStatus::Upcoming);
        assert_eq!(booked.doctor_name, "Dr. A");
        assert_eq!(booked.date, tomorrow());
        assert_eq!(booked.time, TimeSlot::NineAm);
        assert_eq!(booked.notes.as_deref(), Some("Palpitations"));

        let cancelled = store.cancel(booked.id).unwrap();

        assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
        assert!(store.list_upcoming().is_empty());
        let past = store.list_past();
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].status, AppointmentStatus::Cancelled);
    }

    #[test]
    fn create_requires_date_and_time() {
        let mut store = AppointmentStore::new();

        for selection in [
            SlotSelection {
                date: None,
                time: Some(TimeSlot::NineAm),
            },
            SlotSelection {
                date: Some(tomorrow()),
                time: None,
            },
            SlotSelection::default(),
        ] {
            assert_eq!(
                store.create(&dr_a(), selection, &contact(), today()),
                Err(StoreError::MissingSelection)
            );
        }
        assert!(store.all().is_empty());
    }

    #[test]
    fn create_rejects_past_dates() {
        let mut store = AppointmentStore::new();
        let selection = SlotSelection {
            date: Some(today()),
            time: Some(TimeSlot::NineAm),
        };

        assert_eq!(
            store.create(&dr_a(), selection, &contact(), today()),
            Err(StoreError::PastDate(today()))
        );
        assert!(store.all().is_empty());
    }

    #[test]
    fn same_slot_can_be_booked_twice_with_distinct_ids() {
        let mut store = AppointmentStore::new();
        let first = book(&mut store, TimeSlot::TwoPm);
        let second = book(&mut store, TimeSlot::TwoPm);

        assert_ne!(first.id, second.id);
        assert_eq!(store.list_upcoming().len(), 2);
    }

    #[test]
    fn cancel_changes_only_status() {
        let mut store = AppointmentStore::new();
        let booked = book(&mut store, TimeSlot::TenAm);

        let cancelled = store.cancel(booked.id).unwrap();

        assert_eq!(
            Appointment {
                status: AppointmentStatus::Upcoming,
                ..cancelled
            },
            booked
        );
    }

    #[test]
    fn cancel_is_terminal() {
        let mut store = AppointmentStore::new();
        let booked = book(&mut store, TimeSlot::TenAm);
        store.cancel(booked.id).unwrap();
        let selection = SlotSelection {
            date: Some(tomorrow()),
            time: Some(TimeSlot::FourPm),
        };

        assert_eq!(
            store.cancel(booked.id),
            Err(StoreError::Terminal {
                id: booked.id,
                status: AppointmentStatus::Cancelled,
            })
        );
        assert_eq!(
            store.reschedule(booked.id, selection, today()),
            Err(StoreError::Terminal {
                id: booked.id,
                status: AppointmentStatus::Cancelled,
            })
        );
    }

    #[test]
    fn unknown_ids_fail() {
        let mut store = AppointmentStore::new();
        let missing = AppointmentId::from(42);
        let selection = SlotSelection {
            date: Some(tomorrow()),
            time: Some(TimeSlot::NineAm),
        };

        assert_eq!(store.cancel(missing), Err(StoreError::NotFound(missing)));
        assert_eq!(
            store.reschedule(missing, selection, today()),
            Err(StoreError::NotFound(missing))
        );
    }

    #[test]
    fn reschedule_changes_only_date_and_time() {
        let mut store = AppointmentStore::new();
        let booked = book(&mut store, TimeSlot::NineAm);
        let new_date = today() + Days::new(10);

        let selection = SlotSelection {
            date: Some(new_date),
            time: Some(TimeSlot::ThreeThirtyPm),
        };

        let moved = store.reschedule(booked.id, selection, today()).unwrap();

        assert_eq!(moved.date, new_date);
        assert_eq!(moved.time, TimeSlot::ThreeThirtyPm);
        assert_eq!(
            Appointment {
                date: booked.date,
                time: booked.time,
                ..moved.clone()
            },
            booked
        );
        assert_eq!(store.all().len(), 1);
        assert_eq!(store.get(booked.id), Some(&moved));
    }

    #[test]
    fn reschedule_requires_complete_selection() {
        let mut store = AppointmentStore::new();
        let booked = book(&mut store, TimeSlot::NineAm);

        let selection = SlotSelection {
            date: Some(tomorrow()),
            time: None,
        };

        assert_eq!(
            store.reschedule(booked.id, selection, today()),
            Err(StoreError::MissingSelection)
        );
        assert_eq!(store.get(booked.id), Some(&booked));
    }

    #[test]
    fn completed_appointments_cannot_be_cancelled() {
        let mut store = AppointmentStore::seeded(today());
        let completed = store.list_past()[0].id;

        assert!(matches!(
            store.cancel(completed),
            Err(StoreError::Terminal {
                status: AppointmentStatus::Completed,
                ..
            })
        ));
    }

    #[test]
    fn views_partition_the_collection_across_mutations() {
        let mut store = AppointmentStore::seeded(today());
        assert_partition(&store);

        let a = book(&mut store, TimeSlot::NineAm);
        let b = book(&mut store, TimeSlot::NineThirtyAm);
        assert_partition(&store);

        store.cancel(a.id).unwrap();
        assert_partition(&store);

        let selection = SlotSelection {
            date: Some(tomorrow()),
            time: Some(TimeSlot::FourPm),
        };
        store.reschedule(b.id, selection, today()).unwrap();
        assert_partition(&store);

        let ids: HashSet<_> = store.all().iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), store.all().len());
    }

    #[test]
    fn seeded_history() {
        let store = AppointmentStore::seeded(today());

        let upcoming = store.list_upcoming();
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].doctor_name, "Dr. Sarah Mitchell");
        assert_eq!(upcoming[0].date, today() + Days::new(2));
        assert_eq!(upcoming[1].time, TimeSlot::TwoThirtyPm);

        let past = store.list_past();
        assert_eq!(past.len(), 2);
        assert_eq!(past[0].date, today() - Days::new(14));
        assert_eq!(past[0].notes.as_deref(), Some("Follow-up in 3 months"));

        assert_eq!(
            store.stats(),
            AppointmentStats {
                upcoming: 2,
                completed: 2,
                cancelled: 0,
            }
        );
    }

    #[test]
    fn seed_keeps_every_history_row() {
        let store = AppointmentStore::seeded(today());

        let rows: Vec<_> = store
            .all()
            .iter()
            .map(|a| (a.id, a.doctor_name.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                (AppointmentId::from(1), "Dr. Sarah Mitchell"),
                (AppointmentId::from(2), "Dr. James Wilson"),
                (AppointmentId::from(3), "Dr. Emily Chen"),
                (AppointmentId::from(4), "Dr. Michael Adams"),
            ]
        );
    }

    #[test]
    fn ids_keep_counting_after_seed() {
        let mut store = AppointmentStore::seeded(today());
        let booked = book(&mut store, TimeSlot::NineAm);
        assert_eq!(booked.id, AppointmentId::from(5));
    }
}
