use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::booking::error::{FlowError, StoreError};
use crate::booking::selection::{SlotSelection, is_selectable};
use crate::booking::store::AppointmentStore;
use crate::models::appointment::{Appointment, AppointmentId, long_date, medium_date};
use crate::models::notice::Notice;
use crate::models::timeslot::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RescheduleStep {
    SelectingDate,
    SelectingTime,
    ReadyToConfirm,
}

#[derive(Debug, Clone, Serialize)]
pub struct RescheduleView {
    pub appointment_id: AppointmentId,
    pub doctor_name: String,
    /// "Thursday, October 22, 2026 at 10:00 AM"
    pub current: String,
    pub step: RescheduleStep,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub time_slots: Vec<TimeSlot>,
    pub can_confirm: bool,
}

/// Picks a new date and time for one upcoming appointment. The store is only
/// touched by `confirm`.
#[derive(Debug, Clone)]
pub struct RescheduleFlow {
    target: AppointmentId,
    doctor_name: String,
    current_date: NaiveDate,
    current_time: TimeSlot,
    selection: SlotSelection,
}

impl RescheduleFlow {
    pub fn open(appointment: &Appointment) -> Result<Self, StoreError> {
        if appointment.status.is_terminal() {
            return Err(StoreError::Terminal {
                id: appointment.id,
                status: appointment.status,
            });
        }
        Ok(RescheduleFlow {
            target: appointment.id,
            doctor_name: appointment.doctor_name.clone(),
            current_date: appointment.date,
            current_time: appointment.time,
            selection: SlotSelection::default(),
        })
    }

    pub fn target(&self) -> AppointmentId {
        self.target
    }

    pub fn step(&self) -> RescheduleStep {
        match (self.selection.date, self.selection.time) {
            (Some(_), Some(_)) => RescheduleStep::ReadyToConfirm,
            (Some(_), None) => RescheduleStep::SelectingTime,
            (None, _) => RescheduleStep::SelectingDate,
        }
    }

    pub fn can_confirm(&self) -> bool {
        self.selection.is_complete()
    }

    pub fn select_date(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<RescheduleStep, FlowError> {
        if !is_selectable(date, today) {
            return Err(StoreError::PastDate(date).into());
        }
        self.selection.date = Some(date);
        debug!("reschedule of {}: date {}", self.target, date);
        Ok(self.step())
    }

    pub fn select_time(&mut self, time: TimeSlot) -> Result<RescheduleStep, FlowError> {
        if self.selection.date.is_none() {
            return Err(FlowError::DateRequired);
        }
        self.selection.time = Some(time);
        debug!("reschedule of {}: time {}", self.target, time);
        Ok(self.step())
    }

    /// Moves the appointment and clears the local selection. A failed confirm
    /// keeps the selection so the user can correct it.
    pub fn confirm(
        &mut self,
        store: &mut AppointmentStore,
        today: NaiveDate,
    ) -> Result<(Appointment, Notice), FlowError> {
        if !self.can_confirm() {
            return Err(StoreError::MissingSelection.into());
        }

        let appointment = store.reschedule(self.target, self.selection, today)?;
        self.selection.clear();
        self.current_date = appointment.date;
        self.current_time = appointment.time;

        let notice = Notice::new(
            "Appointment Rescheduled",
            format!(
                "Your appointment has been moved to {} at {}.",
                medium_date(appointment.date),
                appointment.time
            ),
        );

        Ok((appointment, notice))
    }

    /// Drops the in-progress selection without touching the store
    pub fn abandon(&mut self) {
        self.selection.clear();
    }

    pub fn view(&self) -> RescheduleView {
        RescheduleView {
            appointment_id: self.target,
            doctor_name: self.doctor_name.clone(),
            current: format!("{} at {}", long_date(self.current_date), self.current_time),
            step: self.step(),
            date: self.selection.date,
            time: self.selection.time,
            time_slots: match self.selection.date {
                Some(_) => TimeSlot::ALL.to_vec(),
                None => Vec::new(),
            },
            can_confirm: self.can_confirm(),
        }
    }
}
