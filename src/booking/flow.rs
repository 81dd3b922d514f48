use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::booking::error::{FlowError, StoreError};
use crate::booking::selection::{SlotSelection, is_selectable};
use crate::booking::store::AppointmentStore;
use crate::models::appointment::{AppointmentId, long_date};
use crate::models::contact::ContactDetails;
use crate::models::doctor::Doctor;
use crate::models::timeslot::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStep {
    SelectingDate,
    SelectingTime,
    EnteringDetails,
    Confirmed,
}

/// Shown once the booking is confirmed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSummary {
    pub appointment_id: AppointmentId,
    pub doctor_name: String,
    pub specialty: String,
    pub date: NaiveDate,
    pub date_label: String,
    pub time: TimeSlot,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingView {
    pub doctor: Doctor,
    pub step: BookingStep,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    /// Empty until a date is chosen
    pub time_slots: Vec<TimeSlot>,
    pub contact: ContactDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<BookingSummary>,
}

/// Booking modal for a single doctor.
///
/// The step is derived from what has been filled in: a chosen date opens the
/// time picker, a chosen time leaves only the contact details, and a successful
/// submit confirms. Once confirmed the flow only accepts `dismiss`.
#[derive(Debug, Clone)]
pub struct BookingFlow {
    doctor: Doctor,
    selection: SlotSelection,
    contact: ContactDetails,
    summary: Option<BookingSummary>,
}

impl BookingFlow {
    pub fn new(doctor: Doctor) -> Self {
        BookingFlow {
            doctor,
            selection: SlotSelection::default(),
            contact: ContactDetails::default(),
            summary: None,
        }
    }

    pub fn step(&self) -> BookingStep {
        if self.summary.is_some() {
            BookingStep::Confirmed
        } else if self.selection.time.is_some() {
            BookingStep::EnteringDetails
        } else if self.selection.date.is_some() {
            BookingStep::SelectingTime
        } else {
            BookingStep::SelectingDate
        }
    }

    fn ensure_open(&self) -> Result<(), FlowError> {
        match self.summary {
            Some(_) => Err(FlowError::AlreadyConfirmed),
            None => Ok(()),
        }
    }

    pub fn select_date(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<BookingStep, FlowError> {
        self.ensure_open()?;
        if !is_selectable(date, today) {
            return Err(StoreError::PastDate(date).into());
        }
        self.selection.date = Some(date);
        debug!("booking with {}: date {}", self.doctor.name, date);
        Ok(self.step())
    }

    pub fn select_time(&mut self, time: TimeSlot) -> Result<BookingStep, FlowError> {
        self.ensure_open()?;
        if self.selection.date.is_none() {
            return Err(FlowError::DateRequired);
        }
        self.selection.time = Some(time);
        debug!("booking with {}: time {}", self.doctor.name, time);
        Ok(self.step())
    }

    pub fn update_contact(&mut self, contact: ContactDetails) -> Result<BookingStep, FlowError> {
        self.ensure_open()?;
        self.contact = contact;
        Ok(self.step())
    }

    /// Required contact fields are checked first, then the date and time. On any
    /// failure the flow and the store are left as they were.
    pub fn submit(
        &mut self,
        store: &mut AppointmentStore,
        today: NaiveDate,
    ) -> Result<BookingSummary, FlowError> {
        self.ensure_open()?;

        if let Some(field) = self.contact.missing_field() {
            warn!(
                "booking with {} rejected: {} missing",
                self.doctor.name, field
            );
            return Err(FlowError::MissingContact(field));
        }

        let doctor = &self.doctor.name;
        let appointment = store
            .create(&self.doctor, self.selection, &self.contact, today)
            .inspect_err(|e| warn!("booking with {} rejected: {}", doctor, e))?;

        let summary = BookingSummary {
            appointment_id: appointment.id,
            doctor_name: appointment.doctor_name,
            specialty: appointment.specialty,
            date: appointment.date,
            date_label: long_date(appointment.date),
            time: appointment.time,
        };

        info!(
            "booking {} confirmed for {}",
            summary.appointment_id, summary.doctor_name
        );
        self.summary = Some(summary.clone());

        Ok(summary)
    }

    /// Closing the modal from any step clears every field
    pub fn dismiss(&mut self) {
        self.selection.clear();
        self.contact = ContactDetails::default();
        self.summary = None;
    }

    pub fn view(&self) -> BookingView {
        BookingView {
            doctor: self.doctor.clone(),
            step: self.step(),
            date: self.selection.date,
            time: self.selection.time,
            time_slots: match self.selection.date {
                Some(_) => TimeSlot::ALL.to_vec(),
                None => Vec::new(),
            },
            contact: self.contact.clone(),
            summary: self.summary.clone(),
        }
    }
}
