use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::booking::cancel::{CancelGate, CancelPrompt};
use crate::booking::error::{FlowError, StoreError};
use crate::booking::flow::{BookingFlow, BookingSummary};
use crate::booking::reschedule::RescheduleFlow;
use crate::booking::store::AppointmentStore;
use crate::models::appointment::{Appointment, AppointmentId};
use crate::models::doctor::Doctor;
use crate::models::notice::Notice;

/// Dashboard action waiting on the user. At most one appointment is selected at a time.
#[derive(Debug, Clone)]
pub enum PendingAction {
    Reschedule(RescheduleFlow),
    Cancel(CancelGate),
}

/// Everything one browsing session owns: its appointments, the booking modal
/// of the landing page, and the dashboard's pending action.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    store: AppointmentStore,
    booking: Option<BookingFlow>,
    pending: Option<PendingAction>,
}

impl Session {
    pub fn new(id: Uuid, today: NaiveDate) -> Self {
        Session {
            id,
            store: AppointmentStore::seeded(today),
            booking: None,
            pending: None,
        }
    }

    pub fn store(&self) -> &AppointmentStore {
        &self.store
    }

    /// Replaces any booking already open for another doctor
    pub fn open_booking(&mut self, doctor: Doctor) -> &BookingFlow {
        info!("session {}: booking opened for {}", self.id, doctor.name);
        self.booking.insert(BookingFlow::new(doctor))
    }

    pub fn booking(&self) -> Result<&BookingFlow, FlowError> {
        self.booking.as_ref().ok_or(FlowError::NoBooking)
    }

    pub fn booking_mut(&mut self) -> Result<&mut BookingFlow, FlowError> {
        self.booking.as_mut().ok_or(FlowError::NoBooking)
    }

    pub fn submit_booking(&mut self, today: NaiveDate) -> Result<BookingSummary, FlowError> {
        let flow = self.booking.as_mut().ok_or(FlowError::NoBooking)?;
        flow.submit(&mut self.store, today)
    }

    pub fn dismiss_booking(&mut self) -> Result<&BookingFlow, FlowError> {
        let flow = self.booking_mut()?;
        flow.dismiss();
        Ok(flow)
    }

    fn appointment(&self, id: AppointmentId) -> Result<&Appointment, StoreError> {
        self.store.get(id).ok_or(StoreError::NotFound(id))
    }

    pub fn open_reschedule(&mut self, id: AppointmentId) -> Result<&RescheduleFlow, FlowError> {
        let flow = RescheduleFlow::open(self.appointment(id)?)?;
        info!("session {}: rescheduling appointment {}", self.id, id);
        self.pending = Some(PendingAction::Reschedule(flow));
        self.reschedule()
    }

    pub fn reschedule(&self) -> Result<&RescheduleFlow, FlowError> {
        match &self.pending {
            Some(PendingAction::Reschedule(flow)) => Ok(flow),
            _ => Err(FlowError::NothingSelected),
        }
    }

    pub fn reschedule_mut(&mut self) -> Result<&mut RescheduleFlow, FlowError> {
        match &mut self.pending {
            Some(PendingAction::Reschedule(flow)) => Ok(flow),
            _ => Err(FlowError::NothingSelected),
        }
    }

    /// Closes the reschedule flow on success
    pub fn confirm_reschedule(
        &mut self,
        today: NaiveDate,
    ) -> Result<(Appointment, Notice), FlowError> {
        let Some(PendingAction::Reschedule(flow)) = &mut self.pending else {
            return Err(FlowError::NothingSelected);
        };
        let outcome = flow.confirm(&mut self.store, today)?;
        self.pending = None;
        Ok(outcome)
    }

    pub fn abandon_reschedule(&mut self) -> Result<(), FlowError> {
        let session_id = self.id;
        let flow = self.reschedule_mut()?;
        flow.abandon();
        info!(
            "session {}: reschedule of {} abandoned",
            session_id,
            flow.target()
        );
        self.pending = None;
        Ok(())
    }

    pub fn open_cancel(&mut self, id: AppointmentId) -> Result<CancelPrompt, FlowError> {
        let appointment = self.appointment(id)?;
        if appointment.status.is_terminal() {
            return Err(StoreError::Terminal {
                id,
                status: appointment.status,
            }
            .into());
        }
        let gate = CancelGate::open(appointment);
        let prompt = gate.prompt();
        self.pending = Some(PendingAction::Cancel(gate));
        Ok(prompt)
    }

    pub fn cancel_prompt(&self) -> Result<CancelPrompt, FlowError> {
        match &self.pending {
            Some(PendingAction::Cancel(gate)) => Ok(gate.prompt()),
            _ => Err(FlowError::NothingSelected),
        }
    }

    fn take_cancel(&mut self) -> Result<CancelGate, FlowError> {
        match self.pending.take() {
            Some(PendingAction::Cancel(gate)) => Ok(gate),
            other => {
                self.pending = other;
                Err(FlowError::NothingSelected)
            }
        }
    }

    pub fn confirm_cancel(&mut self) -> Result<(Appointment, Notice), FlowError> {
        let gate = self.take_cancel()?;
        info!(
            "session {}: cancelling appointment {}",
            self.id,
            gate.target()
        );
        gate.confirm(&mut self.store)
    }

    pub fn decline_cancel(&mut self) -> Result<(), FlowError> {
        self.take_cancel()?.decline();
        Ok(())
    }
}
