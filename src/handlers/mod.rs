pub mod booking;
pub mod dashboard;
pub mod doctors;
pub mod sessions;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::models::appointment::Appointment;
use crate::models::notice::Notice;

/// Reference day for the date-picker rule and for seeding new sessions
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Result of a confirmed dashboard action
#[derive(Debug, Serialize)]
pub struct ActionOutcome {
    pub appointment: Appointment,
    pub notice: Notice,
}

impl From<(Appointment, Notice)> for ActionOutcome {
    fn from((appointment, notice): (Appointment, Notice)) -> Self {
        ActionOutcome {
            appointment,
            notice,
        }
    }
}
