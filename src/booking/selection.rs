use chrono::NaiveDate;
use serde::Serialize;

use crate::booking::error::StoreError;
use crate::models::timeslot::TimeSlot;

/// A date chosen on a calendar stands for its midnight, which has already passed
/// for today. Only later dates are offered.
pub fn is_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Date and time picked so far in a booking or reschedule flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SlotSelection {
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
}

impl SlotSelection {
    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }

    /// Both parts present and the date still selectable on `today`
    pub fn require(&self, today: NaiveDate) -> Result<(NaiveDate, TimeSlot), StoreError> {
        let (Some(date), Some(time)) = (self.date, self.time) else {
            return Err(StoreError::MissingSelection);
        };
        if !is_selectable(date, today) {
            return Err(StoreError::PastDate(date));
        }
        Ok((date, time))
    }

    pub fn clear(&mut self) {
        *self = SlotSelection::default();
    }
}
