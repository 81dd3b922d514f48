use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Bookable time-of-day slots, shared by the booking and reschedule flows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    /// First morning slot
    #[serde(rename = "9:00 AM")]
    NineAm,
    #[serde(rename = "9:30 AM")]
    NineThirtyAm,
    #[serde(rename = "10:00 AM")]
    TenAm,
    #[serde(rename = "10:30 AM")]
    TenThirtyAm,
    /// Last morning slot
    #[serde(rename = "11:00 AM")]
    ElevenAm,
    /// First afternoon slot, after the lunch break
    #[serde(rename = "2:00 PM")]
    TwoPm,
    #[serde(rename = "2:30 PM")]
    TwoThirtyPm,
    #[serde(rename = "3:00 PM")]
    ThreePm,
    #[serde(rename = "3:30 PM")]
    ThreeThirtyPm,
    /// Last slot of the day
    #[serde(rename = "4:00 PM")]
    FourPm,
}

impl TimeSlot {
    /// Every slot in display order
    pub const ALL: [TimeSlot; 10] = [
        TimeSlot::NineAm,
        TimeSlot::NineThirtyAm,
        TimeSlot::TenAm,
        TimeSlot::TenThirtyAm,
        TimeSlot::ElevenAm,
        TimeSlot::TwoPm,
        TimeSlot::TwoThirtyPm,
        TimeSlot::ThreePm,
        TimeSlot::ThreeThirtyPm,
        TimeSlot::FourPm,
    ];

    /// Gets the label shown on the slot picker
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::NineAm => "9:00 AM",
            TimeSlot::NineThirtyAm => "9:30 AM",
            TimeSlot::TenAm => "10:00 AM",
            TimeSlot::TenThirtyAm => "10:30 AM",
            TimeSlot::ElevenAm => "11:00 AM",
            TimeSlot::TwoPm => "2:00 PM",
            TimeSlot::TwoThirtyPm => "2:30 PM",
            TimeSlot::ThreePm => "3:00 PM",
            TimeSlot::ThreeThirtyPm => "3:30 PM",
            TimeSlot::FourPm => "4:00 PM",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        TimeSlot::ALL
            .iter()
            .copied()
            .find(|slot| slot.label() == label)
            .ok_or_else(|| format!("unknown time slot: {}", label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_slots_in_display_order() {
        let labels: Vec<_> = TimeSlot::ALL.iter().map(TimeSlot::label).collect();
        assert_eq!(
            labels,
            vec![
                "9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "2:00 PM", "2:30 PM",
                "3:00 PM", "3:30 PM", "4:00 PM",
            ]
        );
    }

    #[test]
    fn parses_labels_and_rejects_unknown() {
        assert_eq!("2:30 PM".parse::<TimeSlot>(), Ok(TimeSlot::TwoThirtyPm));
        assert_eq!(" 9:00 AM ".parse::<TimeSlot>(), Ok(TimeSlot::NineAm));
        assert!("12:00 PM".parse::<TimeSlot>().is_err());
        assert!("9:00 am".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&TimeSlot::FourPm).unwrap();
        assert_eq!(json, "\"4:00 PM\"");
        let slot: TimeSlot = serde_json::from_str("\"11:00 AM\"").unwrap();
        assert_eq!(slot, TimeSlot::ElevenAm);
    }
}
