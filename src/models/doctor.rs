use serde::{Deserialize, Serialize};

pub type DoctorId = u32;

/// Read-only catalog entry. Field names double as the CSV catalog header.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialty: String,
    pub image: String,
    pub rating: f32,
    pub reviews: u32,
    pub location: String,
    pub next_available: String,
}
