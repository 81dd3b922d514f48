use serde::Serialize;

use crate::error::ApiError;
use crate::models::doctor::{Doctor, DoctorId};
use crate::models::specialty::{SpecialtyCategory, SpecialtyFilter};
use crate::models::timeslot::TimeSlot;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategoryEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: Option<&'static str>,
}

/// `category` (a picker id) takes precedence over a raw `specialty` label
pub fn list_doctors(
    state: &AppState,
    specialty: Option<&str>,
    category: Option<&str>,
) -> Result<Vec<Doctor>, ApiError> {
    let filter = match category {
        Some(id) => {
            let category: SpecialtyCategory = id.parse().map_err(ApiError::BadRequest)?;
            category.filter()
        }
        None => SpecialtyFilter::from_query(specialty),
    };

    Ok(state.catalog.filter(&filter).into_iter().cloned().collect())
}

pub fn search_doctors(state: &AppState, query: &str, location: &str) -> Vec<Doctor> {
    state
        .catalog
        .search(query, location)
        .into_iter()
        .cloned()
        .collect()
}

pub fn get_doctor(state: &AppState, id: DoctorId) -> Result<Doctor, ApiError> {
    state
        .catalog
        .find(id)
        .cloned()
        .ok_or(ApiError::DoctorNotFound(id))
}

pub fn specialty_categories() -> Vec<CategoryEntry> {
    SpecialtyCategory::ALL
        .iter()
        .map(|category| CategoryEntry {
            id: category.id(),
            name: category.name(),
            specialty: category.specialty_label(),
        })
        .collect()
}

pub fn time_slots() -> Vec<TimeSlot> {
    TimeSlot::ALL.to_vec()
}
