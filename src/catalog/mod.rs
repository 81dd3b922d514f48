pub mod constants;
pub mod loader;

use std::collections::HashSet;

use anyhow::{Result, bail};

use crate::config::Config;
use crate::models::doctor::{Doctor, DoctorId};
use crate::models::specialty::SpecialtyFilter;
use constants::DEFAULT_DOCTORS;

/// Immutable doctor reference data, shared by every session
#[derive(Debug, Clone)]
pub struct Catalog {
    doctors: Vec<Doctor>,
}

impl Catalog {
    pub fn new(doctors: Vec<Doctor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for doctor in &doctors {
            if !seen.insert(doctor.id) {
                bail!("duplicate doctor id {} in catalog", doctor.id);
            }
        }
        Ok(Catalog { doctors })
    }

    pub fn builtin() -> Self {
        Catalog {
            doctors: DEFAULT_DOCTORS.clone(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.catalog_path {
            Some(path) => Catalog::new(loader::load_doctors(path)?),
            None => Ok(Catalog::builtin()),
        }
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn find(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.id == id)
    }

    /// Keeps catalog order
    pub fn filter(&self, filter: &SpecialtyFilter) -> Vec<&Doctor> {
        self.doctors
            .iter()
            .filter(|doctor| filter.matches(doctor))
            .collect()
    }

    /// Case-insensitive substring search. `query` is tried against name and specialty,
    /// `location` against the location label; blank inputs match everything.
    pub fn search(&self, query: &str, location: &str) -> Vec<&Doctor> {
        let query = query.trim().to_lowercase();
        let location = location.trim().to_lowercase();

        self.doctors
            .iter()
            .filter(|doctor| {
                query.is_empty()
                    || doctor.name.to_lowercase().contains(&query)
                    || doctor.specialty.to_lowercase().contains(&query)
            })
            .filter(|doctor| {
                location.is_empty() || doctor.location.to_lowercase().contains(&location)
            })
            .collect()
    }
}
