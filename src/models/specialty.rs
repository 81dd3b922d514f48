use std::str::FromStr;

use serde::Serialize;

use crate::models::doctor::Doctor;

/// Categories offered by the landing page specialty picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialtyCategory {
    All,
    General,
    Cardiology,
    Neurology,
    Ophthalmology,
    Pediatrics,
    Orthopedics,
}

impl SpecialtyCategory {
    pub const ALL: [SpecialtyCategory; 7] = [
        SpecialtyCategory::All,
        SpecialtyCategory::General,
        SpecialtyCategory::Cardiology,
        SpecialtyCategory::Neurology,
        SpecialtyCategory::Ophthalmology,
        SpecialtyCategory::Pediatrics,
        SpecialtyCategory::Orthopedics,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SpecialtyCategory::All => "all",
            SpecialtyCategory::General => "general",
            SpecialtyCategory::Cardiology => "cardiology",
            SpecialtyCategory::Neurology => "neurology",
            SpecialtyCategory::Ophthalmology => "ophthalmology",
            SpecialtyCategory::Pediatrics => "pediatrics",
            SpecialtyCategory::Orthopedics => "orthopedics",
        }
    }

    /// Button caption
    pub fn name(&self) -> &'static str {
        match self {
            SpecialtyCategory::All => "All",
            SpecialtyCategory::General => "General",
            SpecialtyCategory::Cardiology => "Cardiology",
            SpecialtyCategory::Neurology => "Neurology",
            SpecialtyCategory::Ophthalmology => "Eye Care",
            SpecialtyCategory::Pediatrics => "Pediatrics",
            SpecialtyCategory::Orthopedics => "Orthopedics",
        }
    }

    /// Specialty label carried by matching doctors. `None` for the catch-all.
    pub fn specialty_label(&self) -> Option<&'static str> {
        match self {
            SpecialtyCategory::All => None,
            SpecialtyCategory::General => Some("General Practitioner"),
            SpecialtyCategory::Cardiology => Some("Cardiologist"),
            SpecialtyCategory::Neurology => Some("Neurologist"),
            SpecialtyCategory::Ophthalmology => Some("Ophthalmologist"),
            SpecialtyCategory::Pediatrics => Some("Pediatrician"),
            SpecialtyCategory::Orthopedics => Some("Orthopedist"),
        }
    }

    pub fn filter(&self) -> SpecialtyFilter {
        match self.specialty_label() {
            Some(label) => SpecialtyFilter::Label(label.to_string()),
            None => SpecialtyFilter::All,
        }
    }
}

impl FromStr for SpecialtyCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpecialtyCategory::ALL
            .iter()
            .copied()
            .find(|category| category.id() == s)
            .ok_or_else(|| format!("unknown specialty category: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialtyFilter {
    All,
    /// Exact, case-sensitive match on the doctor's specialty label
    Label(String),
}

impl SpecialtyFilter {
    /// Absent, blank and "all" clear the filter; anything else is a label.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("all") => SpecialtyFilter::All,
            Some(label) => SpecialtyFilter::Label(label.to_string()),
        }
    }

    pub fn matches(&self, doctor: &Doctor) -> bool {
        match self {
            SpecialtyFilter::All => true,
            SpecialtyFilter::Label(label) => doctor.specialty == *label,
        }
    }
}
