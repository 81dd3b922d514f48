use once_cell::sync::Lazy;

use crate::models::doctor::Doctor;

// Image references resolved by the frontend asset pipeline
pub const DOCTOR_1_IMAGE: &str = "doctor-1.jpg";
pub const DOCTOR_2_IMAGE: &str = "doctor-2.jpg";
pub const DOCTOR_3_IMAGE: &str = "doctor-3.jpg";
pub const DOCTOR_4_IMAGE: &str = "doctor-4.jpg";

// Ids of the built-in doctors, referenced by the seeded dashboard history
pub const SARAH_MITCHELL: u32 = 1;
pub const JAMES_WILSON: u32 = 2;
pub const EMILY_CHEN: u32 = 3;
pub const MICHAEL_ADAMS: u32 = 4;

/// Catalog used when no CSV file is configured
pub static DEFAULT_DOCTORS: Lazy<Vec<Doctor>> = Lazy::new(|| {
    vec![
        Doctor {
            id: SARAH_MITCHELL,
            name: "Dr. Sarah Mitchell".into(),
            specialty: "Cardiologist".into(),
            image: DOCTOR_1_IMAGE.into(),
            rating: 4.9,
            reviews: 284,
            location: "Downtown Medical Center".into(),
            next_available: "Today, 3:00 PM".into(),
        },
        Doctor {
            id: JAMES_WILSON,
            name: "Dr. James Wilson".into(),
            specialty: "General Practitioner".into(),
            image: DOCTOR_2_IMAGE.into(),
            rating: 4.8,
            reviews: 412,
            location: "Westside Health Clinic".into(),
            next_available: "Tomorrow, 9:00 AM".into(),
        },
        Doctor {
            id: EMILY_CHEN,
            name: "Dr. Emily Chen".into(),
            specialty: "Neurologist".into(),
            image: DOCTOR_3_IMAGE.into(),
            rating: 4.9,
            reviews: 156,
            location: "University Hospital".into(),
            next_available: "Wed, 11:00 AM".into(),
        },
        Doctor {
            id: MICHAEL_ADAMS,
            name: "Dr. Michael Adams".into(),
            specialty: "Pediatrician".into(),
            image: DOCTOR_4_IMAGE.into(),
            rating: 4.7,
            reviews: 328,
            location: "Children's Care Center".into(),
            next_available: "Today, 4:30 PM".into(),
        },
    ]
});
