use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::info;

use crate::models::doctor::Doctor;

/// Reads a doctor catalog from a CSV file whose header matches the `Doctor` fields.
pub fn load_doctors(path: &Path) -> Result<Vec<Doctor>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open catalog file {}", path.display()))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut doctors = Vec::new();

    for (row, result) in reader.deserialize::<Doctor>().enumerate() {
        // +2: one for the header, one for 1-based line numbers
        let line = row + 2;
        let doctor = result.with_context(|| {
            format!("invalid catalog row at line {} of {}", line, path.display())
        })?;
        doctors.push(doctor);
    }

    info!("loaded {} doctors from {}", doctors.len(), path.display());

    Ok(doctors)
}
