use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::{DomainError, DomainResult};
use super::models::Department;

/// The hospital directory: who works where, and which symptoms the form
/// offers. Read-only reference data for the form and the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directory {
    pub rosters: BTreeMap<Department, Vec<String>>,
    pub symptoms: Vec<String>,
}

impl Default for Directory {
    fn default() -> Self {
        let mut rosters = BTreeMap::new();
        rosters.insert(
            Department::Cardiology,
            vec!["Dr. A Sharma".to_string(), "Dr. R Nair".to_string()],
        );
        rosters.insert(
            Department::Dermatology,
            vec!["Dr. Meera Thomas".to_string(), "Dr. Kiran Patel".to_string()],
        );
        rosters.insert(
            Department::Neurology,
            vec!["Dr. S Joseph".to_string(), "Dr. Rekha Menon".to_string()],
        );
        rosters.insert(
            Department::Pediatrics,
            vec!["Dr. Arjun Roy".to_string(), "Dr. Latha Iyer".to_string()],
        );
        rosters.insert(
            Department::General,
            vec!["Dr. M Faisal".to_string(), "Dr. G George".to_string()],
        );

        let symptoms = [
            "Headache",
            "Fever",
            "Cough",
            "Skin Rash",
            "Chest Pain",
            "Dizziness",
            "Fatigue",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        Self { rosters, symptoms }
    }
}

impl Directory {
    /// Returns the ordered doctor roster for a department.
    pub fn roster(&self, department: Department) -> &[String] {
        self.rosters
            .get(&department)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_doctor(&self, department: Department, doctor: &str) -> bool {
        self.roster(department).iter().any(|name| name == doctor)
    }

    /// Checks that the directory can actually drive the form: every
    /// department has at least one named doctor and the symptom catalog is a
    /// non-empty set.
    pub fn validate(&self) -> DomainResult<()> {
        for department in Department::ALL {
            let roster = self.roster(department);
            if roster.is_empty() {
                return Err(DomainError::EmptyRoster(department.label().to_string()));
            }
            if roster.iter().any(|name| name.trim().is_empty()) {
                return Err(DomainError::BlankDoctorName(department.label().to_string()));
            }
        }

        if self.symptoms.is_empty() {
            return Err(DomainError::EmptySymptomCatalog);
        }
        for (index, symptom) in self.symptoms.iter().enumerate() {
            if self.symptoms[..index].contains(symptom) {
                return Err(DomainError::DuplicateSymptom(symptom.clone()));
            }
        }

        Ok(())
    }
}
