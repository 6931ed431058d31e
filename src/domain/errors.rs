#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    EmptyRoster(String),
    BlankDoctorName(String),
    EmptySymptomCatalog,
    DuplicateSymptom(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::EmptyRoster(department) => {
                write!(f, "No doctors listed for department: {}", department)
            }
            DomainError::BlankDoctorName(department) => {
                write!(f, "Blank doctor name in department: {}", department)
            }
            DomainError::EmptySymptomCatalog => {
                write!(f, "Symptom catalog is empty")
            }
            DomainError::DuplicateSymptom(symptom) => {
                write!(f, "Duplicate symptom in catalog: {}", symptom)
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
