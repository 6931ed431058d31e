use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Cardiology,
    Dermatology,
    Neurology,
    Pediatrics,
    General,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Cardiology,
        Department::Dermatology,
        Department::Neurology,
        Department::Pediatrics,
        Department::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Department::Cardiology => "Cardiology",
            Department::Dermatology => "Dermatology",
            Department::Neurology => "Neurology",
            Department::Pediatrics => "Pediatrics",
            Department::General => "General",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    NineAm,
    TenAm,
    ElevenAm,
    OnePm,
    ThreePm,
    FourPm,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::NineAm,
        TimeSlot::TenAm,
        TimeSlot::ElevenAm,
        TimeSlot::OnePm,
        TimeSlot::ThreePm,
        TimeSlot::FourPm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::NineAm => "09:00 AM - 09:30 AM",
            TimeSlot::TenAm => "10:00 AM - 10:30 AM",
            TimeSlot::ElevenAm => "11:00 AM - 11:30 AM",
            TimeSlot::OnePm => "01:00 PM - 01:30 PM",
            TimeSlot::ThreePm => "03:00 PM - 03:30 PM",
            TimeSlot::FourPm => "04:00 PM - 04:30 PM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsuranceAnswer {
    Yes,
    No,
}

impl InsuranceAnswer {
    pub const ALL: [InsuranceAnswer; 2] = [InsuranceAnswer::Yes, InsuranceAnswer::No];

    pub fn label(&self) -> &'static str {
        match self {
            InsuranceAnswer::Yes => "Yes",
            InsuranceAnswer::No => "No",
        }
    }
}

/// The form fields in display order. Also the keys of the error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Username,
    Email,
    Mobile,
    Gender,
    DateOfBirth,
    Department,
    Doctor,
    Symptoms,
    AppointmentDate,
    TimeSlot,
    Insurance,
    InsuranceCompany,
    PolicyNumber,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Username,
        Field::Email,
        Field::Mobile,
        Field::Gender,
        Field::DateOfBirth,
        Field::Department,
        Field::Doctor,
        Field::Symptoms,
        Field::AppointmentDate,
        Field::TimeSlot,
        Field::Insurance,
        Field::InsuranceCompany,
        Field::PolicyNumber,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Username => "Full Name",
            Field::Email => "Email ID",
            Field::Mobile => "Mobile",
            Field::Gender => "Gender",
            Field::DateOfBirth => "Date of Birth",
            Field::Department => "Department",
            Field::Doctor => "Doctor",
            Field::Symptoms => "Symptoms",
            Field::AppointmentDate => "Appointment Date",
            Field::TimeSlot => "Time Slot",
            Field::Insurance => "Do you have insurance?",
            Field::InsuranceCompany => "Insurance Company",
            Field::PolicyNumber => "Policy Number",
        }
    }

    /// Fields whose value is typed free-form rather than picked from options.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Field::Username
                | Field::Email
                | Field::Mobile
                | Field::DateOfBirth
                | Field::AppointmentDate
                | Field::InsuranceCompany
                | Field::PolicyNumber
        )
    }

    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            Field::Gender | Field::Department | Field::Doctor | Field::TimeSlot | Field::Insurance
        )
    }
}

/// The complete set of form values at a point in time.
///
/// Free-form fields are kept as the raw strings the user typed; fields with a
/// fixed set of options are `None` until something is picked. The snapshot is
/// never mutated in place: [`Snapshot::apply`] produces the successor state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub username: String,
    pub email: String,
    pub mobile: String,
    pub gender: Option<Gender>,
    pub date_of_birth: String,
    pub department: Option<Department>,
    pub doctor: String,
    pub symptoms: Vec<String>,
    pub appointment_date: String,
    pub time_slot: Option<TimeSlot>,
    pub insurance_answer: Option<InsuranceAnswer>,
    pub insurance_company: String,
    pub policy_number: String,
}

/// A single edit to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    SetUsername(String),
    SetEmail(String),
    SetMobile(String),
    SetGender(Gender),
    SetDateOfBirth(String),
    SetDepartment(Department),
    SetDoctor(String),
    ToggleSymptom(String),
    SetAppointmentDate(String),
    SetTimeSlot(TimeSlot),
    SetInsuranceAnswer(InsuranceAnswer),
    SetInsuranceCompany(String),
    SetPolicyNumber(String),
}

impl Snapshot {
    /// Applies one event and returns the successor snapshot.
    ///
    /// Picking a department always clears the doctor, so a stale selection
    /// can never survive a roster change. Toggling a symptom adds it when
    /// absent and removes it when present.
    ///
    /// # Examples
    ///
    /// ```
    /// use apptbook::domain::{Department, FormEvent, Snapshot};
    ///
    /// let state = Snapshot::default()
    ///     .apply(FormEvent::SetDepartment(Department::Cardiology))
    ///     .apply(FormEvent::SetDoctor("Dr. A Sharma".to_string()));
    /// assert_eq!(state.doctor, "Dr. A Sharma");
    ///
    /// let state = state.apply(FormEvent::SetDepartment(Department::Neurology));
    /// assert!(state.doctor.is_empty());
    /// ```
    pub fn apply(&self, event: FormEvent) -> Snapshot {
        let mut next = self.clone();
        match event {
            FormEvent::SetUsername(value) => next.username = value,
            FormEvent::SetEmail(value) => next.email = value,
            FormEvent::SetMobile(value) => next.mobile = value,
            FormEvent::SetGender(value) => next.gender = Some(value),
            FormEvent::SetDateOfBirth(value) => next.date_of_birth = value,
            FormEvent::SetDepartment(value) => {
                next.department = Some(value);
                next.doctor.clear();
            }
            FormEvent::SetDoctor(value) => next.doctor = value,
            FormEvent::ToggleSymptom(symptom) => {
                if let Some(position) = next.symptoms.iter().position(|s| *s == symptom) {
                    next.symptoms.remove(position);
                } else {
                    next.symptoms.push(symptom);
                }
            }
            FormEvent::SetAppointmentDate(value) => next.appointment_date = value,
            FormEvent::SetTimeSlot(value) => next.time_slot = Some(value),
            FormEvent::SetInsuranceAnswer(value) => next.insurance_answer = Some(value),
            FormEvent::SetInsuranceCompany(value) => next.insurance_company = value,
            FormEvent::SetPolicyNumber(value) => next.policy_number = value,
        }
        next
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatientDetails {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub gender: Gender,
    pub date_of_birth: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsurancePolicy {
    pub company: String,
    pub policy_number: String,
}

/// A booking that passed every validation rule.
///
/// Insurance details exist only when the patient answered "yes", so a request
/// can never carry a half-filled policy.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentRequest {
    pub patient: PatientDetails,
    pub department: Department,
    pub doctor: String,
    pub symptoms: Vec<String>,
    pub appointment_date: String,
    pub time_slot: TimeSlot,
    pub insurance: Option<InsurancePolicy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_empty() {
        let snapshot = Snapshot::default();
        assert!(snapshot.username.is_empty());
        assert!(snapshot.gender.is_none());
        assert!(snapshot.department.is_none());
        assert!(snapshot.doctor.is_empty());
        assert!(snapshot.symptoms.is_empty());
        assert!(snapshot.time_slot.is_none());
        assert!(snapshot.insurance_answer.is_none());
    }

    #[test]
    fn test_apply_replaces_single_field() {
        let snapshot = Snapshot::default();
        let next = snapshot.apply(FormEvent::SetUsername("John Doe".to_string()));

        assert_eq!(next.username, "John Doe");
        assert!(snapshot.username.is_empty());
    }

    #[test]
    fn test_department_change_clears_doctor() {
        let snapshot = Snapshot::default()
            .apply(FormEvent::SetDepartment(Department::Cardiology))
            .apply(FormEvent::SetDoctor("Dr. A Sharma".to_string()));
        assert_eq!(snapshot.doctor, "Dr. A Sharma");

        let next = snapshot.apply(FormEvent::SetDepartment(Department::Dermatology));
        assert_eq!(next.department, Some(Department::Dermatology));
        assert!(next.doctor.is_empty());
    }

    #[test]
    fn test_reselecting_same_department_still_clears_doctor() {
        let snapshot = Snapshot::default()
            .apply(FormEvent::SetDepartment(Department::General))
            .apply(FormEvent::SetDoctor("Dr. M Faisal".to_string()))
            .apply(FormEvent::SetDepartment(Department::General));

        assert!(snapshot.doctor.is_empty());
    }

    #[test]
    fn test_toggle_symptom_adds_then_removes() {
        let snapshot = Snapshot::default().apply(FormEvent::ToggleSymptom("Fever".to_string()));
        assert_eq!(snapshot.symptoms, vec!["Fever".to_string()]);

        let snapshot = snapshot.apply(FormEvent::ToggleSymptom("Fever".to_string()));
        assert!(snapshot.symptoms.is_empty());
    }

    #[test]
    fn test_toggle_symptom_round_trip_preserves_others() {
        let original = Snapshot::default()
            .apply(FormEvent::ToggleSymptom("Headache".to_string()))
            .apply(FormEvent::ToggleSymptom("Cough".to_string()));

        let round_tripped = original
            .apply(FormEvent::ToggleSymptom("Fatigue".to_string()))
            .apply(FormEvent::ToggleSymptom("Fatigue".to_string()));

        assert_eq!(round_tripped.symptoms, original.symptoms);
    }

    #[test]
    fn test_field_order_matches_display_order() {
        assert_eq!(Field::ALL[0], Field::Username);
        assert_eq!(Field::ALL[12], Field::PolicyNumber);
        assert!(Field::Username < Field::InsuranceCompany);
    }

    #[test]
    fn test_field_kinds_are_disjoint() {
        for field in Field::ALL {
            if field == Field::Symptoms {
                assert!(!field.is_text() && !field.is_choice());
            } else {
                assert_ne!(field.is_text(), field.is_choice());
            }
        }
    }
}
