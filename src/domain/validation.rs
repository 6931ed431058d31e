//! Booking validation for the appointment form.
//!
//! Every field owns an ordered table of rules; a rule is a predicate plus
//! the message shown when it fails. Review walks every field in one pass,
//! keeps the first failing message per field, and either rejects with the
//! collected error map or accepts by assembling the typed request.

use std::collections::BTreeMap;

use regex::Regex;

use super::directory::Directory;
use super::models::{
    AppointmentRequest, Field, InsuranceAnswer, InsurancePolicy, PatientDetails, Snapshot,
};

/// Field name mapped to the single active validation message for that field.
pub type ErrorMap = BTreeMap<Field, String>;

/// The wholesale verdict on a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Accepted(AppointmentRequest),
    Rejected(ErrorMap),
}

struct Rule {
    message: &'static str,
    passes: fn(&Validator<'_>, &Snapshot) -> bool,
}

/// Checks a complete form snapshot against the booking rules.
///
/// The verdict is wholesale: either every rule passes and the snapshot is
/// turned into an [`AppointmentRequest`], or the snapshot is rejected with
/// one message per offending field. Rule order within a field is part of the
/// contract; the first failing rule decides the message.
///
/// # Examples
///
/// ```
/// use apptbook::domain::{Directory, Field, Outcome, Snapshot, Validator};
///
/// let directory = Directory::default();
/// let validator = Validator::new(&directory);
///
/// match validator.review(&Snapshot::default()) {
///     Outcome::Rejected(errors) => {
///         assert_eq!(errors[&Field::Username], "Invalid User Name");
///         assert_eq!(errors[&Field::Symptoms], "Select at least one symptom");
///     }
///     Outcome::Accepted(_) => unreachable!(),
/// }
/// ```
pub struct Validator<'a> {
    directory: &'a Directory,
    name_pattern: Regex,
    email_pattern: Regex,
    mobile_pattern: Regex,
}

impl<'a> Validator<'a> {
    /// Creates a validator over the given hospital directory.
    pub fn new(directory: &'a Directory) -> Self {
        Self {
            directory,
            name_pattern: Regex::new(r"^[A-Za-z\s]+$").unwrap(),
            email_pattern: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap(),
            mobile_pattern: Regex::new(r"^[6-9][0-9]{9}$").unwrap(),
        }
    }

    /// Evaluates every field's rule table against the snapshot.
    ///
    /// All fields are checked in a single pass; an earlier field failing
    /// never hides a later one. Within one field, evaluation stops at the
    /// first failing rule.
    pub fn review(&self, snapshot: &Snapshot) -> Outcome {
        let mut errors = ErrorMap::new();
        for field in Field::ALL {
            if let Some(message) = self.first_failure(field, snapshot) {
                errors.insert(field, message.to_string());
            }
        }

        match self.assemble(snapshot) {
            Some(request) if errors.is_empty() => Outcome::Accepted(request),
            _ => Outcome::Rejected(errors),
        }
    }

    fn first_failure(&self, field: Field, snapshot: &Snapshot) -> Option<&'static str> {
        rules(field)
            .iter()
            .find(|rule| !(rule.passes)(self, snapshot))
            .map(|rule| rule.message)
    }

    /// Builds the typed request from a snapshot that passed every rule.
    /// Insurance details are trimmed and kept only for a "yes" answer.
    fn assemble(&self, snapshot: &Snapshot) -> Option<AppointmentRequest> {
        let insurance = match snapshot.insurance_answer? {
            InsuranceAnswer::Yes => Some(InsurancePolicy {
                company: snapshot.insurance_company.trim().to_string(),
                policy_number: snapshot.policy_number.trim().to_string(),
            }),
            InsuranceAnswer::No => None,
        };

        Some(AppointmentRequest {
            patient: PatientDetails {
                name: snapshot.username.clone(),
                email: snapshot.email.clone(),
                mobile: snapshot.mobile.clone(),
                gender: snapshot.gender?,
                date_of_birth: snapshot.date_of_birth.clone(),
            },
            department: snapshot.department?,
            doctor: snapshot.doctor.clone(),
            symptoms: snapshot.symptoms.clone(),
            appointment_date: snapshot.appointment_date.clone(),
            time_slot: snapshot.time_slot?,
            insurance,
        })
    }
}

fn rules(field: Field) -> &'static [Rule] {
    match field {
        Field::Username => &USERNAME_RULES,
        Field::Email => &EMAIL_RULES,
        Field::Mobile => &MOBILE_RULES,
        Field::Gender => &GENDER_RULES,
        Field::DateOfBirth => &DATE_OF_BIRTH_RULES,
        Field::Department => &DEPARTMENT_RULES,
        Field::Doctor => &DOCTOR_RULES,
        Field::Symptoms => &SYMPTOM_RULES,
        Field::AppointmentDate => &APPOINTMENT_DATE_RULES,
        Field::TimeSlot => &TIME_SLOT_RULES,
        Field::Insurance => &INSURANCE_RULES,
        Field::InsuranceCompany => &INSURANCE_COMPANY_RULES,
        Field::PolicyNumber => &[],
    }
}

static USERNAME_RULES: [Rule; 3] = [
    Rule {
        message: "Invalid User Name",
        passes: |validator, snapshot| validator.name_pattern.is_match(&snapshot.username),
    },
    Rule {
        message: "Username must be at least 3 characters.",
        passes: |_, snapshot| snapshot.username.chars().count() >= 3,
    },
    Rule {
        message: "Username must not exceed 20 characters.",
        passes: |_, snapshot| snapshot.username.chars().count() <= 20,
    },
];

static EMAIL_RULES: [Rule; 1] = [Rule {
    message: "Invalid email address.",
    passes: |validator, snapshot| validator.email_pattern.is_match(&snapshot.email),
}];

static MOBILE_RULES: [Rule; 1] = [Rule {
    message: "Invalid Indian mobile number",
    passes: |validator, snapshot| validator.mobile_pattern.is_match(&snapshot.mobile),
}];

static GENDER_RULES: [Rule; 1] = [Rule {
    message: "Please select your gender",
    passes: |_, snapshot| snapshot.gender.is_some(),
}];

static DATE_OF_BIRTH_RULES: [Rule; 1] = [Rule {
    message: "Date of birth is required",
    passes: |_, snapshot| !snapshot.date_of_birth.is_empty(),
}];

static DEPARTMENT_RULES: [Rule; 1] = [Rule {
    message: "Please select a department",
    passes: |_, snapshot| snapshot.department.is_some(),
}];

static DOCTOR_RULES: [Rule; 2] = [
    Rule {
        message: "Please select a doctor",
        passes: |_, snapshot| !snapshot.doctor.is_empty(),
    },
    Rule {
        message: "Doctor is not part of the selected department",
        passes: |validator, snapshot| match snapshot.department {
            Some(department) => validator.directory.has_doctor(department, &snapshot.doctor),
            None => false,
        },
    },
];

static SYMPTOM_RULES: [Rule; 1] = [Rule {
    message: "Select at least one symptom",
    passes: |_, snapshot| !snapshot.symptoms.is_empty(),
}];

static APPOINTMENT_DATE_RULES: [Rule; 1] = [Rule {
    message: "Appointment date is required",
    passes: |_, snapshot| !snapshot.appointment_date.is_empty(),
}];

static TIME_SLOT_RULES: [Rule; 1] = [Rule {
    message: "Please select a time slot",
    passes: |_, snapshot| snapshot.time_slot.is_some(),
}];

static INSURANCE_RULES: [Rule; 1] = [Rule {
    message: "Please specify if you have insurance",
    passes: |_, snapshot| snapshot.insurance_answer.is_some(),
}];

// A missing policy number is reported against the company field too, so
// the policy field keeps an empty table.
static INSURANCE_COMPANY_RULES: [Rule; 1] = [Rule {
    message: "Insurance company and policy number are required",
    passes: |_, snapshot| match snapshot.insurance_answer {
        Some(InsuranceAnswer::Yes) => {
            !snapshot.insurance_company.trim().is_empty()
                && !snapshot.policy_number.trim().is_empty()
        }
        _ => true,
    },
}];
