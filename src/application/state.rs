//! Application state management for the appointment booking form.
//!
//! This module contains the main application state and mode management
//! for the terminal user interface.

use crate::domain::{
    AppointmentRequest, Department, Directory, ErrorMap, Field, FormEvent, Gender,
    InsuranceAnswer, Outcome, Snapshot, TimeSlot, Validator,
};

/// Represents the current mode of the application.
///
/// The mode determines how user input is interpreted and what UI elements
/// are displayed.
#[derive(Debug)]
pub enum AppMode {
    /// Normal navigation mode - moving between form fields
    Normal,
    /// Text editing mode - user is typing into the focused field
    Editing,
    /// Symptom picker is open
    Symptoms,
    /// Help screen is displayed
    Help,
    /// A booking was accepted and the confirmation view is shown
    Confirmed,
}

/// Main application state containing the form snapshot and UI state.
///
/// The snapshot is replaced wholesale on every edit, so the form values and
/// the error map can never drift apart mid-update.
///
/// # Examples
///
/// ```
/// use apptbook::application::{App, AppMode};
/// use apptbook::domain::Field;
///
/// let app = App::default();
/// assert!(matches!(app.mode, AppMode::Normal));
/// assert_eq!(app.focus, Field::Username);
/// assert!(app.errors.is_empty());
/// ```
#[derive(Debug)]
pub struct App {
    /// Read-only hospital directory (rosters and symptom catalog)
    pub directory: Directory,
    /// Current form values
    pub snapshot: Snapshot,
    /// Per-field messages from the last rejected submission
    pub errors: ErrorMap,
    /// Current application mode
    pub mode: AppMode,
    /// The form field that currently has focus
    pub focus: Field,
    /// Current input buffer (for editing mode)
    pub input: String,
    /// Cursor position within the input buffer
    pub cursor_position: usize,
    /// Cursor position within the symptom picker
    pub symptom_cursor: usize,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// The accepted booking, once a submission passes validation
    pub booked: Option<AppointmentRequest>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Directory::default())
    }
}

impl App {
    pub fn new(directory: Directory) -> Self {
        Self {
            directory,
            snapshot: Snapshot::default(),
            errors: ErrorMap::new(),
            mode: AppMode::Normal,
            focus: Field::Username,
            input: String::new(),
            cursor_position: 0,
            symptom_cursor: 0,
            help_scroll: 0,
            status_message: None,
            booked: None,
        }
    }

    /// Replaces the snapshot with the result of applying one form event.
    pub fn apply(&mut self, event: FormEvent) {
        self.snapshot = self.snapshot.apply(event);
    }

    /// The fields currently shown, in display order.
    ///
    /// The doctor list appears only once a department is chosen, and the
    /// insurance detail fields only when the insurance answer is "yes".
    pub fn visible_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| match field {
                Field::Doctor => self.snapshot.department.is_some(),
                Field::InsuranceCompany | Field::PolicyNumber => {
                    self.snapshot.insurance_answer == Some(InsuranceAnswer::Yes)
                }
                _ => true,
            })
            .collect()
    }

    /// Moves focus to the next visible field, stopping at the last one.
    pub fn focus_next(&mut self) {
        let visible = self.visible_fields();
        if let Some(position) = visible.iter().position(|f| *f == self.focus) {
            if position + 1 < visible.len() {
                self.focus = visible[position + 1];
            }
        }
    }

    /// Moves focus to the previous visible field, stopping at the first one.
    pub fn focus_previous(&mut self) {
        let visible = self.visible_fields();
        if let Some(position) = visible.iter().position(|f| *f == self.focus) {
            if position > 0 {
                self.focus = visible[position - 1];
            }
        }
    }

    /// The raw text of a free-form field.
    pub fn text_value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.snapshot.username,
            Field::Email => &self.snapshot.email,
            Field::Mobile => &self.snapshot.mobile,
            Field::DateOfBirth => &self.snapshot.date_of_birth,
            Field::AppointmentDate => &self.snapshot.appointment_date,
            Field::InsuranceCompany => &self.snapshot.insurance_company,
            Field::PolicyNumber => &self.snapshot.policy_number,
            _ => "",
        }
    }

    /// Switches to editing mode for the focused text field.
    ///
    /// Loads the field's current value into the input buffer and positions
    /// the cursor at the end.
    pub fn start_editing(&mut self) {
        if !self.focus.is_text() {
            return;
        }
        self.mode = AppMode::Editing;
        self.input = self.text_value(self.focus).to_string();
        self.cursor_position = self.input.len();
    }

    /// Completes editing and applies the input buffer to the focused field.
    pub fn finish_editing(&mut self) {
        let value = self.input.clone();
        let event = match self.focus {
            Field::Username => Some(FormEvent::SetUsername(value)),
            Field::Email => Some(FormEvent::SetEmail(value)),
            Field::Mobile => Some(FormEvent::SetMobile(value)),
            Field::DateOfBirth => Some(FormEvent::SetDateOfBirth(value)),
            Field::AppointmentDate => Some(FormEvent::SetAppointmentDate(value)),
            Field::InsuranceCompany => Some(FormEvent::SetInsuranceCompany(value)),
            Field::PolicyNumber => Some(FormEvent::SetPolicyNumber(value)),
            _ => None,
        };
        if let Some(event) = event {
            self.apply(event);
        }

        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Cancels editing and returns to normal mode without saving changes.
    pub fn cancel_editing(&mut self) {
        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Steps the focused option field forward or backward through its
    /// choices, wrapping at either end. A department change clears the
    /// doctor via the snapshot transition.
    pub fn cycle_choice(&mut self, step: isize) {
        match self.focus {
            Field::Gender => {
                let next = cycled(&Gender::ALL, self.snapshot.gender, step);
                self.apply(FormEvent::SetGender(next));
            }
            Field::Department => {
                let next = cycled(&Department::ALL, self.snapshot.department, step);
                self.apply(FormEvent::SetDepartment(next));
            }
            Field::Doctor => {
                if let Some(department) = self.snapshot.department {
                    let roster = self.directory.roster(department).to_vec();
                    if roster.is_empty() {
                        return;
                    }
                    let current = roster.iter().position(|d| *d == self.snapshot.doctor);
                    let next = cycled_index(roster.len(), current, step);
                    self.apply(FormEvent::SetDoctor(roster[next].clone()));
                }
            }
            Field::TimeSlot => {
                let next = cycled(&TimeSlot::ALL, self.snapshot.time_slot, step);
                self.apply(FormEvent::SetTimeSlot(next));
            }
            Field::Insurance => {
                let next = cycled(&InsuranceAnswer::ALL, self.snapshot.insurance_answer, step);
                self.apply(FormEvent::SetInsuranceAnswer(next));
            }
            _ => {}
        }
    }

    /// Opens the symptom picker, cursor on the first catalog entry.
    pub fn open_symptoms(&mut self) {
        if self.focus == Field::Symptoms {
            self.mode = AppMode::Symptoms;
            self.symptom_cursor = 0;
        }
    }

    pub fn close_symptoms(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn symptom_cursor_up(&mut self) {
        self.symptom_cursor = self.symptom_cursor.saturating_sub(1);
    }

    pub fn symptom_cursor_down(&mut self) {
        if self.symptom_cursor + 1 < self.directory.symptoms.len() {
            self.symptom_cursor += 1;
        }
    }

    /// Toggles the catalog entry under the picker cursor.
    pub fn toggle_symptom_under_cursor(&mut self) {
        if let Some(symptom) = self.directory.symptoms.get(self.symptom_cursor) {
            let symptom = symptom.clone();
            self.apply(FormEvent::ToggleSymptom(symptom));
        }
    }

    /// Validates the current snapshot wholesale.
    ///
    /// On acceptance the typed request is stored, the confirmation view
    /// takes over, and the error map is cleared. On rejection the error map
    /// is replaced, a blocking notice goes to the status bar, and focus
    /// jumps to the first visible offending field.
    ///
    /// # Examples
    ///
    /// ```
    /// use apptbook::application::App;
    ///
    /// let mut app = App::default();
    /// app.submit();
    /// assert!(app.booked.is_none());
    /// assert!(!app.errors.is_empty());
    /// ```
    pub fn submit(&mut self) {
        let validator = Validator::new(&self.directory);
        match validator.review(&self.snapshot) {
            Outcome::Accepted(request) => {
                self.errors.clear();
                self.booked = Some(request);
                self.mode = AppMode::Confirmed;
                self.status_message = Some("Appointment Booked Successfully!".to_string());
            }
            Outcome::Rejected(errors) => {
                self.errors = errors;
                self.status_message = Some("Please enter valid information".to_string());
                let visible = self.visible_fields();
                if let Some(field) = self
                    .errors
                    .keys()
                    .copied()
                    .find(|field| visible.contains(field))
                {
                    self.focus = field;
                }
            }
        }
    }

    /// Discards everything and presents a fresh empty form.
    pub fn start_new_booking(&mut self) {
        self.snapshot = Snapshot::default();
        self.errors.clear();
        self.booked = None;
        self.focus = Field::Username;
        self.mode = AppMode::Normal;
        self.status_message = None;
        self.input.clear();
        self.cursor_position = 0;
        self.symptom_cursor = 0;
    }
}

/// Next element of `options` relative to `current`, wrapping around.
/// With no current selection, a forward step lands on the first option and
/// a backward step on the last.
fn cycled<T: Copy + PartialEq>(options: &[T], current: Option<T>, step: isize) -> T {
    let position = current.and_then(|value| options.iter().position(|o| *o == value));
    options[cycled_index(options.len(), position, step)]
}

fn cycled_index(len: usize, current: Option<usize>, step: isize) -> usize {
    match current {
        Some(position) => {
            (position as isize + step).rem_euclid(len as isize) as usize
        }
        None if step < 0 => len - 1,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_app() -> App {
        let mut app = App::default();
        app.snapshot = Snapshot {
            username: "John Doe".to_string(),
            email: "a@b.com".to_string(),
            mobile: "9876543210".to_string(),
            gender: Some(Gender::Male),
            date_of_birth: "2000-01-01".to_string(),
            department: Some(Department::Cardiology),
            doctor: "Dr. A Sharma".to_string(),
            symptoms: vec!["Fever".to_string()],
            appointment_date: "2025-01-01".to_string(),
            time_slot: Some(TimeSlot::NineAm),
            insurance_answer: Some(InsuranceAnswer::No),
            insurance_company: String::new(),
            policy_number: String::new(),
        };
        app
    }

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.focus, Field::Username);
        assert!(app.input.is_empty());
        assert_eq!(app.cursor_position, 0);
        assert!(app.errors.is_empty());
        assert!(app.booked.is_none());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_hidden_fields_before_any_selection() {
        let app = App::default();
        let visible = app.visible_fields();

        assert!(!visible.contains(&Field::Doctor));
        assert!(!visible.contains(&Field::InsuranceCompany));
        assert!(!visible.contains(&Field::PolicyNumber));
        assert!(visible.contains(&Field::Symptoms));
    }

    #[test]
    fn test_doctor_field_appears_with_department() {
        let mut app = App::default();
        app.apply(FormEvent::SetDepartment(Department::Neurology));

        assert!(app.visible_fields().contains(&Field::Doctor));
    }

    #[test]
    fn test_insurance_details_appear_only_for_yes() {
        let mut app = App::default();
        app.apply(FormEvent::SetInsuranceAnswer(InsuranceAnswer::Yes));
        assert!(app.visible_fields().contains(&Field::InsuranceCompany));
        assert!(app.visible_fields().contains(&Field::PolicyNumber));

        app.apply(FormEvent::SetInsuranceAnswer(InsuranceAnswer::No));
        assert!(!app.visible_fields().contains(&Field::InsuranceCompany));
    }

    #[test]
    fn test_focus_moves_skip_hidden_fields() {
        let mut app = App::default();
        app.focus = Field::Department;
        app.focus_next();

        // No department chosen, so the doctor row is skipped.
        assert_eq!(app.focus, Field::Symptoms);
    }

    #[test]
    fn test_focus_stops_at_edges() {
        let mut app = App::default();
        app.focus_previous();
        assert_eq!(app.focus, Field::Username);

        app.focus = Field::Insurance;
        app.focus_next();
        assert_eq!(app.focus, Field::Insurance);
    }

    #[test]
    fn test_editing_round_trip() {
        let mut app = App::default();
        app.start_editing();
        assert!(matches!(app.mode, AppMode::Editing));

        app.input = "John Doe".to_string();
        app.finish_editing();

        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.snapshot.username, "John Doe");
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_start_editing_loads_current_value() {
        let mut app = App::default();
        app.apply(FormEvent::SetEmail("a@b.com".to_string()));
        app.focus = Field::Email;
        app.start_editing();

        assert_eq!(app.input, "a@b.com");
        assert_eq!(app.cursor_position, 7);
    }

    #[test]
    fn test_start_editing_ignores_choice_fields() {
        let mut app = App::default();
        app.focus = Field::Gender;
        app.start_editing();

        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_cancel_editing_discards_input() {
        let mut app = App::default();
        app.start_editing();
        app.input = "discarded".to_string();
        app.cancel_editing();

        assert!(app.snapshot.username.is_empty());
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_cycle_gender_wraps() {
        let mut app = App::default();
        app.focus = Field::Gender;

        app.cycle_choice(1);
        assert_eq!(app.snapshot.gender, Some(Gender::Male));
        app.cycle_choice(1);
        assert_eq!(app.snapshot.gender, Some(Gender::Female));
        app.cycle_choice(1);
        app.cycle_choice(1);
        assert_eq!(app.snapshot.gender, Some(Gender::Male));
        app.cycle_choice(-1);
        assert_eq!(app.snapshot.gender, Some(Gender::Other));
    }

    #[test]
    fn test_cycle_department_resets_doctor() {
        let mut app = App::default();
        app.focus = Field::Department;
        app.cycle_choice(1);
        assert_eq!(app.snapshot.department, Some(Department::Cardiology));

        app.focus = Field::Doctor;
        app.cycle_choice(1);
        assert_eq!(app.snapshot.doctor, "Dr. A Sharma");

        app.focus = Field::Department;
        app.cycle_choice(1);
        assert_eq!(app.snapshot.department, Some(Department::Dermatology));
        assert!(app.snapshot.doctor.is_empty());
    }

    #[test]
    fn test_cycle_doctor_walks_the_roster() {
        let mut app = App::default();
        app.apply(FormEvent::SetDepartment(Department::General));
        app.focus = Field::Doctor;

        app.cycle_choice(1);
        assert_eq!(app.snapshot.doctor, "Dr. M Faisal");
        app.cycle_choice(1);
        assert_eq!(app.snapshot.doctor, "Dr. G George");
        app.cycle_choice(1);
        assert_eq!(app.snapshot.doctor, "Dr. M Faisal");
    }

    #[test]
    fn test_cycle_doctor_without_department_is_a_no_op() {
        let mut app = App::default();
        app.focus = Field::Doctor;
        app.cycle_choice(1);

        assert!(app.snapshot.doctor.is_empty());
    }

    #[test]
    fn test_symptom_picker_toggles_under_cursor() {
        let mut app = App::default();
        app.focus = Field::Symptoms;
        app.open_symptoms();
        assert!(matches!(app.mode, AppMode::Symptoms));

        app.symptom_cursor_down();
        app.toggle_symptom_under_cursor();
        assert_eq!(app.snapshot.symptoms, vec!["Fever".to_string()]);

        app.toggle_symptom_under_cursor();
        assert!(app.snapshot.symptoms.is_empty());

        app.close_symptoms();
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_symptom_cursor_stays_in_catalog() {
        let mut app = App::default();
        app.symptom_cursor_up();
        assert_eq!(app.symptom_cursor, 0);

        for _ in 0..20 {
            app.symptom_cursor_down();
        }
        assert_eq!(app.symptom_cursor, app.directory.symptoms.len() - 1);
    }

    #[test]
    fn test_submit_rejection_attaches_errors_and_notice() {
        let mut app = App::default();
        app.submit();

        assert!(matches!(app.mode, AppMode::Normal));
        assert!(app.booked.is_none());
        assert!(!app.errors.is_empty());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Please enter valid information")
        );
        assert_eq!(app.focus, Field::Username);
    }

    #[test]
    fn test_submit_rejection_focuses_first_visible_offender() {
        let mut app = filled_app();
        app.snapshot.mobile = "12345".to_string();
        app.focus = Field::Insurance;
        app.submit();

        assert_eq!(app.focus, Field::Mobile);
    }

    #[test]
    fn test_submit_acceptance_switches_to_confirmation() {
        let mut app = filled_app();
        app.submit();

        assert!(matches!(app.mode, AppMode::Confirmed));
        assert!(app.errors.is_empty());
        let request = app.booked.as_ref().expect("booking should be stored");
        assert_eq!(request.patient.name, "John Doe");
        assert_eq!(
            app.status_message.as_deref(),
            Some("Appointment Booked Successfully!")
        );
    }

    #[test]
    fn test_resubmit_after_correction_accepts() {
        let mut app = filled_app();
        app.snapshot.username = "Jo".to_string();
        app.submit();
        assert!(app.errors.contains_key(&Field::Username));

        app.apply(FormEvent::SetUsername("John Doe".to_string()));
        app.submit();

        assert!(matches!(app.mode, AppMode::Confirmed));
        assert!(app.errors.is_empty());
    }

    #[test]
    fn test_start_new_booking_resets_everything() {
        let mut app = filled_app();
        app.submit();
        assert!(app.booked.is_some());

        app.start_new_booking();

        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.snapshot, Snapshot::default());
        assert!(app.booked.is_none());
        assert!(app.errors.is_empty());
        assert_eq!(app.focus, Field::Username);
        assert!(app.status_message.is_none());
    }
}
