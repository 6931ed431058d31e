use crate::application::{App, AppMode};
use crate::domain::{AppointmentRequest, Field};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    match app.booked {
        Some(ref request) if matches!(app.mode, AppMode::Confirmed) => {
            render_confirmation(f, request, chunks[1]);
        }
        _ => render_form(f, app, chunks[1]),
    }
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::Symptoms) {
        render_symptom_picker(f, app);
    }
    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "apptbook - Doctor Appointment Form | Field: {}",
        app.focus.label()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn field_display(app: &App, field: Field) -> String {
    if matches!(app.mode, AppMode::Editing) && app.focus == field {
        return app.input.clone();
    }

    match field {
        Field::Gender => option_label(app.snapshot.gender.map(|g| g.label())),
        Field::Department => option_label(app.snapshot.department.map(|d| d.label())),
        Field::Doctor => {
            if app.snapshot.doctor.is_empty() {
                "(not selected)".to_string()
            } else {
                app.snapshot.doctor.clone()
            }
        }
        Field::TimeSlot => option_label(app.snapshot.time_slot.map(|t| t.label())),
        Field::Insurance => option_label(app.snapshot.insurance_answer.map(|a| a.label())),
        Field::Symptoms => {
            if app.snapshot.symptoms.is_empty() {
                "(none selected)".to_string()
            } else {
                app.snapshot.symptoms.join(", ")
            }
        }
        _ => app.text_value(field).to_string(),
    }
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    let mut focused_line = 0;

    for field in app.visible_fields() {
        let focused = field == app.focus;
        if focused {
            focused_line = lines.len();
        }

        let label_style = if focused {
            Style::default().bg(Color::LightBlue).fg(Color::Black)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let value_style = if matches!(app.mode, AppMode::Editing) && focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:<24}", field.label()), label_style),
            Span::styled(field_display(app, field), value_style),
        ]));

        if let Some(message) = app.errors.get(&field) {
            lines.push(Line::from(Span::styled(
                format!("{:<24}{}", "", message),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::from(""));
    }

    let visible_height = area.height.saturating_sub(2) as usize;
    let scroll = focused_line.saturating_sub(visible_height.saturating_sub(3)) as u16;

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Appointment"))
        .scroll((scroll, 0));
    f.render_widget(form, area);
}

fn render_confirmation(f: &mut Frame, request: &AppointmentRequest, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Appointment Booked Successfully!",
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from(format!("Patient:      {}", request.patient.name)),
        Line::from(format!("Email:        {}", request.patient.email)),
        Line::from(format!("Mobile:       {}", request.patient.mobile)),
        Line::from(format!("Gender:       {}", request.patient.gender.label())),
        Line::from(format!("Born:         {}", request.patient.date_of_birth)),
        Line::from(""),
        Line::from(format!("Department:   {}", request.department.label())),
        Line::from(format!("Doctor:       {}", request.doctor)),
        Line::from(format!("Symptoms:     {}", request.symptoms.join(", "))),
        Line::from(format!("Date:         {}", request.appointment_date)),
        Line::from(format!("Time Slot:    {}", request.time_slot.label())),
    ];

    match request.insurance {
        Some(ref policy) => {
            lines.push(Line::from(format!("Insurance:    {}", policy.company)));
            lines.push(Line::from(format!("Policy No:    {}", policy.policy_number)));
        }
        None => lines.push(Line::from("Insurance:    none".to_string())),
    }

    let confirmation = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Confirmation"));
    f.render_widget(confirmation, area);
}

fn render_symptom_picker(f: &mut Frame, app: &App) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 4,
        y: area.height / 6,
        width: area.width / 2,
        height: (app.directory.symptoms.len() as u16 + 2).min(area.height * 2 / 3),
    };

    f.render_widget(Clear, popup_area);

    let lines: Vec<Line> = app
        .directory
        .symptoms
        .iter()
        .enumerate()
        .map(|(index, symptom)| {
            let mark = if app.snapshot.symptoms.contains(symptom) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if index == app.symptom_cursor {
                Style::default().bg(Color::LightBlue).fg(Color::Black)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{} {}", mark, symptom), style))
        })
        .collect();

    let picker = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Symptoms (Space to toggle)"),
    );
    f.render_widget(picker, popup_area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "↑↓/Tab: move | Enter: edit/pick | ←→: change option | Ctrl+S: book | Ctrl+R: clear | F1/?: help | q: quit".to_string()
            }
        }
        AppMode::Editing => format!(
            "Editing {}: {} (Enter to apply, Esc to cancel)",
            app.focus.label(),
            app.input
        ),
        AppMode::Symptoms => "↑↓/jk: move | Space: toggle | Enter/Esc: done".to_string(),
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
        AppMode::Confirmed => {
            if let Some(ref status) = app.status_message {
                format!("{} | n: new booking | q: quit", status)
            } else {
                "n: new booking | q: quit".to_string()
            }
        }
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Editing => Style::default().fg(Color::Green),
            AppMode::Symptoms => Style::default().fg(Color::Magenta),
            AppMode::Help => Style::default().fg(Color::Cyan),
            AppMode::Confirmed => Style::default().fg(Color::Green),
        });
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "apptbook Help (Line {}/{})",
                    start_line + 1,
                    help_lines.len()
                ))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn option_label(label: Option<&'static str>) -> String {
    label.unwrap_or("(not selected)").to_string()
}

fn get_help_text() -> String {
    r#"APPTBOOK - DOCTOR APPOINTMENT FORM

=== FILLING THE FORM ===
• Move between fields with the arrow keys, Tab/Shift+Tab, or j/k
• Text fields (name, email, mobile, dates, insurance details):
  press Enter to edit, Enter again to apply, Esc to cancel
• Option fields (gender, department, doctor, time slot, insurance):
  press Left/Right (or h/l) to step through the choices, Enter steps forward
• Symptoms: press Enter or Space to open the picker, Space toggles an
  entry, Enter or Esc closes it
• Dates are free-form text; YYYY-MM-DD is the expected shape

=== CONDITIONAL FIELDS ===
• The doctor list appears once a department is chosen; changing the
  department clears the chosen doctor
• Insurance company and policy number appear only when the insurance
  answer is Yes, and both are then required

=== BOOKING ===
Ctrl+S          Submit the form
                Invalid fields keep the form open and show their message
                inline; fix them and submit again
Ctrl+R          Clear the form and start over

=== VALIDATION RULES ===
• Full name: letters and spaces, 3 to 20 characters
• Email: must look like an email address
• Mobile: 10 digits starting with 6-9
• Gender, department, doctor, time slot, insurance: pick one option
• Doctor must belong to the selected department
• At least one symptom
• Date of birth and appointment date must be filled in

=== AFTER BOOKING ===
n               Start a new booking from the confirmation view
q               Quit

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window"#
        .to_string()
}
