//! APPTBOOK - Terminal Appointment Booking
//!
//! A terminal-based doctor appointment booking form, built in Rust.
//! The form collects patient and appointment details, validates them
//! against a fixed rule set, and shows a confirmation view on success.

use std::io;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::{App, AppMode};
use domain::Directory;
use infrastructure::DirectoryRepository;
use presentation::{render_ui, InputHandler};

/// Entry point for the APPTBOOK appointment booking application.
///
/// Loads the hospital directory (built-in defaults, or a JSON file given on
/// the command line), sets up the terminal interface, and runs the main
/// event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the directory file is unusable or if terminal setup
/// fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let directory = match args.first().map(String::as_str) {
        Some("--init-directory") => {
            let path = args.get(1).map(String::as_str).unwrap_or("directory.json");
            let written = DirectoryRepository::save_directory(&Directory::default(), path)?;
            println!("Wrote starter hospital directory to {}", written);
            return Ok(());
        }
        Some(path) => DirectoryRepository::load_directory(path)?.0,
        None => Directory::default(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(directory);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Handles terminal rendering and keyboard input processing. Each key event
/// is handled to completion before the next one is read. Continues running
/// until the user presses 'q' outside of an edit.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q')
                        if matches!(app.mode, AppMode::Normal | AppMode::Confirmed) =>
                    {
                        return Ok(())
                    }
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
