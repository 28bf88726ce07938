pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::tui::app::{App, InputMode};
use crate::Repo;

pub fn run(repo: Repo) -> Result<()> {
    let mut app = App::new(repo);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Tab => app.switch_tab(),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Right | KeyCode::Char('l') => app.next_day(),
                KeyCode::Left | KeyCode::Char('h') => app.previous_day(),
                KeyCode::Char(' ') | KeyCode::Enter => app.toggle_status(),
                KeyCode::Char('r') => app.reset_day(),
                KeyCode::Char('d') | KeyCode::Delete => app.delete_item(),
                KeyCode::Char('m') => app.enter_rename_mode(),
                _ => {}
            },
            InputMode::Renaming => match key.code {
                KeyCode::Enter => app.submit_rename(),
                KeyCode::Esc => app.exit_input_mode(),
                KeyCode::Char(c) => app.input_char(c),
                KeyCode::Backspace => app.delete_char(),
                KeyCode::Left => app.move_cursor_left(),
                KeyCode::Right => app.move_cursor_right(),
                _ => {}
            },
        }
    }
}
